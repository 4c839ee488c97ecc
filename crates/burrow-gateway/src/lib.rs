//! HTTP surface for the Burrow URL shortener.
//!
//! The [`App`] router exposes URL shortening and redirection on top of any
//! [`Shortener`](burrow_core::Shortener) and
//! [`Redirector`](burrow_redirector::Redirector) implementation.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;
pub mod telemetry;

pub use app::App;
pub use error::AppError;
pub use state::AppState;
