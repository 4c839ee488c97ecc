//! Core types and traits for the Burrow URL shortener.
//!
//! This crate provides shared types and traits used by both the
//! shortener (allocation) side and the redirector (resolution) side.

pub mod context;
pub mod deadline;
pub mod error;
pub mod mapping;
pub mod shortcode;
pub mod shortener;
pub mod store;

pub use context::WorkerContext;
pub use deadline::with_deadline;
pub use error::{CoreError, ResolveError, ShortenerError, StorageError};
pub use mapping::UrlMapping;
pub use shortcode::ShortCode;
pub use shortener::Shortener;
pub use store::{InsertOutcome, MappingReader, MappingStore};
