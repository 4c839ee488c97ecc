//! Short code allocation.
//!
//! This crate provides the [`Allocator`], which turns a URL into a mapping
//! under a collision-free code, and the [`ShortenerService`] that validates
//! input before allocating. Core types are re-exported from `burrow_core`.

pub mod allocator;
pub mod service;
pub mod validate;

pub use allocator::{Allocator, AllocatorSettings, DEFAULT_MAX_ATTEMPTS, DEFAULT_STORE_TIMEOUT};
pub use burrow_core::{Shortener, ShortenerError};
pub use service::ShortenerService;
pub use validate::validate_url;
