//! Short code resolution.
//!
//! This crate provides a [`Resolver`] that maps short codes back to their
//! original URLs, and a [`CachedReader`] that puts a Moka read-through cache
//! in front of any [`MappingReader`](burrow_core::MappingReader).
//!
//! # Example
//!
//! ```rust
//! use burrow_core::{MappingStore, ShortCode, UrlMapping, WorkerContext};
//! use burrow_redirector::{CachedReader, Resolver, ResolverSettings};
//! use burrow_storage::InMemoryStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryStore::new();
//! let code = ShortCode::new("abc123")?;
//! store
//!     .insert(UrlMapping::now(code.clone(), "https://example.com"))
//!     .await?;
//!
//! let resolver = Resolver::new(
//!     CachedReader::new(store),
//!     ResolverSettings::default(),
//!     WorkerContext::new(),
//! );
//! assert_eq!(resolver.resolve(&code).await?, "https://example.com");
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod redirector;
pub mod service;

pub use cache::{CacheSettings, CachedReader};
pub use redirector::Redirector;
pub use service::{Resolver, ResolverSettings};
