use crate::allocator::Allocator;
use crate::validate::validate_url;
use async_trait::async_trait;
use burrow_core::{MappingStore, ShortCode, Shortener, ShortenerError};
use burrow_generator::Generator;
use tracing::debug;

/// A concrete implementation of the `Shortener` trait.
///
/// This service puts the URL validator in front of an [`Allocator`]:
/// - URL validation (rejected input never reaches the store)
/// - Collision-free short code allocation
#[derive(Debug, Clone)]
pub struct ShortenerService<S, G> {
    allocator: Allocator<S, G>,
}

impl<S: MappingStore, G: Generator> ShortenerService<S, G> {
    pub fn new(allocator: Allocator<S, G>) -> Self {
        Self { allocator }
    }
}

#[async_trait]
impl<S: MappingStore, G: Generator> Shortener for ShortenerService<S, G> {
    async fn shorten(&self, original_url: &str) -> Result<ShortCode, ShortenerError> {
        if let Err(err) = validate_url(original_url) {
            debug!(url = %original_url, error = %err, "rejected url");
            return Err(err);
        }

        self.allocator.allocate(original_url).await
    }
}
