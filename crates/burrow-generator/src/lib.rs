pub mod alphabet;
pub mod error;
pub mod random;

pub use error::GeneratorError;
pub use random::{RandomGenerator, RandomGeneratorSettings, DEFAULT_CODE_LENGTH};

use burrow_core::ShortCode;
use std::sync::Arc;

/// Trait for generating candidate short codes.
///
/// Implementations are pure generators that don't interact with storage.
/// A candidate is not guaranteed to be free; the allocator finds out by
/// trying to persist it.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<ShortCode>;

    /// Produces the next candidate code.
    fn generate(&self) -> Self::Output;
}

impl<G: Generator + ?Sized> Generator for Arc<G> {
    type Output = G::Output;

    fn generate(&self) -> Self::Output {
        (**self).generate()
    }
}
