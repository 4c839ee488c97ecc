use async_trait::async_trait;
use burrow_core::{ResolveError, ShortCode};

#[async_trait]
pub trait Redirector: Send + Sync + 'static {
    /// Resolves a short code to the URL it was created for.
    ///
    /// Resolution is read-only; repeated calls for the same code return the
    /// same URL.
    async fn resolve(&self, code: &ShortCode) -> Result<String, ResolveError>;
}
