use crate::shortcode::ShortCode;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, crate::error::ShortenerError>;

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Creates a mapping for `original_url` and returns its freshly allocated short code.
    ///
    /// Fails with `InvalidUrl` before touching the store if the URL is not
    /// an absolute http(s) URL.
    async fn shorten(&self, original_url: &str) -> Result<ShortCode>;
}
