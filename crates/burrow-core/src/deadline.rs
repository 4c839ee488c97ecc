use crate::error::{Result, StorageError};
use std::future::Future;
use std::time::Duration;

/// Runs a store call under a deadline.
///
/// An expired deadline drops (and thereby cancels) the in-flight call and
/// reports `StorageError::Timeout`, so callers see it as an unavailable store.
pub async fn with_deadline<T, F>(limit: Duration, operation: &str, call: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => Err(StorageError::Timeout(format!(
            "{operation} did not complete within {}ms",
            limit.as_millis()
        ))),
    }
}
