use thiserror::Error;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Failures reported by a mapping store backend.
///
/// "Not found" is never an error at this layer; lookups return `Ok(None)`.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("short code already exists: {0}")]
    Conflict(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
}

/// Errors surfaced by the allocation side.
///
/// Collisions never appear here; they are absorbed by the allocator's retry loop.
#[derive(Debug, Clone, Error)]
pub enum ShortenerError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("mapping store unavailable: {0}")]
    StoreUnavailable(#[source] StorageError),
    #[error("no free short code found after {attempts} attempts")]
    CapacityExhausted { attempts: u32 },
}

impl From<StorageError> for ShortenerError {
    fn from(value: StorageError) -> Self {
        Self::StoreUnavailable(value)
    }
}

/// Errors surfaced by the resolution side.
#[derive(Debug, Clone, Error)]
pub enum ResolveError {
    #[error("short code not found: {0}")]
    NotFound(String),
    #[error("mapping store unavailable: {0}")]
    StoreUnavailable(#[source] StorageError),
}

impl From<StorageError> for ResolveError {
    fn from(value: StorageError) -> Self {
        Self::StoreUnavailable(value)
    }
}
