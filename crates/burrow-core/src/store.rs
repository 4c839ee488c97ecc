use crate::error::Result;
use crate::mapping::UrlMapping;
use crate::shortcode::ShortCode;
use async_trait::async_trait;
use std::sync::Arc;

/// Outcome of a conditional insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The mapping was persisted.
    Inserted,
    /// Another mapping already holds the code; nothing was written.
    Occupied,
}

impl InsertOutcome {
    pub fn is_inserted(self) -> bool {
        matches!(self, Self::Inserted)
    }
}

/// A read-only view of a mapping store.
///
/// The resolver only needs this half, which lets read paths be decorated
/// (e.g. with a cache) without touching the write side.
#[async_trait]
pub trait MappingReader: Send + Sync + 'static {
    /// Retrieves the mapping for a given short code.
    /// Returns `None` if the code does not exist; errors only on backend failure.
    async fn lookup(&self, code: &ShortCode) -> Result<Option<UrlMapping>>;
}

#[async_trait]
pub trait MappingStore: MappingReader {
    /// Persists a mapping without checking whether the code is taken.
    ///
    /// Backends with a storage-level uniqueness constraint may still reject
    /// the write with `StorageError::Conflict`. Allocation never uses this;
    /// see [`MappingStore::insert_if_absent`].
    async fn insert(&self, mapping: UrlMapping) -> Result<()>;

    /// Atomically persists a mapping only if no mapping holds its code.
    ///
    /// An existing mapping is never touched.
    async fn insert_if_absent(&self, mapping: UrlMapping) -> Result<InsertOutcome>;
}

#[async_trait]
impl<T: MappingReader + ?Sized> MappingReader for Arc<T> {
    async fn lookup(&self, code: &ShortCode) -> Result<Option<UrlMapping>> {
        (**self).lookup(code).await
    }
}

#[async_trait]
impl<T: MappingStore + ?Sized> MappingStore for Arc<T> {
    async fn insert(&self, mapping: UrlMapping) -> Result<()> {
        (**self).insert(mapping).await
    }

    async fn insert_if_absent(&self, mapping: UrlMapping) -> Result<InsertOutcome> {
        (**self).insert_if_absent(mapping).await
    }
}
