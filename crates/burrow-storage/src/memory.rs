use async_trait::async_trait;
use burrow_core::error::Result;
use burrow_core::{InsertOutcome, MappingReader, MappingStore, ShortCode, UrlMapping};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::trace;

/// In-memory implementation of the mapping store using DashMap.
///
/// DashMap provides better concurrency than RwLock<HashMap> because it
/// uses sharded locks, allowing concurrent reads and writes to different
/// buckets without blocking. `insert_if_absent` holds the shard lock across
/// the check and the write, so two racing inserts of one code cannot both win.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    storage: DashMap<String, UrlMapping>,
}

impl InMemoryStore {
    /// Creates a new in-memory store.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Number of mappings currently held.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MappingReader for InMemoryStore {
    async fn lookup(&self, code: &ShortCode) -> Result<Option<UrlMapping>> {
        Ok(self
            .storage
            .get(code.as_str())
            .map(|entry| entry.value().clone()))
    }
}

#[async_trait]
impl MappingStore for InMemoryStore {
    async fn insert(&self, mapping: UrlMapping) -> Result<()> {
        let key = mapping.short_code.as_str().to_owned();
        self.storage.insert(key, mapping);
        Ok(())
    }

    async fn insert_if_absent(&self, mapping: UrlMapping) -> Result<InsertOutcome> {
        let key = mapping.short_code.as_str().to_owned();

        match self.storage.entry(key) {
            Entry::Occupied(_) => {
                trace!(code = %mapping.short_code, "short code already taken");
                Ok(InsertOutcome::Occupied)
            }
            Entry::Vacant(vacant) => {
                vacant.insert(mapping);
                Ok(InsertOutcome::Inserted)
            }
        }
    }
}
