use async_trait::async_trait;
use burrow_core::{MappingReader, ShortCode, StorageError, UrlMapping};
use moka::future::Cache;
use std::time::Duration;
use tracing::{debug, trace};
use typed_builder::TypedBuilder;

/// Type alias for lookup results.
pub type Result<T> = std::result::Result<T, StorageError>;

pub const DEFAULT_CACHE_CAPACITY: u64 = 10_000;

/// Configuration for a [`CachedReader`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct CacheSettings {
    /// Maximum number of mappings the cache can hold.
    #[builder(default = DEFAULT_CACHE_CAPACITY)]
    pub max_capacity: u64,
    /// Time-to-live for cached mappings.
    #[builder(default, setter(strip_option))]
    pub ttl: Option<Duration>,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Why a single-flight fetch produced nothing to cache.
#[derive(Debug)]
enum Miss {
    Absent,
    Failed(StorageError),
}

/// A read-only decorator that caches mappings in memory using Moka.
///
/// Only mappings that were found are cached. Mappings are immutable once
/// written, so a cached entry can never go stale; an absent code is always
/// looked up again because it may be allocated later.
///
/// Concurrent lookups of the same uncached code coalesce into a single fetch
/// from the inner reader.
#[derive(Debug, Clone)]
pub struct CachedReader<R> {
    inner: R,
    cache: Cache<String, UrlMapping>,
}

impl<R: MappingReader> CachedReader<R> {
    /// Wraps `inner` with a cache holding up to 10,000 mappings.
    pub fn new(inner: R) -> Self {
        Self::with_settings(inner, CacheSettings::default())
    }

    pub fn with_settings(inner: R, settings: CacheSettings) -> Self {
        let mut builder = Cache::builder().max_capacity(settings.max_capacity);
        if let Some(ttl) = settings.ttl {
            builder = builder.time_to_live(ttl);
        }

        Self {
            inner,
            cache: builder.build(),
        }
    }
}

#[async_trait]
impl<R: MappingReader> MappingReader for CachedReader<R> {
    async fn lookup(&self, code: &ShortCode) -> Result<Option<UrlMapping>> {
        let key = code.as_str().to_string();

        let fetched = self
            .cache
            .try_get_with(key, async {
                trace!(code = %code, "cache miss, fetching from inner reader");
                match self.inner.lookup(code).await {
                    Ok(Some(mapping)) => Ok(mapping),
                    Ok(None) => Err(Miss::Absent),
                    Err(e) => Err(Miss::Failed(e)),
                }
            })
            .await;

        match fetched {
            Ok(mapping) => {
                debug!(code = %code, "resolved from cache");
                Ok(Some(mapping))
            }
            Err(miss) => match miss.as_ref() {
                Miss::Absent => Ok(None),
                Miss::Failed(e) => Err(e.clone()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burrow_core::MappingStore;
    use burrow_storage::InMemoryStore;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn code(s: &str) -> ShortCode {
        ShortCode::new_unchecked(s)
    }

    /// Counts lookups that reach the wrapped store.
    #[derive(Debug, Default)]
    struct CountingReader {
        store: InMemoryStore,
        lookups: AtomicUsize,
    }

    #[async_trait]
    impl MappingReader for CountingReader {
        async fn lookup(&self, code: &ShortCode) -> Result<Option<UrlMapping>> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            self.store.lookup(code).await
        }
    }

    struct FailingReader;

    #[async_trait]
    impl MappingReader for FailingReader {
        async fn lookup(&self, _code: &ShortCode) -> Result<Option<UrlMapping>> {
            Err(StorageError::Unavailable("connection refused".to_string()))
        }
    }

    async fn seeded(code_str: &str, url: &str) -> Arc<CountingReader> {
        let reader = Arc::new(CountingReader::default());
        reader
            .store
            .insert(UrlMapping::now(code(code_str), url))
            .await
            .unwrap();
        reader
    }

    #[tokio::test]
    async fn second_lookup_is_served_from_cache() {
        let reader = seeded("abc123", "https://example.com").await;
        let cached = CachedReader::new(Arc::clone(&reader));

        let first = cached.lookup(&code("abc123")).await.unwrap().unwrap();
        let second = cached.lookup(&code("abc123")).await.unwrap().unwrap();

        assert_eq!(first, second);
        assert_eq!(first.original_url, "https://example.com");
        assert_eq!(reader.lookups.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn absent_codes_are_not_cached() {
        let reader = Arc::new(CountingReader::default());
        let cached = CachedReader::new(Arc::clone(&reader));
        let c = code("later1");

        assert!(cached.lookup(&c).await.unwrap().is_none());

        reader
            .store
            .insert(UrlMapping::now(c.clone(), "https://example.com/late"))
            .await
            .unwrap();

        let found = cached.lookup(&c).await.unwrap().unwrap();
        assert_eq!(found.original_url, "https://example.com/late");
        assert_eq!(reader.lookups.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn store_errors_propagate_and_are_not_cached() {
        let cached = CachedReader::new(FailingReader);
        let c = code("abc123");

        for _ in 0..2 {
            let err = cached.lookup(&c).await.unwrap_err();
            assert!(matches!(err, StorageError::Unavailable(_)));
        }
    }

    #[tokio::test]
    async fn concurrent_misses_coalesce_into_one_fetch() {
        let reader = seeded("abc123", "https://example.com").await;
        let cached = CachedReader::new(Arc::clone(&reader));

        let mut handles = vec![];
        for _ in 0..10 {
            let cached = cached.clone();
            handles.push(tokio::spawn(async move {
                cached.lookup(&code("abc123")).await
            }));
        }

        for handle in handles {
            let found = handle.await.unwrap().unwrap().unwrap();
            assert_eq!(found.original_url, "https://example.com");
        }

        assert_eq!(reader.lookups.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn ttl_expires_entries() {
        let reader = seeded("abc123", "https://example.com").await;
        let settings = CacheSettings::builder()
            .max_capacity(100)
            .ttl(Duration::from_millis(50))
            .build();
        let cached = CachedReader::with_settings(Arc::clone(&reader), settings);
        let c = code("abc123");

        cached.lookup(&c).await.unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
        cached.lookup(&c).await.unwrap();

        assert_eq!(reader.lookups.load(Ordering::SeqCst), 2);
    }
}
