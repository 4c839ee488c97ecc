use std::sync::Arc;
use std::time::Duration;

use crate::redirector::Redirector;
use async_trait::async_trait;
use burrow_core::{with_deadline, MappingReader, ResolveError, ShortCode, WorkerContext};
use tracing::{debug, trace};
use typed_builder::TypedBuilder;

pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(2);

/// Configures a [`Resolver`].
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct ResolverSettings {
    /// Deadline applied to every lookup.
    #[builder(default = DEFAULT_STORE_TIMEOUT)]
    pub store_timeout: Duration,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Service for resolving short codes.
///
/// Uses a read-only view of the mapping store and never writes to it.
#[derive(Debug)]
pub struct Resolver<R> {
    reader: Arc<R>,
    settings: ResolverSettings,
    context: WorkerContext,
}

impl<R> Clone for Resolver<R> {
    fn clone(&self) -> Self {
        Self {
            reader: Arc::clone(&self.reader),
            settings: self.settings,
            context: self.context,
        }
    }
}

impl<R: MappingReader> Resolver<R> {
    pub fn new(reader: R, settings: ResolverSettings, context: WorkerContext) -> Self {
        Self {
            reader: Arc::new(reader),
            settings,
            context,
        }
    }

    /// Resolves a short code to its original URL.
    ///
    /// # Returns
    ///
    /// * `Ok(url)` - The URL the code was created for
    /// * `Err(NotFound)` - If no mapping holds the code
    /// * `Err(StoreUnavailable)` - If the lookup failed or missed its deadline
    pub async fn resolve(&self, code: &ShortCode) -> Result<String, ResolveError> {
        Redirector::resolve(self, code).await
    }
}

#[async_trait]
impl<R: MappingReader> Redirector for Resolver<R> {
    async fn resolve(&self, code: &ShortCode) -> Result<String, ResolveError> {
        trace!(worker = %self.context, code = %code, "resolving short code");

        let found = with_deadline(
            self.settings.store_timeout,
            "lookup",
            self.reader.lookup(code),
        )
        .await?;

        match found {
            Some(mapping) => {
                debug!(worker = %self.context, code = %code, url = %mapping.original_url, "resolved short code");
                Ok(mapping.original_url)
            }
            None => {
                debug!(worker = %self.context, code = %code, "short code not found");
                Err(ResolveError::NotFound(code.to_string()))
            }
        }
    }
}
