use burrow_core::{
    with_deadline, InsertOutcome, MappingStore, ShortCode, ShortenerError, UrlMapping,
    WorkerContext,
};
use burrow_generator::Generator;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, trace, warn};
use typed_builder::TypedBuilder;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 8;
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(2);

/// Configures an [`Allocator`].
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct AllocatorSettings {
    /// Upper bound on candidates tried per allocation. `0` is treated as `1`.
    #[builder(default = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,
    /// Deadline applied to every individual store call.
    #[builder(default = DEFAULT_STORE_TIMEOUT)]
    pub store_timeout: Duration,
}

impl Default for AllocatorSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Hands out short codes that no other mapping holds.
///
/// Each attempt draws a candidate from the generator and asks the store to
/// insert it only if the code is free. A rejected insert is a collision and
/// the loop moves on to a fresh candidate; uniqueness therefore rests on the
/// store's conditional insert, never on a separate lookup.
#[derive(Debug)]
pub struct Allocator<S, G> {
    store: Arc<S>,
    generator: Arc<G>,
    settings: AllocatorSettings,
    context: WorkerContext,
}

impl<S, G> Clone for Allocator<S, G> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            generator: Arc::clone(&self.generator),
            settings: self.settings,
            context: self.context,
        }
    }
}

impl<S: MappingStore, G: Generator> Allocator<S, G> {
    pub fn new(store: S, generator: G, settings: AllocatorSettings, context: WorkerContext) -> Self {
        Self {
            store: Arc::new(store),
            generator: Arc::new(generator),
            settings,
            context,
        }
    }

    /// Persists a mapping for `original_url` under a fresh code and returns the code.
    ///
    /// The URL is stored as given; validating it is the caller's job.
    ///
    /// # Errors
    ///
    /// * `StoreUnavailable` if a store call fails or misses its deadline
    /// * `CapacityExhausted` if every attempt collided
    pub async fn allocate(&self, original_url: &str) -> Result<ShortCode, ShortenerError> {
        let max_attempts = self.settings.max_attempts.max(1);

        for attempt in 1..=max_attempts {
            let candidate: ShortCode = self.generator.generate().into();
            trace!(worker = %self.context, code = %candidate, attempt, "trying candidate");

            let mapping = UrlMapping::now(candidate.clone(), original_url);
            let outcome = with_deadline(
                self.settings.store_timeout,
                "insert_if_absent",
                self.store.insert_if_absent(mapping),
            )
            .await?;

            match outcome {
                InsertOutcome::Inserted => {
                    info!(worker = %self.context, code = %candidate, attempt, "inserted new mapping");
                    return Ok(candidate);
                }
                InsertOutcome::Occupied => {
                    info!(worker = %self.context, code = %candidate, attempt, "short code collision, regenerating");
                }
            }
        }

        warn!(worker = %self.context, max_attempts, "gave up allocating a short code");
        Err(ShortenerError::CapacityExhausted {
            attempts: max_attempts,
        })
    }
}
