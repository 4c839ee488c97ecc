use crate::alphabet::BASE62;
use crate::error::GeneratorError;
use crate::Generator;
use burrow_core::ShortCode;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use typed_builder::TypedBuilder;

/// Code length used when none is configured. 62^7 ≈ 3.5 × 10^12 codes.
pub const DEFAULT_CODE_LENGTH: usize = 7;

/// Configures a [`RandomGenerator`].
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct RandomGeneratorSettings {
    /// Number of characters per code.
    #[builder(default = DEFAULT_CODE_LENGTH)]
    pub length: usize,
    /// Seed for a reproducible sequence. Unseeded generators use the thread RNG.
    #[builder(default, setter(strip_option))]
    pub seed: Option<u64>,
}

impl Default for RandomGeneratorSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

enum Source {
    Thread,
    Seeded(Mutex<StdRng>),
}

/// Draws each character independently and uniformly from [`BASE62`].
///
/// Not cryptographically secure; it only has to make collisions rare.
pub struct RandomGenerator {
    length: usize,
    source: Source,
}

impl RandomGenerator {
    pub fn new(settings: RandomGeneratorSettings) -> Result<Self, GeneratorError> {
        if settings.length == 0 {
            return Err(GeneratorError::InvalidLength {
                length: settings.length,
            });
        }

        let source = match settings.seed {
            Some(seed) => Source::Seeded(Mutex::new(StdRng::seed_from_u64(seed))),
            None => Source::Thread,
        };

        Ok(Self {
            length: settings.length,
            source,
        })
    }

    /// Creates an unseeded generator producing codes of `length` characters.
    pub fn with_length(length: usize) -> Result<Self, GeneratorError> {
        Self::new(RandomGeneratorSettings::builder().length(length).build())
    }

    pub fn length(&self) -> usize {
        self.length
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        (0..self.length)
            .map(|_| BASE62[rng.random_range(0..BASE62.len())] as char)
            .collect()
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self {
            length: DEFAULT_CODE_LENGTH,
            source: Source::Thread,
        }
    }
}

impl std::fmt::Debug for RandomGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomGenerator")
            .field("length", &self.length)
            .field("seeded", &matches!(self.source, Source::Seeded(_)))
            .finish()
    }
}

impl Generator for RandomGenerator {
    type Output = ShortCode;

    fn generate(&self) -> Self::Output {
        let code = match &self.source {
            Source::Thread => self.sample(&mut rand::rng()),
            Source::Seeded(rng) => self.sample(&mut *rng.lock()),
        };
        ShortCode::new_unchecked(code)
    }
}
