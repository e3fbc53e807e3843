use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use super::reading::{generate, SensorReading};

pub trait ReadingSource {
    fn next_reading(&mut self) -> SensorReading;
}

/// Simulated chips backed by a random number generator.
#[derive(Debug, Clone)]
pub struct RandomReadingSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomReadingSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomReadingSource<ChaCha8Rng> {
    /// Reproducible source, the same seed always yields the same readings.
    pub fn seeded(seed: u64) -> Self {
        debug!("Seeding reading source with {}", seed);
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> ReadingSource for RandomReadingSource<R> {
    fn next_reading(&mut self) -> SensorReading {
        generate(&mut self.rng)
    }
}
