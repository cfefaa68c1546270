use rand::RngCore;
use rand::rngs::StdRng;
use roster::{Athlete, StatRange};
use tracing::debug;

use crate::rng::{self, Sampling};

/// Produces stat lines from a random source it owns.
///
/// Points, assists and rebounds are drawn in that order, one raw value each.
pub struct StatGenerator<R: RngCore = StdRng> {
    rng: R,
    sampling: Sampling,
}

impl StatGenerator<StdRng> {
    /// Seeds a standard generator with the current wall-clock second.
    pub fn from_clock(sampling: Sampling) -> Self {
        Self::seeded(rng::seed_from_clock(), sampling)
    }

    pub fn seeded(seed: u64, sampling: Sampling) -> Self {
        debug!("Seeding stat generator with {} ({} sampling)", seed, sampling);
        Self::with_rng(rng::seeded_rng(seed), sampling)
    }
}

impl<R: RngCore> StatGenerator<R> {
    pub fn with_rng(rng: R, sampling: Sampling) -> Self {
        Self { rng, sampling }
    }

    #[cfg(test)]
    pub(crate) fn sampling(&self) -> Sampling {
        self.sampling
    }

    pub fn generate_stat(&mut self, range: StatRange) -> u32 {
        self.sampling.sample(&mut self.rng, range)
    }

    pub fn generate(&mut self, name: impl Into<String>) -> Athlete {
        let points = self.generate_stat(StatRange::POINTS);
        let assists = self.generate_stat(StatRange::ASSISTS);
        let rebounds = self.generate_stat(StatRange::REBOUNDS);
        Athlete::new(name, points, assists, rebounds)
    }
}
