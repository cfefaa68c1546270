//! Seeding and sampling strategies for stat generation.
//!
//! Every generator owns its random source. The binary seeds it once from the
//! wall clock; tests seed it with fixed values so a run can be replayed.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use roster::StatRange;

/// How a raw random value is reduced into a [`StatRange`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Sampling {
    /// `low + raw % span`. Slightly favours low values whenever `2^32` is not
    /// a multiple of the span.
    #[default]
    Modulo,
    /// Unbiased draw through `rand`'s `gen_range`.
    Uniform,
}

impl Sampling {
    pub fn sample<R: RngCore>(self, rng: &mut R, range: StatRange) -> u32 {
        match self {
            Sampling::Modulo => modulo_sample(rng.next_u32(), range),
            Sampling::Uniform => rng.gen_range(range.low()..=range.high()),
        }
    }
}

impl fmt::Display for Sampling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sampling::Modulo => write!(f, "modulo"),
            Sampling::Uniform => write!(f, "uniform"),
        }
    }
}

/// Reduces one raw 32-bit value into `range` by remainder.
pub fn modulo_sample(raw: u32, range: StatRange) -> u32 {
    // remainder is < span <= 2^32, so it fits back into u32
    let offset = (u64::from(raw) % range.span()) as u32;
    range.low() + offset
}

/// Current Unix time in whole seconds, the default seed for a run.
pub fn seed_from_clock() -> u64 {
    let seconds = chrono::Utc::now().timestamp();
    u64::try_from(seconds).unwrap_or_else(|_| {
        tracing::warn!("System clock is before the Unix epoch ({}), seeding with 0", seconds);
        0
    })
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
