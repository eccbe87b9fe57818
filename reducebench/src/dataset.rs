//! Pseudo-random input generation.
//!
//! Datasets are drawn from an explicit [`SmallRng`] handle so that tests and
//! seeded benchmark runs are reproducible. Unseeded runs reseed from the wall
//! clock before every dataset.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Smallest value the generator produces.
pub const MIN_VALUE: i32 = 0;

/// Largest value the generator produces.
pub const MAX_VALUE: i32 = 1000;

/// Generates `len` values uniformly distributed over `[MIN_VALUE, MAX_VALUE]`.
pub fn generate<R: Rng>(rng: &mut R, len: usize) -> Vec<i32> {
    (0..len)
        .map(|_| rng.gen_range(MIN_VALUE..=MAX_VALUE))
        .collect()
}

/// Creates a generator from a fixed seed.
#[must_use]
pub fn seeded(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Creates a generator seeded from the current wall-clock time.
#[must_use]
pub fn from_clock() -> SmallRng {
    // A clock before the epoch still yields a usable (if constant) seed.
    #[allow(clippy::cast_possible_truncation)]
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64);
    SmallRng::seed_from_u64(nanos)
}
