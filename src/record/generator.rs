//! Record generation
//!
//! Names and emails depend only on the position of a record; ages are drawn
//! from the random source handed in by the caller.

use super::constants::AGE_UPPER_BOUND;
use super::Record;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate `count` records, drawing each age from `rng`
#[tracing::instrument(level = "debug", skip(rng))]
pub fn generate<R: Rng>(count: usize, rng: &mut R) -> Vec<Record> {
    (0..count)
        .map(|index| Record::for_index(index, rng.random_range(0..AGE_UPPER_BOUND)))
        .collect()
}

/// Random source for [`generate`]
///
/// A fixed seed makes ages reproducible between runs; without one the
/// generator is seeded from the operating system.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
