//! Problem ordering

use crate::quiz::problem::Problem;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Shuffle problems in place (Fisher-Yates)
pub fn shuffle_problems<R: Rng + ?Sized>(problems: &mut [Problem], rng: &mut R) {
    problems.shuffle(rng);
}

/// Deterministic generator for reproducible orderings
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Seed derived from the current wall-clock time
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
