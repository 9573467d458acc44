//! Randomized input arrays for visualization runs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Smallest bar value; keeps every bar visible.
pub const BAR_MIN: u32 = 5;

/// Number of distinct magnitudes above [`BAR_MIN`].
pub const BAR_SPAN: u32 = 100;

/// Generate `size` bar heights drawn uniformly from
/// `[BAR_MIN, BAR_MIN + BAR_SPAN)`. A size of 0 yields an empty array.
pub fn generate_array(size: usize) -> Vec<u32> {
    fill(&mut rand::thread_rng(), size)
}

/// Deterministic variant: the same `seed` always yields the same array.
pub fn generate_array_seeded(size: usize, seed: u64) -> Vec<u32> {
    fill(&mut StdRng::seed_from_u64(seed), size)
}

fn fill<R: Rng>(rng: &mut R, size: usize) -> Vec<u32> {
    (0..size).map(|_| rng.gen_range(0..BAR_SPAN) + BAR_MIN).collect()
}
