//! Seedable random source shared by all stochastic operators.
//!
//! The generator is always passed explicitly; nothing in the crate reads
//! a thread-local or global RNG except [`fresh_seed`], which is only used
//! when the caller asks for a non-reproducible run.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Creates a deterministic generator from `seed`.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws a seed from OS-backed entropy.
pub fn fresh_seed() -> u64 {
    rand::random()
}

/// Uniform in-place Fisher-Yates shuffle.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}
