//! Shared helpers for the curvedh integration and property tests

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// A deterministic CSPRNG for reproducible test runs
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}
