//! Deterministic generation RNG resource.
//!
//! Wraps `ChaCha8Rng` for cross-platform deterministic randomness. The
//! generation systems take `ResMut<GenRng>` instead of `rand::thread_rng()`
//! so that identical seeds produce identical networks.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Default seed used when no explicit seed is provided.
const DEFAULT_SEED: u64 = 42;

/// Deterministic RNG resource for all generation randomness.
///
/// Systems that need randomness take `ResMut<GenRng>` and use `rng.0`
/// (which is a `ChaCha8Rng` implementing `rand::Rng`).
#[derive(Resource)]
pub struct GenRng(pub ChaCha8Rng);

impl Default for GenRng {
    fn default() -> Self {
        Self(ChaCha8Rng::seed_from_u64(DEFAULT_SEED))
    }
}

impl GenRng {
    /// Create a new `GenRng` seeded from the given `u64` value.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}
