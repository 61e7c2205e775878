//! RNG module - pluggable randomness for tile spawning
//!
//! Spawning is the engine's only random step. It needs two draws:
//! pick one empty cell uniformly, then roll the tile value
//! (`2` with probability 9/10, otherwise `-2` or `-4` evenly).
//!
//! Both are expressed through [`TileSource`], so callers can plug in:
//! - [`SimpleRng`]: a tiny seeded LCG for reproducible games and tests
//! - [`RandSource`]: any `rand` generator (e.g. a seeded `StdRng`)
//! - their own scripted double

use rand::RngCore;

use crate::types::{
    Tile, REDUCIBLE_VALUES, SPAWN_ODDS_DENOMINATOR, SPAWN_ODDS_NUMERATOR, SPAWN_VALUE,
};

/// Source of the random draws used when spawning a tile
pub trait TileSource {
    /// Uniform index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Pick one element of a non-empty slice uniformly
    fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        items.get(self.pick_index(items.len())).copied()
    }

    /// Roll the value of a freshly spawned tile
    fn spawn_value(&mut self) -> Tile {
        if self.pick_index(SPAWN_ODDS_DENOMINATOR) < SPAWN_ODDS_NUMERATOR {
            SPAWN_VALUE
        } else {
            REDUCIBLE_VALUES[self.pick_index(REDUCIBLE_VALUES.len())]
        }
    }
}

impl<S: TileSource + ?Sized> TileSource for &mut S {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }

    fn spawn_value(&mut self) -> Tile {
        (**self).spawn_value()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        (((self.next_u32() >> 16) as u64 * max as u64) >> 16) as u32
    }

    /// Current internal state (for restarting a game with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl TileSource for SimpleRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.next_range(len as u32) as usize
    }
}

/// Adapter turning any `rand` generator into a [`TileSource`]
#[derive(Debug, Clone)]
pub struct RandSource<R>(pub R);

impl RandSource<rand::rngs::StdRng> {
    /// Seeded `StdRng` source
    pub fn seeded(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> TileSource for RandSource<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        use rand::Rng;
        self.0.gen_range(0..len)
    }
}
