//! RNG module - deterministic random tile sampling
//!
//! A simple LCG keeps the whole simulation reproducible from a `u32` seed:
//! board generation, cascade refills and the autonomous player all draw from
//! the same generator, so a seed fully determines a game.

use match3_types::TileColor;

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
        self.next_u32() % max
    }

    /// Current generator state (for snapshots and game replays).
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Sample a uniformly random color from the first `palette_size` palette entries.
pub fn random_color(rng: &mut SimpleRng, palette_size: u8) -> TileColor {
    TileColor::ALL[rng.next_range(u32::from(palette_size)) as usize]
}
