//! RNG module - uniform random shape selection
//!
//! Spawning only needs "pick one of the seven shapes uniformly". That capability
//! sits behind [`ShapeSource`] so callers can choose the entropy:
//!
//! - [`ThreadShapes`]: the `rand` thread-local generator (default for spawning)
//! - [`SimpleRng`]: a seeded LCG for reproducible sessions and tests
//!
//! Neither source remembers previous draws. There is no 7-bag and no reroll.

use rand::Rng;

use crate::types::ShapeKind;

/// Anything that can pick a shape for a new piece
pub trait ShapeSource {
    /// Choose one of [`ShapeKind::ALL`]
    fn next_shape(&mut self) -> ShapeKind;
}

impl<S: ShapeSource + ?Sized> ShapeSource for &mut S {
    fn next_shape(&mut self) -> ShapeKind {
        (**self).next_shape()
    }
}

/// Uniform choice backed by `rand::rng()`
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadShapes;

impl ShapeSource for ThreadShapes {
    fn next_shape(&mut self) -> ShapeKind {
        let idx = rand::rng().random_range(0..ShapeKind::ALL.len());
        ShapeKind::ALL[idx]
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
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Multiply-shift keeps the high bits; the low bits of an LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl ShapeSource for SimpleRng {
    fn next_shape(&mut self) -> ShapeKind {
        ShapeKind::ALL[self.next_range(ShapeKind::ALL.len() as u32) as usize]
    }
}
