//! RNG module - piece randomizer
//!
//! Pieces are drawn uniformly from the seven kinds, rejecting a draw equal to
//! the previous piece so the same kind never appears twice in a row.
//!
//! The randomness comes from a small seeded LCG so that a given seed always
//! produces the same sequence.

use crate::types::PieceKind;

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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Draw a kind uniformly, never equal to `previous`
///
/// Rejection sampling: each draw has a 6/7 chance of being accepted, so the
/// loop terminates almost surely.
pub fn generate_next(rng: &mut SimpleRng, previous: Option<PieceKind>) -> PieceKind {
    loop {
        let kind = PieceKind::from_index(rng.next_range(PieceKind::ALL.len() as u32) as usize);
        if previous != Some(kind) {
            return kind;
        }
    }
}
