//! Random source port.
//!
//! Dice rolls, the randomizer and the fake progress ticker all draw from a
//! [`RandomSource`] instead of an ambient generator, so tests can substitute a
//! fixed sequence and the CLI can offer seeded runs.
//!
//! Production implementations live in the infrastructure layer
//! (`ThreadRandom`, `SeededRandom`).

#[cfg(any(test, feature = "test-util"))]
mod sequence;

#[cfg(any(test, feature = "test-util"))]
pub use sequence::SequenceRandom;

/// Source of uniform randomness.
pub trait RandomSource: Send + Sync {
    /// Uniform integer in `[min, max]` (inclusive on both ends).
    fn random_range(&self, min: u32, max: u32) -> u32;

    /// Uniform float in `[0.0, 1.0)`.
    fn random_f64(&self) -> f64;
}

/// Pick one entry of a non-empty slice uniformly.
pub fn choose<'a, T>(rng: &dyn RandomSource, items: &'a [T]) -> &'a T {
    let last = items.len().saturating_sub(1);
    let index = rng.random_range(0, last as u32) as usize;
    &items[index.min(last)]
}
