//! Deterministic random source for tests and replays.

use super::RandomSource;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Returns values from a fixed sequence, cycling when exhausted.
///
/// `random_range` clamps each value into the requested range;
/// `random_f64` reads each value as a percentage (`75` → `0.75`).
#[derive(Debug)]
pub struct SequenceRandom {
    values: Vec<u32>,
    index: AtomicUsize,
}

impl SequenceRandom {
    /// Create a source that replays `values` in order.
    ///
    /// An empty sequence behaves like `constant(0)`.
    pub fn new(values: Vec<u32>) -> Self {
        let values = if values.is_empty() { vec![0] } else { values };
        Self {
            values,
            index: AtomicUsize::new(0),
        }
    }

    /// Create a source that always returns the same value.
    pub fn constant(value: u32) -> Self {
        Self::new(vec![value])
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.index.load(Ordering::SeqCst)
    }

    fn next(&self) -> u32 {
        let idx = self.index.fetch_add(1, Ordering::SeqCst);
        self.values[idx % self.values.len()]
    }
}

impl Clone for SequenceRandom {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            index: AtomicUsize::new(self.index.load(Ordering::SeqCst)),
        }
    }
}

impl RandomSource for SequenceRandom {
    fn random_range(&self, min: u32, max: u32) -> u32 {
        self.next().clamp(min, max.max(min))
    }

    fn random_f64(&self) -> f64 {
        (self.next() as f64 / 100.0).clamp(0.0, 0.999_999)
    }
}
