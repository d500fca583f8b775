//! `rand`-backed implementations of the [`RandomSource`] port

use forge_domain::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Thread-local OS-seeded generator; the default for interactive runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn random_range(&self, min: u32, max: u32) -> u32 {
        rand::rng().random_range(min..=max.max(min))
    }

    fn random_f64(&self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Reproducible generator for `--seed`.
///
/// The same seed yields the same sequence of draws, so the same draft and
/// dice as long as nothing else draws from it in between.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, draw: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        draw(&mut rng)
    }
}

impl RandomSource for SeededRandom {
    fn random_range(&self, min: u32, max: u32) -> u32 {
        self.with_rng(|rng| rng.random_range(min..=max.max(min)))
    }

    fn random_f64(&self) -> f64 {
        self.with_rng(|rng| rng.random::<f64>())
    }
}
