//! Cosmetic progress value object

use serde::{Deserialize, Serialize};

const LOADING_MESSAGES: [&str; 5] = [
    "Gathering arcane energies...",
    "Consulting ancient scrolls...",
    "Shaping the hero's form...",
    "Inscribing the final runes...",
    "A legend is born!",
];

/// Progress percentage in `[0, 100]`.
///
/// Not derived from real work: the ticker advances it by small random
/// increments and stalls below [`Progress::DEFAULT_CEILING`] until the
/// generation actually completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progress(u8);

impl Progress {
    pub const ZERO: Progress = Progress(0);
    pub const COMPLETE: Progress = Progress(100);
    pub const DEFAULT_CEILING: u8 = 95;

    /// Clamps values above 100.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn is_complete(&self) -> bool {
        self.0 >= 100
    }

    /// Advance by `increment`, never past `ceiling`.
    ///
    /// A value already at or above the ceiling is returned unchanged, so the
    /// result is never smaller than `self`.
    pub fn advance(self, increment: u8, ceiling: u8) -> Self {
        let ceiling = ceiling.min(99);
        if self.0 >= ceiling {
            return self;
        }
        Self(self.0.saturating_add(increment).min(ceiling))
    }

    /// Canned status line for the current value.
    pub fn message(&self) -> &'static str {
        match self.0 {
            0..25 => LOADING_MESSAGES[0],
            25..50 => LOADING_MESSAGES[1],
            50..75 => LOADING_MESSAGES[2],
            75..100 => LOADING_MESSAGES[3],
            _ => LOADING_MESSAGES[4],
        }
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}
