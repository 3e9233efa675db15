//! How obscured the target's portrait is.

use serde::{Deserialize, Serialize};

/// Blur applied before any guess.
pub const MAX_BLUR: u8 = 30;

/// Blur removed by each incorrect guess.
pub const BLUR_STEP: u8 = 5;

/// Reveal level in `[0, MAX_BLUR]`. Higher means more obscured.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(transparent)]
pub struct RevealLevel(u8);

impl RevealLevel {
    /// Fully obscured.
    pub const OBSCURED: Self = Self(MAX_BLUR);

    /// Fully revealed.
    pub const CLEAR: Self = Self(0);

    /// Level after one more incorrect guess, floored at zero.
    pub fn step_down(self) -> Self {
        Self(self.0.saturating_sub(BLUR_STEP))
    }

    /// Level expected after `incorrect` incorrect guesses.
    pub fn after_misses(incorrect: usize) -> Self {
        let removed = incorrect.saturating_mul(BLUR_STEP as usize);
        Self(MAX_BLUR.saturating_sub(removed.min(MAX_BLUR as usize) as u8))
    }

    /// Blur amount in pixels.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Fraction of the portrait revealed, from 0.0 (obscured) to 1.0 (clear).
    pub fn clarity(self) -> f64 {
        f64::from(MAX_BLUR - self.0.min(MAX_BLUR)) / f64::from(MAX_BLUR)
    }

    /// True once nothing is obscured.
    pub fn is_clear(self) -> bool {
        self.0 == 0
    }
}

impl Default for RevealLevel {
    fn default() -> Self {
        Self::OBSCURED
    }
}
