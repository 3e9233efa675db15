//! Reveal level stays within `[0, MAX_BLUR]`.

use super::Invariant;
use crate::{GameState, MAX_BLUR};

/// Invariant: the reveal level never exceeds the starting blur.
pub struct RevealBoundedInvariant;

impl Invariant<GameState> for RevealBoundedInvariant {
    fn holds(state: &GameState) -> bool {
        state.reveal_level().value() <= MAX_BLUR
    }

    fn description() -> &'static str {
        "Reveal level stays within 0..=MAX_BLUR"
    }
}
