//! Reveal level is a function of the history.

use super::Invariant;
use crate::{GameState, RevealLevel};

/// Invariant: the reveal level is derived from the guesses made.
///
/// While guessing it is `MAX_BLUR` minus one `BLUR_STEP` per guess, floored
/// at zero. Once won it is zero regardless of how many guesses it took.
pub struct RevealTracksHistoryInvariant;

impl Invariant<GameState> for RevealTracksHistoryInvariant {
    fn holds(state: &GameState) -> bool {
        let expected = if state.won() {
            RevealLevel::CLEAR
        } else {
            RevealLevel::after_misses(state.history().len())
        };
        state.reveal_level() == expected
    }

    fn description() -> &'static str {
        "Reveal level equals MAX_BLUR minus one step per miss, or zero once won"
    }
}
