//! First-class invariants for game snapshots.
//!
//! Invariants are logical properties that must hold after every transition.
//! They are testable independently and serve as documentation of the
//! guarantees a [`GameState`](crate::GameState) makes to its readers.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for triples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

pub mod reveal_bounded;
pub mod reveal_tracks_history;
pub mod win_matches_history;

pub use reveal_bounded::RevealBoundedInvariant;
pub use reveal_tracks_history::RevealTracksHistoryInvariant;
pub use win_matches_history::WinMatchesHistoryInvariant;

/// All snapshot invariants as a composable set.
pub type GameStateInvariants = (
    RevealBoundedInvariant,
    RevealTracksHistoryInvariant,
    WinMatchesHistoryInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameState, Roster};

    fn fresh() -> (Roster, GameState) {
        let roster = Roster::builtin().unwrap();
        let state = GameState::with_target(roster.get("Iluan Baltag").unwrap().clone());
        (roster, state)
    }

    #[test]
    fn test_invariant_set_holds_for_fresh_game() {
        let (_, state) = fresh();
        assert!(GameStateInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_through_a_game() {
        let (roster, mut state) = fresh();
        for name in ["Magnus Carlsen", "Ediz Gürel", "Magnus Carlsen", "Iluan Baltag"] {
            state = state.commit_guess(roster.get(name));
            assert!(GameStateInvariants::check_all(&state).is_ok(), "after {name}");
        }
        assert!(state.won());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let (roster, state) = fresh();
        let mut state = state.commit_guess(roster.get("Magnus Carlsen"));

        state.won = true;
        let violations = GameStateInvariants::check_all(&state).expect_err("corrupted");
        assert_eq!(violations.len(), 2);
    }
}
