//! Contract-based validation for guess commits.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P(state, guess)} commit {Q(before, after)}.

use super::entry::Entry;
use super::invariants::{GameStateInvariants, InvariantSet};
use super::state::GameState;
use tracing::instrument;

/// Why a commit was not applied, or a transition broke its promise.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GuessRejected {
    /// The game is already won.
    #[display("Game is already won")]
    AlreadyWon,

    /// A postcondition failed.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GuessRejected>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GuessRejected>;
}

/// Contract for committing a guess.
///
/// Preconditions:
/// - The game is still in progress
///
/// Postconditions:
/// - Exactly one record appended, earlier records untouched
/// - Reveal level never increases
/// - All [`GameStateInvariants`] hold
pub struct GuessContract;

impl Contract<GameState, Entry> for GuessContract {
    #[instrument(skip_all)]
    fn pre(state: &GameState, _guess: &Entry) -> Result<(), GuessRejected> {
        if state.won() {
            return Err(GuessRejected::AlreadyWon);
        }
        Ok(())
    }

    #[instrument(skip_all)]
    fn post(before: &GameState, after: &GameState) -> Result<(), GuessRejected> {
        let mut problems = Vec::new();

        if after.history().len() != before.history().len() + 1 {
            problems.push("exactly one guess is appended".to_string());
        } else if after.history()[..before.history().len()] != *before.history() {
            problems.push("earlier guesses are unchanged".to_string());
        }

        if after.reveal_level() > before.reveal_level() {
            problems.push("reveal level never increases".to_string());
        }

        if !after.target().is_same_player(before.target()) {
            problems.push("target is fixed for the session".to_string());
        }

        if let Err(violations) = GameStateInvariants::check_all(after) {
            problems.extend(violations.into_iter().map(|v| v.description));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(GuessRejected::InvariantViolation(format!(
                "Postcondition failed: {}",
                problems.join("; ")
            )))
        }
    }
}
