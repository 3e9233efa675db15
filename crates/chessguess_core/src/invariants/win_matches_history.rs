//! The won flag agrees with the history.

use super::Invariant;
use crate::GameState;

/// Invariant: `won` iff the last guess, and only the last, names the target.
///
/// Identity is by name. A guess with identical stats but a different name
/// never counts.
pub struct WinMatchesHistoryInvariant;

impl Invariant<GameState> for WinMatchesHistoryInvariant {
    fn holds(state: &GameState) -> bool {
        let hits: Vec<usize> = state
            .history()
            .iter()
            .enumerate()
            .filter(|(_, record)| record.guessed().is_same_player(state.target()))
            .map(|(index, _)| index)
            .collect();

        if state.won() {
            let last = state.history().len().checked_sub(1);
            last.is_some_and(|last| hits == [last])
        } else {
            hits.is_empty()
        }
    }

    fn description() -> &'static str {
        "Won iff the last guess, and no earlier one, names the target"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Roster;

    #[test]
    fn test_fresh_game_holds() {
        let roster = Roster::builtin().unwrap();
        let state = GameState::with_target(roster.get("Ediz Gürel").unwrap().clone());
        assert!(WinMatchesHistoryInvariant::holds(&state));
    }

    #[test]
    fn test_win_holds() {
        let roster = Roster::builtin().unwrap();
        let ediz = roster.get("Ediz Gürel").unwrap();
        let state = GameState::with_target(ediz.clone())
            .commit_guess(roster.get("Iluan Baltag"))
            .commit_guess(Some(ediz));
        assert!(WinMatchesHistoryInvariant::holds(&state));
    }

    #[test]
    fn test_unflagged_hit_violates() {
        let roster = Roster::builtin().unwrap();
        let ediz = roster.get("Ediz Gürel").unwrap();
        let mut state = GameState::with_target(ediz.clone()).commit_guess(Some(ediz));

        state.won = false;
        assert!(!WinMatchesHistoryInvariant::holds(&state));
    }

    #[test]
    fn test_flag_without_hit_violates() {
        let roster = Roster::builtin().unwrap();
        let mut state = GameState::with_target(roster.get("Ediz Gürel").unwrap().clone())
            .commit_guess(roster.get("Iluan Baltag"));

        state.won = true;
        assert!(!WinMatchesHistoryInvariant::holds(&state));
    }
}
