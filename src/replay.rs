//! Scripted, non-interactive games.
//!
//! Drives the same transitions the terminal UI does, from player names
//! instead of key presses, and hands back every intermediate snapshot.

use chessguess_core::{GameState, Roster};
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// Error from a scripted game.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ReplayError {
    /// A name that is not on the roster.
    #[display("unknown player {:?}", _0)]
    UnknownPlayer(#[error(not(source))] String),
}

/// Plays `guesses` against `target`, returning the starting snapshot
/// followed by one snapshot per guess.
///
/// Guesses after the winning one are still committed and, like in the
/// interactive game, leave the snapshot unchanged.
#[instrument(skip(roster, guesses), fields(guesses = guesses.len()))]
pub fn replay(
    roster: &Roster,
    target: &str,
    guesses: &[String],
) -> Result<Vec<GameState>, ReplayError> {
    let target = roster
        .get(target)
        .ok_or_else(|| ReplayError::UnknownPlayer(target.to_string()))?;

    let mut current = GameState::with_target(target.clone());
    let mut snapshots = vec![current.clone()];
    for name in guesses {
        let guessed = roster
            .get(name)
            .ok_or_else(|| ReplayError::UnknownPlayer(name.clone()))?;
        current = current.commit_guess(Some(guessed));
        debug!(guess = %name, won = current.won(), "Scripted guess");
        snapshots.push(current.clone());
    }

    Ok(snapshots)
}
