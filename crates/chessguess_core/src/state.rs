//! Serializable game snapshot held by the presentation layer.
//!
//! Each transition returns a new snapshot and leaves the old one untouched,
//! so the caller decides what "current" means. Internally every guess runs
//! through the typestate [`Round`] engine.

use super::contracts::{Contract, GuessContract};
use super::entry::Entry;
use super::reveal::RevealLevel;
use super::roster::Roster;
use super::typestate::{GuessRecord, Guessing, Round, RoundTransition, Solved};
use rand::Rng;
use serde::Serialize;
use std::marker::PhantomData;
use tracing::{debug, info, instrument, warn};

/// Whether the target has been named yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    /// Still guessing.
    InProgress,
    /// Target named. Further commits are ignored.
    Won,
}

/// One active game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) target: Entry,
    pub(crate) history: Vec<GuessRecord>,
    pub(crate) reveal_level: RevealLevel,
    pub(crate) won: bool,
}

impl GameState {
    /// Starts a session with a target drawn uniformly from the roster.
    #[instrument(skip_all, fields(players = roster.len()))]
    pub fn start<R: Rng + ?Sized>(roster: &Roster, rng: &mut R) -> Self {
        let state: Self = Round::draw(roster, rng).into();
        info!("New game started");
        state
    }

    /// Starts a session against a known target.
    #[instrument(skip_all, fields(target = %target.name()))]
    pub fn with_target(target: Entry) -> Self {
        Round::new(target).into()
    }

    /// Commits a guess and returns the next snapshot.
    ///
    /// With no selection, or once the game is won, this is a no-op that
    /// returns an unchanged copy.
    #[instrument(skip_all, fields(guess = guess.map(Entry::name), reveal = %self.reveal_level, won = self.won))]
    pub fn commit_guess(&self, guess: Option<&Entry>) -> Self {
        let Some(guessed) = guess else {
            warn!("Commit with no selection ignored");
            return self.clone();
        };

        if let Err(rejection) = GuessContract::pre(self, guessed) {
            warn!(%rejection, "Guess ignored");
            return self.clone();
        }

        let next: Self = self.resume().guess(guessed).into();

        #[cfg(debug_assertions)]
        {
            let checked = GuessContract::post(self, &next);
            if let Err(violation) = &checked {
                warn!(%violation, "Guess postcondition failed");
            }
            debug_assert!(checked.is_ok(), "guess postcondition failed");
        }

        debug!(reveal = %next.reveal_level, won = next.won, "Guess committed");
        next
    }

    /// Discards this session and starts a fresh one.
    ///
    /// The new target may repeat the previous one.
    #[instrument(skip_all, fields(previous = %self.target.name(), guesses = self.history.len()))]
    pub fn play_again<R: Rng + ?Sized>(&self, roster: &Roster, rng: &mut R) -> Self {
        info!("Play again");
        Self::start(roster, rng)
    }

    /// The hidden target.
    pub fn target(&self) -> &Entry {
        &self.target
    }

    /// Guesses in commit order.
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Current reveal level.
    pub fn reveal_level(&self) -> RevealLevel {
        self.reveal_level
    }

    /// True once some guess named the target.
    pub fn won(&self) -> bool {
        self.won
    }

    /// Current phase.
    pub fn status(&self) -> GameStatus {
        if self.won {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    /// Number of committed guesses.
    pub fn guesses_taken(&self) -> usize {
        self.history.len()
    }

    /// Rebuilds the in-progress round this snapshot describes.
    fn resume(&self) -> Round<Guessing> {
        Round {
            target: self.target.clone(),
            history: self.history.clone(),
            reveal: self.reveal_level,
            _state: PhantomData,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Typestate conversions
// ─────────────────────────────────────────────────────────────

impl From<Round<Guessing>> for GameState {
    fn from(round: Round<Guessing>) -> Self {
        Self {
            target: round.target,
            history: round.history,
            reveal_level: round.reveal,
            won: false,
        }
    }
}

impl From<Round<Solved>> for GameState {
    fn from(round: Round<Solved>) -> Self {
        Self {
            target: round.target,
            history: round.history,
            reveal_level: round.reveal,
            won: true,
        }
    }
}

impl From<RoundTransition> for GameState {
    fn from(transition: RoundTransition) -> Self {
        match transition {
            RoundTransition::Guessing(round) => round.into(),
            RoundTransition::Solved(round) => round.into(),
        }
    }
}
