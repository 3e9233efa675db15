//! Typestate engine for one round of guessing.
//!
//! The phase is encoded in the type parameter, so a solved round has no
//! `guess` method at all. The flat, serializable view the presentation layer
//! holds is [`GameState`](crate::GameState).

use super::compare::{ComparisonResult, compare};
use super::entry::Entry;
use super::reveal::RevealLevel;
use super::roster::Roster;
use derive_getters::Getters;
use rand::Rng;
use serde::Serialize;
use std::marker::PhantomData;
use tracing::{debug, info, instrument};

/// Typestate marker: the target has not been named yet.
#[derive(Debug, Clone, Copy)]
pub struct Guessing;

/// Typestate marker: the target has been named.
#[derive(Debug, Clone, Copy)]
pub struct Solved;

/// One committed guess and its feedback. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GuessRecord {
    /// The roster entry that was guessed.
    guessed: Entry,
    /// Feedback against the target.
    comparison: ComparisonResult,
}

impl GuessRecord {
    /// Evaluates `guessed` against `target`.
    pub fn evaluate(guessed: &Entry, target: &Entry) -> Self {
        Self {
            guessed: guessed.clone(),
            comparison: compare(guessed, target),
        }
    }
}

/// A round with typestate phase encoding.
///
/// - `Round<Guessing>` accepts guesses
/// - `Round<Solved>` only reports and restarts
#[derive(Debug, Clone)]
pub struct Round<S> {
    pub(crate) target: Entry,
    pub(crate) history: Vec<GuessRecord>,
    pub(crate) reveal: RevealLevel,
    pub(crate) _state: PhantomData<S>,
}

/// Result of a guess: explicit state transition.
#[derive(Debug)]
pub enum RoundTransition {
    /// Wrong player; keep guessing.
    Guessing(Round<Guessing>),
    /// Target named.
    Solved(Round<Solved>),
}

// ─────────────────────────────────────────────────────────────
//  Constructors - always start Guessing
// ─────────────────────────────────────────────────────────────

impl Round<Guessing> {
    /// Starts a round against a known target.
    #[instrument(skip_all, fields(target = %target.name()))]
    pub fn new(target: Entry) -> Self {
        Self {
            target,
            history: Vec::new(),
            reveal: RevealLevel::OBSCURED,
            _state: PhantomData,
        }
    }

    /// Starts a round against a target drawn uniformly from the roster.
    #[instrument(skip_all)]
    pub fn draw<R: Rng + ?Sized>(roster: &Roster, rng: &mut R) -> Self {
        Self::new(roster.draw(rng).clone())
    }
}

// ─────────────────────────────────────────────────────────────
//  Only Guessing accepts guesses (consuming transition)
// ─────────────────────────────────────────────────────────────

impl Round<Guessing> {
    /// Commits a guess, consuming the round.
    ///
    /// Naming the target (by identity) solves the round and clears the
    /// portrait. Any other player removes one blur step, floored at zero.
    #[instrument(skip_all, fields(guess = %guessed.name(), reveal = %self.reveal))]
    pub fn guess(mut self, guessed: &Entry) -> RoundTransition {
        self.history.push(GuessRecord::evaluate(guessed, &self.target));

        if guessed.is_same_player(&self.target) {
            info!(guesses = self.history.len(), "Target named");
            return RoundTransition::Solved(Round {
                target: self.target,
                history: self.history,
                reveal: RevealLevel::CLEAR,
                _state: PhantomData::<Solved>,
            });
        }

        self.reveal = self.reveal.step_down();
        debug!(reveal = %self.reveal, "Incorrect guess");
        RoundTransition::Guessing(self)
    }
}

// ─────────────────────────────────────────────────────────────
//  Common methods available on all phases
// ─────────────────────────────────────────────────────────────

impl<S> Round<S> {
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
        self.reveal
    }
}

// ─────────────────────────────────────────────────────────────
//  Solved state
// ─────────────────────────────────────────────────────────────

impl Round<Solved> {
    /// Number of guesses it took, including the solving one.
    pub fn guesses_taken(&self) -> usize {
        self.history.len()
    }

    /// Discards this round and draws a fresh one.
    #[instrument(skip_all)]
    pub fn restart<R: Rng + ?Sized>(self, roster: &Roster, rng: &mut R) -> Round<Guessing> {
        Round::draw(roster, rng)
    }
}
