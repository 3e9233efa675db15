//! Roster validation errors.

use derive_more::{Display, Error};
use tracing::instrument;

/// What is wrong with a roster.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum RosterErrorKind {
    /// The roster has no entries.
    #[display("roster is empty")]
    Empty,

    /// An entry has an empty or whitespace-only name.
    #[display("entry {} has a blank name", _0)]
    BlankName(usize),

    /// Two entries share a name.
    #[display("duplicate player name {:?}", _0)]
    DuplicateName(String),

    /// A title outside the known vocabulary.
    #[display("player {:?} has unknown title {:?}", name, title)]
    UnknownTitle {
        /// Player name.
        name: String,
        /// Offending title string.
        title: String,
    },

    /// A nationality that is not a three-letter code.
    #[display("player {:?} has invalid nationality code {:?}", name, code)]
    InvalidNationality {
        /// Player name.
        name: String,
        /// Offending code.
        code: String,
    },

    /// A rating below zero.
    #[display("player {:?} has negative rating {}", name, rating)]
    NegativeRating {
        /// Player name.
        name: String,
        /// Offending rating.
        rating: i64,
    },

    /// The roster document could not be parsed.
    #[display("parse error: {}", _0)]
    Parse(String),

    /// The roster file could not be read.
    #[display("io error: {}", _0)]
    Io(String),
}

/// Roster error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Roster error: {} at {}:{}", kind, file, line)]
pub struct RosterError {
    /// What went wrong.
    pub kind: RosterErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl RosterError {
    /// Creates a new roster error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: RosterErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &RosterErrorKind {
        &self.kind
    }
}

impl From<toml::de::Error> for RosterError {
    #[track_caller]
    fn from(err: toml::de::Error) -> Self {
        Self::new(RosterErrorKind::Parse(err.to_string()))
    }
}

impl From<std::io::Error> for RosterError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(RosterErrorKind::Io(err.to_string()))
    }
}
