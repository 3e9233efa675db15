//! Roster entries.

use super::error::{RosterError, RosterErrorKind};
use super::title::Title;
use serde::Serialize;
use tracing::instrument;

/// Three-letter nationality code ("NOR", "TUR", ...).
///
/// Always exactly three ASCII uppercase letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[serde(transparent)]
pub struct Nationality(String);

impl Nationality {
    /// Validates a nationality code for the named player.
    #[instrument]
    pub fn parse(player: &str, code: &str) -> Result<Self, RosterError> {
        let valid = code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase());
        if !valid {
            return Err(RosterError::new(RosterErrorKind::InvalidNationality {
                name: player.to_string(),
                code: code.to_string(),
            }));
        }
        Ok(Self(code.to_string()))
    }

    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One roster member.
///
/// `name` is unique within a roster and is the entry's identity: two entries
/// are the same player iff their names are equal, whatever their stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    name: String,
    birth_year: i32,
    rating: u32,
    nationality: Nationality,
    title: Title,
    portrait: String,
}

impl Entry {
    /// Creates a new entry.
    pub fn new(
        name: impl Into<String>,
        birth_year: i32,
        rating: u32,
        nationality: Nationality,
        title: Title,
        portrait: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            birth_year,
            rating,
            nationality,
            title,
            portrait: portrait.into(),
        }
    }

    /// Display name, also the identity key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Year of birth.
    pub fn birth_year(&self) -> i32 {
        self.birth_year
    }

    /// Peak rating.
    pub fn rating(&self) -> u32 {
        self.rating
    }

    /// Nationality code.
    pub fn nationality(&self) -> &Nationality {
        &self.nationality
    }

    /// Chess title.
    pub fn title(&self) -> Title {
        self.title
    }

    /// Opaque reference to the portrait image.
    pub fn portrait(&self) -> &str {
        &self.portrait
    }

    /// Identity comparison by name. Never compares stats.
    pub fn is_same_player(&self, other: &Entry) -> bool {
        self.name == other.name
    }
}
