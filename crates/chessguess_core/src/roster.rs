//! The fixed candidate list targets and guesses are drawn from.
//!
//! A [`Roster`] can only be built through validation, so holding one means
//! every entry is well-formed and every name is unique.

use super::entry::{Entry, Nationality};
use super::error::{RosterError, RosterErrorKind};
use super::title::Title;
use rand::Rng;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, instrument};

const BUILTIN_ROSTER: &str = include_str!("../data/roster.toml");

/// Roster document as written on disk.
#[derive(Debug, Deserialize)]
struct RosterFile {
    #[serde(default)]
    player: Vec<RawEntry>,
}

/// Unvalidated entry.
#[derive(Debug, Deserialize)]
struct RawEntry {
    name: String,
    born: i32,
    elo: i64,
    nationality: String,
    title: Option<String>,
    portrait: String,
}

impl RawEntry {
    fn validate(self, index: usize) -> Result<Entry, RosterError> {
        if self.name.trim().is_empty() {
            return Err(RosterError::new(RosterErrorKind::BlankName(index)));
        }

        let rating = u32::try_from(self.elo).map_err(|_| {
            RosterError::new(RosterErrorKind::NegativeRating {
                name: self.name.clone(),
                rating: self.elo,
            })
        })?;

        let title = match self.title.as_deref() {
            None => Title::Untitled,
            Some(label) => Title::parse(label).ok_or_else(|| {
                RosterError::new(RosterErrorKind::UnknownTitle {
                    name: self.name.clone(),
                    title: label.to_string(),
                })
            })?,
        };

        let nationality = Nationality::parse(&self.name, &self.nationality)?;

        Ok(Entry::new(
            self.name,
            self.born,
            rating,
            nationality,
            title,
            self.portrait,
        ))
    }
}

/// Validated, immutable roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<Entry>,
}

impl Roster {
    /// Builds a roster from entries, checking it is non-empty and names are unique.
    #[instrument(skip(entries), fields(count = entries.len()))]
    pub fn new(entries: Vec<Entry>) -> Result<Self, RosterError> {
        if entries.is_empty() {
            return Err(RosterError::new(RosterErrorKind::Empty));
        }

        let mut seen = HashSet::new();
        for (index, entry) in entries.iter().enumerate() {
            if entry.name().trim().is_empty() {
                return Err(RosterError::new(RosterErrorKind::BlankName(index)));
            }
            if !seen.insert(entry.name()) {
                return Err(RosterError::new(RosterErrorKind::DuplicateName(
                    entry.name().to_string(),
                )));
            }
        }

        debug!("Roster validated");
        Ok(Self { entries })
    }

    /// Parses and validates a TOML roster document.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, RosterError> {
        let file: RosterFile = toml::from_str(content)?;
        let entries = file
            .player
            .into_iter()
            .enumerate()
            .map(|(index, raw)| raw.validate(index))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }

    /// Loads and validates a roster file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        debug!("Loading roster from file");
        let content = std::fs::read_to_string(path.as_ref())?;
        let roster = Self::from_toml_str(&content)?;
        info!(players = roster.len(), "Roster loaded");
        Ok(roster)
    }

    /// The roster compiled into the crate.
    #[instrument]
    pub fn builtin() -> Result<Self, RosterError> {
        Self::from_toml_str(BUILTIN_ROSTER)
    }

    /// Number of entries. Never zero.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Entries as a slice.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Looks up an entry by exact name.
    #[instrument(skip(self))]
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.name() == name)
    }

    /// Entries whose name contains `query`, case-insensitively, in roster order.
    ///
    /// A blank query matches every entry.
    #[instrument(skip(self))]
    pub fn suggest(&self, query: &str) -> Vec<&Entry> {
        let needle = query.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|e| needle.is_empty() || e.name().to_lowercase().contains(&needle))
            .collect()
    }

    /// Draws one entry uniformly at random with a single index draw.
    ///
    /// No exclusion: the previous target may be drawn again.
    #[instrument(skip(self, rng))]
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> &Entry {
        let index = rng.random_range(0..self.entries.len());
        let entry = &self.entries[index];
        debug!(index, "Drew target");
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_builtin_roster_is_valid() {
        let roster = Roster::builtin().expect("built-in roster is valid");
        assert_eq!(roster.len(), 3);

        let magnus = roster.get("Magnus Carlsen").expect("Magnus present");
        assert_eq!(magnus.rating(), 2830);
        assert_eq!(magnus.birth_year(), 1990);
        assert_eq!(magnus.nationality().as_str(), "NOR");
        assert_eq!(magnus.title(), Title::Grandmaster);
        assert_eq!(magnus.portrait(), "Magnus-Carlsen.jpeg");

        let iluan = roster.get("Iluan Baltag").expect("Iluan present");
        assert_eq!(iluan.title(), Title::InternationalMaster);
    }

    #[test]
    fn test_missing_title_is_untitled() {
        let roster = Roster::from_toml_str(
            r#"
            [[player]]
            name = "Club Player"
            born = 1970
            elo = 1800
            nationality = "ENG"
            portrait = "club.jpeg"
            "#,
        )
        .expect("valid roster");
        assert_eq!(roster.entries()[0].title(), Title::Untitled);
    }

    #[test]
    fn test_explicit_none_title_is_untitled() {
        let roster = Roster::from_toml_str(
            r#"
            [[player]]
            name = "Club Player"
            born = 1970
            elo = 1800
            nationality = "ENG"
            title = "None"
            portrait = "club.jpeg"
            "#,
        )
        .expect("valid roster");
        assert_eq!(roster.entries()[0].title(), Title::Untitled);
    }

    #[test]
    fn test_empty_roster_rejected() {
        let err = Roster::from_toml_str("").expect_err("empty");
        assert_eq!(err.kind(), &RosterErrorKind::Empty);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = Roster::from_toml_str(
            r#"
            [[player]]
            name = "Same"
            born = 1990
            elo = 2000
            nationality = "NOR"
            portrait = "a.jpeg"

            [[player]]
            name = "Same"
            born = 1991
            elo = 2100
            nationality = "SWE"
            portrait = "b.jpeg"
            "#,
        )
        .expect_err("duplicate");
        assert_eq!(err.kind(), &RosterErrorKind::DuplicateName("Same".into()));
    }

    #[test]
    fn test_unknown_title_rejected() {
        let err = Roster::from_toml_str(
            r#"
            [[player]]
            name = "Someone"
            born = 1990
            elo = 2000
            nationality = "NOR"
            title = "NM"
            portrait = "a.jpeg"
            "#,
        )
        .expect_err("unknown title");
        assert!(matches!(err.kind(), RosterErrorKind::UnknownTitle { title, .. } if title == "NM"));
    }

    #[test]
    fn test_negative_rating_rejected() {
        let err = Roster::from_toml_str(
            r#"
            [[player]]
            name = "Someone"
            born = 1990
            elo = -5
            nationality = "NOR"
            portrait = "a.jpeg"
            "#,
        )
        .expect_err("negative rating");
        assert!(matches!(
            err.kind(),
            RosterErrorKind::NegativeRating { rating: -5, .. }
        ));
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = Roster::from_toml_str(
            r#"
            [[player]]
            name = "  "
            born = 1990
            elo = 2000
            nationality = "NOR"
            portrait = "a.jpeg"
            "#,
        )
        .expect_err("blank name");
        assert_eq!(err.kind(), &RosterErrorKind::BlankName(0));
    }

    #[test]
    fn test_malformed_document_is_parse_error() {
        let err = Roster::from_toml_str("[[player]]\nname = 3").expect_err("bad toml");
        assert!(matches!(err.kind(), RosterErrorKind::Parse(_)));
    }

    #[test]
    fn test_suggest_filters_case_insensitively() {
        let roster = Roster::builtin().unwrap();

        let names: Vec<&str> = roster.suggest("car").iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["Magnus Carlsen"]);

        let names: Vec<&str> = roster.suggest("MAG").iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["Magnus Carlsen"]);

        let names: Vec<&str> = roster.suggest("l").iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["Ediz Gürel", "Magnus Carlsen", "Iluan Baltag"]);

        assert_eq!(roster.suggest("").len(), 3);
        assert!(roster.suggest("kasparov").is_empty());
    }

    #[test]
    fn test_draw_reaches_every_entry() {
        let roster = Roster::builtin().unwrap();
        let mut rng = SmallRng::seed_from_u64(11);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            seen.insert(roster.draw(&mut rng).name().to_string());
        }
        assert_eq!(seen.len(), roster.len());
    }

    #[test]
    fn test_draw_is_reproducible_for_a_seed() {
        let roster = Roster::builtin().unwrap();
        let mut a = SmallRng::seed_from_u64(99);
        let mut b = SmallRng::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(roster.draw(&mut a), roster.draw(&mut b));
        }
    }
}
