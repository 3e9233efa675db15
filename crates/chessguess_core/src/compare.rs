//! Per-attribute feedback for one guess against the target.

use super::entry::Entry;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::instrument;

/// Where the target's value sits relative to the guess's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    /// Target's value exceeds the guess's: look higher.
    Higher,
    /// Target's value is below the guess's: look lower.
    Lower,
    /// Values match.
    Equal,
}

impl Direction {
    /// Direction of `target` relative to `guess`.
    pub fn of<T: Ord>(guess: T, target: T) -> Self {
        match target.cmp(&guess) {
            Ordering::Greater => Direction::Higher,
            Ordering::Less => Direction::Lower,
            Ordering::Equal => Direction::Equal,
        }
    }

    /// True when the values match.
    pub fn is_equal(self) -> bool {
        self == Direction::Equal
    }
}

/// Categorical outcome for nationality. Never directional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum NationalityMatch {
    /// Same code.
    Equal,
    /// Different code.
    NoMatch,
}

impl NationalityMatch {
    /// True when the codes match.
    pub fn is_equal(self) -> bool {
        self == NationalityMatch::Equal
    }
}

/// Feedback for one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Peak rating.
    pub rating: Direction,
    /// Year of birth.
    pub birth_year: Direction,
    /// Title rank.
    pub title: Direction,
    /// Nationality code.
    pub nationality: NationalityMatch,
}

impl ComparisonResult {
    /// True when every attribute is equal or matched.
    ///
    /// Two different players with identical stats also compare exact, so
    /// this is feedback only, never a win check.
    pub fn is_exact(&self) -> bool {
        self.rating.is_equal()
            && self.birth_year.is_equal()
            && self.title.is_equal()
            && self.nationality.is_equal()
    }
}

/// Compares a guessed entry against the target. Pure and total.
#[instrument(skip_all, fields(guess = %guess.name()))]
pub fn compare(guess: &Entry, target: &Entry) -> ComparisonResult {
    let nationality = if guess.nationality() == target.nationality() {
        NationalityMatch::Equal
    } else {
        NationalityMatch::NoMatch
    };

    ComparisonResult {
        rating: Direction::of(guess.rating(), target.rating()),
        birth_year: Direction::of(guess.birth_year(), target.birth_year()),
        title: Direction::of(guess.title().rank(), target.title().rank()),
        nationality,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Nationality, Roster, Title};

    fn entry(name: &str, born: i32, elo: u32, nat: &str, title: Title) -> Entry {
        let nationality = Nationality::parse(name, nat).unwrap();
        Entry::new(name, born, elo, nationality, title, format!("{name}.jpeg"))
    }

    #[test]
    fn test_self_comparison_is_exact() {
        let roster = Roster::builtin().unwrap();
        for e in roster.iter() {
            let result = compare(e, e);
            assert_eq!(result.rating, Direction::Equal);
            assert_eq!(result.birth_year, Direction::Equal);
            assert_eq!(result.title, Direction::Equal);
            assert_eq!(result.nationality, NationalityMatch::Equal);
            assert!(result.is_exact());
        }
    }

    #[test]
    fn test_ediz_against_magnus() {
        let roster = Roster::builtin().unwrap();
        let ediz = roster.get("Ediz Gürel").unwrap();
        let magnus = roster.get("Magnus Carlsen").unwrap();

        let result = compare(ediz, magnus);
        assert_eq!(
            result,
            ComparisonResult {
                rating: Direction::Higher,
                birth_year: Direction::Lower,
                title: Direction::Equal,
                nationality: NationalityMatch::NoMatch,
            }
        );
        assert!(!result.is_exact());
    }

    #[test]
    fn test_directions_follow_target() {
        let roster = Roster::builtin().unwrap();
        for g in roster.iter() {
            for t in roster.iter() {
                let result = compare(g, t);
                assert_eq!(result.rating == Direction::Higher, t.rating() > g.rating());
                assert_eq!(result.rating == Direction::Lower, t.rating() < g.rating());
                assert_eq!(
                    result.birth_year == Direction::Higher,
                    t.birth_year() > g.birth_year()
                );
                assert_eq!(
                    result.birth_year == Direction::Lower,
                    t.birth_year() < g.birth_year()
                );
                assert_eq!(
                    result.title == Direction::Higher,
                    t.title().rank() > g.title().rank()
                );
                assert_eq!(
                    result.nationality == NationalityMatch::Equal,
                    g.nationality() == t.nationality()
                );
            }
        }
    }

    #[test]
    fn test_title_compares_by_rank() {
        let wgm = entry("A", 1990, 2400, "CHN", Title::WomanGrandmaster);
        let fm = entry("B", 1990, 2400, "CHN", Title::FideMaster);
        let untitled = entry("C", 1990, 2400, "CHN", Title::Untitled);

        assert_eq!(compare(&fm, &wgm).title, Direction::Higher);
        assert_eq!(compare(&wgm, &fm).title, Direction::Lower);
        assert_eq!(compare(&wgm, &untitled).title, Direction::Lower);
        assert_eq!(compare(&untitled, &untitled).title, Direction::Equal);
    }

    #[test]
    fn test_identical_stats_are_exact_but_distinct_players() {
        let a = entry("Twin A", 1990, 2600, "USA", Title::Grandmaster);
        let b = entry("Twin B", 1990, 2600, "USA", Title::Grandmaster);

        assert!(compare(&a, &b).is_exact());
        assert!(!a.is_same_player(&b));
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_string(&compare(
            &entry("A", 2000, 2500, "TUR", Title::Grandmaster),
            &entry("B", 1990, 2800, "NOR", Title::Grandmaster),
        ))
        .unwrap();
        assert_eq!(
            json,
            r#"{"rating":"HIGHER","birth_year":"LOWER","title":"EQUAL","nationality":"NO_MATCH"}"#
        );
    }
}
