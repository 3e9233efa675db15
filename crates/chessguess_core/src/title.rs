//! Chess title vocabulary and its rank table.
//!
//! The ordering is fixed configuration, not computed: open titles outrank
//! the women's title of the same tier, and a missing title ranks lowest.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A chess title, declared in ascending order of competitive strength.
///
/// The derived `Ord` follows declaration order and therefore agrees with
/// [`Title::rank`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[repr(u8)]
pub enum Title {
    /// No title.
    #[default]
    #[serde(rename = "None")]
    #[strum(to_string = "None")]
    Untitled = 0,
    /// Woman Candidate Master.
    #[strum(to_string = "WCM")]
    #[serde(rename = "WCM")]
    WomanCandidateMaster = 1,
    /// Woman FIDE Master.
    #[strum(to_string = "WFM")]
    #[serde(rename = "WFM")]
    WomanFideMaster = 2,
    /// Candidate Master.
    #[strum(to_string = "CM")]
    #[serde(rename = "CM")]
    CandidateMaster = 3,
    /// Woman International Master.
    #[strum(to_string = "WIM")]
    #[serde(rename = "WIM")]
    WomanInternationalMaster = 4,
    /// FIDE Master.
    #[strum(to_string = "FM")]
    #[serde(rename = "FM")]
    FideMaster = 5,
    /// Woman Grandmaster.
    #[strum(to_string = "WGM")]
    #[serde(rename = "WGM")]
    WomanGrandmaster = 6,
    /// International Master.
    #[strum(to_string = "IM")]
    #[serde(rename = "IM")]
    InternationalMaster = 7,
    /// Grandmaster.
    #[strum(to_string = "GM")]
    #[serde(rename = "GM")]
    Grandmaster = 8,
}

impl Title {
    /// Parses a title abbreviation ("GM", "WIM", "None", ...).
    ///
    /// Matching is exact. Returns `None` for anything outside the vocabulary.
    pub fn parse(label: &str) -> Option<Self> {
        Self::from_str(label).ok()
    }

    /// Ordinal rank of this title. `Untitled` is 0, `Grandmaster` is 8.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Short label as shown on the board ("GM", "None", ...).
    pub fn label(self) -> String {
        self.to_string()
    }
}

/// Rank of an arbitrary title string.
///
/// Total over all strings: unknown, empty or absent titles rank 0.
#[instrument]
pub fn rank(title: &str) -> u8 {
    Title::parse(title).map_or(0, Title::rank)
}
