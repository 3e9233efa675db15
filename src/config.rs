//! Session configuration.

use chessguess_core::{Roster, RosterError};
use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Configuration file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "chessguess.toml";

/// Configuration for a guessing session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GuessConfig {
    /// Roster file replacing the built-in roster.
    #[serde(default)]
    roster: Option<PathBuf>,

    /// Seed for drawing targets. Absent means OS entropy.
    #[serde(default)]
    seed: Option<u64>,

    /// Where the terminal UI writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("chessguess.log")
}

impl Default for GuessConfig {
    fn default() -> Self {
        Self {
            roster: None,
            seed: None,
            log_file: default_log_file(),
        }
    }
}

impl GuessConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(seeded = config.seed.is_some(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads the explicit config file, or the default one if present.
    ///
    /// An explicit path must exist. A missing default file means defaults.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides on top of file values.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, roster: Option<PathBuf>, seed: Option<u64>) -> Self {
        if let Some(path) = roster {
            debug!(path = %path.display(), "Overriding roster");
            self.roster = Some(path);
        }
        if let Some(seed) = seed {
            debug!(seed, "Overriding seed");
            self.seed = Some(seed);
        }
        self
    }

    /// Loads and validates the configured roster, or the built-in one.
    #[instrument(skip(self))]
    pub fn load_roster(&self) -> Result<Roster, RosterError> {
        match &self.roster {
            Some(path) => Roster::from_file(path),
            None => Roster::builtin(),
        }
    }

    /// Random source for drawing targets.
    #[instrument(skip(self))]
    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_defaults() {
        let config = GuessConfig::default();
        assert_eq!(config.roster(), &None);
        assert_eq!(config.seed(), &None);
        assert_eq!(config.log_file(), &PathBuf::from("chessguess.log"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: GuessConfig = toml::from_str("seed = 42").unwrap();
        assert_eq!(config.seed(), &Some(42));
        assert_eq!(config.log_file(), &PathBuf::from("chessguess.log"));
    }

    #[test]
    fn test_overrides_win() {
        let config: GuessConfig = toml::from_str("seed = 1\nroster = \"a.toml\"").unwrap();
        let config = config.with_overrides(Some(PathBuf::from("b.toml")), None);
        assert_eq!(config.roster(), &Some(PathBuf::from("b.toml")));
        assert_eq!(config.seed(), &Some(1));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = GuessConfig::default().with_overrides(None, Some(9));
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }

    #[test]
    fn test_builtin_roster_without_path() {
        let roster = GuessConfig::default().load_roster().unwrap();
        assert_eq!(roster.len(), 3);
    }
}
