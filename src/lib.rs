//! Chessguess library - guess the chess player from a blurred portrait
//!
//! The game logic lives in [`chessguess_core`]; this crate adds the ways of
//! playing it.
//!
//! # Architecture
//!
//! - **Config**: optional `chessguess.toml` plus command-line overrides
//! - **TUI**: terminal presentation adapter (ratatui)
//! - **Replay**: scripted, non-interactive games with JSON snapshots
//!
//! # Example
//!
//! ```
//! use chessguess::{GuessConfig, replay};
//!
//! # fn example() -> anyhow::Result<()> {
//! let roster = GuessConfig::default().load_roster()?;
//! let guesses = vec!["Ediz Gürel".to_string(), "Magnus Carlsen".to_string()];
//! let snapshots = replay(&roster, "Magnus Carlsen", &guesses)?;
//! assert!(snapshots.last().is_some_and(|s| s.won()));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod replay;
mod tui;

/// Tracing filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,chessguess=debug,chessguess_core=debug";

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GuessConfig};

// Crate-level exports - Scripted games
pub use replay::{ReplayError, replay};

// Crate-level exports - Terminal UI
pub use tui::{App, AppAction, Input, arrow, classify, draw, obscure, run_tui};

// Crate-level exports - Game types
pub use chessguess_core::{
    ComparisonResult, Direction, Entry, GameState, GameStatus, GuessRecord, Nationality,
    NationalityMatch, RevealLevel, Roster, RosterError, Title,
};
