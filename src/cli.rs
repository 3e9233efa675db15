//! Command-line interface for chessguess.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Chessguess - name the chess player behind the blurred portrait
#[derive(Parser, Debug)]
#[command(name = "chessguess")]
#[command(about = "Guess the chess player from a blurred portrait", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a config file (defaults to ./chessguess.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Roster file replacing the built-in roster
        #[arg(long)]
        roster: Option<PathBuf>,

        /// Seed for drawing targets
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Validate and print the roster
    Roster {
        /// Roster file replacing the built-in roster
        #[arg(long)]
        roster: Option<PathBuf>,
    },

    /// Play a scripted game and print every snapshot as JSON
    Replay {
        /// Roster file replacing the built-in roster
        #[arg(long)]
        roster: Option<PathBuf>,

        /// Name of the hidden target
        #[arg(short, long)]
        target: String,

        /// Guessed player names, in commit order
        guesses: Vec<String>,
    },
}

impl Cli {
    /// The requested command, `play` with no overrides when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play {
            roster: None,
            seed: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::parse_from(["chessguess"]);
        assert_eq!(
            cli.command(),
            Command::Play {
                roster: None,
                seed: None
            }
        );
    }

    #[test]
    fn test_replay_arguments() {
        let cli = Cli::parse_from([
            "chessguess",
            "replay",
            "--target",
            "Magnus Carlsen",
            "Ediz Gürel",
            "Magnus Carlsen",
        ]);
        match cli.command() {
            Command::Replay {
                target, guesses, ..
            } => {
                assert_eq!(target, "Magnus Carlsen");
                assert_eq!(guesses, vec!["Ediz Gürel", "Magnus Carlsen"]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["chessguess", "play", "--seed", "3", "--config", "x.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert_eq!(
            cli.command(),
            Command::Play {
                roster: None,
                seed: Some(3)
            }
        );
    }
}
