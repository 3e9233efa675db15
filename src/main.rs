//! Chessguess - Unified CLI
//!
//! Guess the chess player from a blurred portrait.

use anyhow::{Context, Result};
use chessguess::{Cli, Command, DEFAULT_LOG_FILTER, GuessConfig, Roster, replay, run_tui};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command();

    // The TUI logs to a file named in the config, so only the other
    // commands get a subscriber before the config is read.
    if !matches!(command, Command::Play { .. }) {
        initialize_stderr_tracing();
    }

    let config = GuessConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match command {
        Command::Play { roster, seed } => run_play(config.with_overrides(roster, seed)),
        Command::Roster { roster } => run_roster(config.with_overrides(roster, None)),
        Command::Replay {
            roster,
            target,
            guesses,
        } => run_replay(config.with_overrides(roster, None), &target, &guesses),
    }
}

/// Run the interactive terminal game
fn run_play(config: GuessConfig) -> Result<()> {
    let roster = load_roster(&config)?;
    run_tui(&config, roster)
}

/// Validate and print the roster
#[instrument(skip(config))]
fn run_roster(config: GuessConfig) -> Result<()> {
    let roster = load_roster(&config)?;
    info!(players = roster.len(), "Roster is valid");

    println!(
        "{:<24} {:>6} {:>5} {:>4} {:>5}  {}",
        "Name", "Born", "Elo", "Nat", "Title", "Portrait"
    );
    for entry in roster.iter() {
        println!(
            "{:<24} {:>6} {:>5} {:>4} {:>5}  {}",
            entry.name(),
            entry.birth_year(),
            entry.rating(),
            entry.nationality(),
            entry.title(),
            entry.portrait()
        );
    }
    Ok(())
}

/// Play a scripted game, one JSON snapshot per line
#[instrument(skip(config, guesses))]
fn run_replay(config: GuessConfig, target: &str, guesses: &[String]) -> Result<()> {
    let roster = load_roster(&config)?;
    let snapshots = replay(&roster, target, guesses)?;

    for snapshot in &snapshots {
        println!("{}", serde_json::to_string(snapshot)?);
    }
    info!(snapshots = snapshots.len(), "Replay finished");
    Ok(())
}

fn load_roster(config: &GuessConfig) -> Result<Roster> {
    let source = config
        .roster()
        .clone()
        .unwrap_or_else(|| PathBuf::from("<built-in>"));
    config
        .load_roster()
        .with_context(|| format!("Invalid roster {}", source.display()))
}

fn initialize_stderr_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
