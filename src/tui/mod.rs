//! Terminal UI for chessguess.
//!
//! A thin presentation adapter: it forwards key presses to [`App`], which
//! drives the core transitions, and redraws from the current snapshot.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

use crate::config::GuessConfig;
use chessguess_core::Roster;

pub use app::{App, AppAction};
pub use input::{Input, classify};
pub use ui::{arrow, draw, obscure};

/// Run the TUI client
#[instrument(skip_all, fields(log_file = %config.log_file().display()))]
pub fn run_tui(config: &GuessConfig, roster: Roster) -> Result<()> {
    // Log to a file so tracing output never lands on the alternate screen
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(crate::DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(players = roster.len(), seeded = config.seed().is_some(), "Starting chessguess TUI");

    let mut app = App::new(roster, config.rng());

    enable_raw_mode()?;
    let mut terminal = setup_or_restore(enter_alternate_screen, restore_terminal)?;

    let res = run_loop(&mut terminal, &mut app);

    restore_terminal()?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Leaving chessguess TUI");
    res
}

fn enter_alternate_screen() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Runs `setup`; if it fails, runs `restore` before handing back the setup error.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    setup().or_else(|err| {
        error!(error = ?err, "Terminal setup failed, restoring");
        if let Err(restore_err) = restore() {
            error!(error = ?restore_err, "Failed to restore terminal");
        }
        Err(err)
    })
}

/// Draw, wait for a key, hand it to the app. One event at a time.
fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if app.handle_input(classify(key)) == AppAction::Quit {
                info!("User quit");
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_restores_terminal() {
        let restored = Cell::new(false);
        let res: Result<()> = setup_or_restore(
            || Err(anyhow::anyhow!("no alternate screen")),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert!(res.unwrap_err().to_string().contains("no alternate screen"));
        assert!(restored.get());
    }

    #[test]
    fn test_successful_setup_leaves_terminal_alone() {
        let restored = Cell::new(false);
        let value = setup_or_restore(
            || Ok(7),
            || {
                restored.set(true);
                Ok(())
            },
        )
        .unwrap();
        assert_eq!(value, 7);
        assert!(!restored.get());
    }

    #[test]
    fn test_setup_error_wins_over_restore_error() {
        let res: Result<()> = setup_or_restore(
            || Err(anyhow::anyhow!("setup")),
            || Err(anyhow::anyhow!("restore")),
        );
        assert_eq!(res.unwrap_err().to_string(), "setup");
    }
}
