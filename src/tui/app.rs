//! Application state and logic.
//!
//! The app owns the current [`GameState`] snapshot and replaces it with the
//! snapshot each transition returns. Everything else here is the guess box:
//! the typed query, the filtered suggestions and which one is highlighted.

use super::input::Input;
use chessguess_core::{Entry, GameState, Roster};
use rand::rngs::SmallRng;
use tracing::{debug, info, instrument};

/// What the event loop should do after handling an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the terminal UI.
    Quit,
}

/// Main application state.
pub struct App {
    roster: Roster,
    rng: SmallRng,
    game: GameState,
    query: String,
    highlighted: Option<usize>,
    status_message: String,
}

impl App {
    /// Creates a new application with a freshly drawn target.
    #[instrument(skip_all, fields(players = roster.len()))]
    pub fn new(roster: Roster, mut rng: SmallRng) -> Self {
        let game = GameState::start(&roster, &mut rng);
        Self {
            roster,
            rng,
            game,
            query: String::new(),
            highlighted: None,
            status_message: "Type a name, pick with ↑/↓, press Enter to guess.".to_string(),
        }
    }

    /// Gets the current game snapshot.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Gets the typed query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Roster entries matching the query.
    pub fn suggestions(&self) -> Vec<&Entry> {
        self.roster.suggest(&self.query)
    }

    /// Index of the highlighted suggestion, if any.
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// The highlighted roster entry, if any. This is the current selection.
    pub fn selection(&self) -> Option<&Entry> {
        self.highlighted
            .and_then(|index| self.suggestions().get(index).copied())
    }

    /// Handles one user input.
    #[instrument(skip(self), fields(won = self.game.won()))]
    pub fn handle_input(&mut self, input: Input) -> AppAction {
        if self.game.won() {
            return self.handle_won_input(input);
        }

        match input {
            Input::Quit => return AppAction::Quit,
            Input::Type(c) => {
                self.query.push(c);
                self.refilter();
            }
            Input::Erase => {
                self.query.pop();
                self.refilter();
            }
            Input::Next => self.move_highlight(1),
            Input::Previous => self.move_highlight(-1),
            Input::Commit => self.commit(),
            Input::Ignore => {}
        }
        AppAction::Continue
    }

    /// Starts a new game against a freshly drawn target.
    #[instrument(skip(self))]
    pub fn play_again(&mut self) {
        self.game = self.game.play_again(&self.roster, &mut self.rng);
        self.clear_guess_box();
        self.status_message = "New player drawn. Good luck!".to_string();
        info!("Play again");
    }

    fn handle_won_input(&mut self, input: Input) -> AppAction {
        match input {
            Input::Quit | Input::Type('q') => AppAction::Quit,
            Input::Commit | Input::Type('r') => {
                self.play_again();
                AppAction::Continue
            }
            _ => AppAction::Continue,
        }
    }

    fn commit(&mut self) {
        let selection = self.selection().cloned();
        let Some(guessed) = selection else {
            // The core treats this as a no-op too; only the message differs.
            self.game = self.game.commit_guess(None);
            self.status_message = "Select a player before guessing.".to_string();
            return;
        };

        self.game = self.game.commit_guess(Some(&guessed));
        self.clear_guess_box();

        self.status_message = if self.game.won() {
            format!(
                "{} in {} guess(es)! Enter or r to play again, q to quit.",
                guessed.name(),
                self.game.guesses_taken()
            )
        } else {
            format!("Not {}. Blur now {}px.", guessed.name(), self.game.reveal_level())
        };
        debug!(guess = %guessed.name(), won = self.game.won(), "Committed guess");
    }

    fn refilter(&mut self) {
        let count = self.suggestions().len();
        self.highlighted = if self.query.trim().is_empty() || count == 0 {
            None
        } else {
            Some(0)
        };
    }

    fn move_highlight(&mut self, step: isize) {
        let count = self.suggestions().len();
        if count == 0 {
            self.highlighted = None;
            return;
        }
        self.highlighted = Some(match self.highlighted {
            None if step < 0 => count - 1,
            None => 0,
            Some(index) => (index as isize + step).rem_euclid(count as isize) as usize,
        });
    }

    fn clear_guess_box(&mut self) {
        self.query.clear();
        self.highlighted = None;
    }
}
