//! Key presses to user intents.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A character typed into the guess box.
    Type(char),
    /// Delete the last typed character.
    Erase,
    /// Highlight the next suggestion.
    Next,
    /// Highlight the previous suggestion.
    Previous,
    /// Commit the highlighted suggestion as a guess.
    Commit,
    /// Leave the game.
    Quit,
    /// Anything else.
    Ignore,
}

/// Classifies a key event. Only presses count; repeats and releases are ignored.
pub fn classify(key: KeyEvent) -> Input {
    if key.kind != KeyEventKind::Press {
        return Input::Ignore;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Input::Quit,
        KeyCode::Esc => Input::Quit,
        KeyCode::Enter => Input::Commit,
        KeyCode::Down | KeyCode::Tab => Input::Next,
        KeyCode::Up | KeyCode::BackTab => Input::Previous,
        KeyCode::Backspace => Input::Erase,
        KeyCode::Char(c) => Input::Type(c),
        _ => Input::Ignore,
    }
}
