//! Pure game logic for guess-the-chess-player.
//!
//! A hidden target is drawn from a fixed [`Roster`]. Every committed guess is
//! compared attribute by attribute against the target, and the target's
//! portrait is revealed a little further until the guess is correct.
//!
//! # Architecture
//!
//! - **Title**: closed, ordered title vocabulary with a total rank lookup
//! - **Roster**: validated, immutable list of candidate entries
//! - **Comparator**: pure per-attribute feedback for one guess
//! - **Round**: typestate engine (`Round<Guessing>` / `Round<Solved>`)
//! - **GameState**: serializable snapshot the presentation layer holds
//!
//! # Example
//!
//! ```
//! use chessguess_core::{GameState, Roster};
//! use rand::{SeedableRng, rngs::SmallRng};
//!
//! let roster = Roster::builtin().expect("built-in roster is valid");
//! let mut rng = SmallRng::seed_from_u64(7);
//!
//! let state = GameState::start(&roster, &mut rng);
//! let guess = roster.get("Magnus Carlsen");
//! let state = state.commit_guess(guess);
//! assert_eq!(state.history().len(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod compare;
mod contracts;
mod entry;
mod error;
mod invariants;
mod reveal;
mod roster;
mod state;
mod title;
mod typestate;

pub use compare::{ComparisonResult, Direction, NationalityMatch, compare};
pub use contracts::{Contract, GuessContract, GuessRejected};
pub use entry::{Entry, Nationality};
pub use error::{RosterError, RosterErrorKind};
pub use invariants::{
    GameStateInvariants, Invariant, InvariantSet, InvariantViolation, RevealBoundedInvariant,
    RevealTracksHistoryInvariant, WinMatchesHistoryInvariant,
};
pub use reveal::{BLUR_STEP, MAX_BLUR, RevealLevel};
pub use roster::Roster;
pub use state::{GameState, GameStatus};
pub use title::{Title, rank};
pub use typestate::{GuessRecord, Guessing, Round, RoundTransition, Solved};
