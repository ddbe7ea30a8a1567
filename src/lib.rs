// Library interface for hangman-arcade
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod game_state;
pub mod hangman;
pub mod logging;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use error::GameError;
pub use game_state::{Arcade, Game, GameInterface, GameKind, arcade_loop, play_hangman};
pub use hangman::{GameSnapshot, GuessOutcome, Hangman, HintOutcome, Round, RoundStatus};
pub use wordbank::{EMBEDDED_WORDBANK, WordBank};
