//! Core domain types for hangman
//!
//! This module contains the game state and its save format. Nothing here touches
//! the terminal, the filesystem or a random number generator.

mod game;
mod letter;
mod snapshot;
mod word;

pub use game::{
    GameState, GameStatus, GuessOutcome, MAX_INCORRECT_GUESSES, PLACEHOLDER, SAVE_COMMAND,
};
pub use letter::Letter;
pub use snapshot::{Snapshot, SnapshotError};
pub use word::{SecretWord, WordError};
