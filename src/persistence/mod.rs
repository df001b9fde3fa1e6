//! Save/resume storage
//!
//! A game is persisted as a single snapshot document. The store only moves that
//! document in and out; validation lives with the snapshot itself.

mod file;

pub use file::FileSaveStore;

use crate::core::GameState;
use crate::error::Result;

/// Default location of the save file, relative to the working directory
pub const DEFAULT_SAVE_FILE: &str = "save.json";

/// Somewhere a single saved game can live
pub trait SaveStore {
    /// Whether a saved game is available to load
    fn exists(&self) -> bool;

    /// Persist the game, replacing any previous save
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    fn save(&self, game: &GameState) -> Result<()>;

    /// Load the saved game, or `None` if there is none
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedSnapshot` if the saved document is invalid, or an
    /// I/O error if it cannot be read.
    fn load(&self) -> Result<Option<GameState>>;
}
