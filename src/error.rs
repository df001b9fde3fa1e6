//! Crate-level error type

use crate::core::SnapshotError;
use std::io;
use std::path::PathBuf;

/// Errors surfaced to the caller when a game cannot be started or restored
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No entry in the word list passed the length filter
    #[error("no word in the list is between {min} and {max} letters long")]
    EmptyWordPool { min: usize, max: usize },

    /// The word list file could not be read
    #[error("failed to read word list {}: {source}", .path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A save file exists but does not hold a valid game
    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(#[from] SnapshotError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
