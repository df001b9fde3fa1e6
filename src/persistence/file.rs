//! File-based `SaveStore` implementation.

use super::SaveStore;
use crate::core::GameState;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Keeps the snapshot in one JSON file
///
/// Writes go to a temp file first and are renamed into place, so an interrupted
/// save never leaves a truncated document behind.
#[derive(Debug, Clone)]
pub struct FileSaveStore {
    path: PathBuf,
}

impl FileSaveStore {
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SaveStore for FileSaveStore {
    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn save(&self, game: &GameState) -> Result<()> {
        let temp_path = self.path.with_extension("json.tmp");

        let json = game.to_json().map_err(std::io::Error::from)?;
        let written = fs::write(&temp_path, json).and_then(|()| fs::rename(&temp_path, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        tracing::info!(path = %self.path.display(), "saved game");
        Ok(())
    }

    fn load(&self) -> Result<Option<GameState>> {
        if !self.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&self.path)?;
        let game = GameState::from_json_slice(&bytes).map_err(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "rejected save file");
            Error::MalformedSnapshot(e)
        })?;

        tracing::info!(
            path = %self.path.display(),
            guessed = game.guessed_letters().len(),
            "loaded game"
        );
        Ok(Some(game))
    }
}
