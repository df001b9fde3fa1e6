//! Word lists and secret word selection
//!
//! Provides the embedded dictionary, the candidate filter and the [`WordSource`]
//! abstraction the game draws its secret word from.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::{GameState, SecretWord};
use crate::error::{Error, Result};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Shortest secret word drawn from a list
pub const MIN_WORD_LEN: usize = 5;

/// Longest secret word drawn from a list
pub const MAX_WORD_LEN: usize = 12;

/// Anything that can supply one eligible secret word
pub trait WordSource {
    fn pick_word(&self) -> SecretWord;

    /// Start a fresh game with a word from this source
    fn new_game(&self) -> GameState {
        GameState::new(self.pick_word())
    }
}

/// Always hands out the same word
impl WordSource for SecretWord {
    fn pick_word(&self) -> SecretWord {
        self.clone()
    }
}

/// Non-empty pool of candidates, sampled uniformly
#[derive(Debug, Clone)]
pub struct WordPool {
    candidates: Vec<SecretWord>,
}

impl WordPool {
    /// Create a pool from already-filtered candidates
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyWordPool` if there are no candidates.
    pub fn new(candidates: Vec<SecretWord>) -> Result<Self> {
        if candidates.is_empty() {
            return Err(Error::EmptyWordPool {
                min: MIN_WORD_LEN,
                max: MAX_WORD_LEN,
            });
        }
        Ok(Self { candidates })
    }

    /// Pool built from the embedded dictionary
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyWordPool` if the embedded list has no candidates.
    pub fn embedded() -> Result<Self> {
        Self::new(loader::words_from_slice(WORDS))
    }

    /// Pool built from a word list file
    ///
    /// # Errors
    ///
    /// Returns `Error::WordList` if the file cannot be read, or
    /// `Error::EmptyWordPool` if none of its lines qualify.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        Self::new(loader::load_from_file(path)?)
    }

    #[must_use]
    pub fn candidates(&self) -> &[SecretWord] {
        &self.candidates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Always false, since construction rejects empty pools
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Pick a candidate with the given generator
    pub fn pick_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &SecretWord {
        // Non-empty by construction
        self.candidates
            .choose(rng)
            .unwrap_or_else(|| unreachable!("word pool is never empty"))
    }
}

impl WordSource for WordPool {
    fn pick_word(&self) -> SecretWord {
        self.pick_with(&mut rand::rng()).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_pool_only_holds_eligible_words() {
        let pool = WordPool::embedded().unwrap();
        assert!(!pool.is_empty());
        assert!(pool.len() < WORDS_COUNT, "short and long entries are filtered");

        for word in pool.candidates() {
            assert!(
                (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.len()),
                "{word} has the wrong length"
            );
            assert!(
                word.text().chars().all(|c| c.is_ascii_uppercase()),
                "{word} is not all uppercase letters"
            );
        }
    }

    #[test]
    fn empty_pool_is_an_error() {
        assert!(matches!(
            WordPool::new(Vec::new()),
            Err(Error::EmptyWordPool { min: 5, max: 12 })
        ));
        assert!(matches!(
            WordPool::new(loader::words_from_slice(&["cat", "dog", "tree"])),
            Err(Error::EmptyWordPool { .. })
        ));
    }

    #[test]
    fn empty_file_is_an_empty_pool() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(matches!(
            WordPool::from_file(file.path()),
            Err(Error::EmptyWordPool { .. })
        ));
    }

    #[test]
    fn pick_is_always_a_candidate() {
        let pool = WordPool::new(loader::words_from_slice(&["apple", "lantern", "wizard"])).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let word = pool.pick_with(&mut rng);
            assert!(pool.candidates().contains(word));
        }
    }

    #[test]
    fn pick_eventually_covers_every_candidate() {
        let pool = WordPool::new(loader::words_from_slice(&["apple", "lantern", "wizard"])).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(pool.pick_with(&mut rng).text().to_string());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn new_games_start_hidden() {
        let pool = WordPool::embedded().unwrap();
        for _ in 0..20 {
            let game = pool.new_game();
            assert_eq!(game.incorrect_guesses(), 0);
            assert!(game.guessed_letters().is_empty());
            assert_eq!(game.word_state().len(), game.secret_word().len());
            assert!((MIN_WORD_LEN..=MAX_WORD_LEN).contains(&game.secret_word().len()));
        }
    }

    #[test]
    fn fixed_word_source() {
        let word = SecretWord::new("apple").unwrap();
        assert_eq!(word.pick_word(), word);
        assert_eq!(word.new_game().secret_word().text(), "APPLE");
    }
}
