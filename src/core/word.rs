//! Secret word representation
//!
//! A `SecretWord` stores the hidden word along with letter position indices so a
//! guess can reveal every occurrence in one lookup.

use super::Letter;
use rustc_hash::FxHashMap;
use std::fmt;

/// The word the player has to uncover
///
/// Always non-empty and made of uppercase ASCII letters. Length limits for words
/// drawn from a list are enforced by the word list layer, not here, so a restored
/// game keeps whatever word it was saved with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letters: Vec<Letter>,
    positions: FxHashMap<Letter, Vec<usize>>,
}

/// Error type for invalid secret words
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("word is empty")]
    Empty,

    #[error("word contains a non-letter character {0:?}")]
    InvalidCharacter(char),
}

impl SecretWord {
    /// Create a secret word, uppercasing the input
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains anything other than
    /// ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("apple").unwrap();
    /// assert_eq!(word.text(), "APPLE");
    ///
    /// assert!(SecretWord::new("don't").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let letters = text
            .chars()
            .map(|c| Letter::from_char(c).ok_or(WordError::InvalidCharacter(c)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut positions: FxHashMap<Letter, Vec<usize>> = FxHashMap::default();
        for (i, &letter) in letters.iter().enumerate() {
            positions.entry(letter).or_default().push(i);
        }

        Ok(Self {
            text: letters.iter().copied().map(Letter::as_char).collect(),
            letters,
            positions,
        })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: Letter) -> &[usize] {
        self.positions.get(&letter).map_or(&[], Vec::as_slice)
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
