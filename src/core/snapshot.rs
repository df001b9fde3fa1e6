//! Save/resume document
//!
//! A snapshot is the JSON form of a [`GameState`]:
//!
//! ```json
//! {
//!   "secret_word": "APPLE",
//!   "incorrect_guesses": 1,
//!   "guessed_letters": ["A", "Z"],
//!   "word_state": ["A", "_", "_", "_", "_"]
//! }
//! ```
//!
//! Loading never trusts the document: every field is checked against the others
//! before a `GameState` is rebuilt from it.

use super::game::{MAX_INCORRECT_GUESSES, PLACEHOLDER};
use super::{GameState, Letter, SecretWord, WordError};
use serde::{Deserialize, Serialize};

/// Serialized form of a game, field for field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Snapshot {
    pub secret_word: String,
    pub incorrect_guesses: u8,
    pub guessed_letters: Vec<String>,
    pub word_state: Vec<String>,
}

/// Reasons a snapshot is rejected
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("unreadable document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid secret word: {0}")]
    SecretWord(#[from] WordError),

    #[error("incorrect guess count {0} exceeds the maximum of 6")]
    TooManyIncorrectGuesses(u8),

    #[error("guessed letter {0:?} is not a single letter")]
    InvalidGuessedLetter(String),

    #[error("letter {0} is listed as guessed more than once")]
    DuplicateGuessedLetter(Letter),

    #[error("word state has {actual} slots but the secret word has {expected} letters")]
    WordStateLength { expected: usize, actual: usize },

    #[error("word state entry {0:?} is neither a letter nor \"_\"")]
    InvalidWordStateEntry(String),

    #[error("word state slot {position} does not match the guessed letters")]
    WordStateMismatch { position: usize },

    #[error("incorrect guess count is {recorded} but the guessed letters contain {actual} misses")]
    IncorrectGuessMismatch { recorded: u8, actual: usize },
}

impl GameState {
    /// Capture the four persisted fields
    #[must_use]
    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            secret_word: self.secret_word().text().to_string(),
            incorrect_guesses: self.incorrect_guesses(),
            guessed_letters: self
                .guessed_letters()
                .iter()
                .map(ToString::to_string)
                .collect(),
            word_state: self
                .word_state()
                .iter()
                .map(|slot| slot.map_or(PLACEHOLDER, Letter::as_char).to_string())
                .collect(),
        }
    }

    /// Rebuild a game from a snapshot
    ///
    /// # Errors
    /// Returns `SnapshotError` if a field is malformed or the fields contradict
    /// each other (revealed letters that were never guessed, a miss count that
    /// does not match the guessed letters, and so on).
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self, SnapshotError> {
        let secret_word = SecretWord::new(&snapshot.secret_word)?;

        if snapshot.incorrect_guesses > MAX_INCORRECT_GUESSES {
            return Err(SnapshotError::TooManyIncorrectGuesses(
                snapshot.incorrect_guesses,
            ));
        }

        let mut guessed_letters = Vec::with_capacity(snapshot.guessed_letters.len());
        for entry in snapshot.guessed_letters {
            let letter =
                Letter::parse(&entry).ok_or(SnapshotError::InvalidGuessedLetter(entry))?;
            if guessed_letters.contains(&letter) {
                return Err(SnapshotError::DuplicateGuessedLetter(letter));
            }
            guessed_letters.push(letter);
        }

        if snapshot.word_state.len() != secret_word.len() {
            return Err(SnapshotError::WordStateLength {
                expected: secret_word.len(),
                actual: snapshot.word_state.len(),
            });
        }

        let mut word_state = Vec::with_capacity(secret_word.len());
        for (position, entry) in snapshot.word_state.into_iter().enumerate() {
            let slot = parse_slot(entry)?;
            let secret = secret_word.letters()[position];
            let expected = guessed_letters.contains(&secret).then_some(secret);
            if slot != expected {
                return Err(SnapshotError::WordStateMismatch { position });
            }
            word_state.push(slot);
        }

        let misses = guessed_letters
            .iter()
            .filter(|&&letter| !secret_word.contains(letter))
            .count();
        if misses != usize::from(snapshot.incorrect_guesses) {
            return Err(SnapshotError::IncorrectGuessMismatch {
                recorded: snapshot.incorrect_guesses,
                actual: misses,
            });
        }

        Ok(Self::from_parts(
            secret_word,
            snapshot.incorrect_guesses,
            guessed_letters,
            word_state,
        ))
    }

    /// Serialize to a pretty-printed JSON document
    ///
    /// # Errors
    /// Returns the underlying `serde_json` error; with plain strings and integers
    /// this does not happen in practice.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.to_snapshot())
    }

    /// Parse and validate a JSON document produced by [`GameState::to_json`]
    ///
    /// # Errors
    /// Returns `SnapshotError` if the document does not parse or fails validation.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GameState, SecretWord};
    ///
    /// let mut game = GameState::new(SecretWord::new("apple").unwrap());
    /// game.apply_guess("p");
    ///
    /// let json = game.to_json().unwrap();
    /// assert_eq!(GameState::from_json(&json).unwrap(), game);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Self::from_json_slice(json.as_bytes())
    }

    /// Parse and validate a JSON document from raw bytes
    ///
    /// Bytes that are not valid UTF-8 are reported as a parse error.
    ///
    /// # Errors
    /// Returns `SnapshotError` if the document does not parse or fails validation.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_slice(bytes)?;
        Self::from_snapshot(snapshot)
    }
}

fn parse_slot(entry: String) -> Result<Option<Letter>, SnapshotError> {
    let mut chars = entry.chars();
    match (chars.next(), chars.next()) {
        (Some(PLACEHOLDER), None) => Ok(None),
        // Revealed letters are always stored uppercase
        (Some(c), None) if c.is_ascii_uppercase() => Ok(Letter::from_char(c)),
        _ => Err(SnapshotError::InvalidWordStateEntry(entry)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(word: &str, guesses: &[&str]) -> GameState {
        let mut game = GameState::new(SecretWord::new(word).unwrap());
        for guess in guesses {
            game.apply_guess(guess);
        }
        game
    }

    fn snapshot(json: serde_json::Value) -> Result<GameState, SnapshotError> {
        GameState::from_json(&json.to_string())
    }

    #[test]
    fn snapshot_has_expected_fields() {
        let game = game("apple", &["a", "z", "p"]);
        let snapshot = game.to_snapshot();

        assert_eq!(snapshot.secret_word, "APPLE");
        assert_eq!(snapshot.incorrect_guesses, 1);
        assert_eq!(snapshot.guessed_letters, ["A", "Z", "P"]);
        assert_eq!(snapshot.word_state, ["A", "P", "P", "_", "_"]);
    }

    #[test]
    fn json_document_shape() {
        let game = game("apple", &["e"]);
        let value: serde_json::Value = serde_json::from_str(&game.to_json().unwrap()).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "secret_word": "APPLE",
                "incorrect_guesses": 0,
                "guessed_letters": ["E"],
                "word_state": ["_", "_", "_", "_", "E"],
            })
        );
    }

    #[test]
    fn round_trip_reachable_states() {
        let cases: &[(&str, &[&str])] = &[
            ("apple", &[]),
            ("apple", &["a", "p", "z", "e"]),
            ("apple", &["a", "p", "l", "e"]),
            ("abc", &["x", "y", "z", "q", "w", "r"]),
            ("mississippi", &["s", "t", "i", "k"]),
        ];

        for (word, guesses) in cases {
            let original = game(word, guesses);
            let restored = GameState::from_json(&original.to_json().unwrap()).unwrap();
            assert_eq!(restored, original, "{word} {guesses:?}");
            assert_eq!(restored.status(), original.status());
        }
    }

    #[test]
    fn restored_game_keeps_playing() {
        let saved = game("apple", &["a", "p", "z"]);
        let mut restored = GameState::from_json(&saved.to_json().unwrap()).unwrap();

        assert_eq!(restored.apply_guess("a"), crate::core::GuessOutcome::Ignored);
        assert_eq!(restored.apply_guess("l"), crate::core::GuessOutcome::Hit);
        assert_eq!(restored.apply_guess("e"), crate::core::GuessOutcome::Hit);
        assert!(restored.is_won());
    }

    #[test]
    fn accepts_handwritten_snapshot() {
        let restored = snapshot(serde_json::json!({
            "secret_word": "APPLE",
            "incorrect_guesses": 1,
            "guessed_letters": ["P", "Q"],
            "word_state": ["_", "P", "P", "_", "_"],
        }))
        .unwrap();

        assert_eq!(restored, game("apple", &["p", "q"]));
    }

    #[test]
    fn rejects_unparseable_documents() {
        assert!(matches!(
            GameState::from_json("not json"),
            Err(SnapshotError::Parse(_))
        ));
        assert!(matches!(
            snapshot(serde_json::json!({ "secret_word": "APPLE" })),
            Err(SnapshotError::Parse(_))
        ));
        assert!(matches!(
            snapshot(serde_json::json!({
                "secret_word": "APPLE",
                "incorrect_guesses": -1,
                "guessed_letters": [],
                "word_state": ["_", "_", "_", "_", "_"],
            })),
            Err(SnapshotError::Parse(_))
        ));
    }

    #[test]
    fn rejects_bad_secret_word() {
        let result = snapshot(serde_json::json!({
            "secret_word": "AP PLE",
            "incorrect_guesses": 0,
            "guessed_letters": [],
            "word_state": ["_", "_", "_", "_", "_", "_"],
        }));
        assert!(matches!(result, Err(SnapshotError::SecretWord(_))));
    }

    #[test]
    fn rejects_too_many_incorrect_guesses() {
        let result = snapshot(serde_json::json!({
            "secret_word": "AB",
            "incorrect_guesses": 7,
            "guessed_letters": ["C", "D", "E", "F", "G", "H", "I"],
            "word_state": ["_", "_"],
        }));
        assert!(matches!(
            result,
            Err(SnapshotError::TooManyIncorrectGuesses(7))
        ));
    }

    #[test]
    fn rejects_bad_guessed_letters() {
        let multi = snapshot(serde_json::json!({
            "secret_word": "APPLE",
            "incorrect_guesses": 0,
            "guessed_letters": ["AP"],
            "word_state": ["_", "_", "_", "_", "_"],
        }));
        assert!(matches!(multi, Err(SnapshotError::InvalidGuessedLetter(s)) if s == "AP"));

        let duplicate = snapshot(serde_json::json!({
            "secret_word": "APPLE",
            "incorrect_guesses": 2,
            "guessed_letters": ["Z", "Z"],
            "word_state": ["_", "_", "_", "_", "_"],
        }));
        assert!(matches!(
            duplicate,
            Err(SnapshotError::DuplicateGuessedLetter(_))
        ));
    }

    #[test]
    fn rejects_word_state_length_mismatch() {
        let result = snapshot(serde_json::json!({
            "secret_word": "APPLE",
            "incorrect_guesses": 0,
            "guessed_letters": [],
            "word_state": ["_", "_", "_"],
        }));
        assert!(matches!(
            result,
            Err(SnapshotError::WordStateLength {
                expected: 5,
                actual: 3
            })
        ));
    }

    #[test]
    fn rejects_bad_word_state_entries() {
        let result = snapshot(serde_json::json!({
            "secret_word": "APPLE",
            "incorrect_guesses": 0,
            "guessed_letters": [],
            "word_state": ["_", "_", "*", "_", "_"],
        }));
        assert!(matches!(
            result,
            Err(SnapshotError::InvalidWordStateEntry(s)) if s == "*"
        ));
    }

    #[test]
    fn rejects_word_state_that_contradicts_guesses() {
        // Revealed but never guessed
        let revealed = snapshot(serde_json::json!({
            "secret_word": "APPLE",
            "incorrect_guesses": 0,
            "guessed_letters": [],
            "word_state": ["A", "_", "_", "_", "_"],
        }));
        assert!(matches!(
            revealed,
            Err(SnapshotError::WordStateMismatch { position: 0 })
        ));

        // Guessed but only one of two occurrences revealed
        let partial = snapshot(serde_json::json!({
            "secret_word": "APPLE",
            "incorrect_guesses": 0,
            "guessed_letters": ["P"],
            "word_state": ["_", "P", "_", "_", "_"],
        }));
        assert!(matches!(
            partial,
            Err(SnapshotError::WordStateMismatch { position: 2 })
        ));

        // Wrong letter in the slot
        let wrong = snapshot(serde_json::json!({
            "secret_word": "APPLE",
            "incorrect_guesses": 0,
            "guessed_letters": ["A"],
            "word_state": ["E", "_", "_", "_", "_"],
        }));
        assert!(matches!(
            wrong,
            Err(SnapshotError::WordStateMismatch { position: 0 })
        ));
    }

    #[test]
    fn rejects_incorrect_guess_count_mismatch() {
        let result = snapshot(serde_json::json!({
            "secret_word": "APPLE",
            "incorrect_guesses": 3,
            "guessed_letters": ["Z"],
            "word_state": ["_", "_", "_", "_", "_"],
        }));
        assert!(matches!(
            result,
            Err(SnapshotError::IncorrectGuessMismatch {
                recorded: 3,
                actual: 1
            })
        ));
    }

    #[test]
    fn rejects_unknown_fields() {
        let result = snapshot(serde_json::json!({
            "secret_word": "APPLE",
            "incorrect_guesses": 0,
            "guessed_letters": [],
            "word_state": ["_", "_", "_", "_", "_"],
            "cheat": true,
        }));
        assert!(matches!(result, Err(SnapshotError::Parse(_))));
    }
}
