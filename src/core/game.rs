//! Game state and guess evaluation
//!
//! `GameState` owns everything that changes during a game. The only way to mutate
//! it is [`GameState::apply_guess`], so the reveal/miss invariants hold for every
//! value a caller can observe.

use super::{Letter, SecretWord};

/// Incorrect guesses allowed before the game is lost
pub const MAX_INCORRECT_GUESSES: u8 = 6;

/// Reserved token that asks the controller to save instead of guessing
pub const SAVE_COMMAND: &str = "SAVE";

/// Placeholder shown for letters that have not been revealed yet
pub const PLACEHOLDER: char = '_';

/// Result of feeding one raw token to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// New letter that occurs in the secret word
    Hit,
    /// New letter that does not occur in the secret word
    Miss,
    /// Malformed input, a repeated letter, or a guess after the game ended
    Ignored,
    /// The player typed the save command; nothing was changed
    SaveRequested,
}

/// Where the game stands after the latest guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// State of one hangman game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    secret_word: SecretWord,
    incorrect_guesses: u8,
    guessed_letters: Vec<Letter>,
    word_state: Vec<Option<Letter>>,
}

impl GameState {
    /// Start a fresh game for the given word
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GameState, SecretWord};
    ///
    /// let game = GameState::new(SecretWord::new("apple").unwrap());
    /// assert_eq!(game.incorrect_guesses(), 0);
    /// assert!(game.word_state().iter().all(Option::is_none));
    /// ```
    #[must_use]
    pub fn new(secret_word: SecretWord) -> Self {
        let word_state = vec![None; secret_word.len()];
        Self {
            secret_word,
            incorrect_guesses: 0,
            guessed_letters: Vec::new(),
            word_state,
        }
    }

    /// Assemble a state from parts that were already validated
    pub(super) fn from_parts(
        secret_word: SecretWord,
        incorrect_guesses: u8,
        guessed_letters: Vec<Letter>,
        word_state: Vec<Option<Letter>>,
    ) -> Self {
        Self {
            secret_word,
            incorrect_guesses,
            guessed_letters,
            word_state,
        }
    }

    /// Apply one raw token typed by the player
    ///
    /// The save command is recognized first (case-insensitive) and never mutates
    /// the state. Otherwise a single unguessed letter is evaluated while the game
    /// is in progress; everything else is `Ignored`.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GameState, GuessOutcome, SecretWord};
    ///
    /// let mut game = GameState::new(SecretWord::new("apple").unwrap());
    /// assert_eq!(game.apply_guess("p"), GuessOutcome::Hit);
    /// assert_eq!(game.apply_guess("P"), GuessOutcome::Ignored);
    /// assert_eq!(game.apply_guess("z"), GuessOutcome::Miss);
    /// assert_eq!(game.apply_guess("Save"), GuessOutcome::SaveRequested);
    /// ```
    pub fn apply_guess(&mut self, token: &str) -> GuessOutcome {
        if token.eq_ignore_ascii_case(SAVE_COMMAND) {
            return GuessOutcome::SaveRequested;
        }

        if self.status() != GameStatus::InProgress {
            return GuessOutcome::Ignored;
        }

        match Letter::parse(token) {
            Some(letter) if !self.has_guessed(letter) => self.guess_letter(letter),
            _ => GuessOutcome::Ignored,
        }
    }

    fn guess_letter(&mut self, letter: Letter) -> GuessOutcome {
        self.guessed_letters.push(letter);

        let positions = self.secret_word.positions_of(letter);
        if positions.is_empty() {
            self.incorrect_guesses += 1;
            tracing::debug!(%letter, incorrect = self.incorrect_guesses, "miss");
            return GuessOutcome::Miss;
        }

        for &i in positions {
            self.word_state[i] = Some(letter);
        }
        tracing::debug!(%letter, revealed = positions.len(), "hit");
        GuessOutcome::Hit
    }

    /// True once every position has been revealed
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.word_state.iter().all(Option::is_some)
    }

    /// True once the player has used up all incorrect guesses
    #[must_use]
    pub const fn is_lost(&self) -> bool {
        self.incorrect_guesses >= MAX_INCORRECT_GUESSES
    }

    /// Current status; a win is checked before a loss
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.is_won() {
            GameStatus::Won
        } else if self.is_lost() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    #[must_use]
    pub fn has_guessed(&self, letter: Letter) -> bool {
        self.guessed_letters.contains(&letter)
    }

    #[inline]
    #[must_use]
    pub const fn secret_word(&self) -> &SecretWord {
        &self.secret_word
    }

    #[inline]
    #[must_use]
    pub const fn incorrect_guesses(&self) -> u8 {
        self.incorrect_guesses
    }

    /// Incorrect guesses left before the game is lost
    #[inline]
    #[must_use]
    pub const fn remaining_guesses(&self) -> u8 {
        MAX_INCORRECT_GUESSES.saturating_sub(self.incorrect_guesses)
    }

    /// Guessed letters in the order they were tried
    #[inline]
    #[must_use]
    pub fn guessed_letters(&self) -> &[Letter] {
        &self.guessed_letters
    }

    /// One slot per position of the secret word, `None` while hidden
    #[inline]
    #[must_use]
    pub fn word_state(&self) -> &[Option<Letter>] {
        &self.word_state
    }
}
