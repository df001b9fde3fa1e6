//! A single guessable letter

use std::fmt;

/// An uppercase ASCII letter (A-Z)
///
/// Stored as its byte value. Construction normalizes lowercase input, so two
/// letters compare equal regardless of how the player typed them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Create a letter from a char, accepting either case
    ///
    /// Returns `None` for anything outside A-Z / a-z.
    #[inline]
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self((c as u8).to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// Parse a raw token that must be exactly one letter
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Letter;
    ///
    /// assert_eq!(Letter::parse("q").map(Letter::as_char), Some('Q'));
    /// assert!(Letter::parse("qq").is_none());
    /// assert!(Letter::parse("7").is_none());
    /// ```
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
