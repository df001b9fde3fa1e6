//! Formatting utilities for terminal output

use crate::core::{GameState, Letter, PLACEHOLDER};

/// Which parts of the hanged figure are drawn
///
/// Each incorrect guess adds one part, in the order the fields are declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)] // One flag per body part
pub struct Gallows {
    pub head: bool,
    pub left_arm: bool,
    pub torso: bool,
    pub right_arm: bool,
    pub left_leg: bool,
    pub right_leg: bool,
}

impl Gallows {
    /// Figure for a given number of incorrect guesses
    ///
    /// Counts above six draw the full figure.
    #[must_use]
    pub const fn from_incorrect(count: u8) -> Self {
        Self {
            head: count > 0,
            left_arm: count > 1,
            torso: count > 2,
            right_arm: count > 3,
            left_leg: count > 4,
            right_leg: count > 5,
        }
    }

    /// ASCII art lines, without trailing newlines
    #[must_use]
    pub fn lines(self) -> Vec<String> {
        let part = |shown: bool, c: char| if shown { c } else { ' ' };

        vec![
            " ______".to_string(),
            "|      |".to_string(),
            format!("|      {}", part(self.head, 'o')),
            format!(
                "|     {}{}{}",
                part(self.left_arm, '/'),
                part(self.torso, '|'),
                part(self.right_arm, '\\')
            ),
            format!(
                "|     {} {}",
                part(self.left_leg, '/'),
                part(self.right_leg, '\\')
            ),
            "|".to_string(),
            "-------".to_string(),
        ]
    }
}

/// Word state with spaces between slots, e.g. `A P P _ E`
#[must_use]
pub fn format_word_state(slots: &[Option<Letter>]) -> String {
    slots
        .iter()
        .map(|slot| slot.map_or(PLACEHOLDER, Letter::as_char).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Guessed letters in the order they were tried, e.g. `A, Z, P`
#[must_use]
pub fn format_guessed_letters(letters: &[Letter]) -> String {
    letters
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Short status line with guesses left
#[must_use]
pub fn remaining_summary(game: &GameState) -> String {
    match game.remaining_guesses() {
        1 => "1 incorrect guess left".to_string(),
        n => format!("{n} incorrect guesses left"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SecretWord;

    fn letters(s: &str) -> Vec<Letter> {
        s.chars().filter_map(Letter::from_char).collect()
    }

    #[test]
    fn gallows_empty_at_zero() {
        assert_eq!(Gallows::from_incorrect(0), Gallows::default());
    }

    #[test]
    fn gallows_parts_added_in_order() {
        let g = Gallows::from_incorrect(3);
        assert!(g.head && g.left_arm && g.torso);
        assert!(!g.right_arm && !g.left_leg && !g.right_leg);
    }

    #[test]
    fn gallows_full_at_six() {
        let g = Gallows::from_incorrect(6);
        assert!(g.head && g.left_arm && g.torso && g.right_arm && g.left_leg && g.right_leg);
        assert_eq!(Gallows::from_incorrect(9), g);
    }

    #[test]
    fn gallows_lines_draw_parts() {
        let empty = Gallows::from_incorrect(0).lines();
        assert_eq!(empty[2], format!("|{}", " ".repeat(7)));
        assert_eq!(empty[3], format!("|{}", " ".repeat(8)));

        let full = Gallows::from_incorrect(6).lines();
        assert_eq!(full[2], "|      o");
        assert_eq!(full[3], "|     /|\\");
        assert_eq!(full[4], "|     / \\");
    }

    #[test]
    fn word_state_formatting() {
        let mut game = GameState::new(SecretWord::new("apple").unwrap());
        game.apply_guess("p");
        assert_eq!(format_word_state(game.word_state()), "_ P P _ _");
    }

    #[test]
    fn guessed_letters_keep_insertion_order() {
        assert_eq!(format_guessed_letters(&letters("ZAP")), "Z, A, P");
        assert_eq!(format_guessed_letters(&[]), "");
    }

    #[test]
    fn remaining_summary_pluralizes() {
        let mut game = GameState::new(SecretWord::new("abc").unwrap());
        assert_eq!(remaining_summary(&game), "6 incorrect guesses left");
        for token in ["x", "y", "z", "q", "w"] {
            game.apply_guess(token);
        }
        assert_eq!(remaining_summary(&game), "1 incorrect guess left");
    }
}
