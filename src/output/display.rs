//! Display functions for the line-based game

use super::formatters::{Gallows, format_guessed_letters, format_word_state, remaining_summary};
use crate::core::{GameState, GameStatus};
use colored::Colorize;
use std::io::{self, Write};

/// Print the welcome banner and rules
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_instructions(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "Welcome to Hangman!".bright_cyan().bold())?;
    writeln!(out, "{}", "─".repeat(40).cyan())?;
    writeln!(out, "You're headed to the gallows, but you can still change")?;
    writeln!(out, "your fate by guessing the secret word one letter at a time.")?;
    writeln!(out, "Each incorrect guess brings you a step closer to doom.")?;
    writeln!(out, "Six incorrect guesses and you hang!")?;
    writeln!(out)
}

/// Print the start-of-game options
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Options:")?;
    writeln!(out, " 1 - New game")?;
    writeln!(out, " 2 - Load saved game")?;
    write!(out, "What would you like to do: ")?;
    out.flush()
}

/// Print the gallows, the word and the guesses so far
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_board(out: &mut impl Write, game: &GameState) -> io::Result<()> {
    writeln!(out)?;
    for line in Gallows::from_incorrect(game.incorrect_guesses()).lines() {
        writeln!(out, "    {line}")?;
    }

    writeln!(
        out,
        "\n    {}",
        format_word_state(game.word_state()).bright_white().bold()
    )?;
    writeln!(
        out,
        "\nGuessed letters: {}",
        format_guessed_letters(game.guessed_letters())
    )?;
    writeln!(out, "{}", remaining_summary(game).bright_black())
}

/// Print the end-of-game message, if the game has ended
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_outcome(out: &mut impl Write, game: &GameState) -> io::Result<()> {
    match game.status() {
        GameStatus::Won => {
            writeln!(out)?;
            writeln!(
                out,
                "{}",
                "You've guessed the secret word and avoided death. For now..."
                    .bright_green()
                    .bold()
            )
        }
        GameStatus::Lost => {
            writeln!(out)?;
            writeln!(
                out,
                "{}",
                "You're out of guesses. Time to hang!".bright_red().bold()
            )?;
            writeln!(out, "The word was {}", game.secret_word().text().bright_yellow())
        }
        GameStatus::InProgress => Ok(()),
    }
}
