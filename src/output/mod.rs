//! Terminal output formatting
//!
//! Display utilities for the game board and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_instructions, print_menu, print_outcome};
pub use formatters::{Gallows, format_guessed_letters, format_word_state};
