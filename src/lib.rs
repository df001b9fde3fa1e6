//! Hangman
//!
//! A terminal hangman game with save and resume.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GameState, GuessOutcome, SecretWord};
//!
//! let mut game = GameState::new(SecretWord::new("apple").unwrap());
//! assert_eq!(game.apply_guess("p"), GuessOutcome::Hit);
//! assert_eq!(game.apply_guess("z"), GuessOutcome::Miss);
//!
//! // Save and resume
//! let json = game.to_json().unwrap();
//! assert_eq!(GameState::from_json(&json).unwrap(), game);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Word lists
pub mod wordlists;

// Save file storage
pub mod persistence;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::{Error, Result};
