//! Simple line-based game mode
//!
//! Plain prompts on stdin/stdout, without the TUI.

use crate::core::{GameState, GameStatus, GuessOutcome};
use crate::error::Error;
use crate::output::{print_board, print_instructions, print_menu, print_outcome};
use crate::persistence::SaveStore;
use crate::wordlists::WordSource;
use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Run the simple interactive mode on the process's stdin and stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the save
/// file cannot be read.
pub fn run_simple<S, P>(source: &S, store: &P) -> Result<()>
where
    S: WordSource + ?Sized,
    P: SaveStore + ?Sized,
{
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    run_session(&mut input, &mut output, source, store)?;
    Ok(())
}

/// Play one game over arbitrary input and output streams
///
/// Returns the final game state, or `None` if input ended before a game was
/// chosen. Running out of input mid-game ends the session with the game as it
/// stands.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the save
/// file cannot be read.
pub fn run_session<R, W, S, P>(
    input: &mut R,
    output: &mut W,
    source: &S,
    store: &P,
) -> Result<Option<GameState>>
where
    R: BufRead,
    W: Write,
    S: WordSource + ?Sized,
    P: SaveStore + ?Sized,
{
    print_instructions(output)?;

    let Some(mut game) = choose_game(input, output, source, store)? else {
        return Ok(None);
    };
    print_board(output, &game)?;

    while game.status() == GameStatus::InProgress {
        write!(
            output,
            "\nGuess a letter (or type \"save\" to save the game): "
        )?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            writeln!(output)?;
            return Ok(Some(game));
        };

        if game.apply_guess(line.trim()) == GuessOutcome::SaveRequested {
            match store.save(&game) {
                Ok(()) => writeln!(output, "Game saved. Keep guessing!")?,
                Err(e) => {
                    tracing::error!(error = %e, "save failed");
                    writeln!(output, "Could not save the game: {e}")?;
                }
            }
        }

        print_board(output, &game)?;
    }

    print_outcome(output, &game)?;
    writeln!(output)?;
    Ok(Some(game))
}

/// Show the menu until the player starts a new game or loads a valid save
fn choose_game<R, W, S, P>(
    input: &mut R,
    output: &mut W,
    source: &S,
    store: &P,
) -> Result<Option<GameState>>
where
    R: BufRead,
    W: Write,
    S: WordSource + ?Sized,
    P: SaveStore + ?Sized,
{
    loop {
        print_menu(output)?;
        let Some(choice) = read_line(input)? else {
            writeln!(output)?;
            return Ok(None);
        };

        match choice.trim() {
            "1" => {
                let game = source.new_game();
                tracing::info!(letters = game.secret_word().len(), "started new game");
                return Ok(Some(game));
            }
            "2" => match store.load() {
                Ok(Some(game)) => return Ok(Some(game)),
                Ok(None) => {
                    writeln!(output)?;
                    writeln!(
                        output,
                        "There is not a saved game to load. Please select option 1 for a new game."
                    )?;
                }
                Err(Error::MalformedSnapshot(e)) => {
                    writeln!(output)?;
                    writeln!(output, "The saved game could not be loaded: {e}")?;
                    writeln!(output, "Please select option 1 for a new game.")?;
                }
                Err(e) => return Err(e.into()),
            },
            _ => {}
        }
    }
}

/// Read one line, or `None` at end of input
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
