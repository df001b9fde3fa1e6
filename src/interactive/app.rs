//! TUI application state and logic

use crate::core::{GameState, GameStatus, GuessOutcome};
use crate::error::Error;
use crate::persistence::SaveStore;
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Input box capacity
const MAX_INPUT_LEN: usize = 8;

/// Application state
pub struct App<'a, S: WordSource + ?Sized, P: SaveStore + ?Sized> {
    pub source: &'a S,
    pub store: &'a P,
    pub game: Option<GameState>,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Choosing between a new game and a saved one
    Menu,
    Guessing,
    /// Game over; waiting for new game or quit
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a, S: WordSource + ?Sized, P: SaveStore + ?Sized> App<'a, S, P> {
    #[must_use]
    pub fn new(source: &'a S, store: &'a P) -> Self {
        let mut app = Self {
            source,
            store,
            game: None,
            input_mode: InputMode::Menu,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message(
            "Welcome to Hangman! Six wrong guesses and you hang.",
            MessageStyle::Info,
        );
        app.add_message(
            "Press 1 for a new game or 2 to load a saved game.",
            MessageStyle::Info,
        );
        app
    }

    pub fn new_game(&mut self) {
        let game = self.source.new_game();
        tracing::info!(letters = game.secret_word().len(), "started new game");

        self.add_message(
            &format!("New game! The word has {} letters.", game.secret_word().len()),
            MessageStyle::Info,
        );
        self.start(game);
    }

    pub fn load_game(&mut self) {
        match self.store.load() {
            Ok(Some(game)) => {
                self.add_message("Saved game loaded.", MessageStyle::Success);
                self.start(game);
            }
            Ok(None) => self.add_message(
                "There is no saved game to load. Press 1 for a new game.",
                MessageStyle::Error,
            ),
            Err(Error::MalformedSnapshot(e)) => {
                self.add_message(
                    &format!("The saved game could not be loaded: {e}"),
                    MessageStyle::Error,
                );
            }
            Err(e) => {
                tracing::error!(error = %e, "load failed");
                self.add_message(&format!("Load failed: {e}"), MessageStyle::Error);
            }
        }
    }

    fn start(&mut self, game: GameState) {
        self.game = Some(game);
        self.input_buffer.clear();
        self.input_mode = InputMode::Guessing;
        // A loaded game may already be over; it was not played this session
        self.check_finished(false);
    }

    /// Feed the typed token to the game
    pub fn submit_input(&mut self) {
        let token = std::mem::take(&mut self.input_buffer);
        let Some(game) = self.game.as_mut() else {
            return;
        };

        let token = token.trim();
        match game.apply_guess(token) {
            GuessOutcome::Hit => {
                self.add_message(&format!("Yes! {token} is in the word."), MessageStyle::Success);
            }
            GuessOutcome::Miss => {
                self.add_message(&format!("No {token} in the word."), MessageStyle::Error);
            }
            GuessOutcome::SaveRequested => self.save_game(),
            GuessOutcome::Ignored => {}
        }

        self.check_finished(true);
    }

    pub fn save_game(&mut self) {
        let Some(game) = self.game.as_ref() else {
            return;
        };
        match self.store.save(game) {
            Ok(()) => self.add_message("Game saved. Keep guessing!", MessageStyle::Success),
            Err(e) => {
                tracing::error!(error = %e, "save failed");
                self.add_message(&format!("Could not save the game: {e}"), MessageStyle::Error);
            }
        }
    }

    fn check_finished(&mut self, record_stats: bool) {
        let Some(game) = self.game.as_ref() else {
            return;
        };

        match game.status() {
            GameStatus::InProgress => {}
            GameStatus::Won => {
                if record_stats {
                    self.stats.total_games += 1;
                    self.stats.games_won += 1;
                }
                self.input_mode = InputMode::Finished;
                self.add_message(
                    "You've guessed the secret word and avoided death. For now...",
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
            GameStatus::Lost => {
                let word = game.secret_word().text().to_string();
                if record_stats {
                    self.stats.total_games += 1;
                }
                self.input_mode = InputMode::Finished;
                self.add_message(
                    &format!("You're out of guesses. The word was {word}."),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
        }
    }

    /// Add a typed character to the input box
    pub fn push_char(&mut self, c: char) {
        if c.is_ascii_alphabetic() && self.input_buffer.len() < MAX_INPUT_LEN {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Route one key press to the current mode
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Menu => match code {
                KeyCode::Char('1') => self.new_game(),
                KeyCode::Char('2') => self.load_game(),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            InputMode::Guessing => match code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.push_char(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_input(),
                _ => {}
            },
            InputMode::Finished => match code {
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S, P>(app: App<'_, S, P>) -> Result<()>
where
    S: WordSource + ?Sized,
    P: SaveStore + ?Sized,
{
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, S, P>(terminal: &mut Terminal<B>, mut app: App<'_, S, P>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: WordSource + ?Sized,
    P: SaveStore + ?Sized,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
