//! TUI rendering with ratatui
//!
//! Visualizations for the hangman interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{GameState, MAX_INCORRECT_GUESSES};
use crate::output::{Gallows, format_guessed_letters, format_word_state};
use crate::persistence::SaveStore;
use crate::wordlists::WordSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S, P>(f: &mut Frame, app: &App<'_, S, P>)
where
    S: WordSource + ?Sized,
    P: SaveStore + ?Sized,
{
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Info
        ])
        .split(chunks[1]);

    match app.game.as_ref() {
        Some(game) if app.input_mode != InputMode::Menu => {
            render_board(f, game, main_chunks[0]);
        }
        _ => render_menu(f, main_chunks[0]),
    }
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_menu(f: &mut Frame, area: Rect) {
    let content = vec![
        Line::from("You're headed to the gallows!"),
        Line::from("Guess the secret word one letter at a time."),
        Line::from("Six incorrect guesses and you hang."),
        Line::from(""),
        Line::from(vec![
            Span::styled("  1", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw(" - New game"),
        ]),
        Line::from(vec![
            Span::styled("  2", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw(" - Load saved game"),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Options ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_board(f: &mut Frame, game: &GameState, area: Rect) {
    let figure_color = match game.remaining_guesses() {
        0..=1 => Color::Red,
        2..=3 => Color::Yellow,
        _ => Color::White,
    };

    let mut content: Vec<Line> = Gallows::from_incorrect(game.incorrect_guesses())
        .lines()
        .into_iter()
        .map(|line| Line::styled(format!("  {line}"), Style::default().fg(figure_color)))
        .collect();

    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        format!("  {}", format_word_state(game.word_state())),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Gallows ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_info_panel<S, P>(f: &mut Frame, app: &App<'_, S, P>, area: Rect)
where
    S: WordSource + ?Sized,
    P: SaveStore + ?Sized,
{
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Guesses gauge
            Constraint::Length(4), // Guessed letters
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_guesses_gauge(f, app.game.as_ref(), chunks[0]);
    render_guessed_letters(f, app.game.as_ref(), chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_guesses_gauge(f: &mut Frame, game: Option<&GameState>, area: Rect) {
    let used = game.map_or(0, GameState::incorrect_guesses);
    let percent = u16::from(used) * 100 / u16::from(MAX_INCORRECT_GUESSES);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Incorrect Guesses ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Red))
        .percent(percent.min(100))
        .label(format!("{used}/{MAX_INCORRECT_GUESSES}"));

    f.render_widget(gauge, area);
}

fn render_guessed_letters(f: &mut Frame, game: Option<&GameState>, area: Rect) {
    let content = game.map_or_else(String::new, |g| {
        format_guessed_letters(g.guessed_letters())
    });

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Guessed Letters ")
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_messages<S, P>(f: &mut Frame, app: &App<'_, S, P>, area: Rect)
where
    S: WordSource + ?Sized,
    P: SaveStore + ?Sized,
{
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<S, P>(f: &mut Frame, app: &App<'_, S, P>, area: Rect)
where
    S: WordSource + ?Sized,
    P: SaveStore + ?Sized,
{
    let (title, content, color) = match app.input_mode {
        InputMode::Menu => (" Press 1 or 2 ", "", Color::Cyan),
        InputMode::Guessing => (
            " Guess a letter (or type SAVE) | Enter to submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::Finished => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<S, P>(f: &mut Frame, app: &App<'_, S, P>, area: Rect)
where
    S: WordSource + ?Sized,
    P: SaveStore + ?Sized,
{
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let remaining = app
        .game
        .as_ref()
        .map_or(MAX_INCORRECT_GUESSES, GameState::remaining_guesses);
    let remaining_text = format!("Guesses left: {remaining}");
    f.render_widget(
        Paragraph::new(remaining_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.input_mode {
        InputMode::Menu => "1: New | 2: Load | q: Quit",
        InputMode::Guessing => "Enter: Submit | Esc: Quit",
        InputMode::Finished => "n: New Game | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
