//! Hangman - CLI
//!
//! Terminal hangman with a full-screen TUI and a plain line-based mode.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hangman::{
    commands::run_simple,
    interactive::{App, run_tui},
    persistence::{DEFAULT_SAVE_FILE, FileSaveStore},
    wordlists::WordPool,
};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the secret word one letter at a time before you hang",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Where saved games are written and loaded from
    #[arg(short = 's', long, global = true, default_value = DEFAULT_SAVE_FILE)]
    save_file: PathBuf,

    /// Log file used while the TUI owns the terminal
    #[arg(long, global = true, default_value = "hangman.log")]
    log_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (plain prompts, no TUI)
    Simple,
}

/// Load the word pool based on the -w flag
///
/// - "embedded": the dictionary compiled into the binary
/// - "<path>": load a custom wordlist from file
fn load_word_pool(wordlist: &str) -> Result<WordPool> {
    let pool = match wordlist {
        "embedded" => WordPool::embedded()?,
        path => WordPool::from_file(path)?,
    };
    tracing::debug!(candidates = pool.len(), "word pool ready");
    Ok(pool)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Log to stderr, for the plain line-based mode
fn init_stderr_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

/// Log to a file only; stderr would draw over the TUI
///
/// The returned guard flushes the writer when dropped.
fn init_file_tracing(log_file: &Path) -> WorkerGuard {
    let dir = log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let name = log_file
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new("hangman.log"));

    let file_appender = tracing_appender::rolling::never(dir, name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .init();

    guard
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let _guard = match command {
        Commands::Play => Some(init_file_tracing(&cli.log_file)),
        Commands::Simple => {
            init_stderr_tracing();
            None
        }
    };

    // An empty pool is fatal before any game starts
    let pool = load_word_pool(&cli.wordlist)?;
    let store = FileSaveStore::new(&cli.save_file);

    match command {
        Commands::Play => run_tui(App::new(&pool, &store)),
        Commands::Simple => run_simple(&pool, &store),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_mode_logs_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let log_file = dir.path().join("game.log");

        let cli = Cli::try_parse_from([
            "hangman",
            "play",
            "--log-file",
            log_file.to_str().unwrap(),
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Commands::Play)));

        let guard = init_file_tracing(&cli.log_file);
        tracing::warn!("rejected save file");
        drop(guard);

        let logged = std::fs::read_to_string(&log_file).unwrap();
        assert!(logged.contains("rejected save file"));
    }

    #[test]
    fn log_file_has_a_default() {
        let cli = Cli::try_parse_from(["hangman", "simple"]).unwrap();
        assert_eq!(cli.log_file, PathBuf::from("hangman.log"));
    }
}
