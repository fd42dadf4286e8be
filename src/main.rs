//! Wordle - CLI
//!
//! Play Wordle in the terminal, either in the TUI (default) or line by line.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use wordle_game::{
    commands::{DEFAULT_REVEAL_MS, PlayConfig, check_guess, run_simple},
    interactive::{App, run_tui},
    output::print_check_result,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Play Wordle in the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word file to draw answers from, one word per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Seed for answer selection, for reproducible games
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Milliseconds between revealed tiles
    #[arg(short, long, global = true, default_value_t = DEFAULT_REVEAL_MS)]
    reveal_ms: u64,

    /// Play against a fixed answer
    #[arg(short, long, global = true)]
    answer: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode without the TUI
    Simple,

    /// Show the feedback a guess would get against an answer
    Check {
        /// The guessed word
        guess: String,

        /// The answer to compare against
        #[arg(value_name = "ANSWER")]
        target: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = PlayConfig {
        reveal_delay: Duration::from_millis(cli.reveal_ms),
        seed: cli.seed,
        words: cli.words,
        answer: cli.answer,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Check { guess, target } => run_check_command(&guess, &target),
    }
}

fn run_play_command(config: &PlayConfig) -> Result<()> {
    let source = config.word_source()?;
    let app = App::new(source, config.reveal_delay)?;
    run_tui(app)
}

fn run_simple_command(config: &PlayConfig) -> Result<()> {
    let mut source = config.word_source()?;
    run_simple(&mut source, config)
}

fn run_check_command(guess: &str, answer: &str) -> Result<()> {
    let result = check_guess(guess, answer)?;
    print_check_result(&result.guess, &result.answer, &result.feedback);
    Ok(())
}
