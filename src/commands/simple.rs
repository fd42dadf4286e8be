//! Simple line-mode game
//!
//! Plays the same game as the TUI over stdin/stdout, one guess per line.

use super::play::PlayConfig;
use crate::core::Word;
use crate::game::{MAX_ATTEMPTS, Presenter, RevealStep, Session, SessionView, WordSource};
use crate::output::formatters::tile;
use crate::output::{print_board, print_outcome, print_statistics};
use crate::stats::Statistics;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use std::thread;

/// Prints frames and tiles to stdout
struct LinePresenter;

impl Presenter for LinePresenter {
    type Error = io::Error;

    fn render_frame(&mut self, view: &SessionView<'_>) -> io::Result<()> {
        if view.is_finished() {
            print_outcome(view);
        } else {
            print_board(view);
        }
        Ok(())
    }

    fn reveal_step(&mut self, step: RevealStep) -> io::Result<()> {
        let mut stdout = io::stdout();
        if step.position == 0 {
            write!(
                stdout,
                "  {} ",
                format!("{}/{MAX_ATTEMPTS}", step.row + 1).bright_black()
            )?;
        }
        write!(stdout, "{} ", tile(step.letter, Some(step.classification)))?;
        if step.position + 1 == crate::core::WORD_LENGTH {
            writeln!(stdout)?;
        }
        stdout.flush()
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if stdin/stdout fail or the word source cannot supply an
/// answer.
pub fn run_simple<W: WordSource + ?Sized>(source: &mut W, config: &PlayConfig) -> Result<()> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║           Wordle - Line Mode         ║");
    println!("╚══════════════════════════════════════╝\n");
    println!("Guess the 5-letter word in {MAX_ATTEMPTS} tries. Type 'quit' to exit.\n");

    let mut presenter = LinePresenter;
    let mut stats = Statistics::default();

    loop {
        let mut session = Session::start(source)?;

        if !play_round(&mut session, &mut presenter, config)? {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }

        stats.record(session.status(), session.game().attempts_used());
        print_statistics(&stats);

        match get_user_input("\nPlay again? (yes/no)")?.as_deref() {
            Some("yes" | "y") => println!("\n🔄 New game started!\n"),
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Play until the session ends; `false` if the player quit early
fn play_round(
    session: &mut Session,
    presenter: &mut LinePresenter,
    config: &PlayConfig,
) -> Result<bool> {
    while !session.status().is_terminal() {
        let Some(input) = get_user_input("Guess")? else {
            return Ok(false);
        };

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(false),
            "" => continue,
            _ => {}
        }

        // Report malformed words here; the draft would silently drop them
        if let Err(e) = Word::new(&input) {
            println!("  {}", e.to_string().red());
            continue;
        }

        for c in input.trim().chars() {
            session.append_char(c);
        }
        if let Err(e) = session.commit() {
            println!("  {}", e.to_string().red());
            continue;
        }

        // Blocking on stdin anyway, so there is nothing else to service here
        while session.advance_reveal(presenter)? {
            thread::sleep(config.reveal_delay);
        }
        session.present(presenter)?;
    }
    Ok(true)
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_lowercase()))
}
