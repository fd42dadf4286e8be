//! Display functions for line-mode output

use super::formatters::{guess_row, keyboard_lines, share_grid};
use crate::core::{Feedback, Word};
use crate::game::{Guess, KeyboardState, MAX_ATTEMPTS, SessionView, Status};
use crate::stats::Statistics;
use colored::Colorize;

/// Print a submitted guess with its turn number
pub fn print_guess(guess: &Guess) {
    println!(
        "  {} {}",
        format!("{}/{MAX_ATTEMPTS}", guess.index + 1).bright_black(),
        guess_row(guess)
    );
}

/// Print the keyboard state
pub fn print_keyboard(keyboard: &KeyboardState) {
    println!();
    for line in keyboard_lines(keyboard) {
        println!("  {line}");
    }
    println!();
}

/// Print the board, keyboard and draft prompt for the current view
pub fn print_board(view: &SessionView<'_>) {
    println!("{}", "─".repeat(40).cyan());
    for guess in view.history {
        print_guess(guess);
    }
    print_keyboard(&view.keyboard);
    println!(
        "  {} guess{} left",
        view.remaining_attempts.to_string().bright_cyan().bold(),
        if view.remaining_attempts == 1 { "" } else { "es" }
    );
}

/// Print the end-of-game banner
pub fn print_outcome(view: &SessionView<'_>) {
    let Some(answer) = view.answer else {
        return;
    };

    println!("\n{}", "═".repeat(40).bright_cyan());
    match view.status {
        Status::Won => {
            let turns = view.history.len();
            println!(
                "  {} Solved in {} {}",
                "🎉 You win!".bright_green().bold(),
                turns.to_string().bright_cyan().bold(),
                if turns == 1 { "guess" } else { "guesses" }
            );
        }
        Status::Lost => {
            println!("  {}", "Game over!".bright_red().bold());
        }
        Status::InProgress => {}
    }
    println!("  The word was: {}", answer.text().bright_yellow().bold());
    println!("\n{}", share_grid(view.history));
    println!("{}", "═".repeat(40).bright_cyan());
}

/// Print running statistics
pub fn print_statistics(stats: &Statistics) {
    println!(
        "\n  Played: {}  Win rate: {:.0}%  Streak: {} (best {})",
        stats.total_games.to_string().bold(),
        stats.win_rate(),
        stats.current_streak,
        stats.best_streak
    );

    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0).max(1);
    for (turns, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let width = (count as f64 / max as f64 * 20.0).round() as usize;
        println!(
            "  {turns} {} {count}",
            "█".repeat(width.max(usize::from(count > 0))).green()
        );
    }
}

/// Print a one-off evaluation
pub fn print_check_result(guess: &Word, answer: &Word, feedback: &Feedback) {
    let row: Vec<String> = guess
        .chars()
        .iter()
        .zip(feedback.iter())
        .map(|(&letter, class)| super::formatters::tile(letter, Some(class)).to_string())
        .collect();

    println!(
        "{} vs {}: {}  {}",
        guess.text().bold(),
        answer.text().bold(),
        row.join(" "),
        feedback.to_emoji()
    );
}
