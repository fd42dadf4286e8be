//! Formatting utilities for terminal output

use crate::core::Classification;
use crate::game::{Guess, KeyboardState};
use colored::{ColoredString, Colorize};

/// Letter rows of the on-screen keyboard
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// A single letter tile, colored by its classification
#[must_use]
pub fn tile(letter: u8, class: Option<Classification>) -> ColoredString {
    let text = format!(" {} ", char::from(letter.to_ascii_uppercase()));
    match class {
        Some(Classification::Green) => text.black().on_green().bold(),
        Some(Classification::Yellow) => text.black().on_yellow().bold(),
        Some(Classification::Grey) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// A full guess as a row of colored tiles
#[must_use]
pub fn guess_row(guess: &Guess) -> String {
    guess
        .letters()
        .map(|(letter, class)| tile(letter, Some(class)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The keyboard as three lines of colored keys
#[must_use]
pub fn keyboard_lines(keyboard: &KeyboardState) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: Vec<String> = row
                .bytes()
                .map(|letter| tile(letter, keyboard.get(letter)).to_string())
                .collect();
            format!("{}{}", "  ".repeat(indent), keys.join(""))
        })
        .collect()
}

/// Emoji grid for sharing a finished game
#[must_use]
pub fn share_grid(history: &[Guess]) -> String {
    history
        .iter()
        .map(|guess| guess.feedback.to_emoji())
        .collect::<Vec<_>>()
        .join("\n")
}
