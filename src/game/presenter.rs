//! Output side of a session
//!
//! A presenter draws whatever the session shows it. It never feeds anything
//! back into the game.

use super::draft::Draft;
use super::keyboard::KeyboardState;
use super::reveal::RevealStep;
use super::state::{Guess, Status};
use crate::core::Word;

/// Progress of the row currently being revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealProgress {
    pub row: usize,
    pub revealed: usize,
}

/// Read-only snapshot of a session for drawing
#[derive(Debug, Clone)]
pub struct SessionView<'a> {
    pub status: Status,
    pub history: &'a [Guess],
    pub draft: &'a Draft,
    /// Keyboard colors, not yet including the row being revealed
    pub keyboard: KeyboardState,
    pub reveal: Option<RevealProgress>,
    pub remaining_attempts: usize,
    /// Only set once the game is over and the last row is fully revealed
    pub answer: Option<&'a Word>,
}

impl SessionView<'_> {
    /// Whether the tile at `row`/`position` may show its color yet
    #[must_use]
    pub fn is_tile_revealed(&self, row: usize, position: usize) -> bool {
        match self.reveal {
            Some(progress) if progress.row == row => position < progress.revealed,
            _ => row < self.history.len(),
        }
    }

    #[must_use]
    pub const fn is_revealing(&self) -> bool {
        self.reveal.is_some()
    }

    /// Game over and nothing left to animate
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.answer.is_some()
    }
}

/// Consumer of frames and reveal events
pub trait Presenter {
    type Error;

    /// Draw the steady state
    ///
    /// # Errors
    /// Whatever the output device reports.
    fn render_frame(&mut self, view: &SessionView<'_>) -> Result<(), Self::Error>;

    /// Show one newly revealed tile
    ///
    /// # Errors
    /// Whatever the output device reports.
    fn reveal_step(&mut self, step: RevealStep) -> Result<(), Self::Error>;
}
