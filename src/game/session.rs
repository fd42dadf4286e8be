//! One play-through
//!
//! A session owns the game state, the draft, the keyboard and any reveal in
//! flight. It is created from a word source and dropped when the round ends.

use super::draft::Draft;
use super::keyboard::{KeyboardAggregator, KeyboardState};
use super::presenter::{Presenter, RevealProgress, SessionView};
use super::reveal::{RevealSequence, RevealStep};
use super::source::WordSource;
use super::state::{GameState, Guess, Status};
use crate::core::{GameError, Result, Word};

#[derive(Debug, Clone)]
pub struct Session {
    game: GameState,
    draft: Draft,
    keyboard: KeyboardAggregator,
    reveal: Option<RevealSequence>,
}

impl Session {
    /// Start a session with an answer drawn from `source`
    ///
    /// # Errors
    /// Propagates `GameError::SourceUnavailable` from the source; no session
    /// is created without an answer.
    pub fn start<S: WordSource + ?Sized>(source: &mut S) -> Result<Self> {
        let answer = source.answer()?;
        Ok(Self::with_answer(answer))
    }

    #[must_use]
    pub fn with_answer(answer: Word) -> Self {
        Self {
            game: GameState::new(answer),
            draft: Draft::new(),
            keyboard: KeyboardAggregator::new(),
            reveal: None,
        }
    }

    /// Whether the draft may currently change
    #[must_use]
    pub const fn accepts_input(&self) -> bool {
        !self.game.is_over() && self.reveal.is_none()
    }

    /// Type a letter; ignored while revealing or after the game ended
    pub fn append_char(&mut self, c: char) -> bool {
        self.accepts_input() && self.draft.append_char(c)
    }

    /// Delete a letter; ignored while revealing or after the game ended
    pub fn backspace(&mut self) -> bool {
        self.accepts_input() && self.draft.backspace()
    }

    /// Submit the draft as a guess and start revealing it
    ///
    /// The guess is in the history before the first reveal step, so dropping
    /// or skipping the reveal never loses it.
    ///
    /// # Errors
    /// - `GameError::GameOver` once the game ended
    /// - `GameError::RevealActive` while the previous guess is still revealing
    /// - `GameError::IncompleteGuess` if the draft is not full (draft unchanged)
    pub fn commit(&mut self) -> Result<&Guess> {
        if self.game.is_over() {
            return Err(GameError::GameOver);
        }
        if self.reveal.is_some() {
            return Err(GameError::RevealActive);
        }

        let word = self.draft.commit()?;
        let guess = self.game.submit_guess(word)?;
        self.keyboard.update(guess);
        self.reveal = Some(RevealSequence::new(guess));
        Ok(guess)
    }

    #[must_use]
    pub const fn is_revealing(&self) -> bool {
        self.reveal.is_some()
    }

    /// Advance the reveal by one tile
    pub fn next_reveal_step(&mut self) -> Option<RevealStep> {
        let reveal = self.reveal.as_mut()?;
        let step = reveal.next();
        if reveal.is_finished() {
            self.reveal = None;
        }
        step
    }

    /// Advance the reveal by one tile and hand it to `presenter`
    ///
    /// Returns `false` when there was nothing left to reveal.
    ///
    /// # Errors
    /// Propagates the presenter's error.
    pub fn advance_reveal<P: Presenter + ?Sized>(
        &mut self,
        presenter: &mut P,
    ) -> std::result::Result<bool, P::Error> {
        match self.next_reveal_step() {
            Some(step) => {
                presenter.reveal_step(step)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Cancel the reveal in flight, returning how many tiles were skipped
    pub fn skip_reveal(&mut self) -> usize {
        self.reveal.take().map_or(0, |mut reveal| {
            let skipped = reveal.len();
            reveal.cancel();
            skipped
        })
    }

    /// Snapshot for presenters
    #[must_use]
    pub fn view(&self) -> SessionView<'_> {
        let history = self.game.history();
        let keyboard = match &self.reveal {
            // Hold back the colors of the row that is still animating
            Some(reveal) => KeyboardState::from_history(&history[..reveal.row()]),
            None => self.keyboard.snapshot(),
        };

        SessionView {
            status: self.game.status(),
            history,
            draft: &self.draft,
            keyboard,
            reveal: self.reveal.as_ref().map(|reveal| RevealProgress {
                row: reveal.row(),
                revealed: reveal.revealed(),
            }),
            remaining_attempts: self.game.remaining_attempts(),
            answer: if self.reveal.is_some() {
                None
            } else {
                self.game.answer()
            },
        }
    }

    /// Hand the current frame to `presenter`
    ///
    /// # Errors
    /// Propagates the presenter's error.
    pub fn present<P: Presenter + ?Sized>(
        &self,
        presenter: &mut P,
    ) -> std::result::Result<(), P::Error> {
        presenter.render_frame(&self.view())
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.game.status()
    }

    #[must_use]
    pub const fn game(&self) -> &GameState {
        &self.game
    }

    #[must_use]
    pub const fn draft(&self) -> &Draft {
        &self.draft
    }

    #[must_use]
    pub fn keyboard(&self) -> KeyboardState {
        self.keyboard.snapshot()
    }
}
