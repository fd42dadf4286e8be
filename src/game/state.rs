//! Turn state machine
//!
//! Holds the answer and the guess history, and decides when a game is won or lost.

use crate::core::{Feedback, GameError, Result, Word, evaluate};
use std::fmt;

/// Maximum number of guesses in one game
pub const MAX_ATTEMPTS: usize = 6;

/// Game status; `Won` and `Lost` are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Status {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A submitted guess with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    pub word: Word,
    pub feedback: Feedback,
    /// 0-based attempt index
    pub index: usize,
}

impl Guess {
    /// Letters paired with their classification, left to right
    pub fn letters(&self) -> impl Iterator<Item = (u8, crate::core::Classification)> + '_ {
        self.word.chars().iter().copied().zip(self.feedback.iter())
    }
}

/// State of one game: answer, history and status
#[derive(Clone)]
pub struct GameState {
    answer: Word,
    history: Vec<Guess>,
    status: Status,
}

impl GameState {
    #[must_use]
    pub fn new(answer: Word) -> Self {
        Self {
            answer,
            history: Vec::with_capacity(MAX_ATTEMPTS),
            status: Status::InProgress,
        }
    }

    /// Submit a guess
    ///
    /// Evaluates the word, appends it to the history and updates the status in
    /// one step.
    ///
    /// # Errors
    /// Returns `GameError::GameOver` if the game already ended. The history is
    /// left untouched.
    pub fn submit_guess(&mut self, word: Word) -> Result<&Guess> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }

        let feedback = evaluate(&word, &self.answer);
        let index = self.history.len();

        self.status = if feedback.is_all_green() {
            Status::Won
        } else if index + 1 == MAX_ATTEMPTS {
            Status::Lost
        } else {
            Status::InProgress
        };
        self.history.push(Guess {
            word,
            feedback,
            index,
        });

        Ok(&self.history[index])
    }

    /// Parse and submit a guess
    ///
    /// # Errors
    /// Returns `GameError::GameOver` if the game already ended, otherwise
    /// `GameError::InvalidInput` if `text` is not a 5-letter word.
    pub fn submit_text(&mut self, text: &str) -> Result<&Guess> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }
        let word = Word::new(text)?;
        self.submit_guess(word)
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Guess] {
        &self.history
    }

    #[must_use]
    pub fn last_guess(&self) -> Option<&Guess> {
        self.history.last()
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        MAX_ATTEMPTS - self.history.len()
    }

    /// The answer, once the game is over
    ///
    /// Always `None` while the game is in progress.
    #[must_use]
    pub fn answer(&self) -> Option<&Word> {
        self.status.is_terminal().then_some(&self.answer)
    }
}

// Goes through `answer()` so debug output cannot leak a live answer
impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("GameState");
        match self.answer() {
            Some(answer) => s.field("answer", &answer.text()),
            None => s.field("answer", &"<hidden>"),
        };
        s.field("history", &self.history)
            .field("status", &self.status)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(answer: &str) -> GameState {
        GameState::new(Word::new(answer).unwrap())
    }

    const MISSES: [&str; MAX_ATTEMPTS] = ["crane", "slate", "audio", "pious", "fjord", "nymph"];

    #[test]
    fn new_game_in_progress() {
        let state = game("allow");
        assert_eq!(state.status(), Status::InProgress);
        assert!(state.history().is_empty());
        assert_eq!(state.remaining_attempts(), MAX_ATTEMPTS);
        assert!(state.answer().is_none());
    }

    #[test]
    fn guess_is_recorded_with_index() {
        let mut state = game("allow");
        let guess = state.submit_text("lolly").unwrap();
        assert_eq!(guess.index, 0);
        assert_eq!(guess.feedback, Feedback::parse("YYG--").unwrap());

        let guess = state.submit_text("crane").unwrap();
        assert_eq!(guess.index, 1);
        assert_eq!(state.attempts_used(), 2);
        assert_eq!(state.remaining_attempts(), 4);
        assert_eq!(state.status(), Status::InProgress);
    }

    #[test]
    fn exact_guess_wins_immediately() {
        let mut state = game("allow");
        state.submit_text("ALLOW").unwrap();
        assert_eq!(state.status(), Status::Won);
        assert_eq!(state.answer().map(Word::text), Some("ALLOW"));
    }

    #[test]
    fn win_on_last_attempt() {
        let mut state = game("allow");
        for miss in &MISSES[..MAX_ATTEMPTS - 1] {
            state.submit_text(miss).unwrap();
            assert_eq!(state.status(), Status::InProgress);
        }
        state.submit_text("allow").unwrap();
        assert_eq!(state.status(), Status::Won);
        assert_eq!(state.history().len(), MAX_ATTEMPTS);
    }

    #[test]
    fn all_misses_lose() {
        let mut state = game("allow");
        for miss in MISSES {
            state.submit_text(miss).unwrap();
        }
        assert_eq!(state.status(), Status::Lost);
        assert_eq!(state.remaining_attempts(), 0);
        assert_eq!(state.answer().map(Word::text), Some("ALLOW"));
    }

    #[test]
    fn submit_after_game_over_fails() {
        let mut state = game("allow");
        state.submit_text("allow").unwrap();

        assert_eq!(state.submit_text("crane").unwrap_err(), GameError::GameOver);
        // Terminal check comes before validation
        assert_eq!(state.submit_text("x").unwrap_err(), GameError::GameOver);
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn malformed_guess_rejected_without_consuming_attempt() {
        let mut state = game("allow");
        assert!(matches!(
            state.submit_text("al1ow"),
            Err(GameError::InvalidInput(_))
        ));
        assert!(matches!(
            state.submit_text("allows"),
            Err(GameError::InvalidInput(_))
        ));
        assert!(state.history().is_empty());
    }

    #[test]
    fn padded_guess_rejected() {
        let mut state = game("allow");
        assert!(matches!(
            state.submit_text(" crane\t"),
            Err(GameError::InvalidInput(_))
        ));
        assert!(matches!(
            state.submit_text("allow\n"),
            Err(GameError::InvalidInput(_))
        ));
        assert!(state.history().is_empty());
        assert_eq!(state.status(), Status::InProgress);
    }

    #[test]
    fn debug_hides_answer_until_game_ends() {
        let mut state = game("allow");
        state.submit_text("crane").unwrap();
        let text = format!("{state:?}");
        assert!(!text.contains("ALLOW"));
        // Letter bytes would leak it just the same
        assert!(!text.contains("[65, 76, 76, 79, 87]"));
        assert!(text.contains("<hidden>"));

        state.submit_text("allow").unwrap();
        assert!(format!("{state:?}").contains("answer: \"ALLOW\""));
    }

    #[test]
    fn won_iff_last_guess_all_green() {
        let mut state = game("allow");
        state.submit_text("lolly").unwrap();
        assert!(!state.last_guess().unwrap().feedback.is_all_green());
        assert_eq!(state.status(), Status::InProgress);
        state.submit_text("allow").unwrap();
        assert!(state.last_guess().unwrap().feedback.is_all_green());
        assert_eq!(state.status(), Status::Won);
    }

    #[test]
    fn guess_letters_pairs_feedback() {
        let mut state = game("allow");
        let guess = state.submit_text("lolly").unwrap();
        let pairs: Vec<_> = guess.letters().collect();
        assert_eq!(pairs[2], (b'L', crate::core::Classification::Green));
        assert_eq!(pairs[4], (b'Y', crate::core::Classification::Grey));
    }
}
