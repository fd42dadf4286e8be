//! Reveal sequence
//!
//! After a guess is committed its tiles are revealed one at a time. The
//! sequence is a plain iterator; the host decides how long to wait between
//! steps, so nothing here blocks.

use super::state::Guess;
use crate::core::{Classification, WORD_LENGTH};

/// One tile of a guess being revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStep {
    /// Attempt index of the guess
    pub row: usize,
    pub position: usize,
    pub letter: u8,
    pub classification: Classification,
}

/// Ordered, finite, cancellable reveal of a single guess
#[derive(Debug, Clone)]
pub struct RevealSequence {
    steps: [RevealStep; WORD_LENGTH],
    next: usize,
}

impl RevealSequence {
    #[must_use]
    pub fn new(guess: &Guess) -> Self {
        let steps = std::array::from_fn(|position| RevealStep {
            row: guess.index,
            position,
            letter: guess.word.char_at(position),
            classification: guess.feedback.at(position),
        });
        Self { steps, next: 0 }
    }

    /// Row being revealed
    #[must_use]
    pub const fn row(&self) -> usize {
        self.steps[0].row
    }

    /// Number of tiles already revealed
    #[must_use]
    pub const fn revealed(&self) -> usize {
        self.next
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.next >= WORD_LENGTH
    }

    /// Skip the remaining steps
    pub fn cancel(&mut self) {
        self.next = WORD_LENGTH;
    }
}

impl Iterator for RevealSequence {
    type Item = RevealStep;

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.steps.get(self.next).copied()?;
        self.next += 1;
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = WORD_LENGTH.saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for RevealSequence {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::GameState;

    fn lolly_guess() -> Guess {
        let mut state = GameState::new(Word::new("allow").unwrap());
        state.submit_text("crane").unwrap();
        state.submit_text("lolly").unwrap().clone()
    }

    #[test]
    fn yields_every_position_in_order() {
        let guess = lolly_guess();
        let steps: Vec<_> = RevealSequence::new(&guess).collect();

        assert_eq!(steps.len(), WORD_LENGTH);
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.row, 1);
            assert_eq!(step.position, i);
            assert_eq!(step.letter, guess.word.char_at(i));
            assert_eq!(step.classification, guess.feedback.at(i));
        }
    }

    #[test]
    fn tracks_progress() {
        let mut reveal = RevealSequence::new(&lolly_guess());
        assert_eq!(reveal.len(), 5);
        reveal.next();
        reveal.next();
        assert_eq!(reveal.revealed(), 2);
        assert_eq!(reveal.len(), 3);
        assert!(!reveal.is_finished());
    }

    #[test]
    fn cancel_skips_remaining_steps() {
        let mut reveal = RevealSequence::new(&lolly_guess());
        reveal.next();
        reveal.cancel();
        assert!(reveal.is_finished());
        assert_eq!(reveal.next(), None);
        assert_eq!(reveal.row(), 1);
    }
}
