//! On-screen keyboard feedback
//!
//! Tracks the best classification seen for every guessed letter.

use super::state::Guess;
use crate::core::Classification;
use rustc_hash::FxHashMap;

/// Best known classification per letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: FxHashMap<u8, Classification>,
}

impl KeyboardState {
    /// Recompute the keyboard from a full guess history
    #[must_use]
    pub fn from_history(history: &[Guess]) -> Self {
        let mut aggregator = KeyboardAggregator::new();
        for guess in history {
            aggregator.update(guess);
        }
        aggregator.snapshot()
    }

    /// Classification for a letter, `None` if it was never guessed
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<Classification> {
        self.letters.get(&letter.to_ascii_uppercase()).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

/// Incrementally folds guesses into a `KeyboardState`
#[derive(Debug, Clone, Default)]
pub struct KeyboardAggregator {
    state: KeyboardState,
}

impl KeyboardAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one guess in; a letter is only ever upgraded (Grey < Yellow < Green)
    pub fn update(&mut self, guess: &Guess) {
        for (letter, class) in guess.letters() {
            self.state
                .letters
                .entry(letter)
                .and_modify(|stored| {
                    if class.outranks(*stored) {
                        *stored = class;
                    }
                })
                .or_insert(class);
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> KeyboardState {
        self.state.clone()
    }

    #[must_use]
    pub const fn state(&self) -> &KeyboardState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::GameState;
    use Classification::{Green, Grey, Yellow};

    fn history(answer: &str, guesses: &[&str]) -> Vec<Guess> {
        let mut state = GameState::new(Word::new(answer).unwrap());
        for guess in guesses {
            state.submit_text(guess).unwrap();
        }
        state.history().to_vec()
    }

    #[test]
    fn unguessed_letters_absent() {
        let keyboard = KeyboardState::from_history(&history("allow", &["crane"]));
        assert_eq!(keyboard.get(b'Z'), None);
        assert_eq!(keyboard.len(), 5);
    }

    #[test]
    fn records_each_class() {
        let keyboard = KeyboardState::from_history(&history("allow", &["lolly"]));
        assert_eq!(keyboard.get(b'L'), Some(Green));
        assert_eq!(keyboard.get(b'O'), Some(Yellow));
        assert_eq!(keyboard.get(b'y'), Some(Grey));
    }

    #[test]
    fn green_never_downgraded() {
        // L green in "lolly", then only yellow/grey in later guesses
        let guesses = history("allow", &["lolly", "lemur", "flyer"]);
        let mut aggregator = KeyboardAggregator::new();
        for guess in &guesses {
            aggregator.update(guess);
            if guess.index == 0 {
                assert_eq!(aggregator.state().get(b'L'), Some(Green));
            }
        }
        assert_eq!(aggregator.snapshot().get(b'L'), Some(Green));
    }

    #[test]
    fn yellow_upgrades_to_green() {
        let guesses = history("allow", &["octal", "allow"]);
        let mut aggregator = KeyboardAggregator::new();
        aggregator.update(&guesses[0]);
        assert_eq!(aggregator.state().get(b'A'), Some(Yellow));
        aggregator.update(&guesses[1]);
        assert_eq!(aggregator.state().get(b'A'), Some(Green));
    }

    #[test]
    fn recomputation_is_order_independent_and_idempotent() {
        let guesses = history("allow", &["lolly", "octal", "wally"]);
        let forward = KeyboardState::from_history(&guesses);

        let mut reversed = guesses.clone();
        reversed.reverse();
        assert_eq!(KeyboardState::from_history(&reversed), forward);

        let mut doubled = guesses.clone();
        doubled.extend(guesses.iter().cloned());
        assert_eq!(KeyboardState::from_history(&doubled), forward);
    }
}
