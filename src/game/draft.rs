//! Draft input buffer
//!
//! Collects typed letters into a candidate guess. The draft knows nothing about
//! the game; the session decides when it may change.

use crate::core::{GameError, Result, WORD_LENGTH, Word};

/// The in-progress, uncommitted guess
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    letters: [u8; WORD_LENGTH],
    len: usize,
}

impl Draft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a letter
    ///
    /// Non-letters and letters typed into a full draft are ignored. Returns
    /// whether the character was accepted.
    pub fn append_char(&mut self, c: char) -> bool {
        if self.len >= WORD_LENGTH || !c.is_ascii_alphabetic() {
            return false;
        }
        // ASCII checked above
        self.letters[self.len] = c.to_ascii_uppercase() as u8;
        self.len += 1;
        true
    }

    /// Remove the last letter, if any
    pub fn backspace(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        self.len -= 1;
        self.letters[self.len] = 0;
        true
    }

    /// Take the finished word and reset the draft
    ///
    /// # Errors
    /// Returns `GameError::IncompleteGuess` if fewer than 5 letters were typed;
    /// the draft is left as it was.
    pub fn commit(&mut self) -> Result<Word> {
        if self.len < WORD_LENGTH {
            return Err(GameError::IncompleteGuess(self.len));
        }
        let word = Word::from_letters(self.letters)?;
        self.clear();
        Ok(word)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Letters typed so far
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters[..self.len]
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Cursor position; always equal to the number of letters typed
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == WORD_LENGTH
    }
}
