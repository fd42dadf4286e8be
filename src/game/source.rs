//! Where answers come from

use crate::core::{Result, Word};

/// Supplies the secret word for a new session
///
/// Implementations fail with `GameError::SourceUnavailable` rather than
/// inventing an answer.
pub trait WordSource {
    /// Produce the answer for the next session
    ///
    /// # Errors
    /// Returns `GameError::SourceUnavailable` if no answer can be supplied.
    fn answer(&mut self) -> Result<Word>;
}

impl<S: WordSource + ?Sized> WordSource for Box<S> {
    fn answer(&mut self) -> Result<Word> {
        (**self).answer()
    }
}

impl<S: WordSource + ?Sized> WordSource for &mut S {
    fn answer(&mut self) -> Result<Word> {
        (**self).answer()
    }
}
