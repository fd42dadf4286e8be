//! One-off guess evaluation

use crate::core::{Feedback, GameError, Word, evaluate};

/// Result of checking a guess against an answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub guess: Word,
    pub answer: Word,
    pub feedback: Feedback,
}

/// Evaluate `guess` against `answer`
///
/// # Errors
///
/// Returns `GameError::InvalidInput` if either word is not 5 letters.
pub fn check_guess(guess: &str, answer: &str) -> Result<CheckResult, GameError> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;
    Ok(CheckResult {
        guess,
        answer,
        feedback: evaluate(&guess, &answer),
    })
}
