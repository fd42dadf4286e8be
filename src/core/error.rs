//! Error taxonomy shared by the game core

use super::word::{WORD_LENGTH, WordError};

/// Errors raised by the evaluator, game state, draft and word sources
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Malformed guess or answer
    #[error("invalid word: {0}")]
    InvalidInput(#[from] WordError),

    /// Mutation attempted after the game reached a terminal status
    #[error("the game is already over")]
    GameOver,

    /// Commit attempted before the draft was full
    #[error("guess needs {WORD_LENGTH} letters, only {0} typed")]
    IncompleteGuess(usize),

    /// The word source could not supply an answer
    #[error("word source unavailable: {0}")]
    SourceUnavailable(String),

    /// Input attempted while a guess is still being revealed
    #[error("wait for the current guess to finish revealing")]
    RevealActive,
}

pub type Result<T> = core::result::Result<T, GameError>;
