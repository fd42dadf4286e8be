//! Core domain types for Wordle
//!
//! Words, feedback, the evaluator and the error taxonomy. Nothing here does I/O.

mod error;
mod evaluator;
mod feedback;
mod word;

pub use error::{GameError, Result};
pub use evaluator::{evaluate, evaluate_text};
pub use feedback::{Classification, Feedback};
pub use word::{WORD_LENGTH, Word, WordError};
