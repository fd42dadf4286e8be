//! Play configuration
//!
//! Turns command-line settings into a word source and reveal pacing.

use crate::core::{GameError, Word};
use crate::game::WordSource;
use crate::wordlists::loader::words_from_slice;
use crate::wordlists::{ANSWERS, FileWordSource, FixedWordSource, RandomWordSource};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::time::Duration;

/// Default pause between revealed tiles
pub const DEFAULT_REVEAL_MS: u64 = 250;

/// Settings shared by every play mode
#[derive(Debug, Clone)]
pub struct PlayConfig {
    /// Pause between revealed tiles
    pub reveal_delay: Duration,
    /// Seed for answer selection; random when absent
    pub seed: Option<u64>,
    /// Word file to draw answers from instead of the embedded list
    pub words: Option<PathBuf>,
    /// Play against this exact answer
    pub answer: Option<String>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            reveal_delay: Duration::from_millis(DEFAULT_REVEAL_MS),
            seed: None,
            words: None,
            answer: None,
        }
    }
}

impl PlayConfig {
    /// Build the word source these settings describe
    ///
    /// A fixed answer wins over a word file, which wins over the embedded list.
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` if the fixed answer is not a 5-letter word.
    pub fn word_source(&self) -> Result<Box<dyn WordSource>, GameError> {
        if let Some(answer) = &self.answer {
            return Ok(Box::new(FixedWordSource::new(Word::new(answer.trim())?)));
        }

        let rng = self
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        Ok(match &self.words {
            Some(path) => Box::new(FileWordSource::new(path.clone(), rng)),
            None => Box::new(RandomWordSource::new(words_from_slice(ANSWERS), rng)),
        })
    }
}
