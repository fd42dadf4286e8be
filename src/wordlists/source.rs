//! Word source implementations
//!
//! Random selection always goes through an injected RNG so games can be
//! replayed from a seed.

use super::loader::load_from_file;
use crate::core::{GameError, Result, Word};
use crate::game::WordSource;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};

/// Picks a random answer from an in-memory list
pub struct RandomWordSource<R> {
    words: Vec<Word>,
    rng: R,
}

impl<R: Rng> RandomWordSource<R> {
    #[must_use]
    pub const fn new(words: Vec<Word>, rng: R) -> Self {
        Self { words, rng }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl RandomWordSource<StdRng> {
    /// Reproducible source: the same seed yields the same answers
    #[must_use]
    pub fn seeded(words: Vec<Word>, seed: u64) -> Self {
        Self::new(words, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> WordSource for RandomWordSource<R> {
    fn answer(&mut self) -> Result<Word> {
        self.words
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| GameError::SourceUnavailable("word list is empty".to_string()))
    }
}

/// Reads a newline-separated word file on every request
///
/// The file is re-read each time so edits show up in the next game.
pub struct FileWordSource<R> {
    path: PathBuf,
    rng: R,
}

impl<R: Rng> FileWordSource<R> {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, rng: R) -> Self {
        Self {
            path: path.into(),
            rng,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<R: Rng> WordSource for FileWordSource<R> {
    fn answer(&mut self) -> Result<Word> {
        let words = load_from_file(&self.path).map_err(|e| {
            GameError::SourceUnavailable(format!("{}: {e}", self.path.display()))
        })?;

        words.choose(&mut self.rng).copied().ok_or_else(|| {
            GameError::SourceUnavailable(format!(
                "{}: no 5-letter words found",
                self.path.display()
            ))
        })
    }
}

/// Always answers with the same word
#[derive(Debug, Clone, Copy)]
pub struct FixedWordSource(Word);

impl FixedWordSource {
    #[must_use]
    pub const fn new(word: Word) -> Self {
        Self(word)
    }
}

impl WordSource for FixedWordSource {
    fn answer(&mut self) -> Result<Word> {
        Ok(self.0)
    }
}
