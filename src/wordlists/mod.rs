//! Word lists and answer sources
//!
//! Provides the embedded answer list compiled into the binary, file loading and
//! the `WordSource` implementations used to start sessions.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{ANSWERS, ANSWERS_COUNT};
pub use source::{FileWordSource, FixedWordSource, RandomWordSource};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn answers_are_valid_words() {
        for &word in ANSWERS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn answers_are_unique() {
        let unique: std::collections::HashSet<_> = ANSWERS.iter().collect();
        assert_eq!(unique.len(), ANSWERS.len());
    }

    #[test]
    fn expected_count() {
        assert_eq!(ANSWERS_COUNT, 920, "Expected 920 answer words");
    }
}
