//! Per-letter feedback for a guess
//!
//! Each position of a guess is classified as:
//! - Grey (letter not in word, or all its occurrences already accounted for)
//! - Yellow (letter in word, wrong position)
//! - Green (letter in correct position)

use super::word::WORD_LENGTH;
use std::fmt;

/// Classification of a single guessed letter
///
/// Variants are ordered by display precedence: `Grey < Yellow < Green`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Classification {
    Grey,
    Yellow,
    Green,
}

impl Classification {
    /// Emoji square used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Grey => '⬜',
        }
    }

    /// Whether `self` should replace `other` on the keyboard
    #[inline]
    #[must_use]
    pub fn outranks(self, other: Self) -> bool {
        self > other
    }
}

/// Feedback for a complete guess, one classification per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Classification; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Classification::Green; WORD_LENGTH]);

    #[must_use]
    pub const fn new(classes: [Classification; WORD_LENGTH]) -> Self {
        Self(classes)
    }

    #[inline]
    #[must_use]
    pub const fn classes(&self) -> &[Classification; WORD_LENGTH] {
        &self.0
    }

    /// Classification at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> Classification {
        self.0[position]
    }

    pub fn iter(&self) -> impl Iterator<Item = Classification> + '_ {
        self.0.iter().copied()
    }

    /// Check if every position is Green
    #[must_use]
    pub fn is_all_green(&self) -> bool {
        self.0.iter().all(|&c| c == Classification::Green)
    }

    #[must_use]
    pub fn count(&self, class: Classification) -> usize {
        self.0.iter().filter(|&&c| c == class).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/'.'/⬜ for grey
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Feedback;
    ///
    /// let a = Feedback::parse("GY-GY").unwrap();
    /// let b = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut classes = [Classification::Grey; WORD_LENGTH];
        for (slot, ch) in classes.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => Classification::Green,
                'Y' | 'y' | '🟨' => Classification::Yellow,
                '-' | '_' | '.' | '⬜' => Classification::Grey,
                _ => return None,
            };
        }
        Some(Self(classes))
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Classification::{Green, Grey, Yellow};

    #[test]
    fn classification_precedence() {
        assert!(Green > Yellow);
        assert!(Yellow > Grey);
        assert!(Green.outranks(Grey));
        assert!(!Yellow.outranks(Green));
        assert!(!Grey.outranks(Grey));
    }

    #[test]
    fn perfect_constant() {
        assert!(Feedback::PERFECT.is_all_green());
        assert_eq!(Feedback::PERFECT.count(Green), 5);
        assert_eq!(Feedback::PERFECT.to_emoji(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn parse_valid() {
        let fb = Feedback::parse("gy-._").unwrap();
        assert_eq!(fb.classes(), &[Green, Yellow, Grey, Grey, Grey]);
        assert!(!fb.is_all_green());
        assert_eq!(fb.count(Yellow), 1);
    }

    #[test]
    fn parse_invalid() {
        assert!(Feedback::parse("GYGGYX").is_none());
        assert!(Feedback::parse("GYG").is_none());
        assert!(Feedback::parse("GXGGY").is_none());
        assert!(Feedback::parse("").is_none());
        assert!("nope!".parse::<Feedback>().is_err());
    }

    #[test]
    fn display_is_emoji() {
        let fb = Feedback::new([Yellow, Yellow, Green, Grey, Grey]);
        assert_eq!(fb.to_string(), "🟨🟨🟩⬜⬜");
        assert_eq!(fb.at(2), Green);
    }
}
