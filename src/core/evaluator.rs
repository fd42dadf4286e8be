//! Guess evaluation
//!
//! Implements Wordle's feedback rules, including duplicate letters.

use super::error::GameError;
use super::feedback::{Classification, Feedback};
use super::word::{WORD_LENGTH, Word};

/// Evaluate `guess` against `answer`
///
/// # Algorithm
/// 1. Count every letter of the answer
/// 2. Green pass over all positions: exact matches consume a count
/// 3. Yellow pass over the remaining positions: misplaced letters consume a count
/// 4. Everything left is Grey
///
/// The green pass must finish before any yellow is assigned, otherwise an early
/// duplicate could take the count that belongs to a later exact match.
///
/// # Examples
/// ```
/// use wordle_game::core::{Feedback, Word, evaluate};
///
/// let answer = Word::new("allow").unwrap();
/// let guess = Word::new("lolly").unwrap();
/// assert_eq!(evaluate(&guess, &answer), Feedback::parse("YYG--").unwrap());
/// ```
#[must_use]
pub fn evaluate(guess: &Word, answer: &Word) -> Feedback {
    let mut result: [Option<Classification>; WORD_LENGTH] = [None; WORD_LENGTH];
    let mut remaining = answer.char_counts();

    // First pass: greens
    for (i, slot) in result.iter_mut().enumerate() {
        let letter = guess.char_at(i);
        if letter == answer.char_at(i)
            && let Some(count) = remaining.get_mut(&letter)
            && *count > 0
        {
            *slot = Some(Classification::Green);
            *count -= 1;
        }
    }

    // Second pass: yellows from whatever is left
    for (i, slot) in result.iter_mut().enumerate() {
        if slot.is_some() {
            continue;
        }
        if let Some(count) = remaining.get_mut(&guess.char_at(i))
            && *count > 0
        {
            *slot = Some(Classification::Yellow);
            *count -= 1;
        }
    }

    Feedback::new(result.map(|c| c.unwrap_or(Classification::Grey)))
}

/// Evaluate two unvalidated strings
///
/// # Errors
/// Returns `GameError::InvalidInput` if either string is not a 5-letter word.
pub fn evaluate_text(guess: &str, answer: &str) -> Result<Feedback, GameError> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;
    Ok(evaluate(&guess, &answer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Classification::{Green, Grey, Yellow};

    fn eval(guess: &str, answer: &str) -> Feedback {
        evaluate_text(guess, answer).unwrap()
    }

    fn fb(s: &str) -> Feedback {
        Feedback::parse(s).unwrap()
    }

    #[test]
    fn allow_lolly_worked_example() {
        assert_eq!(
            eval("lolly", "allow").classes(),
            &[Yellow, Yellow, Green, Grey, Grey]
        );
    }

    #[test]
    fn identical_words_are_all_green() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            assert_eq!(eval(word, word), Feedback::PERFECT);
        }
    }

    #[test]
    fn disjoint_words_are_all_grey() {
        assert_eq!(eval("abcde", "fghij"), fb("-----"));
    }

    #[test]
    fn absent_letter_always_grey() {
        // No Y, no T in the answer
        let result = eval("tryst", "crane");
        assert_eq!(result.at(0), Grey);
        assert_eq!(result.at(2), Grey);
        assert_eq!(result.at(4), Grey);
    }

    #[test]
    fn later_exact_match_beats_earlier_duplicate() {
        // One O in the answer: the exact match at position 3 wins it
        assert_eq!(eval("oxxox", "abcod"), fb("---G-"));
        // ROBOT vs FLOOR: second O is green, first O yellow
        assert_eq!(eval("robot", "floor"), fb("YY-G-"));
    }

    #[test]
    fn excess_duplicates_are_grey_left_to_right() {
        // Answer has a single E
        assert_eq!(eval("eerie", "crane"), fb("--Y-G"));
        assert_eq!(eval("speed", "abide"), fb("--Y-Y"));
    }

    #[test]
    fn duplicates_in_both_words() {
        // SPEED vs ERASE: S yellow, both Es yellow
        assert_eq!(eval("speed", "erase"), fb("Y-YY-"));
    }

    #[test]
    fn case_is_ignored() {
        assert_eq!(eval("CrAnE", "crane"), Feedback::PERFECT);
    }

    #[test]
    fn invalid_input_rejected() {
        assert!(matches!(
            evaluate_text("crane", "cranes"),
            Err(GameError::InvalidInput(_))
        ));
        assert!(matches!(
            evaluate_text("cr4ne", "crane"),
            Err(GameError::InvalidInput(_))
        ));
        assert!(matches!(
            evaluate_text("lolly\n", " allow"),
            Err(GameError::InvalidInput(_))
        ));
    }

    #[test]
    fn evaluation_is_pure() {
        let first = eval("lolly", "allow");
        for _ in 0..10 {
            assert_eq!(eval("lolly", "allow"), first);
        }
    }

    #[test]
    fn green_plus_yellow_never_exceeds_answer_count() {
        let words = [
            "allow", "lolly", "llama", "speed", "erase", "eerie", "abide", "geese", "level",
            "onion", "robot", "floor", "sassy", "asses", "crane",
        ];
        for guess in words {
            for answer in words {
                let g = Word::new(guess).unwrap();
                let a = Word::new(answer).unwrap();
                let result = evaluate(&g, &a);
                assert_eq!(result.classes().len(), g.chars().len());
                for &letter in g.chars() {
                    let credited = (0..WORD_LENGTH)
                        .filter(|&i| g.char_at(i) == letter && result.at(i) != Grey)
                        .count();
                    assert!(
                        credited <= a.count_of(letter),
                        "{guess} vs {answer}: {} credited {credited} times",
                        letter as char
                    );
                }
            }
        }
    }
}
