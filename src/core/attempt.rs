//! A single guess checked against the solution
//!
//! Home of the duplicate-letter feedback rule: solution letters at positions
//! the guess did not match exactly form a budget per letter, and
//! wrong-position credit is granted left to right until that letter's budget
//! runs out. Further copies of the letter are marked incorrect.

use super::Classification;
use rustc_hash::FxHashMap;

/// An immutable pairing of the solution with one normalized guess.
///
/// The raw guess is normalized on construction (surrounding whitespace
/// trimmed, letters lowercased) and never changes afterwards. Validity,
/// solvedness, and the feedback sequence are all derived from the pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    solution: String,
    guess: String,
}

impl Attempt {
    /// Pair a solution with a raw guess, normalizing the guess.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Attempt;
    ///
    /// let attempt = Attempt::new("hello", "  HeLlo\n");
    /// assert_eq!(attempt.guess(), "hello");
    /// assert!(attempt.is_solved());
    /// ```
    #[must_use]
    pub fn new(solution: impl Into<String>, raw_guess: &str) -> Self {
        Self {
            solution: solution.into(),
            guess: raw_guess.trim().to_lowercase(),
        }
    }

    /// Get the normalized guess
    #[inline]
    #[must_use]
    pub fn guess(&self) -> &str {
        &self.guess
    }

    /// Structural validation: the guess has the wrong number of characters,
    /// or contains a character that is not a letter.
    ///
    /// Letter placement plays no part here. An invalid attempt produces no
    /// feedback and is not recorded against the attempt limit.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Attempt;
    ///
    /// assert!(Attempt::new("hello", "ello").is_invalid());
    /// assert!(Attempt::new("hello", "hell0").is_invalid());
    /// assert!(!Attempt::new("hello", "world").is_invalid());
    /// ```
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        self.solution.chars().count() != self.guess.chars().count()
            || self.guess.chars().any(|c| !c.is_alphabetic())
    }

    /// Whether the guess equals the solution exactly
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solution == self.guess
    }

    /// Classify every letter of the guess against the solution, in guess
    /// order.
    ///
    /// Exact matches are decided first and consume their solution letter.
    /// The remaining solution letters form a per-letter budget; each
    /// non-matching guess letter takes wrong-position credit from the budget
    /// if any is left, otherwise it is incorrect. A solution letter the
    /// guess matched exactly never grants wrong-position credit to another
    /// copy of itself.
    ///
    /// Returns an empty sequence for an invalid attempt.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Attempt, Classification};
    ///
    /// let attempt = Attempt::new("elbow", "green");
    /// assert_eq!(
    ///     attempt.classify(),
    ///     [
    ///         Classification::Incorrect('g'),
    ///         Classification::Incorrect('r'),
    ///         Classification::WrongPosition('e'),
    ///         Classification::Incorrect('e'),
    ///         Classification::Incorrect('n'),
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn classify(&self) -> Vec<Classification> {
        if self.is_invalid() {
            return Vec::new();
        }

        let solution: Vec<char> = self.solution.chars().collect();
        let guess: Vec<char> = self.guess.chars().collect();

        // Budget of wrong-position credit per letter: solution letters at
        // positions the guess did not match exactly.
        let mut available: FxHashMap<char, usize> = FxHashMap::default();
        for (&s, &g) in solution.iter().zip(&guess) {
            if s != g {
                *available.entry(s).or_insert(0) += 1;
            }
        }

        solution
            .iter()
            .zip(&guess)
            .map(|(&s, &g)| {
                if s == g {
                    Classification::Correct(g)
                } else if let Some(count) = available.get_mut(&g)
                    && *count > 0
                {
                    *count -= 1;
                    Classification::WrongPosition(g)
                } else {
                    Classification::Incorrect(g)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Classification::{Correct, Incorrect, WrongPosition};

    #[test]
    fn exact_guess_is_all_correct() {
        let attempt = Attempt::new("hello", "hello");
        assert!(attempt.is_solved());
        assert_eq!(
            attempt.classify(),
            [
                Correct('h'),
                Correct('e'),
                Correct('l'),
                Correct('l'),
                Correct('o'),
            ]
        );
    }

    #[test]
    fn normalization_lowercases_and_trims() {
        let attempt = Attempt::new("hello", " HeLlo ");
        assert_eq!(attempt.guess(), "hello");
        assert!(attempt.is_solved());
    }

    #[test]
    fn anagram_mixes_correct_and_wrong_position() {
        assert_eq!(
            Attempt::new("hello", "ehlol").classify(),
            [
                WrongPosition('e'),
                WrongPosition('h'),
                Correct('l'),
                WrongPosition('o'),
                WrongPosition('l'),
            ]
        );
    }

    #[test]
    fn lone_shared_letter_is_wrong_position() {
        assert_eq!(
            Attempt::new("hello", "abcde").classify(),
            [
                Incorrect('a'),
                Incorrect('b'),
                Incorrect('c'),
                Incorrect('d'),
                WrongPosition('e'),
            ]
        );
    }

    #[test]
    fn duplicate_guess_letters_exhaust_the_budget() {
        // One unmatched e in the solution, two e's in the guess: only the
        // first takes credit.
        assert_eq!(
            Attempt::new("elbow", "green").classify(),
            [
                Incorrect('g'),
                Incorrect('r'),
                WrongPosition('e'),
                Incorrect('e'),
                Incorrect('n'),
            ]
        );
    }

    #[test]
    fn exact_matches_consume_before_wrong_position_credit() {
        // Solution holds three b's. One is matched exactly at position 2,
        // one grants credit at position 4, and the third guess b is out of
        // budget.
        assert_eq!(
            Attempt::new("abbed", "abcbb").classify(),
            [
                Correct('a'),
                Correct('b'),
                Incorrect('c'),
                WrongPosition('b'),
                Incorrect('b'),
            ]
        );
    }

    #[test]
    fn matched_letter_grants_no_credit_to_its_own_copy() {
        let attempt = Attempt::new("abcde", "aacde");
        assert_eq!(
            attempt.classify(),
            [
                Correct('a'),
                Incorrect('a'),
                Correct('c'),
                Correct('d'),
                Correct('e'),
            ]
        );
    }

    #[test]
    fn repeated_solution_letters_grant_repeated_credit() {
        assert_eq!(
            Attempt::new("hello", "llama").classify(),
            [
                WrongPosition('l'),
                WrongPosition('l'),
                Incorrect('a'),
                Incorrect('m'),
                Incorrect('a'),
            ]
        );
    }

    #[test]
    fn short_guess_is_invalid() {
        assert!(Attempt::new("hello", "ello").is_invalid());
    }

    #[test]
    fn long_guess_is_invalid() {
        assert!(Attempt::new("hello", "helloh").is_invalid());
    }

    #[test]
    fn digit_in_guess_is_invalid() {
        assert!(Attempt::new("hello", "hell0").is_invalid());
    }

    #[test]
    fn punctuation_in_guess_is_invalid() {
        assert!(Attempt::new("hello", "hell.").is_invalid());
    }

    #[test]
    fn invalid_attempt_classifies_to_nothing() {
        assert!(Attempt::new("hello", "hell0").classify().is_empty());
    }

    #[test]
    fn wrong_word_of_right_shape_is_valid_but_unsolved() {
        let attempt = Attempt::new("hello", "world");
        assert!(!attempt.is_invalid());
        assert!(!attempt.is_solved());
    }
}
