//! Session state: the hidden solution and the attempt log

use super::Attempt;

/// The hidden solution plus an append-only log of the valid attempts made
/// against it.
///
/// Invalid guesses still produce an [`Attempt`] for the caller to inspect,
/// but are never logged, so the log length is always the number of guesses
/// that counted.
#[derive(Debug, Clone)]
pub struct Problem {
    solution: String,
    attempts: Vec<Attempt>,
}

impl Problem {
    /// Create a problem for one game session
    #[must_use]
    pub fn new(solution: impl Into<String>) -> Self {
        Self {
            solution: solution.into(),
            attempts: Vec::new(),
        }
    }

    /// Get the hidden solution word
    #[inline]
    #[must_use]
    pub fn solution(&self) -> &str {
        &self.solution
    }

    /// Required guess length, in characters
    #[must_use]
    pub fn length(&self) -> usize {
        self.solution.chars().count()
    }

    /// Number of valid attempts made so far
    #[must_use]
    pub fn attempt_count(&self) -> usize {
        self.attempts.len()
    }

    /// Check a raw guess against the solution.
    ///
    /// Returns the 1-based count of valid attempts so far, paired with the
    /// attempt itself. An invalid guess is handed back for inspection
    /// without being logged, so the count it is paired with is unchanged.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Problem;
    ///
    /// let mut problem = Problem::new("hello");
    ///
    /// let (count, attempt) = problem.attempt("hell!");
    /// assert_eq!(count, 0);
    /// assert!(attempt.is_invalid());
    ///
    /// let (count, attempt) = problem.attempt("jello");
    /// assert_eq!(count, 1);
    /// assert!(!attempt.is_solved());
    /// ```
    pub fn attempt(&mut self, raw_guess: &str) -> (usize, Attempt) {
        let attempt = Attempt::new(self.solution.clone(), raw_guess);
        if !attempt.is_invalid() {
            self.attempts.push(attempt.clone());
        }
        (self.attempts.len(), attempt)
    }
}
