//! The interactive guess/feedback loop

use crate::core::Problem;
use crate::output::{feedback_line, legend};
use anyhow::Result;
use std::io::{BufRead, Write};

/// Number of valid attempts allowed per game by default
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Solved, with the number of valid attempts it took
    Solved { attempts: usize },
    /// The attempt limit was reached without solving
    OutOfGuesses,
    /// Input ended before the game was decided
    Abandoned,
}

/// Drives one game over arbitrary input and output handles.
///
/// Generic over the handles so tests can run a whole session against
/// in-memory buffers; the binary passes locked stdin and stdout.
pub struct Session<R, W> {
    input: R,
    output: W,
    max_attempts: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with the given attempt limit
    #[must_use]
    pub fn new(input: R, output: W, max_attempts: usize) -> Self {
        Self {
            input,
            output,
            max_attempts,
        }
    }

    /// Run the prompt/read/evaluate loop until the problem is solved, the
    /// attempt limit is reached, or input runs out.
    ///
    /// Every guess gets a response: valid guesses a colored feedback line,
    /// invalid guesses a reminder of the required length. Invalid guesses
    /// do not count toward the limit.
    ///
    /// # Errors
    /// Returns an error when reading a guess or writing feedback fails.
    pub fn run(&mut self, problem: &mut Problem) -> Result<Outcome> {
        writeln!(self.output, "{}", legend())?;
        writeln!(self.output)?;

        loop {
            write!(self.output, "Enter guess: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(Outcome::Abandoned);
            }

            let (count, attempt) = problem.attempt(&line);

            if attempt.is_invalid() {
                writeln!(self.output, "Your guess must be {} letters", problem.length())?;
                continue;
            }

            writeln!(self.output, "{}", feedback_line(count, &attempt.classify()))?;

            if attempt.is_solved() {
                writeln!(
                    self.output,
                    "Correct you got it in {count}! The word was {}",
                    problem.solution()
                )?;
                return Ok(Outcome::Solved { attempts: count });
            }

            if count >= self.max_attempts {
                writeln!(
                    self.output,
                    "\nOh no, you're out of guesses... The word you were looking for was {}",
                    problem.solution()
                )?;
                return Ok(Outcome::OutOfGuesses);
            }
        }
    }
}
