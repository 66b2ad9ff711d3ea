//! Formatting utilities for terminal output

use crate::core::Classification;
use colored::Colorize;

/// Format one attempt as a numbered feedback line.
///
/// Each guessed letter is colored by its verdict: correct letters green,
/// misplaced letters yellow, absent letters grey.
#[must_use]
pub fn feedback_line(count: usize, feedback: &[Classification]) -> String {
    let letters: String = feedback
        .iter()
        .map(|classification| match classification {
            Classification::Correct(c) => c.to_string().green().to_string(),
            Classification::WrongPosition(c) => c.to_string().yellow().to_string(),
            Classification::Incorrect(c) => c.to_string().white().to_string(),
        })
        .collect();

    format!("{count}. {letters}")
}

/// The explanation of the color scheme shown once at session start
#[must_use]
pub fn legend() -> String {
    format!(
        "A letter in the correct place is shown in {}\n\
         A letter that appears in the word, but is not in the right place is shown in {}\n\
         A letter that doesn't appear in the word is shown in {}",
        "green".green(),
        "yellow".yellow(),
        "grey".white(),
    )
}
