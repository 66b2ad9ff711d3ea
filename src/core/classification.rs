//! Per-letter feedback for a guess

/// Verdict for a single letter of a guess.
///
/// Each variant carries the guessed letter, so a feedback line can be
/// rendered from the classification sequence alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The letter matches the solution at this position
    Correct(char),
    /// The letter appears in the solution, but at a different position
    WrongPosition(char),
    /// The letter cannot be placed in any remaining solution position
    Incorrect(char),
}

impl Classification {
    /// Get the guessed letter this verdict applies to
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Correct(c) | Self::WrongPosition(c) | Self::Incorrect(c) => c,
        }
    }
}
