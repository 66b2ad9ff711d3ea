//! The game vocabulary
//!
//! Provides the embedded word list compiled into the binary, and uniform
//! random selection of a solution by word length.

mod embedded;

pub use embedded::{WORDS, WORDS_COUNT};

use rand::prelude::IndexedRandom;

/// A fixed vocabulary to draw solutions from
#[derive(Debug, Clone, Copy)]
pub struct Dictionary {
    words: &'static [&'static str],
}

impl Default for Dictionary {
    /// The embedded vocabulary
    fn default() -> Self {
        Self::new(WORDS)
    }
}

impl Dictionary {
    /// Build a dictionary over a fixed word list
    #[must_use]
    pub const fn new(words: &'static [&'static str]) -> Self {
        Self { words }
    }

    /// Pick a uniformly random word of exactly `length` characters.
    ///
    /// Returns `None` when the vocabulary has no word of that length.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::new(&["tree", "hello"]);
    /// assert_eq!(dictionary.pick(5), Some("hello"));
    /// assert_eq!(dictionary.pick(7), None);
    /// ```
    #[must_use]
    pub fn pick(&self, length: usize) -> Option<&'static str> {
        let candidates: Vec<&'static str> = self
            .words
            .iter()
            .copied()
            .filter(|word| word.chars().count() == length)
            .collect();

        candidates.choose(&mut rand::rng()).copied()
    }
}
