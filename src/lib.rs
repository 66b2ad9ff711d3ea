//! Terminal Wordle
//!
//! A terminal word-guessing game: six attempts to find the hidden word, with
//! colored per-letter feedback after every guess and faithful handling of
//! duplicate letters.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Classification, Problem};
//!
//! let mut problem = Problem::new("hello");
//! let (count, attempt) = problem.attempt("Helot");
//!
//! assert_eq!(count, 1);
//! assert!(!attempt.is_solved());
//! assert_eq!(attempt.classify()[0], Classification::Correct('h'));
//! ```

// Core domain types
pub mod core;

// The interactive game session
pub mod game;

// Terminal output formatting
pub mod output;

// The game vocabulary
pub mod wordlists;
