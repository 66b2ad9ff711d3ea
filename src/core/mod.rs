//! Core domain types for the game
//!
//! This module contains the fundamental domain types: the per-letter feedback
//! verdict, a single checked attempt, and the per-session problem state.
//! All types here are pure, testable, and do no I/O.

mod attempt;
mod classification;
mod problem;

pub use attempt::Attempt;
pub use classification::Classification;
pub use problem::Problem;
