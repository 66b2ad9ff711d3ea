//! Terminal output formatting
//!
//! Colored feedback lines and the session legend.

pub mod formatters;

pub use formatters::{feedback_line, legend};
