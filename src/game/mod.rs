//! The interactive game session

mod session;

pub use session::{DEFAULT_MAX_ATTEMPTS, Outcome, Session};
