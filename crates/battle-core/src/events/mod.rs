//! Conflict event logging.

pub mod logger;

pub use logger::{ConflictLog, LogError};
