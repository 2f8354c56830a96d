//! Simulation Systems
//!
//! The per-conflict rules applied to a Human:
//! - Conflict: skill scoring and the moral shift
//! - Faith: the prayer attempt after every conflict
//! - Clamp: upper bounds on the mutable attributes

pub mod clamp;
pub mod conflict;
pub mod faith;

pub use clamp::clamp_attributes;
pub use conflict::{resolve, resolve_with_skills, ConflictOutcome};
pub use faith::apply_prayer;
