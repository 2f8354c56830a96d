//! Shared record types for the battle of souls simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! The core emits these records and the driver prints or serializes them.

pub mod record;
pub mod score;
pub mod skill;
pub mod snapshot;

pub use record::{generate_conflict_id, ConflictRecord, Winner};
pub use skill::Skill;
pub use snapshot::{FinalReport, HumanSnapshot, HumanVerdict, Verdict};
