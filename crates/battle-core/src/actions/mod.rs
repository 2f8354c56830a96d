//! Combatant Actions
//!
//! Random choices a combatant makes before a conflict is scored.

pub mod skill;

pub use skill::select_skill;
