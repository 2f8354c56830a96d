//! Entity Components
//!
//! The participants of a conflict: Humans, the two celestial combatant kinds
//! and the Judge.

pub mod celestial;
pub mod human;
pub mod judge;

pub use celestial::{Angel, Demon, SkillSet};
pub use human::Human;
pub use judge::Judge;

/// Capability shared by every entity that can attempt to pray
pub trait Spiritual {
    /// Whether a prayer attempt succeeds right now.
    fn prays(&self) -> bool;
}
