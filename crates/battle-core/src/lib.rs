//! Battle of Souls Simulation Library
//!
//! Humans are fought over by Angels and Demons. Each conflict scores one
//! random skill per side, shifts the Human's good and evil toward the winner,
//! and ends with a prayer that moves faith. After the last round a Judge
//! decides who is saved.

pub mod actions;
pub mod components;
pub mod config;
pub mod events;
pub mod output;
pub mod setup;
pub mod simulation;
pub mod systems;

pub use battle_events::{ConflictRecord, FinalReport, Skill, Verdict, Winner};
pub use components::{Angel, Demon, Human, Judge, SkillSet, Spiritual};
pub use config::{Config, ConfigError};
pub use simulation::Simulation;
pub use systems::{resolve, resolve_with_skills, ConflictOutcome};

use thiserror::Error;

/// Top-level error for a simulation run
#[derive(Debug, Error)]
pub enum BattleError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Log(#[from] events::LogError),
    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
