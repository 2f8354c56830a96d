//! Conflict Records
//!
//! One record per resolved conflict, suitable for JSONL logging.

use serde::{Deserialize, Serialize};

use crate::skill::Skill;
use crate::snapshot::HumanSnapshot;

/// Which side won the score comparison of a conflict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Angel,
    Demon,
    /// Equal scores, or any comparison involving NaN
    Tie,
}

impl Winner {
    /// Decides the winner using plain IEEE-754 ordering.
    ///
    /// NaN on either side makes both `>` tests false, so it ends in a tie.
    pub fn from_scores(angel_score: f64, demon_score: f64) -> Winner {
        if angel_score > demon_score {
            Winner::Angel
        } else if demon_score > angel_score {
            Winner::Demon
        } else {
            Winner::Tie
        }
    }
}

/// A single resolved conflict between one Human, one Angel and one Demon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictRecord {
    pub conflict_id: String,
    /// 1-based round number
    pub round: u32,
    pub human: usize,
    pub angel: usize,
    pub demon: usize,
    pub angel_skill: Skill,
    pub demon_skill: Skill,
    #[serde(with = "crate::score")]
    pub angel_score: f64,
    #[serde(with = "crate::score")]
    pub demon_score: f64,
    pub winner: Winner,
    /// Whether the Human's prayer succeeded this conflict
    pub prayed: bool,
    pub before: HumanSnapshot,
    pub after: HumanSnapshot,
}

impl ConflictRecord {
    /// True when either score is NaN or infinite
    pub fn has_degenerate_score(&self) -> bool {
        !self.angel_score.is_finite() || !self.demon_score.is_finite()
    }

    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_jsonl(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

/// Generates a conflict ID from a sequence number.
pub fn generate_conflict_id(sequence: u64) -> String {
    format!("cfl_{:08}", sequence)
}
