//! Skill Kinds
//!
//! The six skills a celestial combatant can use in a conflict.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six scoring skills, indexed 0 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    Deceive,
    Guide,
    Protect,
    Tempt,
    Seduce,
    Test,
}

impl Skill {
    /// Number of distinct skills
    pub const COUNT: usize = 6;

    /// All skills in index order.
    pub const ALL: [Skill; Skill::COUNT] = [
        Skill::Deceive,
        Skill::Guide,
        Skill::Protect,
        Skill::Tempt,
        Skill::Seduce,
        Skill::Test,
    ];

    /// Returns the skill for an index in `0..6`.
    pub fn from_index(index: usize) -> Option<Skill> {
        Self::ALL.get(index).copied()
    }

    /// Returns the fixed index of this skill.
    pub fn index(&self) -> usize {
        match self {
            Skill::Deceive => 0,
            Skill::Guide => 1,
            Skill::Protect => 2,
            Skill::Tempt => 3,
            Skill::Seduce => 4,
            Skill::Test => 5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Skill::Deceive => "deceive",
            Skill::Guide => "guide",
            Skill::Protect => "protect",
            Skill::Tempt => "tempt",
            Skill::Seduce => "seduce",
            Skill::Test => "test",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
