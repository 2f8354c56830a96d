//! Judge Component
//!
//! The terminal classifier that decides, once all rounds are done, which
//! Humans are saved.

use battle_events::Verdict;
use serde::{Deserialize, Serialize};

use super::human::Human;

/// Minimum faith a Human needs to be saved
pub const FAITH_THRESHOLD: f64 = 60.0;

/// Read-only judge of Humans, aware of how many combatants took part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Judge {
    angels: usize,
    demons: usize,
}

impl Judge {
    pub fn new(angels: usize, demons: usize) -> Self {
        Self { angels, demons }
    }

    pub fn angels(&self) -> usize {
        self.angels
    }

    pub fn demons(&self) -> usize {
        self.demons
    }

    /// A Human is saved when good outweighs evil and faith reaches the threshold.
    pub fn is_saved(&self, human: &Human) -> bool {
        human.good > human.evil && human.faith >= FAITH_THRESHOLD
    }

    pub fn verdict(&self, human: &Human) -> Verdict {
        if self.is_saved(human) {
            Verdict::Saved
        } else {
            Verdict::InDanger
        }
    }
}
