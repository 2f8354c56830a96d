//! Human Component
//!
//! The subject of every conflict. Good, evil and faith drift over the rounds;
//! intelligence and soul are fixed at creation.

use battle_events::HumanSnapshot;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Spiritual;

/// Exclusive upper bounds for the initial random draws, and the caps applied
/// after every update.
pub mod human_limits {
    pub const MAX_INTELLIGENCE: u32 = 200;
    pub const MAX_FAITH: u32 = 100;
    pub const MAX_GOOD: u32 = 100;
    pub const MAX_EVIL: u32 = 100;
    pub const MAX_SOUL: u32 = 200;

    /// Faith above which a prayer always succeeds
    pub const PRAYER_FAITH: f64 = 50.0;
    /// Good above which a prayer always succeeds
    pub const PRAYER_GOOD: f64 = 60.0;
}

use human_limits::*;

/// A Human's moral and cognitive attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Human {
    pub intelligence: f64,
    pub faith: f64,
    pub good: f64,
    pub evil: f64,
    /// Carried for reporting; no rule reads it
    pub soul: f64,
}

impl Human {
    pub fn new(intelligence: f64, faith: f64, good: f64, evil: f64, soul: f64) -> Self {
        Self {
            intelligence,
            faith,
            good,
            evil,
            soul,
        }
    }

    /// Draws every attribute uniformly as a whole number from its range.
    ///
    /// Draw order is intelligence, faith, good, evil, soul.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let intelligence = rng.gen_range(0..MAX_INTELLIGENCE) as f64;
        let faith = rng.gen_range(0..MAX_FAITH) as f64;
        let good = rng.gen_range(0..MAX_GOOD) as f64;
        let evil = rng.gen_range(0..MAX_EVIL) as f64;
        let soul = rng.gen_range(0..MAX_SOUL) as f64;
        Self::new(intelligence, faith, good, evil, soul)
    }

    pub fn snapshot(&self) -> HumanSnapshot {
        HumanSnapshot {
            good: self.good,
            evil: self.evil,
            faith: self.faith,
            intelligence: self.intelligence,
            soul: self.soul,
        }
    }

    /// True when good, evil and faith all lie in `[0, 100]`
    pub fn within_bounds(&self) -> bool {
        let in_range = |v: f64, max: u32| (0.0..=max as f64).contains(&v);
        in_range(self.good, MAX_GOOD) && in_range(self.evil, MAX_EVIL) && in_range(self.faith, MAX_FAITH)
    }
}

impl Spiritual for Human {
    fn prays(&self) -> bool {
        self.faith > PRAYER_FAITH || self.good > PRAYER_GOOD
    }
}
