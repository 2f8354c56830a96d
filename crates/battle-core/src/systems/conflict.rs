//! Conflict Resolution
//!
//! One conflict pits an Angel and a Demon against each other over a single
//! Human. Each side picks a skill at random, both skills are scored against
//! the Human, and the higher score shifts the Human's morality by one point.
//!
//! Scores are compared with plain IEEE-754 ordering. A NaN on either side
//! fails both strict comparisons and the conflict is a tie; infinities
//! compare like any other value. Degenerate scores are accepted results of
//! the formulas, not errors.

use battle_events::{Skill, Winner};
use rand::Rng;
use tracing::debug;

use crate::actions::select_skill;
use crate::components::{Angel, Demon, Human, SkillSet};

use super::clamp::clamp_attributes;
use super::faith::apply_prayer;

/// What happened in a single conflict
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConflictOutcome {
    pub angel_skill: Skill,
    pub demon_skill: Skill,
    pub angel_score: f64,
    pub demon_score: f64,
    pub winner: Winner,
    /// Whether the Human's prayer succeeded afterwards
    pub prayed: bool,
}

/// Resolves a conflict over `human`, drawing both skills from `rng`.
///
/// The Angel's skill is drawn before the Demon's.
pub fn resolve<R: Rng>(
    human: &mut Human,
    angel: &Angel,
    demon: &Demon,
    rng: &mut R,
) -> ConflictOutcome {
    let angel_skill = select_skill(rng);
    let demon_skill = select_skill(rng);
    resolve_with_skills(human, angel, demon, angel_skill, demon_skill)
}

/// Resolves a conflict with skills already chosen.
///
/// Steps, in order: score both skills, apply the moral shift, attempt the
/// prayer, clamp. The combatants are only read.
pub fn resolve_with_skills(
    human: &mut Human,
    angel: &Angel,
    demon: &Demon,
    angel_skill: Skill,
    demon_skill: Skill,
) -> ConflictOutcome {
    let angel_score = angel.strike(angel_skill, human, angel);
    // The Demon's deceive is measured against this conflict's Angel
    let demon_score = demon.strike(demon_skill, human, angel);

    let winner = Winner::from_scores(angel_score, demon_score);
    match winner {
        Winner::Angel => {
            human.good += 1.0;
            human.evil = (human.evil - 1.0).max(0.0);
        }
        Winner::Demon => {
            human.evil += 1.0;
            human.good = (human.good - 1.0).max(0.0);
        }
        Winner::Tie => {}
    }

    let prayed = apply_prayer(human);
    clamp_attributes(human);

    debug!(
        angel_skill = %angel_skill,
        demon_skill = %demon_skill,
        angel_score,
        demon_score,
        ?winner,
        prayed,
        "conflict resolved"
    );

    ConflictOutcome {
        angel_skill,
        demon_skill,
        angel_score,
        demon_score,
        winner,
        prayed,
    }
}
