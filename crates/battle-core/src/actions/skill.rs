//! Skill Selection

use battle_events::Skill;
use rand::Rng;

/// Picks one of the six skills uniformly at random.
pub fn select_skill<R: Rng>(rng: &mut R) -> Skill {
    let index = rng.gen_range(0..Skill::COUNT);
    Skill::ALL[index]
}
