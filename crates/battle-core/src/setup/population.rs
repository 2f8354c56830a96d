//! Population Spawning
//!
//! Creates Angels, Demons and Humans with randomly drawn attributes.

use rand::Rng;
use tracing::info;

use crate::components::{Angel, Demon, Human, Judge};
use crate::config::PopulationConfig;

/// Every entity taking part in a run
#[derive(Debug, Clone)]
pub struct Population {
    pub humans: Vec<Human>,
    pub angels: Vec<Angel>,
    pub demons: Vec<Demon>,
}

impl Population {
    /// Judge aware of this population's combatant counts
    pub fn judge(&self) -> Judge {
        Judge::new(self.angels.len(), self.demons.len())
    }

    /// Picks one Angel and one Demon uniformly at random, by index.
    ///
    /// Both lists must be non-empty; the configuration guarantees it.
    pub fn pick_combatants<R: Rng>(&self, rng: &mut R) -> (usize, usize) {
        let angel = rng.gen_range(0..self.angels.len());
        let demon = rng.gen_range(0..self.demons.len());
        (angel, demon)
    }
}

/// Spawns the configured number of each entity.
///
/// Angels are created first, then Demons, then Humans, all from `rng`.
pub fn spawn_population<R: Rng>(config: &PopulationConfig, rng: &mut R) -> Population {
    let angels: Vec<Angel> = (0..config.angels).map(|_| Angel::random(rng)).collect();
    let demons: Vec<Demon> = (0..config.demons).map(|_| Demon::random(rng)).collect();
    let humans: Vec<Human> = (0..config.humans).map(|_| Human::random(rng)).collect();

    info!(
        humans = humans.len(),
        angels = angels.len(),
        demons = demons.len(),
        "population spawned"
    );

    Population {
        humans,
        angels,
        demons,
    }
}
