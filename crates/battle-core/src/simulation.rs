//! Round Loop
//!
//! Drives a whole run: every round, every Human faces one randomly chosen
//! Angel and Demon. A single seeded RNG feeds population creation, partner
//! selection and skill selection, so a seed reproduces a run exactly.

use battle_events::{generate_conflict_id, ConflictRecord, FinalReport, HumanVerdict};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::components::Judge;
use crate::config::{Config, ConfigError, MAX_SEED};
use crate::setup::{spawn_population, Population};
use crate::systems::resolve;

/// A seeded run over a fixed population
pub struct Simulation {
    population: Population,
    judge: Judge,
    rng: SmallRng,
    seed: u64,
    rounds: u32,
    rounds_completed: u32,
    conflicts_resolved: u64,
}

impl Simulation {
    /// Builds a run from configuration, spawning the population.
    ///
    /// Without a configured seed one is drawn from entropy, kept within
    /// [`MAX_SEED`] so it can be written back to battle.toml.
    /// [`seed`](Self::seed) reports it either way.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config
            .simulation
            .seed
            .unwrap_or_else(|| rand::random::<u64>() & MAX_SEED);
        let mut rng = SmallRng::seed_from_u64(seed);
        let population = spawn_population(&config.population, &mut rng);
        let judge = population.judge();

        info!(seed, rounds = config.simulation.rounds, "simulation created");

        Ok(Self {
            population,
            judge,
            rng,
            seed,
            rounds: config.simulation.rounds,
            rounds_completed: 0,
            conflicts_resolved: 0,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Total rounds this run is configured for
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn rounds_completed(&self) -> u32 {
        self.rounds_completed
    }

    pub fn is_finished(&self) -> bool {
        self.rounds_completed >= self.rounds
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn judge(&self) -> &Judge {
        &self.judge
    }

    /// Stages one conflict for Human `human` during the current round.
    ///
    /// Returns `None` without drawing from the RNG when `human` is out of
    /// range or every round has already run.
    pub fn resolve_human(&mut self, human: usize) -> Option<ConflictRecord> {
        if self.is_finished() || human >= self.population.humans.len() {
            return None;
        }
        let round = self.rounds_completed + 1;
        let (angel_idx, demon_idx) = self.population.pick_combatants(&mut self.rng);
        let angel = &self.population.angels[angel_idx];
        let demon = &self.population.demons[demon_idx];
        let subject = &mut self.population.humans[human];

        let before = subject.snapshot();
        let outcome = resolve(subject, angel, demon, &mut self.rng);
        let after = subject.snapshot();

        self.conflicts_resolved += 1;
        Some(ConflictRecord {
            conflict_id: generate_conflict_id(self.conflicts_resolved),
            round,
            human,
            angel: angel_idx,
            demon: demon_idx,
            angel_skill: outcome.angel_skill,
            demon_skill: outcome.demon_skill,
            angel_score: outcome.angel_score,
            demon_score: outcome.demon_score,
            winner: outcome.winner,
            prayed: outcome.prayed,
            before,
            after,
        })
    }

    /// Marks the current round as done.
    pub fn finish_round(&mut self) {
        self.rounds_completed += 1;
        debug!(round = self.rounds_completed, "round finished");
    }

    /// Runs the next round over every Human in order.
    pub fn run_round(&mut self) -> Vec<ConflictRecord> {
        let records = (0..self.population.humans.len())
            .filter_map(|human| self.resolve_human(human))
            .collect();
        self.finish_round();
        records
    }

    /// Runs every remaining round.
    pub fn run_to_end(&mut self) -> Vec<ConflictRecord> {
        let mut records = Vec::new();
        while !self.is_finished() {
            records.extend(self.run_round());
        }
        records
    }

    /// Judges every Human in their current state.
    pub fn final_report(&self) -> FinalReport {
        let verdicts: Vec<HumanVerdict> = self
            .population
            .humans
            .iter()
            .enumerate()
            .map(|(index, human)| HumanVerdict {
                human: index,
                verdict: self.judge.verdict(human),
                state: human.snapshot(),
            })
            .collect();

        let report = FinalReport {
            seed: self.seed,
            rounds: self.rounds_completed,
            humans: self.population.humans.len(),
            angels: self.population.angels.len(),
            demons: self.population.demons.len(),
            verdicts,
        };
        info!(
            saved = report.saved_count(),
            in_danger = report.in_danger_count(),
            total = report.humans,
            "judgment complete"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> Config {
        let mut config = Config::default();
        config.simulation.seed = Some(seed);
        config
    }

    #[test]
    fn test_round_covers_every_human() {
        let mut sim = Simulation::new(&seeded(1)).unwrap();
        let records = sim.run_round();
        assert_eq!(records.len(), 5);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.human, i);
            assert_eq!(record.round, 1);
            assert!(record.angel < 3 && record.demon < 3);
        }
        assert_eq!(sim.rounds_completed(), 1);
    }

    #[test]
    fn test_run_to_end() {
        let mut sim = Simulation::new(&seeded(2)).unwrap();
        let records = sim.run_to_end();
        assert_eq!(records.len(), 50);
        assert!(sim.is_finished());
        assert_eq!(records.last().unwrap().conflict_id, "cfl_00000050");
        assert!(sim.run_to_end().is_empty());
    }

    #[test]
    fn test_record_after_matches_population() {
        let mut sim = Simulation::new(&seeded(3)).unwrap();
        let record = sim.resolve_human(2).unwrap();
        assert_eq!(record.round, 1);
        assert_eq!(record.after, sim.population().humans[2].snapshot());
    }

    #[test]
    fn test_resolve_human_out_of_range() {
        let mut sim = Simulation::new(&seeded(3)).unwrap();
        assert!(sim.resolve_human(5).is_none());

        // A rejected index leaves the RNG untouched
        let mut fresh = Simulation::new(&seeded(3)).unwrap();
        assert_eq!(
            sim.resolve_human(0).unwrap().to_jsonl().unwrap(),
            fresh.resolve_human(0).unwrap().to_jsonl().unwrap()
        );
    }

    #[test]
    fn test_resolve_human_follows_round_counter() {
        let mut config = seeded(6);
        config.simulation.rounds = 2;
        let mut sim = Simulation::new(&config).unwrap();
        sim.run_round();
        assert_eq!(sim.resolve_human(0).unwrap().round, 2);
        sim.finish_round();
        assert!(sim.is_finished());
        assert!(sim.resolve_human(0).is_none());
    }

    #[test]
    fn test_final_report_matches_judge() {
        let mut sim = Simulation::new(&seeded(4)).unwrap();
        sim.run_to_end();
        let report = sim.final_report();
        assert_eq!(report.seed, 4);
        assert_eq!(report.rounds, 10);
        assert_eq!(report.verdicts.len(), 5);
        for v in &report.verdicts {
            let human = &sim.population().humans[v.human];
            assert_eq!(v.verdict.is_saved(), sim.judge().is_saved(human));
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = seeded(5);
        config.population.angels = 0;
        assert!(Simulation::new(&config).is_err());
    }

    #[test]
    fn test_entropy_seed_is_reported() {
        let sim = Simulation::new(&Config::default()).unwrap();
        let mut replay_config = Config::default();
        replay_config.simulation.seed = Some(sim.seed());
        let replay = Simulation::new(&replay_config).unwrap();
        assert_eq!(
            sim.population().humans,
            replay.population().humans
        );
    }

    #[test]
    fn test_entropy_seed_fits_config_file() {
        for _ in 0..64 {
            let sim = Simulation::new(&Config::default()).unwrap();
            assert!(sim.seed() <= MAX_SEED);

            let mut config = Config::default();
            config.simulation.seed = Some(sim.seed());
            let toml = config.to_toml().unwrap();
            let reloaded = Config::from_str(&toml).unwrap();
            assert_eq!(reloaded.simulation.seed, Some(sim.seed()));
        }
    }
}
