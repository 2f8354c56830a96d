//! Invariant tests
//!
//! Long seeded runs checking the properties every conflict must preserve.

use battle_core::{Config, Simulation, Winner};

fn config(seed: u64, humans: usize, rounds: u32) -> Config {
    let mut config = Config::default();
    config.simulation.seed = Some(seed);
    config.simulation.rounds = rounds;
    config.population.humans = humans;
    config
}

#[test]
fn test_attributes_stay_in_bounds() {
    for seed in 0..20 {
        let mut sim = Simulation::new(&config(seed, 20, 200)).unwrap();
        for record in sim.run_to_end() {
            for state in [record.before, record.after] {
                assert!((0.0..=100.0).contains(&state.good), "good {}", state.good);
                assert!((0.0..=100.0).contains(&state.evil), "evil {}", state.evil);
                assert!((0.0..=100.0).contains(&state.faith), "faith {}", state.faith);
            }
        }
        assert!(sim.population().humans.iter().all(|h| h.within_bounds()));
    }
}

#[test]
fn test_combatants_never_change() {
    let mut sim = Simulation::new(&config(11, 10, 100)).unwrap();
    let angels = sim.population().angels.clone();
    let demons = sim.population().demons.clone();

    sim.run_to_end();

    assert_eq!(sim.population().angels, angels);
    assert_eq!(sim.population().demons, demons);
}

#[test]
fn test_population_size_constant() {
    let mut sim = Simulation::new(&config(12, 9, 30)).unwrap();
    let records = sim.run_to_end();
    assert_eq!(records.len(), 9 * 30);
    assert_eq!(sim.population().humans.len(), 9);
    assert_eq!(sim.final_report().verdicts.len(), 9);
}

#[test]
fn test_intelligence_and_soul_fixed() {
    let mut sim = Simulation::new(&config(13, 10, 50)).unwrap();
    let initial: Vec<(f64, f64)> = sim
        .population()
        .humans
        .iter()
        .map(|h| (h.intelligence, h.soul))
        .collect();

    sim.run_to_end();

    let last: Vec<(f64, f64)> = sim
        .population()
        .humans
        .iter()
        .map(|h| (h.intelligence, h.soul))
        .collect();
    assert_eq!(initial, last);
}

#[test]
fn test_moral_shift_follows_winner() {
    let mut sim = Simulation::new(&config(14, 20, 100)).unwrap();
    for r in sim.run_to_end() {
        match r.winner {
            Winner::Angel => {
                assert_eq!(r.after.good, (r.before.good + 1.0).min(100.0));
                assert_eq!(r.after.evil, (r.before.evil - 1.0).max(0.0));
            }
            Winner::Demon => {
                assert_eq!(r.after.evil, (r.before.evil + 1.0).min(100.0));
                assert_eq!(r.after.good, (r.before.good - 1.0).max(0.0));
            }
            Winner::Tie => {
                assert_eq!(r.after.good, r.before.good);
                assert_eq!(r.after.evil, r.before.evil);
            }
        }
        assert_eq!(r.winner, Winner::from_scores(r.angel_score, r.demon_score));
    }
}

#[test]
fn test_faith_moves_every_conflict() {
    let mut sim = Simulation::new(&config(15, 20, 100)).unwrap();
    for r in sim.run_to_end() {
        if r.prayed {
            assert_eq!(r.after.faith, (r.before.faith + 1.0).min(100.0));
        } else {
            assert_eq!(r.after.faith, (r.before.faith - 1.0).max(0.0));
        }
    }
}

#[test]
fn test_degenerate_scores_do_not_halt() {
    let mut sim = Simulation::new(&config(16, 20, 200)).unwrap();
    let records = sim.run_to_end();
    // Demons almost always have evil > good, so tempt alone yields NaN often.
    assert!(records.iter().any(|r| r.has_degenerate_score()));
    for r in records.iter().filter(|r| r.angel_score.is_nan() || r.demon_score.is_nan()) {
        assert_eq!(r.winner, Winner::Tie);
    }
}

#[test]
fn test_verdicts_follow_rule() {
    let mut sim = Simulation::new(&config(17, 30, 50)).unwrap();
    sim.run_to_end();
    for v in sim.final_report().verdicts {
        let expected = v.state.good > v.state.evil && v.state.faith >= 60.0;
        assert_eq!(v.verdict.is_saved(), expected);
    }
}
