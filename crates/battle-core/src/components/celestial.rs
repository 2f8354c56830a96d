//! Celestial Combatants
//!
//! Angels and Demons share one capability set of six skills. Each kind gives
//! real formulas to two of them and leaves the other four inert at zero.
//!
//! The formulas are applied as written. A negative square-root operand gives
//! NaN and a zero denominator gives an infinity or NaN; these are ordinary
//! scores and are never guarded or turned into errors.

use battle_events::Skill;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::human::Human;
use super::Spiritual;

/// Exclusive upper bounds for a combatant's random attributes
pub mod celestial_limits {
    pub const MAX_FAITH: u32 = 200;
    pub const MAX_GOOD: u32 = 10;
    pub const MAX_EVIL: u32 = 200;
}

/// Faith/good/evil triple carried by every combatant, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct CelestialAttributes {
    faith: u32,
    good: u32,
    evil: u32,
}

impl CelestialAttributes {
    fn random<R: Rng>(rng: &mut R) -> Self {
        use celestial_limits::*;
        let faith = rng.gen_range(0..MAX_FAITH);
        let good = rng.gen_range(0..MAX_GOOD);
        let evil = rng.gen_range(0..MAX_EVIL);
        Self { faith, good, evil }
    }

    /// `sqrt(good² - evil²)`, NaN whenever evil outweighs good
    fn purity(&self) -> f64 {
        let good = self.good as f64;
        let evil = self.evil as f64;
        (good.powi(2) - evil.powi(2)).sqrt()
    }
}

/// The six scoring skills a combatant can use against a Human.
///
/// Only `deceive` sees the Angel taking part in the conflict; every other
/// skill scores from the Human (and the combatant itself) alone.
pub trait SkillSet {
    fn deceive(&self, human: &Human, opposing_angel: &Angel) -> f64;
    fn guide(&self, human: &Human) -> f64;
    fn protect(&self, human: &Human) -> f64;
    fn tempt(&self, human: &Human) -> f64;
    fn seduce(&self, human: &Human) -> f64;
    fn test(&self, human: &Human) -> f64;

    /// Scores `skill` against `human`.
    fn strike(&self, skill: Skill, human: &Human, opposing_angel: &Angel) -> f64 {
        match skill {
            Skill::Deceive => self.deceive(human, opposing_angel),
            Skill::Guide => self.guide(human),
            Skill::Protect => self.protect(human),
            Skill::Tempt => self.tempt(human),
            Skill::Seduce => self.seduce(human),
            Skill::Test => self.test(human),
        }
    }
}

/// `sqrt(good² - evil² - intelligence)` of a Human
fn moral_margin(human: &Human) -> f64 {
    (human.good.powi(2) - human.evil.powi(2) - human.intelligence).sqrt()
}

// ============================================================================
// Angel
// ============================================================================

/// Benevolent combatant: scores with guide, protect and test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Angel {
    attributes: CelestialAttributes,
}

impl Angel {
    pub fn new(faith: u32, good: u32, evil: u32) -> Self {
        Self {
            attributes: CelestialAttributes { faith, good, evil },
        }
    }

    /// Draws faith, good and evil in that order.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            attributes: CelestialAttributes::random(rng),
        }
    }

    pub fn faith(&self) -> u32 {
        self.attributes.faith
    }

    pub fn good(&self) -> u32 {
        self.attributes.good
    }

    pub fn evil(&self) -> u32 {
        self.attributes.evil
    }
}

impl Spiritual for Angel {
    fn prays(&self) -> bool {
        true
    }
}

impl SkillSet for Angel {
    fn deceive(&self, _human: &Human, _opposing_angel: &Angel) -> f64 {
        0.0
    }

    fn guide(&self, human: &Human) -> f64 {
        moral_margin(human) / (human.faith.powi(2) - human.evil)
    }

    fn protect(&self, human: &Human) -> f64 {
        human.faith * ((human.good - human.evil) / self.faith() as f64)
    }

    fn tempt(&self, _human: &Human) -> f64 {
        0.0
    }

    fn seduce(&self, _human: &Human) -> f64 {
        0.0
    }

    fn test(&self, human: &Human) -> f64 {
        (human.faith - human.evil.powi(2) / human.intelligence) / self.attributes.purity()
    }
}

// ============================================================================
// Demon
// ============================================================================

/// Malevolent combatant: scores with deceive, tempt and seduce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demon {
    attributes: CelestialAttributes,
}

impl Demon {
    pub fn new(faith: u32, good: u32, evil: u32) -> Self {
        Self {
            attributes: CelestialAttributes { faith, good, evil },
        }
    }

    /// Draws faith, good and evil in that order.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            attributes: CelestialAttributes::random(rng),
        }
    }

    pub fn faith(&self) -> u32 {
        self.attributes.faith
    }

    pub fn good(&self) -> u32 {
        self.attributes.good
    }

    pub fn evil(&self) -> u32 {
        self.attributes.evil
    }
}

impl Spiritual for Demon {
    fn prays(&self) -> bool {
        false
    }
}

impl SkillSet for Demon {
    fn deceive(&self, human: &Human, opposing_angel: &Angel) -> f64 {
        let angel_faith = opposing_angel.faith() as f64;
        (human.faith / angel_faith) * ((human.good - human.evil) / angel_faith)
    }

    fn guide(&self, _human: &Human) -> f64 {
        0.0
    }

    fn protect(&self, _human: &Human) -> f64 {
        0.0
    }

    fn tempt(&self, human: &Human) -> f64 {
        (-human.faith + human.evil / human.intelligence) / self.attributes.purity()
    }

    fn seduce(&self, human: &Human) -> f64 {
        moral_margin(human) / (human.faith.powi(2) - human.good.powi(2))
    }

    fn test(&self, _human: &Human) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn human(intelligence: f64, faith: f64, good: f64, evil: f64) -> Human {
        Human::new(intelligence, faith, good, evil, 0.0)
    }

    #[test]
    fn test_demon_deceive_uses_opposing_angel() {
        let h = human(100.0, 80.0, 70.0, 10.0);
        let demon = Demon::new(150, 2, 180);
        let angel = Angel::new(20, 5, 50);
        assert_eq!(demon.deceive(&h, &angel), 12.0);

        let other_angel = Angel::new(40, 5, 50);
        assert_eq!(demon.deceive(&h, &other_angel), 3.0);
    }

    #[test]
    fn test_angel_protect() {
        let h = human(100.0, 50.0, 80.0, 20.0);
        let angel = Angel::new(25, 3, 90);
        assert_eq!(angel.protect(&h), 120.0);
    }

    #[test]
    fn test_angel_guide() {
        // sqrt(100 - 36 - 0) / (4 - 6) = 8 / -2
        let h = human(0.0, 2.0, 10.0, 6.0);
        assert_eq!(Angel::new(10, 1, 1).guide(&h), -4.0);
    }

    #[test]
    fn test_angel_test() {
        // (50 - 400/100) / sqrt(25 - 9) = 46 / 4
        let h = human(100.0, 50.0, 70.0, 20.0);
        assert_eq!(Angel::new(10, 5, 3).test(&h), 11.5);
    }

    #[test]
    fn test_demon_tempt() {
        // (-20 + 40/10) / sqrt(25 - 9) = -16 / 4
        let h = human(10.0, 20.0, 30.0, 40.0);
        assert_eq!(Demon::new(10, 5, 3).tempt(&h), -4.0);
    }

    #[test]
    fn test_demon_seduce() {
        // sqrt(100 - 36 - 0) / (36 - 100) = 8 / -64
        let h = human(0.0, 6.0, 10.0, 6.0);
        assert_eq!(Demon::new(10, 1, 1).seduce(&h), -0.125);
    }

    #[test]
    fn test_inert_skills_are_zero() {
        let h = human(100.0, 80.0, 70.0, 10.0);
        let angel = Angel::new(20, 5, 50);
        let demon = Demon::new(150, 2, 180);

        assert_eq!(angel.deceive(&h, &angel), 0.0);
        assert_eq!(angel.tempt(&h), 0.0);
        assert_eq!(angel.seduce(&h), 0.0);
        assert_eq!(demon.guide(&h), 0.0);
        assert_eq!(demon.protect(&h), 0.0);
        assert_eq!(demon.test(&h), 0.0);
    }

    #[test]
    fn test_negative_root_gives_nan() {
        // evil outweighs good for both the Human and the combatants
        let h = human(50.0, 30.0, 10.0, 60.0);
        let angel = Angel::new(20, 3, 100);
        let demon = Demon::new(20, 3, 100);

        assert!(angel.guide(&h).is_nan());
        assert!(angel.test(&h).is_nan());
        assert!(demon.seduce(&h).is_nan());
        assert!(demon.tempt(&h).is_nan());
    }

    #[test]
    fn test_zero_denominators_propagate() {
        // faith² == evil with a positive root: +inf
        let h = human(0.0, 3.0, 10.0, 9.0);
        assert_eq!(Angel::new(10, 1, 1).guide(&h), f64::INFINITY);

        // zero angel faith with good > evil: +inf
        let h = human(100.0, 50.0, 80.0, 20.0);
        assert_eq!(Angel::new(0, 1, 1).protect(&h), f64::INFINITY);
        assert!(Demon::new(5, 1, 1).deceive(&h, &Angel::new(0, 1, 1)).is_infinite());

        // zero intelligence with positive evil: -inf
        let h = human(0.0, 50.0, 70.0, 20.0);
        assert_eq!(Angel::new(10, 5, 3).test(&h), f64::NEG_INFINITY);

        // zero intelligence with zero evil: NaN
        let h = human(0.0, 50.0, 70.0, 0.0);
        assert!(Demon::new(10, 5, 3).tempt(&h).is_nan());
    }

    #[test]
    fn test_strike_dispatches_by_skill() {
        let h = human(100.0, 50.0, 80.0, 20.0);
        let angel = Angel::new(25, 3, 90);
        let demon = Demon::new(150, 2, 180);

        assert_eq!(angel.strike(Skill::Protect, &h, &angel), angel.protect(&h));
        assert_eq!(demon.strike(Skill::Deceive, &h, &angel), demon.deceive(&h, &angel));
        for skill in Skill::ALL {
            let expected = match skill {
                Skill::Guide => angel.guide(&h),
                Skill::Protect => angel.protect(&h),
                Skill::Test => angel.test(&h),
                _ => 0.0,
            };
            let score = angel.strike(skill, &h, &angel);
            assert!(score == expected || (score.is_nan() && expected.is_nan()));
        }
    }

    #[test]
    fn test_only_deceive_depends_on_angel() {
        let h = human(100.0, 80.0, 70.0, 10.0);
        let demon = Demon::new(150, 6, 2);
        let first = Angel::new(20, 5, 50);
        let second = Angel::new(120, 1, 3);

        for skill in Skill::ALL {
            let a = demon.strike(skill, &h, &first);
            let b = demon.strike(skill, &h, &second);
            if skill == Skill::Deceive {
                assert_ne!(a, b);
            } else {
                assert!(a == b || (a.is_nan() && b.is_nan()), "{} changed", skill);
            }
        }
    }

    #[test]
    fn test_prayer_is_fixed_per_kind() {
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..20 {
            assert!(Angel::random(&mut rng).prays());
            assert!(!Demon::random(&mut rng).prays());
        }
    }

    #[test]
    fn test_random_combatant_ranges() {
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..500 {
            let angel = Angel::random(&mut rng);
            assert!(angel.faith() < 200 && angel.good() < 10 && angel.evil() < 200);
            let demon = Demon::random(&mut rng);
            assert!(demon.faith() < 200 && demon.good() < 10 && demon.evil() < 200);
        }
    }
}
