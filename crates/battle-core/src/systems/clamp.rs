//! Attribute Clamping

use crate::components::human::human_limits::{MAX_EVIL, MAX_FAITH, MAX_GOOD};
use crate::components::Human;

/// Caps good, evil and faith at their maxima.
///
/// Floors at zero are applied by the rules that decrement, so after this
/// step all three lie in `[0, 100]`. Intelligence and soul are never touched.
pub fn clamp_attributes(human: &mut Human) {
    human.good = human.good.min(MAX_GOOD as f64);
    human.evil = human.evil.min(MAX_EVIL as f64);
    human.faith = human.faith.min(MAX_FAITH as f64);
}
