//! Faith Update
//!
//! Every conflict ends with a prayer attempt, whatever its moral outcome.

use crate::components::{Human, Spiritual};

/// Applies the prayer attempt to `human` and reports whether it succeeded.
///
/// Success raises faith by one; failure lowers it by one, floored at zero.
/// The upper bound is left to [`clamp_attributes`](super::clamp_attributes).
pub fn apply_prayer(human: &mut Human) -> bool {
    let prayed = human.prays();
    if prayed {
        human.faith += 1.0;
    } else {
        human.faith = (human.faith - 1.0).max(0.0);
    }
    prayed
}
