use rand::Rng;

use crate::model::stats::Stats;

pub const HEALTH_DEATH_THRESHOLD: i32 = -50;
pub const ENERGY_DEATH_THRESHOLD: i32 = -50;
pub const HAPPINESS_DEATH_THRESHOLD: i32 = -30;

/// Dampening applied to event-authored death chances so they stay
/// survivable in aggregate. Tunable constant, not a derived law; kept
/// at 0.1 for compatibility with existing event data.
pub const DEATH_CHANCE_DAMPENING: f64 = 0.1;

/// Whether the character dies in the post-mutation check. Deterministic
/// thresholds are sufficient on their own; the probabilistic branch only
/// rolls when an event carried a death chance. Never mutates state;
/// the caller applies the lifecycle transition.
pub fn check_death(
    stats: &Stats,
    death_chance: f64,
    difficulty: f64,
    rng: &mut dyn rand::RngCore,
) -> bool {
    if stats.health <= HEALTH_DEATH_THRESHOLD
        || stats.energy <= ENERGY_DEATH_THRESHOLD
        || stats.happiness <= HAPPINESS_DEATH_THRESHOLD
    {
        return true;
    }
    if death_chance > 0.0 {
        let adjusted = death_chance * difficulty * DEATH_CHANCE_DAMPENING;
        return rng.random_range(0.0..1.0) < adjusted;
    }
    false
}

/// Human-readable cause, in the same priority order as the deterministic
/// checks.
pub fn death_cause(stats: &Stats, death_chance: f64) -> &'static str {
    if stats.health <= HEALTH_DEATH_THRESHOLD {
        "Critical health failure"
    } else if stats.energy <= ENERGY_DEATH_THRESHOLD {
        "Total exhaustion"
    } else if stats.happiness <= HAPPINESS_DEATH_THRESHOLD {
        "Lost the will to live"
    } else if death_chance > 0.0 {
        "Unfortunate accident"
    } else {
        "Unknown causes"
    }
}
