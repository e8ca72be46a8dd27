use crate::catalog::EventPattern;
use crate::model::event::DecisionBranch;

const CHILD_AGE_LIMIT: u32 = 12;
const YOUNG_ADULT_MIN: u32 = 18;
const YOUNG_ADULT_MAX: u32 = 29;
const ADULT_MIN: u32 = 30;
const ADULT_MAX: u32 = 59;
const SENIOR_MIN: u32 = 60;

const CHILD_HEALTH_SCALE: f64 = 1.5;
const CHILD_INTELLIGENCE_BONUS: i32 = 2;
const YOUNG_ADULT_SOCIAL_SCALE: f64 = 1.5;
const ADULT_WEALTH_SCALE: f64 = 1.5;
const SENIOR_HEALTH_SCALE: f64 = 1.5;
const SENIOR_RISK_DAMPING: f64 = 0.7;

/// Index of the conventionally-risky branch whose health penalties are
/// dampened for seniors.
const RISK_BRANCH: usize = 2;

fn scale_i32(value: i32, factor: f64) -> i32 {
    (value as f64 * factor).round() as i32
}

fn scale_i64(value: i64, factor: f64) -> i64 {
    (value as f64 * factor).round() as i64
}

/// Age-adapt a base template into the branches of a new decision point.
/// Applied once per generated event, never cumulatively; ages 13–17 get
/// the base template unmodified.
pub fn adapt_for_age(pattern: &EventPattern, age: u32) -> [DecisionBranch; 3] {
    let mut branches = pattern.branches.clone();

    for (index, branch) in branches.iter_mut().enumerate() {
        let effect = &mut branch.effect;

        if age < CHILD_AGE_LIMIT {
            if let Some(health) = effect.health {
                effect.health = Some(scale_i32(health, CHILD_HEALTH_SCALE));
            }
            let skills = effect.skills.get_or_insert_with(Default::default);
            skills.intelligence =
                Some(skills.intelligence.unwrap_or(0) + CHILD_INTELLIGENCE_BONUS);
        } else if (YOUNG_ADULT_MIN..=YOUNG_ADULT_MAX).contains(&age) {
            if let Some(ref mut relationships) = effect.relationships {
                if let Some(friends) = relationships.friends {
                    relationships.friends = Some(scale_i32(friends, YOUNG_ADULT_SOCIAL_SCALE));
                }
                if let Some(romantic) = relationships.romantic {
                    relationships.romantic = Some(scale_i32(romantic, YOUNG_ADULT_SOCIAL_SCALE));
                }
            }
        } else if (ADULT_MIN..=ADULT_MAX).contains(&age) {
            if let Some(wealth) = effect.wealth {
                effect.wealth = Some(scale_i64(wealth, ADULT_WEALTH_SCALE));
            }
        } else if age >= SENIOR_MIN
            && let Some(health) = effect.health
        {
            if health > 0 {
                effect.health = Some(scale_i32(health, SENIOR_HEALTH_SCALE));
            } else if health < 0 && index == RISK_BRANCH {
                effect.health = Some(scale_i32(health, SENIOR_RISK_DAMPING));
            }
        }
    }

    branches
}
