use rand::Rng;

use crate::catalog::{ContentCatalog, Disease};
use crate::model::effect::SkillDeltas;

pub const NATURAL_DEATH_AGE: u32 = 80;
pub const NATURAL_DEATH_CHANCE: f64 = 0.10;
pub const NATURAL_DEATH_CAUSE: &str = "Natural causes";

pub const DISEASE_ONSET_AGE: u32 = 60;
pub const DISEASE_ONSET_CHANCE: f64 = 0.10;

/// Age-banded skill drift, selected by the age reached after an aging
/// step and applied once per step.
pub fn drift_for_age(age: u32) -> SkillDeltas {
    match age {
        0..=19 => SkillDeltas {
            intelligence: Some(2),
            physical: Some(1),
            ..SkillDeltas::default()
        },
        20..=49 => SkillDeltas {
            intelligence: Some(1),
            business: Some(1),
            ..SkillDeltas::default()
        },
        50..=69 => SkillDeltas {
            physical: Some(-1),
            ..SkillDeltas::default()
        },
        _ => SkillDeltas {
            physical: Some(-2),
            intelligence: Some(-1),
            ..SkillDeltas::default()
        },
    }
}

/// One natural-death draw for the age reached. Only fires from
/// `NATURAL_DEATH_AGE` up.
pub fn natural_death_roll(age: u32, rng: &mut dyn rand::RngCore) -> bool {
    age >= NATURAL_DEATH_AGE && rng.random_range(0.0..1.0) < NATURAL_DEATH_CHANCE
}

/// One late-life onset draw: from `DISEASE_ONSET_AGE` up, a character
/// with no current disease contracts one chosen uniformly from the
/// age-related pool.
pub fn roll_disease_onset<'a>(
    age: u32,
    current_disease: Option<&str>,
    catalog: &'a ContentCatalog,
    rng: &mut dyn rand::RngCore,
) -> Option<&'a Disease> {
    if age < DISEASE_ONSET_AGE || current_disease.is_some() {
        return None;
    }
    let pool = catalog.age_related_diseases();
    if pool.is_empty() {
        return None;
    }
    if rng.random_range(0.0..1.0) >= DISEASE_ONSET_CHANCE {
        return None;
    }
    Some(pool[rng.random_range(0..pool.len())])
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn drift_bands_match_age() {
        let young = drift_for_age(10);
        assert_eq!(young.intelligence, Some(2));
        assert_eq!(young.physical, Some(1));

        let adult = drift_for_age(35);
        assert_eq!(adult.intelligence, Some(1));
        assert_eq!(adult.business, Some(1));
        assert_eq!(adult.physical, None);

        let older = drift_for_age(60);
        assert_eq!(older.physical, Some(-1));
        assert_eq!(older.intelligence, None);

        let elder = drift_for_age(85);
        assert_eq!(elder.physical, Some(-2));
        assert_eq!(elder.intelligence, Some(-1));
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(drift_for_age(19).intelligence, Some(2));
        assert_eq!(drift_for_age(20).intelligence, Some(1));
        assert_eq!(drift_for_age(49).business, Some(1));
        assert_eq!(drift_for_age(50).physical, Some(-1));
        assert_eq!(drift_for_age(69).physical, Some(-1));
        assert_eq!(drift_for_age(70).physical, Some(-2));
    }

    #[test]
    fn no_natural_death_before_eighty() {
        for seed in 0..50 {
            let mut rng = SmallRng::seed_from_u64(seed);
            assert!(!natural_death_roll(79, &mut rng));
        }
    }

    #[test]
    fn natural_death_rate_is_roughly_ten_percent() {
        let mut deaths = 0;
        for seed in 0..500 {
            let mut rng = SmallRng::seed_from_u64(seed);
            if natural_death_roll(80, &mut rng) {
                deaths += 1;
            }
        }
        let rate = deaths as f64 / 500.0;
        assert!(rate > 0.04, "rate {rate} too low");
        assert!(rate < 0.18, "rate {rate} too high");
    }

    #[test]
    fn onset_only_for_seniors_without_disease() {
        let catalog = ContentCatalog::builtin();
        for seed in 0..50 {
            let mut rng = SmallRng::seed_from_u64(seed);
            assert!(roll_disease_onset(59, None, &catalog, &mut rng).is_none());
            let mut rng = SmallRng::seed_from_u64(seed);
            assert!(roll_disease_onset(65, Some("arthritis"), &catalog, &mut rng).is_none());
        }
    }

    #[test]
    fn onset_picks_from_the_age_related_pool() {
        let catalog = ContentCatalog::builtin();
        let mut contracted = 0;
        for seed in 0..500 {
            let mut rng = SmallRng::seed_from_u64(seed);
            if let Some(disease) = roll_disease_onset(70, None, &catalog, &mut rng) {
                assert!(disease.age_related, "{}", disease.id);
                contracted += 1;
            }
        }
        let rate = contracted as f64 / 500.0;
        assert!(rate > 0.04, "rate {rate} too low");
        assert!(rate < 0.18, "rate {rate} too high");
    }
}
