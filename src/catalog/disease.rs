use crate::model::effect::{EventEffect, SkillDeltas};

/// A disease the character can contract. Age-related entries form the
/// pool for the late-life onset draw; `onset` is applied once at
/// contraction.
#[derive(Debug, Clone, PartialEq)]
pub struct Disease {
    pub id: String,
    pub name: String,
    pub age_related: bool,
    pub onset: EventEffect,
}

fn disease(id: &str, name: &str, age_related: bool, onset: EventEffect) -> Disease {
    Disease {
        id: id.to_string(),
        name: name.to_string(),
        age_related,
        onset,
    }
}

pub fn builtin() -> Vec<Disease> {
    vec![
        disease(
            "arthritis",
            "Arthritis",
            true,
            EventEffect {
                health: Some(-5),
                skills: Some(SkillDeltas {
                    physical: Some(-10),
                    ..SkillDeltas::default()
                }),
                ..EventEffect::default()
            },
        ),
        disease(
            "hypertension",
            "Hypertension",
            true,
            EventEffect {
                health: Some(-10),
                energy: Some(-5),
                ..EventEffect::default()
            },
        ),
        disease(
            "type-2-diabetes",
            "Type 2 Diabetes",
            true,
            EventEffect {
                health: Some(-10),
                energy: Some(-10),
                ..EventEffect::default()
            },
        ),
        disease(
            "heart-disease",
            "Heart Disease",
            true,
            EventEffect {
                health: Some(-20),
                energy: Some(-10),
                ..EventEffect::default()
            },
        ),
        disease(
            "dementia",
            "Dementia",
            true,
            EventEffect {
                health: Some(-5),
                skills: Some(SkillDeltas {
                    intelligence: Some(-20),
                    ..SkillDeltas::default()
                }),
                ..EventEffect::default()
            },
        ),
        disease(
            "seasonal-flu",
            "Seasonal Flu",
            false,
            EventEffect {
                health: Some(-5),
                energy: Some(-10),
                ..EventEffect::default()
            },
        ),
        disease(
            "migraine",
            "Chronic Migraine",
            false,
            EventEffect {
                happiness: Some(-5),
                energy: Some(-5),
                ..EventEffect::default()
            },
        ),
        disease(
            "asthma",
            "Asthma",
            false,
            EventEffect {
                health: Some(-5),
                skills: Some(SkillDeltas {
                    physical: Some(-5),
                    ..SkillDeltas::default()
                }),
                ..EventEffect::default()
            },
        ),
    ]
}
