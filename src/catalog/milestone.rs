use crate::model::effect::{EventEffect, SkillDeltas};

/// A one-time age-triggered reward.
#[derive(Debug, Clone, PartialEq)]
pub struct Milestone {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub reward: EventEffect,
}

fn milestone(id: &str, name: &str, age: u32, reward: EventEffect) -> Milestone {
    Milestone {
        id: id.to_string(),
        name: name.to_string(),
        age,
        reward,
    }
}

pub fn builtin() -> Vec<Milestone> {
    vec![
        milestone(
            "first-steps",
            "First Steps",
            1,
            EventEffect {
                happiness: Some(5),
                ..EventEffect::default()
            },
        ),
        milestone(
            "school-days",
            "School Days",
            6,
            EventEffect {
                skills: Some(SkillDeltas {
                    intelligence: Some(5),
                    ..SkillDeltas::default()
                }),
                ..EventEffect::default()
            },
        ),
        milestone(
            "teenager",
            "Teenager",
            13,
            EventEffect {
                skills: Some(SkillDeltas {
                    social: Some(5),
                    ..SkillDeltas::default()
                }),
                ..EventEffect::default()
            },
        ),
        milestone(
            "adult",
            "All Grown Up",
            18,
            EventEffect {
                happiness: Some(5),
                ..EventEffect::default()
            },
        ),
        milestone(
            "quarter-century",
            "Quarter Century",
            25,
            EventEffect {
                wealth: Some(500),
                ..EventEffect::default()
            },
        ),
        milestone(
            "middle-age",
            "Middle Age",
            40,
            EventEffect {
                skills: Some(SkillDeltas {
                    business: Some(5),
                    ..SkillDeltas::default()
                }),
                ..EventEffect::default()
            },
        ),
        milestone(
            "golden-years",
            "Golden Years",
            65,
            EventEffect {
                happiness: Some(10),
                ..EventEffect::default()
            },
        ),
        milestone(
            "venerable",
            "Venerable",
            90,
            EventEffect {
                health: Some(10),
                ..EventEffect::default()
            },
        ),
    ]
}
