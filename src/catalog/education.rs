use super::SkillRequirements;
use crate::model::effect::{EventEffect, SkillDeltas};

/// An education track. `min_age` gates enrollment in addition to the
/// skill requirements; `effect` is applied once on enrollment.
#[derive(Debug, Clone, PartialEq)]
pub struct EducationLevel {
    pub id: String,
    pub name: String,
    pub requirements: SkillRequirements,
    pub min_age: u32,
    pub effect: EventEffect,
}

fn level(
    id: &str,
    name: &str,
    requirements: SkillRequirements,
    min_age: u32,
    skills: SkillDeltas,
) -> EducationLevel {
    EducationLevel {
        id: id.to_string(),
        name: name.to_string(),
        requirements,
        min_age,
        effect: EventEffect {
            skills: Some(skills),
            ..EventEffect::default()
        },
    }
}

pub fn builtin() -> Vec<EducationLevel> {
    vec![
        level(
            "primary-school",
            "Primary School",
            SkillRequirements::default(),
            6,
            SkillDeltas {
                intelligence: Some(5),
                ..SkillDeltas::default()
            },
        ),
        level(
            "high-school",
            "High School",
            SkillRequirements {
                intelligence: Some(20),
                ..SkillRequirements::default()
            },
            14,
            SkillDeltas {
                intelligence: Some(10),
                social: Some(5),
                ..SkillDeltas::default()
            },
        ),
        level(
            "trade-school",
            "Trade School",
            SkillRequirements {
                technical: Some(30),
                ..SkillRequirements::default()
            },
            16,
            SkillDeltas {
                technical: Some(15),
                ..SkillDeltas::default()
            },
        ),
        level(
            "university",
            "University",
            SkillRequirements {
                intelligence: Some(60),
                ..SkillRequirements::default()
            },
            18,
            SkillDeltas {
                intelligence: Some(20),
                business: Some(5),
                ..SkillDeltas::default()
            },
        ),
        level(
            "graduate-school",
            "Graduate School",
            SkillRequirements {
                intelligence: Some(90),
                ..SkillRequirements::default()
            },
            22,
            SkillDeltas {
                intelligence: Some(25),
                ..SkillDeltas::default()
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_ages_increase_with_track() {
        let levels = builtin();
        for window in levels.windows(2) {
            assert!(window[0].min_age <= window[1].min_age);
        }
    }
}
