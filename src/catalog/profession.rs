use super::SkillRequirements;
use crate::model::effect::{EventEffect, RelationshipDeltas, SkillDeltas};

/// A profession the character can hold. `passive` is re-applied on each
/// aging step while the profession is assigned; `base_income` feeds the
/// skill-multiplied salary.
#[derive(Debug, Clone, PartialEq)]
pub struct Profession {
    pub id: String,
    pub name: String,
    pub requirements: SkillRequirements,
    pub base_income: i64,
    pub passive: EventEffect,
}

fn profession(
    id: &str,
    name: &str,
    requirements: SkillRequirements,
    base_income: i64,
    passive: EventEffect,
) -> Profession {
    Profession {
        id: id.to_string(),
        name: name.to_string(),
        requirements,
        base_income,
        passive,
    }
}

fn skill_passive(deltas: SkillDeltas) -> EventEffect {
    EventEffect {
        skills: Some(deltas),
        ..EventEffect::default()
    }
}

pub fn builtin() -> Vec<Profession> {
    vec![
        profession(
            "farmer",
            "Farmer",
            SkillRequirements::default(),
            18_000,
            skill_passive(SkillDeltas {
                physical: Some(1),
                ..SkillDeltas::default()
            }),
        ),
        profession(
            "retail-clerk",
            "Retail Clerk",
            SkillRequirements {
                social: Some(10),
                ..SkillRequirements::default()
            },
            20_000,
            skill_passive(SkillDeltas {
                social: Some(1),
                ..SkillDeltas::default()
            }),
        ),
        profession(
            "teacher",
            "Teacher",
            SkillRequirements {
                intelligence: Some(50),
                social: Some(40),
                ..SkillRequirements::default()
            },
            35_000,
            EventEffect {
                skills: Some(SkillDeltas {
                    intelligence: Some(1),
                    ..SkillDeltas::default()
                }),
                relationships: Some(RelationshipDeltas {
                    colleagues: Some(2),
                    ..RelationshipDeltas::default()
                }),
                ..EventEffect::default()
            },
        ),
        profession(
            "artist",
            "Artist",
            SkillRequirements {
                creativity: Some(60),
                ..SkillRequirements::default()
            },
            25_000,
            skill_passive(SkillDeltas {
                creativity: Some(2),
                ..SkillDeltas::default()
            }),
        ),
        profession(
            "entrepreneur",
            "Entrepreneur",
            SkillRequirements {
                business: Some(50),
                ..SkillRequirements::default()
            },
            45_000,
            skill_passive(SkillDeltas {
                business: Some(2),
                ..SkillDeltas::default()
            }),
        ),
        profession(
            "athlete",
            "Professional Athlete",
            SkillRequirements {
                physical: Some(80),
                ..SkillRequirements::default()
            },
            55_000,
            skill_passive(SkillDeltas {
                physical: Some(2),
                ..SkillDeltas::default()
            }),
        ),
        profession(
            "engineer",
            "Engineer",
            SkillRequirements {
                intelligence: Some(60),
                technical: Some(70),
                ..SkillRequirements::default()
            },
            60_000,
            skill_passive(SkillDeltas {
                technical: Some(1),
                ..SkillDeltas::default()
            }),
        ),
        profession(
            "doctor",
            "Doctor",
            SkillRequirements {
                intelligence: Some(90),
                technical: Some(50),
                ..SkillRequirements::default()
            },
            90_000,
            skill_passive(SkillDeltas {
                intelligence: Some(1),
                ..SkillDeltas::default()
            }),
        ),
        profession(
            "executive",
            "Executive",
            SkillRequirements {
                business: Some(80),
                social: Some(60),
                ..SkillRequirements::default()
            },
            120_000,
            EventEffect {
                skills: Some(SkillDeltas {
                    business: Some(1),
                    ..SkillDeltas::default()
                }),
                relationships: Some(RelationshipDeltas {
                    colleagues: Some(2),
                    ..RelationshipDeltas::default()
                }),
                ..EventEffect::default()
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_have_positive_income() {
        assert!(builtin().iter().all(|p| p.base_income > 0));
    }

    #[test]
    fn passives_never_assign_or_kill() {
        for p in builtin() {
            assert!(p.passive.profession.is_none(), "{}", p.id);
            assert!(p.passive.education.is_none(), "{}", p.id);
            assert!(p.passive.disease.is_none(), "{}", p.id);
            assert!(p.passive.death_chance.is_none(), "{}", p.id);
        }
    }
}
