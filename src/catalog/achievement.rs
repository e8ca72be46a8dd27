use serde::{Deserialize, Serialize};

use crate::model::effect::EventEffect;
use crate::model::stats::{Relation, Skill};

/// Predicate an achievement requires of the character's current state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Requirement {
    SkillAtLeast { skill: Skill, level: i32 },
    RelationshipAtLeast { relation: Relation, level: i32 },
    AgeAtLeast { age: u32 },
    WealthAtLeast { amount: i64 },
    HasProfession,
    ProfessionIs { id: String },
    HasEducation,
    EducationIs { id: String },
    All { requirements: Vec<Requirement> },
}

/// A one-shot state-predicate-triggered reward.
#[derive(Debug, Clone, PartialEq)]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub requirement: Requirement,
    pub reward: EventEffect,
}

fn achievement(id: &str, name: &str, requirement: Requirement, reward: EventEffect) -> Achievement {
    Achievement {
        id: id.to_string(),
        name: name.to_string(),
        requirement,
        reward,
    }
}

fn happiness_reward(amount: i32) -> EventEffect {
    EventEffect {
        happiness: Some(amount),
        ..EventEffect::default()
    }
}

pub fn builtin() -> Vec<Achievement> {
    vec![
        achievement(
            "rich",
            "Rich",
            Requirement::WealthAtLeast { amount: 10_000 },
            happiness_reward(10),
        ),
        achievement(
            "millionaire",
            "Millionaire",
            Requirement::WealthAtLeast { amount: 1_000_000 },
            happiness_reward(25),
        ),
        achievement(
            "genius",
            "Genius",
            Requirement::SkillAtLeast {
                skill: Skill::Intelligence,
                level: 150,
            },
            EventEffect {
                wealth: Some(1_000),
                ..EventEffect::default()
            },
        ),
        achievement(
            "iron-body",
            "Iron Body",
            Requirement::SkillAtLeast {
                skill: Skill::Physical,
                level: 120,
            },
            EventEffect {
                health: Some(10),
                ..EventEffect::default()
            },
        ),
        achievement(
            "social-butterfly",
            "Social Butterfly",
            Requirement::RelationshipAtLeast {
                relation: Relation::Friends,
                level: 80,
            },
            happiness_reward(10),
        ),
        achievement(
            "soulmate",
            "Soulmate",
            Requirement::RelationshipAtLeast {
                relation: Relation::Romantic,
                level: 90,
            },
            happiness_reward(15),
        ),
        achievement(
            "family-first",
            "Family First",
            Requirement::RelationshipAtLeast {
                relation: Relation::Family,
                level: 90,
            },
            happiness_reward(10),
        ),
        achievement(
            "graduate",
            "Graduate",
            Requirement::HasEducation,
            happiness_reward(5),
        ),
        achievement(
            "working-life",
            "Working Life",
            Requirement::HasProfession,
            happiness_reward(5),
        ),
        achievement(
            "self-made",
            "Self-Made",
            Requirement::All {
                requirements: vec![
                    Requirement::WealthAtLeast { amount: 100_000 },
                    Requirement::SkillAtLeast {
                        skill: Skill::Business,
                        level: 100,
                    },
                ],
            },
            happiness_reward(20),
        ),
        achievement(
            "renaissance-soul",
            "Renaissance Soul",
            Requirement::All {
                requirements: vec![
                    Requirement::SkillAtLeast {
                        skill: Skill::Intelligence,
                        level: 100,
                    },
                    Requirement::SkillAtLeast {
                        skill: Skill::Creativity,
                        level: 100,
                    },
                ],
            },
            happiness_reward(15),
        ),
        achievement(
            "centenarian-club",
            "Centenarian Club",
            Requirement::AgeAtLeast { age: 100 },
            EventEffect {
                health: Some(10),
                ..EventEffect::default()
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requirement_serde_is_tagged() {
        let req = Requirement::SkillAtLeast {
            skill: Skill::Business,
            level: 50,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["type"], "skill_at_least");
        assert_eq!(json["skill"], "business");
        assert_eq!(json["level"], 50);

        let parsed: Requirement = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, req);
    }

    #[test]
    fn conjunction_round_trips() {
        let req = Requirement::All {
            requirements: vec![
                Requirement::AgeAtLeast { age: 30 },
                Requirement::HasProfession,
            ],
        };
        let json = serde_json::to_string(&req).unwrap();
        let parsed: Requirement = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, req);
    }

    #[test]
    fn rewards_carry_no_death_chance() {
        assert!(builtin().iter().all(|a| a.reward.death_chance.is_none()));
    }
}
