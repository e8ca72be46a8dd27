use crate::model::effect::{EventEffect, RelationshipDeltas, SkillDeltas};
use crate::model::event::DecisionBranch;

/// A reusable three-branch event template. Branch C is conventionally
/// the high-risk option; the age adapter leans on that when dampening
/// senior health penalties.
#[derive(Debug, Clone, PartialEq)]
pub struct EventPattern {
    pub id: String,
    pub prompt: String,
    pub branches: [DecisionBranch; 3],
}

fn pattern(id: &str, prompt: &str, branches: [(&str, EventEffect); 3]) -> EventPattern {
    EventPattern {
        id: id.to_string(),
        prompt: prompt.to_string(),
        branches: branches.map(|(label, effect)| DecisionBranch {
            label: label.to_string(),
            effect,
        }),
    }
}

pub fn builtin() -> Vec<EventPattern> {
    vec![
        pattern(
            "playground-dare",
            "The other kids dare you to jump from the climbing frame",
            [
                (
                    "Walk away",
                    EventEffect {
                        happiness: Some(-2),
                        ..EventEffect::default()
                    },
                ),
                (
                    "Climb down carefully",
                    EventEffect {
                        happiness: Some(5),
                        skills: Some(SkillDeltas {
                            physical: Some(2),
                            ..SkillDeltas::default()
                        }),
                        ..EventEffect::default()
                    },
                ),
                (
                    "Jump",
                    EventEffect {
                        happiness: Some(8),
                        health: Some(-10),
                        death_chance: Some(0.05),
                        ..EventEffect::default()
                    },
                ),
            ],
        ),
        pattern(
            "school-exam",
            "The final exam is tomorrow",
            [
                (
                    "Study all week",
                    EventEffect {
                        energy: Some(-10),
                        skills: Some(SkillDeltas {
                            intelligence: Some(5),
                            ..SkillDeltas::default()
                        }),
                        ..EventEffect::default()
                    },
                ),
                (
                    "Balance study and rest",
                    EventEffect {
                        happiness: Some(2),
                        skills: Some(SkillDeltas {
                            intelligence: Some(3),
                            ..SkillDeltas::default()
                        }),
                        ..EventEffect::default()
                    },
                ),
                (
                    "Wing it",
                    EventEffect {
                        happiness: Some(5),
                        skills: Some(SkillDeltas {
                            intelligence: Some(-2),
                            ..SkillDeltas::default()
                        }),
                        ..EventEffect::default()
                    },
                ),
            ],
        ),
        pattern(
            "first-job-offer",
            "A local business offers you a job",
            [
                (
                    "Take the safe offer",
                    EventEffect {
                        wealth: Some(500),
                        energy: Some(-5),
                        ..EventEffect::default()
                    },
                ),
                (
                    "Negotiate for more",
                    EventEffect {
                        wealth: Some(800),
                        skills: Some(SkillDeltas {
                            business: Some(3),
                            ..SkillDeltas::default()
                        }),
                        ..EventEffect::default()
                    },
                ),
                (
                    "Hold out for something better",
                    EventEffect {
                        happiness: Some(2),
                        wealth: Some(-100),
                        ..EventEffect::default()
                    },
                ),
            ],
        ),
        pattern(
            "friend-in-need",
            "An old friend asks for help with their debts",
            [
                (
                    "Lend the money",
                    EventEffect {
                        wealth: Some(-500),
                        relationships: Some(RelationshipDeltas {
                            friends: Some(10),
                            ..RelationshipDeltas::default()
                        }),
                        ..EventEffect::default()
                    },
                ),
                (
                    "Offer advice instead",
                    EventEffect {
                        skills: Some(SkillDeltas {
                            social: Some(2),
                            ..SkillDeltas::default()
                        }),
                        relationships: Some(RelationshipDeltas {
                            friends: Some(5),
                            ..RelationshipDeltas::default()
                        }),
                        ..EventEffect::default()
                    },
                ),
                (
                    "Turn them away",
                    EventEffect {
                        happiness: Some(-5),
                        relationships: Some(RelationshipDeltas {
                            friends: Some(-15),
                            ..RelationshipDeltas::default()
                        }),
                        ..EventEffect::default()
                    },
                ),
            ],
        ),
        pattern(
            "romance-spark",
            "Someone at the coffee shop keeps catching your eye",
            [
                (
                    "Ask them out",
                    EventEffect {
                        happiness: Some(5),
                        relationships: Some(RelationshipDeltas {
                            romantic: Some(15),
                            ..RelationshipDeltas::default()
                        }),
                        ..EventEffect::default()
                    },
                ),
                (
                    "Strike up a friendship",
                    EventEffect {
                        relationships: Some(RelationshipDeltas {
                            friends: Some(5),
                            ..RelationshipDeltas::default()
                        }),
                        ..EventEffect::default()
                    },
                ),
                (
                    "Look away",
                    EventEffect {
                        happiness: Some(-3),
                        relationships: Some(RelationshipDeltas {
                            romantic: Some(-10),
                            ..RelationshipDeltas::default()
                        }),
                        ..EventEffect::default()
                    },
                ),
            ],
        ),
        pattern(
            "investment-pitch",
            "A colleague pitches you a startup investment",
            [
                (
                    "Invest a modest sum",
                    EventEffect {
                        wealth: Some(-2_000),
                        skills: Some(SkillDeltas {
                            business: Some(5),
                            ..SkillDeltas::default()
                        }),
                        ..EventEffect::default()
                    },
                ),
                (
                    "Take a small stake",
                    EventEffect {
                        wealth: Some(-500),
                        skills: Some(SkillDeltas {
                            business: Some(2),
                            ..SkillDeltas::default()
                        }),
                        ..EventEffect::default()
                    },
                ),
                (
                    "Borrow to go all in",
                    EventEffect {
                        wealth: Some(-4_000),
                        happiness: Some(-5),
                        skills: Some(SkillDeltas {
                            business: Some(8),
                            ..SkillDeltas::default()
                        }),
                        ..EventEffect::default()
                    },
                ),
            ],
        ),
        pattern(
            "health-scare",
            "A persistent chest pain won't go away",
            [
                (
                    "See a doctor",
                    EventEffect {
                        wealth: Some(-300),
                        health: Some(10),
                        ..EventEffect::default()
                    },
                ),
                (
                    "Rest at home",
                    EventEffect {
                        health: Some(2),
                        energy: Some(5),
                        ..EventEffect::default()
                    },
                ),
                (
                    "Ignore it",
                    EventEffect {
                        health: Some(-15),
                        death_chance: Some(0.1),
                        ..EventEffect::default()
                    },
                ),
            ],
        ),
        pattern(
            "mountain-trek",
            "Friends invite you on a mountain trip",
            [
                (
                    "Book the guided tour",
                    EventEffect {
                        happiness: Some(8),
                        wealth: Some(-400),
                        skills: Some(SkillDeltas {
                            physical: Some(3),
                            ..SkillDeltas::default()
                        }),
                        ..EventEffect::default()
                    },
                ),
                (
                    "Do a day hike",
                    EventEffect {
                        happiness: Some(5),
                        energy: Some(-10),
                        skills: Some(SkillDeltas {
                            physical: Some(5),
                            ..SkillDeltas::default()
                        }),
                        ..EventEffect::default()
                    },
                ),
                (
                    "Attempt the off-trail climb",
                    EventEffect {
                        happiness: Some(12),
                        health: Some(-20),
                        death_chance: Some(0.2),
                        skills: Some(SkillDeltas {
                            physical: Some(8),
                            ..SkillDeltas::default()
                        }),
                        ..EventEffect::default()
                    },
                ),
            ],
        ),
        pattern(
            "family-reunion",
            "The family reunion falls on a busy weekend",
            [
                (
                    "Attend",
                    EventEffect {
                        happiness: Some(5),
                        energy: Some(-5),
                        relationships: Some(RelationshipDeltas {
                            family: Some(10),
                            ..RelationshipDeltas::default()
                        }),
                        ..EventEffect::default()
                    },
                ),
                (
                    "Call instead",
                    EventEffect {
                        relationships: Some(RelationshipDeltas {
                            family: Some(3),
                            ..RelationshipDeltas::default()
                        }),
                        ..EventEffect::default()
                    },
                ),
                (
                    "Skip it",
                    EventEffect {
                        happiness: Some(2),
                        relationships: Some(RelationshipDeltas {
                            family: Some(-10),
                            ..RelationshipDeltas::default()
                        }),
                        ..EventEffect::default()
                    },
                ),
            ],
        ),
    ]
}
