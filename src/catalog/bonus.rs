use crate::model::effect::{EventEffect, RelationshipDeltas};

/// A flat windfall reward, drawn with fixed probability on each aging
/// step. At most one fires per step.
#[derive(Debug, Clone, PartialEq)]
pub struct BonusEvent {
    pub id: String,
    pub name: String,
    pub effect: EventEffect,
}

fn bonus(id: &str, name: &str, effect: EventEffect) -> BonusEvent {
    BonusEvent {
        id: id.to_string(),
        name: name.to_string(),
        effect,
    }
}

pub fn builtin() -> Vec<BonusEvent> {
    vec![
        bonus(
            "lottery-win",
            "Lottery Win",
            EventEffect {
                wealth: Some(5_000),
                happiness: Some(10),
                ..EventEffect::default()
            },
        ),
        bonus(
            "inheritance",
            "Inheritance",
            EventEffect {
                wealth: Some(10_000),
                ..EventEffect::default()
            },
        ),
        bonus(
            "promotion",
            "Promotion",
            EventEffect {
                wealth: Some(2_000),
                happiness: Some(5),
                relationships: Some(RelationshipDeltas {
                    colleagues: Some(5),
                    ..RelationshipDeltas::default()
                }),
                ..EventEffect::default()
            },
        ),
        bonus(
            "unexpected-gift",
            "Unexpected Gift",
            EventEffect {
                wealth: Some(500),
                happiness: Some(5),
                ..EventEffect::default()
            },
        ),
    ]
}
