use bevy_ecs::component::Component;

use crate::model::character::{AssignmentState, DecisionRecord, ProgressState};
use crate::model::stats::{RelationshipSet, SkillSet, Stats};

/// Marks the player-controlled character entity of a session.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct PlayerCharacter;

/// Identity and age. Age is monotonically non-decreasing after creation.
#[derive(Component, Debug, Clone)]
pub struct CharacterCore {
    pub id: u64,
    pub name: String,
    pub country: String,
    pub birth_year: i32,
    pub age: u32,
}

/// Bounded vital statistics.
#[derive(Component, Debug, Clone, Default)]
pub struct CharacterVitals(pub Stats);

/// Skill levels.
#[derive(Component, Debug, Clone, Default)]
pub struct CharacterSkills(pub SkillSet);

/// Relationship scores.
#[derive(Component, Debug, Clone, Default)]
pub struct CharacterRelationships(pub RelationshipSet);

/// Terminal-state flags. Once `alive` flips false the character accepts
/// no further mutation; callers must check before writing commands, and
/// the applicator drops violations as logged no-ops.
#[derive(Component, Debug, Clone)]
pub struct Lifecycle {
    pub alive: bool,
    pub death_cause: Option<String>,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self {
            alive: true,
            death_cause: None,
        }
    }
}

/// Profession / education / disease assignment slots.
#[derive(Component, Debug, Clone, Default)]
pub struct CareerState(pub AssignmentState);

/// Append-only decision history.
#[derive(Component, Debug, Clone, Default)]
pub struct LifeHistory(pub Vec<DecisionRecord>);

/// One-shot achievement/milestone/bonus records.
#[derive(Component, Debug, Clone, Default)]
pub struct ProgressLog(pub ProgressState);
