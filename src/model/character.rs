use serde::{Deserialize, Serialize};

use super::effect::EventEffect;
use super::event::BranchId;
use super::stats::{RelationshipSet, SkillSet, Stats};

/// Current assignment slots. Each is overwritten wholesale by effects
/// carrying the matching `Assignment` instruction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignmentState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disease: Option<String>,
}

/// One resolved decision, appended to the character's history.
/// History is append-only; the engine never reorders or truncates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub event_id: u64,
    pub pattern: String,
    pub branch: BranchId,
    pub effect: EventEffect,
    pub turn: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementUnlock {
    pub id: String,
    pub turn: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneUnlock {
    pub id: String,
    pub turn: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonusAward {
    pub id: String,
    pub turn: u64,
}

/// One-shot progression records. Every entry transitions once from
/// locked to unlocked and never back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressState {
    pub achievements: Vec<AchievementUnlock>,
    pub milestones: Vec<MilestoneUnlock>,
    pub bonuses: Vec<BonusAward>,
}

impl ProgressState {
    pub fn has_achievement(&self, id: &str) -> bool {
        self.achievements.iter().any(|a| a.id == id)
    }

    pub fn has_milestone(&self, id: &str) -> bool {
        self.milestones.iter().any(|m| m.id == id)
    }
}

/// Full character snapshot: the exact shape the persistence
/// collaborator stores and loads. Field names and nesting round-trip
/// unchanged through serde.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: u64,
    pub name: String,
    pub country: String,
    pub birth_year: i32,
    pub age: u32,
    pub stats: Stats,
    pub skills: SkillSet,
    pub relationships: RelationshipSet,
    pub alive: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_cause: Option<String>,
    pub assignments: AssignmentState,
    pub history: Vec<DecisionRecord>,
    pub progress: ProgressState,
}
