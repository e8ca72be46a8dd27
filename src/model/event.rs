use serde::{Deserialize, Serialize};

use super::effect::EventEffect;

/// Which of a decision point's three branches was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchId {
    A,
    B,
    C,
}

impl BranchId {
    pub fn index(self) -> usize {
        match self {
            BranchId::A => 0,
            BranchId::B => 1,
            BranchId::C => 2,
        }
    }
}

/// One selectable branch of a decision point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionBranch {
    pub label: String,
    pub effect: EventEffect,
}

/// A generated decision point: a prompt with three effect-bearing
/// branches, already age-adapted for the character it was generated for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionPoint {
    pub event_id: u64,
    pub pattern: String,
    pub prompt: String,
    pub branches: [DecisionBranch; 3],
}

impl DecisionPoint {
    pub fn branch(&self, id: BranchId) -> &DecisionBranch {
        &self.branches[id.index()]
    }
}

/// Classification of telemetry records emitted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TelemetryKind {
    CharacterCreated,
    DecisionResolved,
    AgeChanged,
    Death,
    DiseaseContracted,
    CareerChanged,
    AchievementUnlocked,
    MilestoneReached,
    BonusAwarded,
}
