pub mod character;
pub mod effect;
pub mod event;
pub mod stats;

pub use character::{
    AchievementUnlock, AssignmentState, BonusAward, Character, DecisionRecord, MilestoneUnlock,
    ProgressState,
};
pub use effect::{Assignment, EventEffect, RelationshipDeltas, SkillDeltas};
pub use event::{BranchId, DecisionBranch, DecisionPoint, TelemetryKind};
pub use stats::{Relation, RelationshipSet, Skill, SkillSet, Stats};
