pub mod catalog;
pub mod ecs;
pub mod model;
pub mod rules;

pub use catalog::ContentCatalog;
pub use model::{
    Assignment, BranchId, Character, DecisionBranch, DecisionPoint, EventEffect, RelationshipSet,
    SkillSet, Stats, TelemetryKind,
};
