pub mod applicator;
mod apply_aging;
mod apply_career;
mod apply_decision;

use bevy_ecs::entity::Entity;
use bevy_ecs::message::Message;

use crate::model::effect::EventEffect;
use crate::model::event::BranchId;

pub use applicator::apply_engine_commands;

/// A command describing an intended state change for one character.
///
/// The presentation layer writes these via `Messages<EngineCommand>`
/// (see `test_helpers::send_command`); the applicator in
/// `SimPhase::PostUpdate` drains them, applies the change, records
/// telemetry, and emits `EngineEvent` messages.
#[derive(Message, Clone, Debug)]
pub struct EngineCommand {
    /// What state change to apply.
    pub kind: EngineCommandKind,
    /// Human-readable description for the telemetry log.
    pub description: String,
}

impl EngineCommand {
    pub fn new(kind: EngineCommandKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
        }
    }
}

/// All state-change intents the engine accepts.
#[derive(Clone, Debug)]
pub enum EngineCommandKind {
    /// Resolve a presented decision point with the chosen branch.
    /// Mutates state through the effect pipeline, then runs the
    /// mortality check, then appends the history record.
    ResolveDecision {
        character: Entity,
        event_id: u64,
        pattern: String,
        branch: BranchId,
        effect: EventEffect,
    },
    /// Advance age by `years` (>= 1): natural-death roll, age-banded
    /// skill drift, late-life disease onset, profession passives and
    /// salary.
    AgeUp { character: Entity, years: u32 },
    /// Take a profession, gated by skill eligibility.
    AssignProfession { character: Entity, profession: String },
    /// Enroll in an education track, gated by skills and minimum age.
    EnrollEducation { character: Entity, education: String },
}
