use bevy_ecs::message::Messages;
use bevy_ecs::world::World;

use crate::ecs::clock::TurnClock;
use crate::ecs::events::EngineEvent;
use crate::ecs::resources::{SessionIds, TelemetryLog, TelemetryRecord};
use crate::model::event::TelemetryKind;

use super::apply_aging;
use super::apply_career;
use super::apply_decision;
use super::{EngineCommand, EngineCommandKind};

/// Context passed to the `apply_*` sub-functions, providing the
/// telemetry sink and id source without threading individual resources
/// through every call.
pub(crate) struct ApplyCtx {
    pub telemetry: TelemetryLog,
    pub ids: SessionIds,
    pub turn: u64,
    pub reactive: Vec<EngineEvent>,
}

impl ApplyCtx {
    /// Append a telemetry record and return its id.
    pub(crate) fn record(
        &mut self,
        kind: TelemetryKind,
        description: impl Into<String>,
        data: serde_json::Value,
    ) -> u64 {
        let id = self.ids.next_id();
        self.telemetry.records.push(TelemetryRecord {
            id,
            kind,
            turn: self.turn,
            description: description.into(),
            data,
        });
        id
    }

    /// Queue a reactive event for emission after all commands are
    /// processed.
    pub(crate) fn emit(&mut self, event: EngineEvent) {
        self.reactive.push(event);
    }
}

/// Exclusive system that drains all pending `EngineCommand` messages,
/// applies state changes, records telemetry, and emits `EngineEvent`
/// messages. Runs in `SimPhase::PostUpdate`.
pub fn apply_engine_commands(world: &mut World) {
    let commands: Vec<EngineCommand> = {
        let Some(mut messages) = world.get_resource_mut::<Messages<EngineCommand>>() else {
            return;
        };
        messages.drain().collect()
    };

    if commands.is_empty() {
        return;
    }

    let turn = world.resource::<TurnClock>().turn;
    let telemetry = world.remove_resource::<TelemetryLog>().unwrap();
    let ids = world.remove_resource::<SessionIds>().unwrap();

    let mut ctx = ApplyCtx {
        telemetry,
        ids,
        turn,
        reactive: Vec::new(),
    };

    for cmd in &commands {
        match &cmd.kind {
            EngineCommandKind::ResolveDecision {
                character,
                event_id,
                pattern,
                branch,
                effect,
            } => {
                apply_decision::apply_resolve_decision(
                    &mut ctx, world, cmd, *character, *event_id, pattern, *branch, effect,
                );
            }
            EngineCommandKind::AgeUp { character, years } => {
                apply_aging::apply_age_up(&mut ctx, world, cmd, *character, *years);
            }
            EngineCommandKind::AssignProfession {
                character,
                profession,
            } => {
                apply_career::apply_assign_profession(&mut ctx, world, cmd, *character, profession);
            }
            EngineCommandKind::EnrollEducation {
                character,
                education,
            } => {
                apply_career::apply_enroll_education(&mut ctx, world, cmd, *character, education);
            }
        }
    }

    let reactive = std::mem::take(&mut ctx.reactive);
    if let Some(mut messages) = world.get_resource_mut::<Messages<EngineEvent>>() {
        messages.write_batch(reactive);
    }

    world.insert_resource(ctx.telemetry);
    world.insert_resource(ctx.ids);
}

/// Shared liveness guard: true when the character exists and is alive.
/// Commands against dead or unknown characters degrade to logged no-ops.
pub(crate) fn guard_alive(world: &World, character: bevy_ecs::entity::Entity, what: &str) -> bool {
    match world.get::<crate::ecs::components::Lifecycle>(character) {
        None => {
            tracing::warn!("{what} for unknown character {character:?}");
            false
        }
        Some(lifecycle) if !lifecycle.alive => {
            tracing::warn!("{what} ignored: character {character:?} is dead");
            false
        }
        Some(_) => true,
    }
}
