use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;
use serde_json::json;

use crate::ecs::components::{
    CareerState, CharacterRelationships, CharacterSkills, CharacterVitals, Lifecycle, LifeHistory,
};
use crate::ecs::events::EngineEvent;
use crate::ecs::resources::{MortalityRng, SessionConfig};
use crate::model::character::DecisionRecord;
use crate::model::effect::EventEffect;
use crate::model::event::{BranchId, TelemetryKind};
use crate::rules::{effects, mortality};

use super::EngineCommand;
use super::applicator::{ApplyCtx, guard_alive};

/// Resolve a chosen decision branch: merge the effect, run the mortality
/// check on the mutated stats, append the history record.
#[allow(clippy::too_many_arguments)]
pub(crate) fn apply_resolve_decision(
    ctx: &mut ApplyCtx,
    world: &mut World,
    cmd: &EngineCommand,
    character: Entity,
    event_id: u64,
    pattern: &str,
    branch: BranchId,
    effect: &EventEffect,
) {
    if !guard_alive(world, character, "ResolveDecision") {
        return;
    }

    let mut stats = world
        .get::<CharacterVitals>(character)
        .map(|v| v.0.clone())
        .unwrap_or_default();
    let mut skills = world
        .get::<CharacterSkills>(character)
        .map(|s| s.0.clone())
        .unwrap_or_default();
    let mut relationships = world
        .get::<CharacterRelationships>(character)
        .map(|r| r.0.clone())
        .unwrap_or_default();
    let mut assignments = world
        .get::<CareerState>(character)
        .map(|c| c.0.clone())
        .unwrap_or_default();

    effects::apply_effects(effect, &mut stats, &mut skills, &mut relationships, &mut assignments);

    let death_chance = effect.death_chance.unwrap_or(0.0);
    let difficulty = world.resource::<SessionConfig>().difficulty;
    let died = {
        let mut rng = world.resource_mut::<MortalityRng>();
        mortality::check_death(&stats, death_chance, difficulty, &mut rng.0)
    };

    if let Some(mut vitals) = world.get_mut::<CharacterVitals>(character) {
        vitals.0 = stats.clone();
    }
    if let Some(mut component) = world.get_mut::<CharacterSkills>(character) {
        component.0 = skills;
    }
    if let Some(mut component) = world.get_mut::<CharacterRelationships>(character) {
        component.0 = relationships;
    }
    if let Some(mut component) = world.get_mut::<CareerState>(character) {
        component.0 = assignments;
    }
    if let Some(mut history) = world.get_mut::<LifeHistory>(character) {
        history.0.push(DecisionRecord {
            event_id,
            pattern: pattern.to_string(),
            branch,
            effect: effect.clone(),
            turn: ctx.turn,
        });
    }

    ctx.record(
        TelemetryKind::DecisionResolved,
        cmd.description.clone(),
        json!({ "event_id": event_id, "pattern": pattern }),
    );
    ctx.emit(EngineEvent::StatsChanged { character });

    if died {
        let cause = mortality::death_cause(&stats, death_chance);
        if let Some(mut lifecycle) = world.get_mut::<Lifecycle>(character) {
            lifecycle.alive = false;
            lifecycle.death_cause = Some(cause.to_string());
        }
        ctx.record(
            TelemetryKind::Death,
            format!("Died: {cause}"),
            json!({ "cause": cause }),
        );
        ctx.emit(EngineEvent::CharacterDied {
            character,
            cause: cause.to_string(),
        });
    }
}
