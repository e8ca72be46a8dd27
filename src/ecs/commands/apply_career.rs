use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;
use serde_json::json;

use crate::ecs::components::{
    CareerState, CharacterCore, CharacterRelationships, CharacterSkills, CharacterVitals,
};
use crate::ecs::events::EngineEvent;
use crate::ecs::resources::CatalogStore;
use crate::model::event::TelemetryKind;
use crate::rules::{effects, eligibility};

use super::EngineCommand;
use super::applicator::{ApplyCtx, guard_alive};

/// Take a profession. Unknown ids and unmet skill requirements degrade
/// to logged no-ops.
pub(crate) fn apply_assign_profession(
    ctx: &mut ApplyCtx,
    world: &mut World,
    cmd: &EngineCommand,
    character: Entity,
    profession_id: &str,
) {
    if !guard_alive(world, character, "AssignProfession") {
        return;
    }

    let Some(profession) = world
        .resource::<CatalogStore>()
        .0
        .profession(profession_id)
        .cloned()
    else {
        tracing::warn!("AssignProfession ignored: unknown profession {profession_id}");
        return;
    };

    let skills = world
        .get::<CharacterSkills>(character)
        .map(|s| s.0.clone())
        .unwrap_or_default();
    if !eligibility::can_assign_profession(&profession, &skills) {
        tracing::warn!(
            "AssignProfession ignored: requirements for {profession_id} not met"
        );
        return;
    }

    if let Some(mut career) = world.get_mut::<CareerState>(character) {
        career.0.profession = Some(profession.id.clone());
    }

    ctx.record(
        TelemetryKind::CareerChanged,
        cmd.description.clone(),
        json!({ "profession": profession.id }),
    );
    ctx.emit(EngineEvent::CareerChanged { character });
}

/// Enroll in an education track. Gated on skills and minimum age; the
/// entry's enrollment effect is applied once on success.
pub(crate) fn apply_enroll_education(
    ctx: &mut ApplyCtx,
    world: &mut World,
    cmd: &EngineCommand,
    character: Entity,
    education_id: &str,
) {
    if !guard_alive(world, character, "EnrollEducation") {
        return;
    }

    let Some(level) = world
        .resource::<CatalogStore>()
        .0
        .education_level(education_id)
        .cloned()
    else {
        tracing::warn!("EnrollEducation ignored: unknown education {education_id}");
        return;
    };

    let age = world
        .get::<CharacterCore>(character)
        .map(|c| c.age)
        .unwrap_or(0);
    let mut skills = world
        .get::<CharacterSkills>(character)
        .map(|s| s.0.clone())
        .unwrap_or_default();
    if !eligibility::can_enroll(&level, &skills, age) {
        tracing::warn!("EnrollEducation ignored: requirements for {education_id} not met");
        return;
    }

    let mut stats = world
        .get::<CharacterVitals>(character)
        .map(|v| v.0.clone())
        .unwrap_or_default();
    let mut relationships = world
        .get::<CharacterRelationships>(character)
        .map(|r| r.0.clone())
        .unwrap_or_default();
    let mut assignments = world
        .get::<CareerState>(character)
        .map(|c| c.0.clone())
        .unwrap_or_default();

    effects::apply_effects(
        &level.effect,
        &mut stats,
        &mut skills,
        &mut relationships,
        &mut assignments,
    );
    assignments.education = Some(level.id.clone());

    if let Some(mut vitals) = world.get_mut::<CharacterVitals>(character) {
        vitals.0 = stats;
    }
    if let Some(mut component) = world.get_mut::<CharacterSkills>(character) {
        component.0 = skills;
    }
    if let Some(mut component) = world.get_mut::<CharacterRelationships>(character) {
        component.0 = relationships;
    }
    if let Some(mut career) = world.get_mut::<CareerState>(character) {
        career.0 = assignments;
    }

    ctx.record(
        TelemetryKind::CareerChanged,
        cmd.description.clone(),
        json!({ "education": level.id }),
    );
    ctx.emit(EngineEvent::CareerChanged { character });
    ctx.emit(EngineEvent::StatsChanged { character });
}
