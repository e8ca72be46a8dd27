use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;
use serde_json::json;

use crate::ecs::components::{
    CareerState, CharacterCore, CharacterRelationships, CharacterSkills, CharacterVitals,
    Lifecycle,
};
use crate::ecs::events::EngineEvent;
use crate::ecs::resources::{AgingRng, CatalogStore, DiseaseRng};
use crate::model::effect::EventEffect;
use crate::model::event::TelemetryKind;
use crate::rules::{aging, effects, eligibility};

use super::EngineCommand;
use super::applicator::{ApplyCtx, guard_alive};

/// Advance age by `years`: natural-death roll at the resulting age,
/// age-banded skill drift, late-life disease onset, then profession
/// passives and salary. Stat-threshold mortality is not re-checked here;
/// only the natural-death roll is internal to aging.
pub(crate) fn apply_age_up(
    ctx: &mut ApplyCtx,
    world: &mut World,
    cmd: &EngineCommand,
    character: Entity,
    years: u32,
) {
    if years == 0 {
        tracing::warn!("AgeUp ignored: years must be >= 1");
        return;
    }
    if !guard_alive(world, character, "AgeUp") {
        return;
    }

    let new_age = {
        let Some(mut core) = world.get_mut::<CharacterCore>(character) else {
            return;
        };
        core.age += years;
        core.age
    };
    ctx.emit(EngineEvent::AgeAdvanced {
        character,
        years,
        new_age,
    });

    // Natural-death draw comes first and short-circuits everything else.
    let natural_death = {
        let mut rng = world.resource_mut::<AgingRng>();
        aging::natural_death_roll(new_age, &mut rng.0)
    };
    if natural_death {
        if let Some(mut lifecycle) = world.get_mut::<Lifecycle>(character) {
            lifecycle.alive = false;
            lifecycle.death_cause = Some(aging::NATURAL_DEATH_CAUSE.to_string());
        }
        ctx.record(
            TelemetryKind::Death,
            format!("Died at {new_age}: {}", aging::NATURAL_DEATH_CAUSE),
            json!({ "cause": aging::NATURAL_DEATH_CAUSE, "age": new_age }),
        );
        ctx.emit(EngineEvent::CharacterDied {
            character,
            cause: aging::NATURAL_DEATH_CAUSE.to_string(),
        });
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

    // Age-banded skill drift, once per call at the resulting age.
    let drift = EventEffect {
        skills: Some(aging::drift_for_age(new_age)),
        ..EventEffect::default()
    };
    effects::apply_effects(&drift, &mut stats, &mut skills, &mut relationships, &mut assignments);

    // Late-life disease onset.
    let contracted = {
        let catalog = world.resource::<CatalogStore>().0.clone();
        let mut rng = world.resource_mut::<DiseaseRng>();
        aging::roll_disease_onset(new_age, assignments.disease.as_deref(), &catalog, &mut rng.0)
            .cloned()
    };
    if let Some(disease) = contracted {
        assignments.disease = Some(disease.id.clone());
        effects::apply_effects(
            &disease.onset,
            &mut stats,
            &mut skills,
            &mut relationships,
            &mut assignments,
        );
        ctx.record(
            TelemetryKind::DiseaseContracted,
            format!("Contracted {}", disease.name),
            json!({ "disease": disease.id, "age": new_age }),
        );
        ctx.emit(EngineEvent::DiseaseContracted {
            character,
            disease: disease.id.clone(),
        });
    }

    // Profession passives and salary, re-evaluated at current skills.
    if let Some(profession_id) = assignments.profession.clone() {
        let profession = world
            .resource::<CatalogStore>()
            .0
            .profession(&profession_id)
            .cloned();
        if let Some(profession) = profession {
            let salary = eligibility::income_of(&profession, &skills);
            effects::apply_effects(
                &profession.passive,
                &mut stats,
                &mut skills,
                &mut relationships,
                &mut assignments,
            );
            let pay = EventEffect {
                wealth: Some(salary),
                ..EventEffect::default()
            };
            effects::apply_effects(&pay, &mut stats, &mut skills, &mut relationships, &mut assignments);
        } else {
            tracing::warn!("assigned profession {profession_id} not in catalog");
        }
    }

    if let Some(mut vitals) = world.get_mut::<CharacterVitals>(character) {
        vitals.0 = stats;
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

    ctx.record(
        TelemetryKind::AgeChanged,
        cmd.description.clone(),
        json!({ "years": years, "age": new_age }),
    );
    ctx.emit(EngineEvent::StatsChanged { character });
}
