use bevy_ecs::entity::Entity;
use bevy_ecs::message::Messages;
use bevy_ecs::world::World;
use serde_json::json;

use crate::ecs::clock::TurnClock;
use crate::ecs::components::{
    CareerState, CharacterCore, CharacterRelationships, CharacterSkills, CharacterVitals,
    Lifecycle, LifeHistory, PlayerCharacter, ProgressLog,
};
use crate::ecs::events::EngineEvent;
use crate::ecs::resources::{CharacterMap, SessionIds, TelemetryLog, TelemetryRecord};
use crate::model::event::TelemetryKind;
use crate::model::stats::{RelationshipSet, SkillSet, Stats};

/// Seed data for a new character.
#[derive(Debug, Clone)]
pub struct CharacterSeed {
    pub name: String,
    pub country: String,
    pub birth_year: i32,
}

/// Spawn a newborn character: full health, neutral happiness and energy,
/// no wealth, blank skills, and a starting family bond. All values pass
/// through the clamps on the way in.
pub fn spawn_character(world: &mut World, seed: CharacterSeed) -> Entity {
    let id = world.resource_mut::<SessionIds>().next_id();
    let stats = Stats::default().clamped();
    let relationships = RelationshipSet {
        family: 50,
        ..RelationshipSet::default()
    }
    .clamped();

    let entity = world
        .spawn((
            PlayerCharacter,
            CharacterCore {
                id,
                name: seed.name.clone(),
                country: seed.country,
                birth_year: seed.birth_year,
                age: 0,
            },
            CharacterVitals(stats),
            CharacterSkills(SkillSet::default()),
            CharacterRelationships(relationships),
            Lifecycle::default(),
            CareerState::default(),
            LifeHistory::default(),
            ProgressLog::default(),
        ))
        .id();

    if let Some(mut map) = world.get_resource_mut::<CharacterMap>() {
        map.insert(id, entity);
    }

    let turn = world.resource::<TurnClock>().turn;
    let record_id = world.resource_mut::<SessionIds>().next_id();
    world
        .resource_mut::<TelemetryLog>()
        .records
        .push(TelemetryRecord {
            id: record_id,
            kind: TelemetryKind::CharacterCreated,
            turn,
            description: format!("{} was born", seed.name),
            data: json!({ "character_id": id }),
        });

    if let Some(mut messages) = world.get_resource_mut::<Messages<EngineEvent>>() {
        messages.write(EngineEvent::CharacterSpawned { character: entity });
    }

    entity
}
