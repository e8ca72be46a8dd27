use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ecs::components::{
    CareerState, CharacterCore, CharacterRelationships, CharacterSkills, CharacterVitals,
    Lifecycle, LifeHistory, PlayerCharacter, ProgressLog,
};
use crate::ecs::resources::{CharacterMap, SessionIds};
use crate::model::character::Character;

/// Export the full character snapshot for the persistence collaborator.
/// The returned shape round-trips exactly through serde.
pub fn export_character(world: &World, character: Entity) -> Option<Character> {
    let core = world.get::<CharacterCore>(character)?;
    let vitals = world.get::<CharacterVitals>(character)?;
    let skills = world.get::<CharacterSkills>(character)?;
    let relationships = world.get::<CharacterRelationships>(character)?;
    let lifecycle = world.get::<Lifecycle>(character)?;
    let career = world.get::<CareerState>(character)?;
    let history = world.get::<LifeHistory>(character)?;
    let progress = world.get::<ProgressLog>(character)?;

    Some(Character {
        id: core.id,
        name: core.name.clone(),
        country: core.country.clone(),
        birth_year: core.birth_year,
        age: core.age,
        stats: vitals.0.clone(),
        skills: skills.0.clone(),
        relationships: relationships.0.clone(),
        alive: lifecycle.alive,
        death_cause: lifecycle.death_cause.clone(),
        assignments: career.0.clone(),
        history: history.0.clone(),
        progress: progress.0.clone(),
    })
}

/// Rebuild a live character from a stored snapshot. The id source is
/// advanced past every id present in the snapshot so new events never
/// collide with restored history.
pub fn import_character(world: &mut World, snapshot: &Character) -> Entity {
    let entity = world
        .spawn((
            PlayerCharacter,
            CharacterCore {
                id: snapshot.id,
                name: snapshot.name.clone(),
                country: snapshot.country.clone(),
                birth_year: snapshot.birth_year,
                age: snapshot.age,
            },
            CharacterVitals(snapshot.stats.clone()),
            CharacterSkills(snapshot.skills.clone()),
            CharacterRelationships(snapshot.relationships.clone()),
            Lifecycle {
                alive: snapshot.alive,
                death_cause: snapshot.death_cause.clone(),
            },
            CareerState(snapshot.assignments.clone()),
            LifeHistory(snapshot.history.clone()),
            ProgressLog(snapshot.progress.clone()),
        ))
        .id();

    if let Some(mut map) = world.get_resource_mut::<CharacterMap>() {
        map.insert(snapshot.id, entity);
    }
    if let Some(mut ids) = world.get_resource_mut::<SessionIds>() {
        ids.reserve_through(snapshot.id);
        for record in &snapshot.history {
            ids.reserve_through(record.event_id);
        }
    }

    entity
}
