#![allow(dead_code)]

use bevy_app::App;
use bevy_ecs::entity::Entity;

use life_sim::ecs::app::build_session_app;
use life_sim::ecs::commands::{EngineCommand, EngineCommandKind};
use life_sim::ecs::resources::SessionIds;
use life_sim::ecs::snapshot::export_character;
use life_sim::ecs::spawn::{CharacterSeed, spawn_character};
use life_sim::ecs::test_helpers::{send_command, tick};
use life_sim::model::{BranchId, Character, EventEffect};

pub fn new_session(seed: u64) -> (App, Entity) {
    let mut app = build_session_app(seed);
    let character = spawn_character(
        app.world_mut(),
        CharacterSeed {
            name: "Avery Quinn".to_string(),
            country: "US".to_string(),
            birth_year: 1990,
        },
    );
    (app, character)
}

/// Resolve a scripted effect as branch A of a synthetic decision point.
pub fn apply_effect(app: &mut App, character: Entity, effect: EventEffect) {
    let event_id = app.world_mut().resource_mut::<SessionIds>().next_id();
    send_command(
        app,
        EngineCommand::new(
            EngineCommandKind::ResolveDecision {
                character,
                event_id,
                pattern: "scripted".to_string(),
                branch: BranchId::A,
                effect,
            },
            "scripted effect",
        ),
    );
    tick(app);
}

pub fn snapshot(app: &App, character: Entity) -> Character {
    export_character(app.world(), character).expect("character should export")
}

/// Pre-complete every milestone so age jumps don't pollute exact-value
/// assertions with milestone rewards.
pub fn complete_all_milestones(app: &mut App, character: Entity) {
    use life_sim::ecs::components::ProgressLog;
    use life_sim::ecs::resources::CatalogStore;
    use life_sim::model::character::MilestoneUnlock;

    let ids: Vec<String> = app
        .world()
        .resource::<CatalogStore>()
        .0
        .milestones()
        .iter()
        .map(|m| m.id.clone())
        .collect();
    let mut progress = app.world_mut().get_mut::<ProgressLog>(character).unwrap();
    for id in ids {
        progress.0.milestones.push(MilestoneUnlock { id, turn: 0 });
    }
}
