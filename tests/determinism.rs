mod common;

use bevy_app::App;
use bevy_ecs::entity::Entity;

use common::{new_session, snapshot};
use life_sim::ecs::decide::next_decision;
use life_sim::ecs::resources::TelemetryLog;
use life_sim::ecs::test_helpers::{age_up, resolve};
use life_sim::model::{BranchId, Character};

/// A scripted life: alternate generated decisions and aging steps.
fn play(seed: u64) -> (App, Entity, Character, usize) {
    let (mut app, character) = new_session(seed);
    for round in 0..10 {
        if snapshot(&app, character).alive {
            if let Some(decision) = next_decision(app.world_mut(), character) {
                let branch = match round % 3 {
                    0 => BranchId::A,
                    1 => BranchId::B,
                    _ => BranchId::C,
                };
                resolve(&mut app, character, &decision, branch);
            }
        }
        if snapshot(&app, character).alive {
            age_up(&mut app, character, 1);
        }
    }
    let final_snapshot = snapshot(&app, character);
    let telemetry_len = app.world().resource::<TelemetryLog>().records.len();
    (app, character, final_snapshot, telemetry_len)
}

#[test]
fn same_seed_same_life() {
    let (_, _, first, telemetry_first) = play(77);
    let (_, _, second, telemetry_second) = play(77);
    assert_eq!(first, second);
    assert_eq!(telemetry_first, telemetry_second);
}

#[test]
fn scripted_life_accumulates_history() {
    let (_, _, life, telemetry_len) = play(78);
    assert!(!life.history.is_empty());
    assert!(telemetry_len > life.history.len());
}
