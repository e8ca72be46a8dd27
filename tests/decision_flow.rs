mod common;

use common::{apply_effect, new_session, snapshot};
use life_sim::ecs::decide::next_decision;
use life_sim::ecs::test_helpers::resolve;
use life_sim::model::{BranchId, EventEffect};

#[test]
fn zero_effect_changes_nothing_but_history() {
    let (mut app, character) = new_session(1);
    let before = snapshot(&app, character);

    apply_effect(&mut app, character, EventEffect::default());

    let after = snapshot(&app, character);
    assert_eq!(after.stats, before.stats);
    assert_eq!(after.skills, before.skills);
    assert_eq!(after.relationships, before.relationships);
    assert_eq!(after.assignments, before.assignments);
    assert!(after.alive);
    assert_eq!(after.history.len(), 1);
}

#[test]
fn effect_changes_only_named_fields() {
    let (mut app, character) = new_session(2);
    let before = snapshot(&app, character);

    apply_effect(
        &mut app,
        character,
        EventEffect {
            happiness: Some(-7),
            energy: Some(12),
            ..EventEffect::default()
        },
    );

    let after = snapshot(&app, character);
    assert_eq!(after.stats.happiness, before.stats.happiness - 7);
    assert_eq!(after.stats.energy, before.stats.energy + 12);
    assert_eq!(after.stats.health, before.stats.health);
    assert_eq!(after.stats.wealth, before.stats.wealth);
    assert_eq!(after.skills, before.skills);
}

#[test]
fn critical_health_kills_with_the_right_cause() {
    let (mut app, character) = new_session(3);

    // 100 health - 160 lands on -60, past the -50 terminal threshold.
    apply_effect(
        &mut app,
        character,
        EventEffect {
            health: Some(-160),
            ..EventEffect::default()
        },
    );

    let after = snapshot(&app, character);
    assert_eq!(after.stats.health, -60);
    assert!(!after.alive);
    assert_eq!(after.death_cause.as_deref(), Some("Critical health failure"));
}

#[test]
fn wealth_achievement_unlocks_exactly_once() {
    let (mut app, character) = new_session(4);

    apply_effect(
        &mut app,
        character,
        EventEffect {
            wealth: Some(5_000),
            ..EventEffect::default()
        },
    );
    let mid = snapshot(&app, character);
    assert_eq!(mid.stats.wealth, 5_000);
    assert!(!mid.progress.has_achievement("rich"));

    apply_effect(
        &mut app,
        character,
        EventEffect {
            wealth: Some(6_000),
            ..EventEffect::default()
        },
    );
    let after = snapshot(&app, character);
    assert_eq!(after.stats.wealth, 11_000);
    assert!(after.progress.has_achievement("rich"));
    // Reward: +10 happiness, applied exactly once.
    assert_eq!(after.stats.happiness, mid.stats.happiness + 10);

    // Further state changes must not re-unlock or re-pay.
    apply_effect(
        &mut app,
        character,
        EventEffect {
            wealth: Some(1),
            ..EventEffect::default()
        },
    );
    let last = snapshot(&app, character);
    let rich_count = last
        .progress
        .achievements
        .iter()
        .filter(|a| a.id == "rich")
        .count();
    assert_eq!(rich_count, 1);
    assert_eq!(last.stats.happiness, after.stats.happiness);
}

#[test]
fn dead_characters_reject_further_mutation() {
    let (mut app, character) = new_session(5);

    apply_effect(
        &mut app,
        character,
        EventEffect {
            health: Some(-300),
            ..EventEffect::default()
        },
    );
    let dead = snapshot(&app, character);
    assert!(!dead.alive);

    apply_effect(
        &mut app,
        character,
        EventEffect {
            wealth: Some(9_999),
            ..EventEffect::default()
        },
    );
    let after = snapshot(&app, character);
    assert_eq!(after.stats, dead.stats);
    assert_eq!(after.history.len(), dead.history.len());
    assert_eq!(after.progress, dead.progress);
}

#[test]
fn generated_decisions_append_ordered_history() {
    let (mut app, character) = new_session(6);

    let first = next_decision(app.world_mut(), character).unwrap();
    resolve(&mut app, character, &first, BranchId::B);
    let second = next_decision(app.world_mut(), character).unwrap();
    resolve(&mut app, character, &second, BranchId::A);

    let after = snapshot(&app, character);
    assert_eq!(after.history.len(), 2);
    assert_eq!(after.history[0].event_id, first.event_id);
    assert_eq!(after.history[0].branch, BranchId::B);
    assert_eq!(after.history[1].event_id, second.event_id);
    assert!(after.history[0].turn < after.history[1].turn);
    assert_eq!(
        after.history[1].effect,
        second.branch(BranchId::A).effect
    );
}

#[test]
fn decisions_stop_after_death() {
    let (mut app, character) = new_session(7);
    apply_effect(
        &mut app,
        character,
        EventEffect {
            health: Some(-300),
            ..EventEffect::default()
        },
    );
    assert!(next_decision(app.world_mut(), character).is_none());
}
