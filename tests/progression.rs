mod common;

use common::{apply_effect, new_session, snapshot};
use life_sim::ContentCatalog;
use life_sim::catalog::{Achievement, Requirement};
use life_sim::ecs::app::build_session_app_with;
use life_sim::ecs::spawn::{CharacterSeed, spawn_character};
use life_sim::ecs::test_helpers::age_up;
use life_sim::model::effect::SkillDeltas;
use life_sim::model::stats::Skill;
use life_sim::model::EventEffect;

#[test]
fn milestones_complete_once_with_turn_stamps() {
    let (mut app, character) = new_session(20);

    age_up(&mut app, character, 18);
    let after = snapshot(&app, character);
    for id in ["first-steps", "school-days", "teenager", "adult"] {
        assert!(after.progress.has_milestone(id), "missing {id}");
    }
    assert!(!after.progress.has_milestone("quarter-century"));
    // All completed on the first engine step.
    assert!(after.progress.milestones.iter().all(|m| m.turn == 0));

    // A second pass over the same ages completes nothing new.
    age_up(&mut app, character, 1);
    let later = snapshot(&app, character);
    let adult_count = later
        .progress
        .milestones
        .iter()
        .filter(|m| m.id == "adult")
        .count();
    assert_eq!(adult_count, 1);
    assert!(
        later.progress.milestones.len() >= after.progress.milestones.len()
    );
}

#[test]
fn rescanning_without_state_change_unlocks_nothing() {
    let (mut app, character) = new_session(21);

    apply_effect(
        &mut app,
        character,
        EventEffect {
            wealth: Some(20_000),
            ..EventEffect::default()
        },
    );
    let first = snapshot(&app, character);
    assert!(first.progress.has_achievement("rich"));

    // Two zero-effect resolutions trigger two more scans.
    apply_effect(&mut app, character, EventEffect::default());
    apply_effect(&mut app, character, EventEffect::default());

    let after = snapshot(&app, character);
    assert_eq!(after.progress.achievements, first.progress.achievements);
    assert_eq!(after.stats.happiness, first.stats.happiness);
}

#[test]
fn achievement_reward_is_paid_exactly_once() {
    let (mut app, character) = new_session(22);

    let brain_boost = EventEffect {
        skills: Some(SkillDeltas {
            intelligence: Some(160),
            ..SkillDeltas::default()
        }),
        ..EventEffect::default()
    };
    apply_effect(&mut app, character, brain_boost.clone());
    let first = snapshot(&app, character);
    assert!(first.progress.has_achievement("genius"));
    assert_eq!(first.stats.wealth, 1_000);

    // The same unlocking condition arriving again pays nothing more.
    apply_effect(&mut app, character, brain_boost);
    let after = snapshot(&app, character);
    assert_eq!(after.stats.wealth, 1_000);
    let genius_count = after
        .progress
        .achievements
        .iter()
        .filter(|a| a.id == "genius")
        .count();
    assert_eq!(genius_count, 1);
}

#[test]
fn conjunction_achievements_need_every_clause() {
    let (mut app, character) = new_session(23);

    apply_effect(
        &mut app,
        character,
        EventEffect {
            wealth: Some(150_000),
            ..EventEffect::default()
        },
    );
    assert!(!snapshot(&app, character).progress.has_achievement("self-made"));

    apply_effect(
        &mut app,
        character,
        EventEffect {
            skills: Some(SkillDeltas {
                business: Some(120),
                ..SkillDeltas::default()
            }),
            ..EventEffect::default()
        },
    );
    assert!(snapshot(&app, character).progress.has_achievement("self-made"));
}

#[test]
fn reward_cascades_unlock_in_the_same_pass() {
    let catalog = ContentCatalog::new(
        vec![],
        vec![],
        vec![],
        vec![
            Achievement {
                id: "prodigy".to_string(),
                name: "Prodigy".to_string(),
                requirement: Requirement::SkillAtLeast {
                    skill: Skill::Creativity,
                    level: 100,
                },
                reward: EventEffect {
                    wealth: Some(20_000),
                    ..EventEffect::default()
                },
            },
            Achievement {
                id: "flush".to_string(),
                name: "Flush".to_string(),
                requirement: Requirement::WealthAtLeast { amount: 10_000 },
                reward: EventEffect {
                    happiness: Some(10),
                    ..EventEffect::default()
                },
            },
        ],
        vec![],
        vec![],
        vec![],
    );
    let mut app = build_session_app_with(24, catalog);
    let character = spawn_character(
        app.world_mut(),
        CharacterSeed {
            name: "Sam Rivers".to_string(),
            country: "CA".to_string(),
            birth_year: 2000,
        },
    );

    apply_effect(
        &mut app,
        character,
        EventEffect {
            skills: Some(SkillDeltas {
                creativity: Some(150),
                ..SkillDeltas::default()
            }),
            ..EventEffect::default()
        },
    );

    let after = snapshot(&app, character);
    // The prodigy reward pushed wealth past flush's threshold within the
    // same scan pass.
    assert!(after.progress.has_achievement("prodigy"));
    assert!(after.progress.has_achievement("flush"));
    assert_eq!(after.stats.wealth, 20_000);
}

#[test]
fn bonus_events_fire_on_roughly_one_aging_step_in_ten() {
    let runs = 300;
    let mut awarded = 0;
    for seed in 0..runs {
        let (mut app, character) = new_session(1_000 + seed);
        age_up(&mut app, character, 1);
        let after = snapshot(&app, character);
        assert!(after.progress.bonuses.len() <= 1, "at most one per step");
        awarded += after.progress.bonuses.len();
    }
    let rate = awarded as f64 / runs as f64;
    assert!(rate > 0.04, "bonus rate {rate} too low");
    assert!(rate < 0.18, "bonus rate {rate} too high");
}

#[test]
fn bonuses_only_fire_on_aging_steps() {
    let (mut app, character) = new_session(25);
    for _ in 0..20 {
        apply_effect(&mut app, character, EventEffect::default());
    }
    assert!(snapshot(&app, character).progress.bonuses.is_empty());
}
