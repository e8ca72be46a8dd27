mod common;

use common::{complete_all_milestones, new_session, snapshot};
use life_sim::ecs::commands::{EngineCommand, EngineCommandKind};
use life_sim::ecs::components::{CharacterCore, CharacterSkills};
use life_sim::ecs::test_helpers::{send_command, tick};

fn assign_profession(app: &mut bevy_app::App, character: bevy_ecs::entity::Entity, id: &str) {
    send_command(
        app,
        EngineCommand::new(
            EngineCommandKind::AssignProfession {
                character,
                profession: id.to_string(),
            },
            format!("Applied for {id}"),
        ),
    );
    tick(app);
}

fn enroll_education(app: &mut bevy_app::App, character: bevy_ecs::entity::Entity, id: &str) {
    send_command(
        app,
        EngineCommand::new(
            EngineCommandKind::EnrollEducation {
                character,
                education: id.to_string(),
            },
            format!("Enrolled in {id}"),
        ),
    );
    tick(app);
}

#[test]
fn profession_assignment_gates_on_skills() {
    let (mut app, character) = new_session(30);

    {
        let mut skills = app.world_mut().get_mut::<CharacterSkills>(character).unwrap();
        skills.0.business = 40;
    }
    assign_profession(&mut app, character, "entrepreneur");
    assert!(snapshot(&app, character).assignments.profession.is_none());

    {
        let mut skills = app.world_mut().get_mut::<CharacterSkills>(character).unwrap();
        skills.0.business = 50;
    }
    assign_profession(&mut app, character, "entrepreneur");
    let after = snapshot(&app, character);
    assert_eq!(after.assignments.profession.as_deref(), Some("entrepreneur"));
    assert!(after.progress.has_achievement("working-life"));
}

#[test]
fn unknown_profession_is_a_noop() {
    let (mut app, character) = new_session(31);
    assign_profession(&mut app, character, "astronaut");
    assert!(snapshot(&app, character).assignments.profession.is_none());
}

#[test]
fn education_gates_on_age_and_applies_enrollment_effect() {
    let (mut app, character) = new_session(32);
    complete_all_milestones(&mut app, character);
    {
        let mut skills = app.world_mut().get_mut::<CharacterSkills>(character).unwrap();
        skills.0.intelligence = 60;
    }
    {
        let mut core = app.world_mut().get_mut::<CharacterCore>(character).unwrap();
        core.age = 17;
    }

    enroll_education(&mut app, character, "university");
    assert!(snapshot(&app, character).assignments.education.is_none());

    {
        let mut core = app.world_mut().get_mut::<CharacterCore>(character).unwrap();
        core.age = 18;
    }
    enroll_education(&mut app, character, "university");
    let after = snapshot(&app, character);
    assert_eq!(after.assignments.education.as_deref(), Some("university"));
    // Enrollment effect: intelligence +20, business +5.
    assert_eq!(after.skills.intelligence, 80);
    assert_eq!(after.skills.business, 5);
    assert!(after.progress.has_achievement("graduate"));
}

#[test]
fn reassignment_overwrites_the_slot() {
    let (mut app, character) = new_session(33);
    {
        let mut skills = app.world_mut().get_mut::<CharacterSkills>(character).unwrap();
        skills.0.social = 20;
        skills.0.business = 60;
    }
    assign_profession(&mut app, character, "retail-clerk");
    assert_eq!(
        snapshot(&app, character).assignments.profession.as_deref(),
        Some("retail-clerk")
    );
    assign_profession(&mut app, character, "entrepreneur");
    assert_eq!(
        snapshot(&app, character).assignments.profession.as_deref(),
        Some("entrepreneur")
    );
}
