use bevy_app::App;
use bevy_ecs::entity::Entity;
use bevy_ecs::message::Messages;

use super::commands::{EngineCommand, EngineCommandKind};
use super::decide;
use super::schedule::SessionTick;
use crate::model::event::{BranchId, DecisionPoint};

/// Run one engine step.
pub fn tick(app: &mut App) {
    app.world_mut().run_schedule(SessionTick);
}

/// Write a command for the next tick to pick up.
pub fn send_command(app: &mut App, command: EngineCommand) {
    app.world_mut()
        .resource_mut::<Messages<EngineCommand>>()
        .write(command);
}

/// Resolve a decision point with the chosen branch and run the tick.
pub fn resolve(app: &mut App, character: Entity, decision: &DecisionPoint, branch: BranchId) {
    send_command(app, decide::resolve_command(decision, character, branch));
    tick(app);
}

/// Age the character up and run the tick.
pub fn age_up(app: &mut App, character: Entity, years: u32) {
    send_command(
        app,
        EngineCommand::new(
            EngineCommandKind::AgeUp { character, years },
            format!("Aged up {years} year(s)"),
        ),
    );
    tick(app);
}
