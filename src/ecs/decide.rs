use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;
use rand::Rng;

use crate::ecs::commands::{EngineCommand, EngineCommandKind};
use crate::ecs::components::{CharacterCore, Lifecycle};
use crate::ecs::resources::{CatalogStore, SessionIds, SimRng};
use crate::model::event::{BranchId, DecisionPoint};
use crate::rules::pattern;

/// Generate the next decision point for a character: pick a template
/// uniformly from the pattern catalog and age-adapt it once. Returns
/// `None` for dead or unknown characters, or an empty pattern catalog.
pub fn next_decision(world: &mut World, character: Entity) -> Option<DecisionPoint> {
    if !world.get::<Lifecycle>(character)?.alive {
        return None;
    }
    let age = world.get::<CharacterCore>(character)?.age;

    let count = world.resource::<CatalogStore>().0.patterns().len();
    if count == 0 {
        return None;
    }
    let index = {
        let mut rng = world.resource_mut::<SimRng>();
        rng.rng.random_range(0..count)
    };
    let template = world.resource::<CatalogStore>().0.patterns()[index].clone();

    let branches = pattern::adapt_for_age(&template, age);
    let event_id = world.resource_mut::<SessionIds>().next_id();

    Some(DecisionPoint {
        event_id,
        pattern: template.id,
        prompt: template.prompt,
        branches,
    })
}

/// Build the `ResolveDecision` command for a chosen branch of a
/// generated decision point.
pub fn resolve_command(
    decision: &DecisionPoint,
    character: Entity,
    branch: BranchId,
) -> EngineCommand {
    let chosen = decision.branch(branch);
    EngineCommand::new(
        EngineCommandKind::ResolveDecision {
            character,
            event_id: decision.event_id,
            pattern: decision.pattern.clone(),
            branch,
            effect: chosen.effect.clone(),
        },
        format!("{}: {}", decision.prompt, chosen.label),
    )
}
