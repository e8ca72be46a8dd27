use std::collections::BTreeMap;

use bevy_ecs::entity::Entity;
use bevy_ecs::message::MessageReader;
use bevy_ecs::query::With;
use bevy_ecs::system::{Query, Res, ResMut};
use serde_json::json;

use crate::ecs::clock::TurnClock;
use crate::ecs::components::{
    CareerState, CharacterCore, CharacterRelationships, CharacterSkills, CharacterVitals,
    Lifecycle, PlayerCharacter, ProgressLog,
};
use crate::ecs::events::EngineEvent;
use crate::ecs::resources::{CatalogStore, RewardsRng, SessionIds, TelemetryLog, TelemetryRecord};
use crate::model::character::{AchievementUnlock, BonusAward, MilestoneUnlock};
use crate::model::event::TelemetryKind;
use crate::rules::effects::apply_effects;
use crate::rules::rewards::{self, CharacterView};

/// Reactions-phase scan over the achievement and milestone catalogs for
/// every character touched this tick. Unlocking is one-shot: entries
/// already in the progress log are skipped, so re-scanning is
/// idempotent. The scan loops until no new entry unlocks, letting a
/// reward effect that satisfies another requirement unlock it in the
/// same pass. Bonus events are drawn once per aging step.
#[allow(clippy::type_complexity)]
pub fn scan_progression(
    mut events: MessageReader<EngineEvent>,
    catalog: Res<CatalogStore>,
    clock: Res<TurnClock>,
    mut rng: ResMut<RewardsRng>,
    mut ids: ResMut<SessionIds>,
    mut telemetry: ResMut<TelemetryLog>,
    mut characters: Query<
        (
            &CharacterCore,
            &Lifecycle,
            &mut CharacterVitals,
            &mut CharacterSkills,
            &mut CharacterRelationships,
            &mut CareerState,
            &mut ProgressLog,
        ),
        With<PlayerCharacter>,
    >,
) {
    // Which characters changed this tick, and how many aging steps fired.
    let mut touched: BTreeMap<Entity, u32> = BTreeMap::new();
    for event in events.read() {
        match event {
            EngineEvent::AgeAdvanced { character, .. } => {
                *touched.entry(*character).or_insert(0) += 1;
            }
            EngineEvent::CharacterDied { .. } => {}
            other => {
                touched.entry(other.character()).or_insert(0);
            }
        }
    }

    let rng = &mut rng.0;

    for (&entity, &aging_steps) in &touched {
        let Ok((core, lifecycle, mut vitals, mut skills, mut rels, mut career, mut progress)) =
            characters.get_mut(entity)
        else {
            continue;
        };
        // Terminal characters accept no further mutation.
        if !lifecycle.alive {
            continue;
        }

        let mut stats = vitals.0.clone();
        let mut skill_set = skills.0.clone();
        let mut relationship_set = rels.0.clone();
        let mut assignments = career.0.clone();
        let mut log = progress.0.clone();

        loop {
            let mut unlocked_any = false;

            for achievement in catalog.0.achievements() {
                if log.has_achievement(&achievement.id) {
                    continue;
                }
                let met = {
                    let view = CharacterView {
                        age: core.age,
                        stats: &stats,
                        skills: &skill_set,
                        relationships: &relationship_set,
                        assignments: &assignments,
                    };
                    rewards::requirement_met(&achievement.requirement, &view)
                };
                if !met {
                    continue;
                }
                apply_effects(
                    &achievement.reward,
                    &mut stats,
                    &mut skill_set,
                    &mut relationship_set,
                    &mut assignments,
                );
                log.achievements.push(AchievementUnlock {
                    id: achievement.id.clone(),
                    turn: clock.turn,
                });
                push_record(
                    &mut ids,
                    &mut telemetry,
                    clock.turn,
                    TelemetryKind::AchievementUnlocked,
                    format!("Achievement unlocked: {}", achievement.name),
                    json!({ "id": achievement.id }),
                );
                unlocked_any = true;
            }

            for milestone in catalog.0.milestones() {
                if log.has_milestone(&milestone.id) || core.age < milestone.age {
                    continue;
                }
                apply_effects(
                    &milestone.reward,
                    &mut stats,
                    &mut skill_set,
                    &mut relationship_set,
                    &mut assignments,
                );
                log.milestones.push(MilestoneUnlock {
                    id: milestone.id.clone(),
                    turn: clock.turn,
                });
                push_record(
                    &mut ids,
                    &mut telemetry,
                    clock.turn,
                    TelemetryKind::MilestoneReached,
                    format!("Milestone reached: {}", milestone.name),
                    json!({ "id": milestone.id, "age": milestone.age }),
                );
                unlocked_any = true;
            }

            if !unlocked_any {
                break;
            }
        }

        for _ in 0..aging_steps {
            if let Some(bonus) = rewards::roll_bonus(catalog.0.bonus_events(), rng) {
                apply_effects(
                    &bonus.effect,
                    &mut stats,
                    &mut skill_set,
                    &mut relationship_set,
                    &mut assignments,
                );
                log.bonuses.push(BonusAward {
                    id: bonus.id.clone(),
                    turn: clock.turn,
                });
                push_record(
                    &mut ids,
                    &mut telemetry,
                    clock.turn,
                    TelemetryKind::BonusAwarded,
                    format!("Bonus event: {}", bonus.name),
                    json!({ "id": bonus.id }),
                );
            }
        }

        vitals.0 = stats;
        skills.0 = skill_set;
        rels.0 = relationship_set;
        career.0 = assignments;
        progress.0 = log;
    }
}

fn push_record(
    ids: &mut SessionIds,
    telemetry: &mut TelemetryLog,
    turn: u64,
    kind: TelemetryKind,
    description: String,
    data: serde_json::Value,
) {
    let id = ids.next_id();
    telemetry.records.push(TelemetryRecord {
        id,
        kind,
        turn,
        description,
        data,
    });
}
