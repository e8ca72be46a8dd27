use crate::model::character::AssignmentState;
use crate::model::effect::EventEffect;
use crate::model::stats::{RelationshipSet, SkillSet, Stats};

/// Merge an effect into character state. Only fields named in the effect
/// change; each stat family is re-clamped immediately after its deltas.
/// Lifecycle flags are untouched; death is the mortality check's job,
/// run by the caller right after this.
pub fn apply_effects(
    effect: &EventEffect,
    stats: &mut Stats,
    skills: &mut SkillSet,
    relationships: &mut RelationshipSet,
    assignments: &mut AssignmentState,
) {
    if let Some(delta) = effect.health {
        stats.health += delta;
    }
    if let Some(delta) = effect.happiness {
        stats.happiness += delta;
    }
    if let Some(delta) = effect.energy {
        stats.energy += delta;
    }
    if let Some(delta) = effect.wealth {
        stats.wealth += delta;
    }
    *stats = stats.clone().clamped();

    if let Some(ref deltas) = effect.skills {
        for (skill, delta) in deltas.entries() {
            if let Some(delta) = delta {
                *skills.get_mut(skill) += delta;
            }
        }
        *skills = skills.clone().clamped();
    }

    if let Some(ref deltas) = effect.relationships {
        for (relation, delta) in deltas.entries() {
            if let Some(delta) = delta {
                *relationships.get_mut(relation) += delta;
            }
        }
        *relationships = relationships.clone().clamped();
    }

    if let Some(ref assignment) = effect.profession {
        assignment.apply(&mut assignments.profession);
    }
    if let Some(ref assignment) = effect.education {
        assignment.apply(&mut assignments.education);
    }
    if let Some(ref assignment) = effect.disease {
        assignment.apply(&mut assignments.disease);
    }
}
