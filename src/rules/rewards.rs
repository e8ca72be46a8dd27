use rand::Rng;

use crate::catalog::{BonusEvent, Requirement};
use crate::model::character::AssignmentState;
use crate::model::stats::{RelationshipSet, SkillSet, Stats};

/// Probability that any bonus fires on one aging step.
pub const BONUS_EVENT_CHANCE: f64 = 0.10;

/// Read-only view of the character state a requirement is evaluated
/// against.
pub struct CharacterView<'a> {
    pub age: u32,
    pub stats: &'a Stats,
    pub skills: &'a SkillSet,
    pub relationships: &'a RelationshipSet,
    pub assignments: &'a AssignmentState,
}

pub fn requirement_met(requirement: &Requirement, view: &CharacterView) -> bool {
    match requirement {
        Requirement::SkillAtLeast { skill, level } => view.skills.get(*skill) >= *level,
        Requirement::RelationshipAtLeast { relation, level } => {
            view.relationships.get(*relation) >= *level
        }
        Requirement::AgeAtLeast { age } => view.age >= *age,
        Requirement::WealthAtLeast { amount } => view.stats.wealth >= *amount,
        Requirement::HasProfession => view.assignments.profession.is_some(),
        Requirement::ProfessionIs { id } => view.assignments.profession.as_deref() == Some(id),
        Requirement::HasEducation => view.assignments.education.is_some(),
        Requirement::EducationIs { id } => view.assignments.education.as_deref() == Some(id),
        Requirement::All { requirements } => {
            requirements.iter().all(|r| requirement_met(r, view))
        }
    }
}

/// One bonus draw for one aging step: with `BONUS_EVENT_CHANCE`, pick
/// uniformly from the table; otherwise nothing fires.
pub fn roll_bonus<'a>(
    bonus_events: &'a [BonusEvent],
    rng: &mut dyn rand::RngCore,
) -> Option<&'a BonusEvent> {
    if bonus_events.is_empty() {
        return None;
    }
    if rng.random_range(0.0..1.0) >= BONUS_EVENT_CHANCE {
        return None;
    }
    Some(&bonus_events[rng.random_range(0..bonus_events.len())])
}
