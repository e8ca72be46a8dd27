pub mod achievement;
pub mod bonus;
pub mod disease;
pub mod education;
pub mod milestone;
pub mod pattern;
pub mod profession;

use serde::{Deserialize, Serialize};

use crate::model::stats::{ALL_SKILLS, Skill};

pub use achievement::{Achievement, Requirement};
pub use bonus::BonusEvent;
pub use disease::Disease;
pub use education::EducationLevel;
pub use milestone::Milestone;
pub use pattern::EventPattern;
pub use profession::Profession;

/// Minimum skill levels required by a catalog entry. Missing keys are
/// trivially satisfied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillRequirements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intelligence: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creativity: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical: Option<i32>,
}

impl SkillRequirements {
    pub fn get(&self, skill: Skill) -> Option<i32> {
        match skill {
            Skill::Intelligence => self.intelligence,
            Skill::Creativity => self.creativity,
            Skill::Social => self.social,
            Skill::Physical => self.physical,
            Skill::Business => self.business,
            Skill::Technical => self.technical,
        }
    }

    pub fn entries(&self) -> [(Skill, Option<i32>); 6] {
        ALL_SKILLS.map(|skill| (skill, self.get(skill)))
    }
}

/// Immutable content tables, built once at startup and injected into the
/// session. Entries are looked up by id; unknown ids degrade to `None`.
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    professions: Vec<Profession>,
    education: Vec<EducationLevel>,
    diseases: Vec<Disease>,
    achievements: Vec<Achievement>,
    milestones: Vec<Milestone>,
    patterns: Vec<EventPattern>,
    bonus_events: Vec<BonusEvent>,
}

impl ContentCatalog {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        professions: Vec<Profession>,
        education: Vec<EducationLevel>,
        diseases: Vec<Disease>,
        achievements: Vec<Achievement>,
        milestones: Vec<Milestone>,
        patterns: Vec<EventPattern>,
        bonus_events: Vec<BonusEvent>,
    ) -> Self {
        Self {
            professions,
            education,
            diseases,
            achievements,
            milestones,
            patterns,
            bonus_events,
        }
    }

    /// The built-in content tables.
    pub fn builtin() -> Self {
        Self::new(
            profession::builtin(),
            education::builtin(),
            disease::builtin(),
            achievement::builtin(),
            milestone::builtin(),
            pattern::builtin(),
            bonus::builtin(),
        )
    }

    pub fn professions(&self) -> &[Profession] {
        &self.professions
    }

    pub fn profession(&self, id: &str) -> Option<&Profession> {
        self.professions.iter().find(|p| p.id == id)
    }

    pub fn education_levels(&self) -> &[EducationLevel] {
        &self.education
    }

    pub fn education_level(&self, id: &str) -> Option<&EducationLevel> {
        self.education.iter().find(|e| e.id == id)
    }

    pub fn diseases(&self) -> &[Disease] {
        &self.diseases
    }

    pub fn disease(&self, id: &str) -> Option<&Disease> {
        self.diseases.iter().find(|d| d.id == id)
    }

    pub fn age_related_diseases(&self) -> Vec<&Disease> {
        self.diseases.iter().filter(|d| d.age_related).collect()
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn achievement(&self, id: &str) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.id == id)
    }

    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    pub fn milestone(&self, id: &str) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.id == id)
    }

    pub fn patterns(&self) -> &[EventPattern] {
        &self.patterns
    }

    pub fn pattern(&self, id: &str) -> Option<&EventPattern> {
        self.patterns.iter().find(|p| p.id == id)
    }

    pub fn bonus_events(&self) -> &[BonusEvent] {
        &self.bonus_events
    }
}
