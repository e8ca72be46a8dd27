use crate::catalog::{ContentCatalog, EducationLevel, Profession, SkillRequirements};
use crate::model::stats::SkillSet;

/// True iff every named requirement is met or exceeded. Missing keys are
/// trivially satisfied.
pub fn meets_skill_requirements(requirements: &SkillRequirements, skills: &SkillSet) -> bool {
    requirements
        .entries()
        .into_iter()
        .all(|(skill, min)| min.is_none_or(|min| skills.get(skill) >= min))
}

pub fn can_assign_profession(profession: &Profession, skills: &SkillSet) -> bool {
    meets_skill_requirements(&profession.requirements, skills)
}

/// Education additionally gates on minimum age.
pub fn can_enroll(level: &EducationLevel, skills: &SkillSet, age: u32) -> bool {
    age >= level.min_age && meets_skill_requirements(&level.requirements, skills)
}

pub fn available_professions<'a>(
    catalog: &'a ContentCatalog,
    skills: &SkillSet,
) -> Vec<&'a Profession> {
    catalog
        .professions()
        .iter()
        .filter(|p| can_assign_profession(p, skills))
        .collect()
}

pub fn available_education<'a>(
    catalog: &'a ContentCatalog,
    skills: &SkillSet,
    age: u32,
) -> Vec<&'a EducationLevel> {
    catalog
        .education_levels()
        .iter()
        .filter(|e| can_enroll(e, skills, age))
        .collect()
}

/// Annual income for a held profession: the base income scaled by the
/// product, over each required skill, of `1 + (actual - required) / 100`.
/// Floored at zero so skill decay can't produce negative pay.
pub fn income_of(profession: &Profession, skills: &SkillSet) -> i64 {
    let mut multiplier = 1.0;
    for (skill, min) in profession.requirements.entries() {
        if let Some(required) = min {
            multiplier *= 1.0 + (skills.get(skill) - required) as f64 / 100.0;
        }
    }
    ((profession.base_income as f64 * multiplier).floor() as i64).max(0)
}

/// Unknown profession ids yield zero income rather than an error.
pub fn income(catalog: &ContentCatalog, profession_id: &str, skills: &SkillSet) -> i64 {
    catalog
        .profession(profession_id)
        .map_or(0, |p| income_of(p, skills))
}
