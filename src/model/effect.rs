use serde::{Deserialize, Serialize};

use super::stats::{ALL_RELATIONS, ALL_SKILLS, Relation, Skill};

/// Overwrite instruction for an assignment slot (profession, education,
/// disease). Presence of the instruction replaces the slot wholesale;
/// absence leaves it untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Assignment {
    Set { id: String },
    Clear,
}

impl Assignment {
    pub fn set(id: impl Into<String>) -> Self {
        Self::Set { id: id.into() }
    }

    pub fn apply(&self, slot: &mut Option<String>) {
        match self {
            Assignment::Set { id } => *slot = Some(id.clone()),
            Assignment::Clear => *slot = None,
        }
    }
}

/// Partial skill deltas; unnamed skills are untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillDeltas {
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

impl SkillDeltas {
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

/// Partial relationship deltas; unnamed relationships are untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationshipDeltas {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friends: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub romantic: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colleagues: Option<i32>,
}

impl RelationshipDeltas {
    pub fn get(&self, relation: Relation) -> Option<i32> {
        match relation {
            Relation::Family => self.family,
            Relation::Friends => self.friends,
            Relation::Romantic => self.romantic,
            Relation::Colleagues => self.colleagues,
        }
    }

    pub fn entries(&self) -> [(Relation, Option<i32>); 4] {
        ALL_RELATIONS.map(|relation| (relation, self.get(relation)))
    }
}

/// A delta bag describing the outcome of one event branch, reward, or
/// passive drift. Every field is explicitly optional; consumers match on
/// presence. `death_chance` is consumed only by the mortality check for
/// the one application it rides on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventEffect {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub happiness: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wealth: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<SkillDeltas>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<RelationshipDeltas>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<Assignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Assignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disease: Option<Assignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_chance: Option<f64>,
}
