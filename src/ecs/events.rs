use bevy_ecs::entity::Entity;
use bevy_ecs::message::Message;

/// Reactive events emitted by the command applicator (and spawn helpers)
/// for same-tick reactions and downstream telemetry consumers. The
/// progression scan keys off these to know which characters changed.
#[derive(Message, Clone, Debug)]
pub enum EngineEvent {
    CharacterSpawned {
        character: Entity,
    },
    StatsChanged {
        character: Entity,
    },
    AgeAdvanced {
        character: Entity,
        years: u32,
        new_age: u32,
    },
    CareerChanged {
        character: Entity,
    },
    DiseaseContracted {
        character: Entity,
        disease: String,
    },
    CharacterDied {
        character: Entity,
        cause: String,
    },
}

impl EngineEvent {
    pub fn character(&self) -> Entity {
        match self {
            EngineEvent::CharacterSpawned { character }
            | EngineEvent::StatsChanged { character }
            | EngineEvent::AgeAdvanced { character, .. }
            | EngineEvent::CareerChanged { character }
            | EngineEvent::DiseaseContracted { character, .. }
            | EngineEvent::CharacterDied { character, .. } => *character,
        }
    }
}
