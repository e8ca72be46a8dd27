use std::collections::BTreeMap;
use std::hash::{DefaultHasher, Hash, Hasher};

use bevy_ecs::entity::Entity;
use bevy_ecs::resource::Resource;
use bevy_ecs::world::World;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::catalog::ContentCatalog;
use crate::model::event::TelemetryKind;

/// Session configuration. `difficulty` multiplies event-authored death
/// chances in the mortality check.
#[derive(Resource, Debug, Clone)]
pub struct SessionConfig {
    pub seed: u64,
    pub difficulty: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            difficulty: 1.0,
        }
    }
}

/// Master deterministic RNG for the session. Decision generation draws
/// from it directly; domain RNGs are reseeded from it each tick.
#[derive(Resource)]
pub struct SimRng {
    pub rng: SmallRng,
    pub seed: u64,
}

// ---------------------------------------------------------------------------
// Per-domain RNG resources
// ---------------------------------------------------------------------------

macro_rules! domain_rng {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Resource)]
        pub struct $name(pub SmallRng);

        impl Default for $name {
            fn default() -> Self {
                Self(SmallRng::seed_from_u64(0))
            }
        }
    };
}

domain_rng!(AgingRng, "Per-domain RNG for natural-death rolls.");
domain_rng!(MortalityRng, "Per-domain RNG for probabilistic death rolls.");
domain_rng!(DiseaseRng, "Per-domain RNG for late-life disease onset.");
domain_rng!(RewardsRng, "Per-domain RNG for bonus-event draws.");

/// Derive a deterministic per-domain seed from the session seed, domain
/// name, and turn count.
fn derive_domain_seed(seed: u64, domain: &str, turn: u64) -> u64 {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    domain.hash(&mut hasher);
    turn.hash(&mut hasher);
    hasher.finish()
}

/// Exclusive system that re-seeds all per-domain RNGs each tick.
/// Runs in `SimPhase::PreUpdate` before any domain work.
pub fn distribute_rng(world: &mut World) {
    let seed = world.resource::<SimRng>().seed;
    let turn = world.resource::<crate::ecs::clock::TurnClock>().turn;

    macro_rules! reseed {
        ($res:ty, $label:expr) => {
            world.resource_mut::<$res>().0 =
                SmallRng::seed_from_u64(derive_domain_seed(seed, $label, turn));
        };
    }

    reseed!(AgingRng, "aging");
    reseed!(MortalityRng, "mortality");
    reseed!(DiseaseRng, "disease");
    reseed!(RewardsRng, "rewards");
}

/// Monotonic id source for characters, decision events, and telemetry
/// records. No two objects of any kind share an id within a session.
#[derive(Resource, Debug)]
pub struct SessionIds {
    next: u64,
}

impl SessionIds {
    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Ensure future ids start past `id` (used when importing snapshots).
    pub fn reserve_through(&mut self, id: u64) {
        self.next = self.next.max(id + 1);
    }
}

impl Default for SessionIds {
    fn default() -> Self {
        Self { next: 1 }
    }
}

/// Maps character ids to their ECS entities.
#[derive(Resource, Debug, Default)]
pub struct CharacterMap {
    by_id: BTreeMap<u64, Entity>,
}

impl CharacterMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: u64, entity: Entity) {
        self.by_id.insert(id, entity);
    }

    pub fn get(&self, id: u64) -> Option<Entity> {
        self.by_id.get(&id).copied()
    }

    pub fn remove(&mut self, id: u64) -> Option<Entity> {
        self.by_id.remove(&id)
    }
}

/// One fire-and-forget notification of an engine state transition.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryRecord {
    pub id: u64,
    pub kind: TelemetryKind,
    pub turn: u64,
    pub description: String,
    pub data: serde_json::Value,
}

/// Accumulates telemetry between collaborator drains. Consumers call
/// `drain`; whether they deliver the records anywhere has no effect on
/// engine state.
#[derive(Resource, Debug, Clone, Default)]
pub struct TelemetryLog {
    pub records: Vec<TelemetryRecord>,
}

impl TelemetryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&mut self) -> Vec<TelemetryRecord> {
        std::mem::take(&mut self.records)
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

/// Read-only content tables for the session.
#[derive(Resource, Debug, Clone)]
pub struct CatalogStore(pub ContentCatalog);
