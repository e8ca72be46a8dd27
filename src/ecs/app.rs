use bevy_app::App;
use bevy_ecs::message::MessageRegistry;
use bevy_ecs::schedule::IntoScheduleConfigs;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::catalog::ContentCatalog;

use super::clock::TurnClock;
use super::commands::{EngineCommand, apply_engine_commands};
use super::events::EngineEvent;
use super::resources::{
    AgingRng, CatalogStore, CharacterMap, DiseaseRng, MortalityRng, RewardsRng, SessionConfig,
    SessionIds, SimRng, TelemetryLog, distribute_rng,
};
use super::schedule::{SimPhase, configure_session_schedule};
use super::systems::scan_progression;

/// Build a headless session app with the built-in content tables.
///
/// One app hosts one character session; parallel sessions are
/// independent apps. Ticks are driven manually:
/// ```no_run
/// # use life_sim::ecs::{build_session_app, SessionTick};
/// let mut app = build_session_app(42);
/// app.world_mut().run_schedule(SessionTick);
/// ```
pub fn build_session_app(seed: u64) -> App {
    build_session_app_with(seed, ContentCatalog::builtin())
}

/// Build a headless session app with injected content tables.
pub fn build_session_app_with(seed: u64, catalog: ContentCatalog) -> App {
    let mut app = App::empty();

    // Core resources
    app.insert_resource(SessionConfig {
        seed,
        ..SessionConfig::default()
    });
    app.insert_resource(TurnClock::new());
    app.insert_resource(TelemetryLog::new());
    app.insert_resource(SessionIds::default());
    app.insert_resource(CharacterMap::new());
    app.insert_resource(CatalogStore(catalog));
    app.insert_resource(SimRng {
        rng: SmallRng::seed_from_u64(seed),
        seed,
    });

    // Per-domain RNG resources (reseeded each tick by distribute_rng)
    app.init_resource::<AgingRng>();
    app.init_resource::<MortalityRng>();
    app.init_resource::<DiseaseRng>();
    app.init_resource::<RewardsRng>();

    // Register message types
    MessageRegistry::register_message::<EngineCommand>(app.world_mut());
    MessageRegistry::register_message::<EngineEvent>(app.world_mut());

    // Build schedule with message rotation + applicator + progression scan
    let mut schedule = configure_session_schedule();
    schedule.add_systems(bevy_ecs::message::message_update_system.in_set(SimPhase::PreUpdate));
    schedule.add_systems(distribute_rng.in_set(SimPhase::PreUpdate));
    schedule.add_systems(apply_engine_commands.in_set(SimPhase::PostUpdate));
    schedule.add_systems(scan_progression.in_set(SimPhase::Reactions));
    app.add_schedule(schedule);
    app
}
