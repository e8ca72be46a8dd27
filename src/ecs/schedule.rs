use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs, Schedule, ScheduleLabel, SystemSet};

use super::clock::advance_turn;

/// Schedule label for one engine step. Run manually after writing
/// commands, via `app.world_mut().run_schedule(SessionTick)`.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionTick;

/// Ordered phases within each tick.
///
/// PreUpdate rotates messages and reseeds domain RNGs; the command
/// applicator runs in PostUpdate; the progression scan reacts to its
/// events in Reactions; the turn clock advances in Last.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimPhase {
    PreUpdate,
    Update,
    PostUpdate,
    Reactions,
    Last,
}

/// Build the `SessionTick` schedule with phase ordering. The executor is
/// single-threaded: one character session resolves each step
/// synchronously, and later phases read the state earlier ones wrote.
pub fn configure_session_schedule() -> Schedule {
    let mut schedule = Schedule::new(SessionTick);
    schedule.set_executor_kind(ExecutorKind::SingleThreaded);
    schedule.configure_sets(
        (
            SimPhase::PreUpdate,
            SimPhase::Update,
            SimPhase::PostUpdate,
            SimPhase::Reactions,
            SimPhase::Last,
        )
            .chain(),
    );
    schedule.add_systems(advance_turn.in_set(SimPhase::Last));
    schedule
}
