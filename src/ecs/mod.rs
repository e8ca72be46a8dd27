pub mod app;
pub mod clock;
pub mod commands;
pub mod components;
pub mod decide;
pub mod events;
pub mod resources;
pub mod schedule;
pub mod snapshot;
pub mod spawn;
pub mod systems;
pub mod test_helpers;

pub use app::{build_session_app, build_session_app_with};
pub use schedule::{SessionTick, SimPhase};
