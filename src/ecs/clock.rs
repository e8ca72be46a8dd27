use bevy_ecs::resource::Resource;
use bevy_ecs::system::ResMut;

/// Session clock counting resolved ticks. One tick is one fully resolved
/// engine step (decision resolution or aging), so the turn number
/// doubles as the timestamp on history records and unlocks.
///
/// Advanced in `SimPhase::Last` so every system in the tick sees the
/// turn the work happened on.
#[derive(Resource, Debug)]
pub struct TurnClock {
    pub turn: u64,
}

impl TurnClock {
    pub fn new() -> Self {
        Self { turn: 0 }
    }

    pub fn advance(&mut self) {
        self.turn += 1;
    }
}

impl Default for TurnClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Bevy system that advances the turn counter at the end of each tick.
pub fn advance_turn(mut clock: ResMut<TurnClock>) {
    clock.advance();
}
