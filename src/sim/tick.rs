//! Fixed timestep simulation tick
//!
//! One call advances the session by exactly one frame. All motion constants
//! are per-frame, so there is no `dt`.

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GameState};

/// Resolved action states for a single tick
///
/// Several physical keys may map to one action; that mapping belongs to the
/// host, not the simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    pub restart: bool,
}

/// Advance the session by one frame and report what happened
pub fn tick(state: &mut GameState, input: &InputSnapshot) -> Vec<GameEvent> {
    let mut events = Vec::new();

    let restart_pressed = input.restart && !state.restart_held;
    state.restart_held = input.restart;
    if restart_pressed {
        log::info!("Restarting campaign");
        state.manager.reset();
        events.push(GameEvent::Restarted);
    }

    state.time_ticks += 1;
    state.manager.update(input, &mut events);

    events
}
