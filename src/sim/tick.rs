//! Per-frame simulation tick
//!
//! The host calls [`tick`] once per animation frame with the current
//! input and a millisecond timestamp from whatever clock it owns; tests
//! drive the timestamp synthetically. Spawn gating and flow timing are
//! timestamp-based; physics integrates once per invocation.

use super::difficulty;
use super::hazard;
use super::physics::{self, HeldDirections};
use super::spawn;
use super::state::{GamePhase, GameState};

/// Input commands for a single tick.
///
/// `jump`, `flow` and `restart` are edge-triggered: the host sets them
/// for the one tick following a key press and clears them afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub flow: bool,
    pub restart: bool,
}

/// Advance the game by one frame at `now_ms`
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: u64) {
    if input.restart {
        state.reset(now_ms);
        return;
    }
    // Game over freezes all gameplay mutation; the final frame keeps
    // rendering via the snapshot.
    if state.phase == GamePhase::GameOver {
        return;
    }

    if input.flow {
        state.flow.toggle(now_ms, &state.tuning);
    }
    if input.jump {
        physics::try_jump(state);
    }

    physics::step_player(
        state,
        HeldDirections {
            left: input.left,
            right: input.right,
        },
    );

    state.survival_secs = now_ms.saturating_sub(state.run_start_ms) / 1_000;
    let diff = difficulty::curve(state.survival_secs);
    spawn::run(state, &diff, now_ms);
    hazard::advance(state, now_ms);

    if hazard::lethal_overlap(state) {
        state.phase = GamePhase::GameOver;
        log::info!("game over after {}s survived", state.survival_secs);
        return;
    }

    state.flow.update(now_ms, &state.tuning);
}
