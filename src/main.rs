//! Skydodge entry point
//!
//! The crate ships simulation only; a real host owns a window, a render
//! sink and an input source. This binary runs a headless demo session
//! with a scripted input pattern so the simulation can be exercised and
//! profiled without any of that.

use skydodge::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use skydodge::sim::{GamePhase, GameState, TickInput, tick};

const FRAME_MS: u64 = 16;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xD0D6E);
    log::info!("skydodge headless demo, seed={seed}");

    let mut state = GameState::new(seed, DEFAULT_WIDTH, DEFAULT_HEIGHT, 0);
    let mut now_ms = 0;
    let mut attempts = 1u32;

    // Three scripted attempts: drift side to side, hop now and then,
    // toggle flow when the meter allows.
    for frame in 0..30_000u64 {
        now_ms += FRAME_MS;
        let input = TickInput {
            left: frame % 240 < 100,
            right: frame % 240 >= 120,
            jump: frame % 90 == 0,
            flow: frame % 700 == 0 && state.flow.balance > 5.0,
            restart: false,
        };
        tick(&mut state, &input, now_ms);

        if state.phase == GamePhase::GameOver {
            let snap = state.snapshot(now_ms);
            log::info!(
                "attempt {attempts}: survived {}s ({} projectiles, {} lasers, {} walls live)",
                snap.survival_secs,
                snap.projectiles.len(),
                snap.lasers.len(),
                snap.walls.len()
            );
            if attempts >= 3 {
                break;
            }
            attempts += 1;
            tick(
                &mut state,
                &TickInput {
                    restart: true,
                    ..Default::default()
                },
                now_ms,
            );
        }
    }

    log::info!("demo finished after {attempts} attempt(s)");
}
