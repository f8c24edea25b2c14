//! Player physics and axis-separated collision resolution
//!
//! Velocity is integrated once per tick invocation, not scaled by
//! elapsed time. Spawn gating elsewhere is timestamp-based, so movement
//! speed is frame-rate coupled while spawn cadence is not; hosts that
//! want stable gameplay speed run a fixed-step loop.

use glam::Vec2;

use super::rect::Rect;
use super::state::{GameState, PlatformKind};
use crate::consts::*;

/// Held-direction input for one tick
#[derive(Debug, Clone, Copy, Default)]
pub struct HeldDirections {
    pub left: bool,
    pub right: bool,
}

/// Integrate player velocity and resolve collisions against the world.
///
/// Order matters: moving platforms advance first, then the horizontal
/// axis resolves, then the vertical axis using the already-resolved x.
pub fn step_player(state: &mut GameState, held: HeldDirections) {
    let tuning = &state.tuning;
    let player = &mut state.player;

    // Horizontal acceleration, capped at max_speed
    if held.left && player.vel.x > -tuning.max_speed {
        player.vel.x -= tuning.move_accel;
    }
    if held.right && player.vel.x < tuning.max_speed {
        player.vel.x += tuning.move_accel;
    }

    player.vel.y += tuning.gravity;
    player.vel.x *= tuning.friction;
    player.vel.x = player.vel.x.clamp(-tuning.velocity_cap, tuning.velocity_cap);
    player.vel.y = player.vel.y.clamp(-tuning.velocity_cap, tuning.velocity_cap);

    player.on_ground = false;
    player.resolving = true;

    advance_moving_platforms(state);
    resolve_collisions(state);

    let player = &mut state.player;
    player.resolving = false;

    // Keep the player on screen; ascent above the top edge is allowed
    player.pos.x = player.pos.x.clamp(0.0, state.width - PLAYER_SIZE);
    if player.pos.y > state.height - PLAYER_SIZE {
        player.pos.y = state.height - PLAYER_SIZE;
    }
}

/// Moving platforms patrol regardless of collision outcome, scaled by
/// the flow multiplier, reversing at either viewport edge.
fn advance_moving_platforms(state: &mut GameState) {
    let multiplier = state.flow.multiplier();
    for platform in &mut state.platforms {
        if let PlatformKind::Moving { direction, speed } = &mut platform.kind {
            platform.rect.pos.x += *speed * *direction * multiplier;
            if platform.rect.left() <= 0.0 || platform.rect.right() >= state.width {
                *direction = -*direction;
            }
        }
    }
}

fn resolve_collisions(state: &mut GameState) {
    let player = &mut state.player;
    let size = Vec2::splat(PLAYER_SIZE);

    // Horizontal pass
    let current_y = player.pos.y;
    let start_x = player.pos.x;
    let mut next_x = start_x + player.vel.x;
    for obstacle in state
        .platforms
        .iter()
        .map(|p| p.rect)
        .chain(std::iter::once(state.ground))
    {
        // Overlaps that predate the horizontal move (the spawn point sits
        // inside the ground band) are left to the vertical pass.
        let already_inside = Rect {
            pos: Vec2::new(start_x, current_y),
            size,
        }
        .intersects(&obstacle);
        let probe = Rect {
            pos: Vec2::new(next_x, current_y),
            size,
        };
        if !already_inside && probe.intersects(&obstacle) {
            // Push to the near edge with a 1-unit buffer
            if player.vel.x > 0.0 {
                next_x = obstacle.left() - PLAYER_SIZE - 1.0;
            } else if player.vel.x < 0.0 {
                next_x = obstacle.right() + 1.0;
            }
            player.vel.x = 0.0;
        }
    }
    player.pos.x = next_x;

    // Vertical pass, using the resolved x
    let current_x = player.pos.x;
    let mut next_y = player.pos.y + player.vel.y;
    let mut landed_on: Option<usize> = None;

    fn resolve_vertical(
        obstacle: &Rect,
        probe: Rect,
        next_y: &mut f32,
        vel: &mut Vec2,
        on_ground: &mut bool,
        jumps: &mut u8,
    ) -> bool {
        if !probe.intersects(obstacle) {
            return false;
        }
        if vel.y > 0.0 {
            // Landing on top
            *next_y = obstacle.top() - PLAYER_SIZE;
            *on_ground = true;
            *jumps = 0;
        } else if vel.y < 0.0 {
            // Head bump against the underside
            *next_y = obstacle.bottom();
        }
        vel.y = 0.0;
        true
    }

    for (i, platform) in state.platforms.iter().enumerate() {
        let was_downward = player.vel.y > 0.0;
        let probe = Rect {
            pos: Vec2::new(current_x, next_y),
            size,
        };
        if resolve_vertical(
            &platform.rect,
            probe,
            &mut next_y,
            &mut player.vel,
            &mut player.on_ground,
            &mut player.jump_count,
        ) && was_downward
            && platform.kind == PlatformKind::Disappearing
        {
            landed_on = Some(i);
        }
    }
    let probe = Rect {
        pos: Vec2::new(current_x, next_y),
        size,
    };
    resolve_vertical(
        &state.ground,
        probe,
        &mut next_y,
        &mut player.vel,
        &mut player.on_ground,
        &mut player.jump_count,
    );
    player.pos.y = next_y;

    // The disappearing platform repositioned the player above; only now
    // does it leave the collection.
    if let Some(i) = landed_on {
        state.platforms.remove(i);
        log::debug!("disappearing platform removed");
    }
}

/// Edge-triggered jump request; honored only with credits left and while
/// no resolution pass is in flight.
pub fn try_jump(state: &mut GameState) {
    let player = &mut state.player;
    if player.resolving || player.jump_count >= MAX_JUMPS {
        return;
    }
    player.vel.y = -state.tuning.jump_strength;
    player.on_ground = false;
    player.jump_count += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Platform;

    fn bare_state() -> GameState {
        let mut state = GameState::new(5, 1280.0, 720.0, 0);
        state.platforms.clear();
        state
    }

    fn settle_on_ground(state: &mut GameState) {
        for _ in 0..200 {
            step_player(state, HeldDirections::default());
        }
        assert!(state.player.on_ground);
    }

    #[test]
    fn test_falls_to_ground_and_rests() {
        let mut state = bare_state();
        settle_on_ground(&mut state);
        let top = state.ground.top();
        assert_eq!(state.player.pos.y, top - PLAYER_SIZE);
        assert_eq!(state.player.vel.y, 0.0);
        assert_eq!(state.player.jump_count, 0);

        // No drift at rest
        let resting = state.player.pos;
        for _ in 0..120 {
            step_player(&mut state, HeldDirections::default());
        }
        assert_eq!(state.player.pos, resting);
    }

    #[test]
    fn test_horizontal_bounds() {
        let mut state = bare_state();
        for _ in 0..600 {
            step_player(
                &mut state,
                HeldDirections {
                    left: true,
                    right: false,
                },
            );
            assert!(state.player.pos.x >= 0.0);
        }
        assert_eq!(state.player.pos.x, 0.0);

        for _ in 0..600 {
            step_player(
                &mut state,
                HeldDirections {
                    left: false,
                    right: true,
                },
            );
            assert!(state.player.pos.x <= 1280.0 - PLAYER_SIZE);
        }
        assert_eq!(state.player.pos.x, 1280.0 - PLAYER_SIZE);
    }

    #[test]
    fn test_double_jump_cap() {
        let mut state = bare_state();
        settle_on_ground(&mut state);

        try_jump(&mut state);
        assert_eq!(state.player.jump_count, 1);
        assert_eq!(state.player.vel.y, -state.tuning.jump_strength);

        try_jump(&mut state);
        assert_eq!(state.player.jump_count, 2);

        // Third request is ignored
        let vel_before = state.player.vel.y;
        try_jump(&mut state);
        assert_eq!(state.player.jump_count, 2);
        assert_eq!(state.player.vel.y, vel_before);

        // Landing restores the credits
        settle_on_ground(&mut state);
        assert_eq!(state.player.jump_count, 0);
    }

    #[test]
    fn test_jump_blocked_mid_resolution() {
        let mut state = bare_state();
        settle_on_ground(&mut state);
        state.player.resolving = true;
        try_jump(&mut state);
        assert_eq!(state.player.jump_count, 0);
        state.player.resolving = false;
    }

    #[test]
    fn test_landing_on_platform() {
        let mut state = bare_state();
        state.platforms.push(Platform {
            rect: Rect::new(600.0, 400.0, PLATFORM_WIDTH, PLATFORM_HEIGHT),
            kind: PlatformKind::Static,
        });
        state.player.pos = Vec2::new(620.0, 300.0);
        state.player.vel = Vec2::ZERO;

        for _ in 0..120 {
            step_player(&mut state, HeldDirections::default());
            if state.player.on_ground {
                break;
            }
        }
        assert!(state.player.on_ground);
        assert_eq!(state.player.pos.y, 400.0 - PLAYER_SIZE);
    }

    #[test]
    fn test_disappearing_platform_removed_after_landing() {
        let mut state = bare_state();
        state.platforms.push(Platform {
            rect: Rect::new(600.0, 400.0, PLATFORM_WIDTH, PLATFORM_HEIGHT),
            kind: PlatformKind::Disappearing,
        });
        state.player.pos = Vec2::new(620.0, 300.0);
        state.player.vel = Vec2::ZERO;

        let mut landed_y = None;
        for _ in 0..120 {
            step_player(&mut state, HeldDirections::default());
            if state.platforms.is_empty() {
                landed_y = Some(state.player.pos.y);
                break;
            }
        }
        // Removed the instant the landing resolved, after repositioning
        assert_eq!(landed_y, Some(400.0 - PLAYER_SIZE));
        assert!(state.platforms.is_empty());
    }

    #[test]
    fn test_head_bump_zeroes_upward_velocity() {
        let mut state = bare_state();
        state.platforms.push(Platform {
            rect: Rect::new(600.0, 200.0, PLATFORM_WIDTH, PLATFORM_HEIGHT),
            kind: PlatformKind::Static,
        });
        state.player.pos = Vec2::new(620.0, 226.0);
        state.player.vel = Vec2::new(0.0, -10.0);

        step_player(&mut state, HeldDirections::default());
        assert_eq!(state.player.pos.y, 220.0);
        assert_eq!(state.player.vel.y, 0.0);
    }

    #[test]
    fn test_moving_platform_reverses_at_edges() {
        let mut state = bare_state();
        state.platforms.push(Platform {
            rect: Rect::new(1280.0 - PLATFORM_WIDTH - 2.0, 400.0, PLATFORM_WIDTH, PLATFORM_HEIGHT),
            kind: PlatformKind::Moving {
                direction: 1.0,
                speed: 5.0,
            },
        });
        for _ in 0..3 {
            step_player(&mut state, HeldDirections::default());
        }
        match state.platforms[0].kind {
            PlatformKind::Moving { direction, .. } => assert_eq!(direction, -1.0),
            _ => unreachable!(),
        }
    }
}
