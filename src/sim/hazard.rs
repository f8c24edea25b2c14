//! Hazard advancement, pruning, and lethal collision detection
//!
//! Positions update first (scaled by the flow multiplier), then lethal
//! checks run against the final positions. Collections never keep
//! off-screen entries past an update pass.

use super::state::{GameState, LaserPhase};
use crate::consts::*;

/// Advance every live hazard and prune the ones that left the screen
pub fn advance(state: &mut GameState, now_ms: u64) {
    let multiplier = state.flow.multiplier();
    let (width, height) = (state.width, state.height);

    for projectile in &mut state.projectiles {
        projectile.rect = projectile.rect.translated(projectile.vel * multiplier);
    }
    state.projectiles.retain(|p| {
        let r = &p.rect;
        r.left() >= -r.size.x
            && r.left() <= width + r.size.x
            && r.top() >= -r.size.y
            && r.top() <= height + r.size.y
    });

    // Lasers never move; they only change phase
    for laser in &mut state.lasers {
        if laser.phase == LaserPhase::Charging && now_ms - laser.phase_since_ms >= LASER_CHARGE_MS {
            laser.phase = LaserPhase::Firing;
            laser.phase_since_ms = now_ms;
            log::debug!("laser firing ({:?})", laser.orientation);
        }
    }
    state
        .lasers
        .retain(|l| l.phase == LaserPhase::Charging || now_ms - l.phase_since_ms < LASER_ACTIVE_MS);

    for wall in &mut state.walls {
        let delta = wall.vel * multiplier;
        wall.rect = wall.rect.translated(delta);
        for hole in &mut wall.holes {
            *hole = hole.translated(delta);
        }
    }
    // Generous margin: twice the wall's own extent past either boundary
    state.walls.retain(|w| {
        let r = &w.rect;
        r.left() <= width + r.size.x
            && r.left() >= -r.size.x * 2.0
            && r.top() <= height + r.size.y
            && r.top() >= -r.size.y * 2.0
    });
}

/// True if the player overlaps any lethal hazard at its final position
pub fn lethal_overlap(state: &GameState) -> bool {
    let player = state.player.rect();

    if state
        .projectiles
        .iter()
        .any(|p| player.intersects(&p.rect))
    {
        return true;
    }

    if state
        .lasers
        .iter()
        .any(|l| l.lethal() && player.intersects(&l.rect))
    {
        return true;
    }

    // A hole fully neutralizes a wall overlap at that location
    state.walls.iter().any(|w| {
        player.intersects(&w.rect) && !w.holes.iter().any(|hole| player.intersects(hole))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rect::Rect;
    use crate::sim::state::{Laser, Orientation, Projectile, Wall};
    use glam::Vec2;

    fn base_state() -> GameState {
        let mut state = GameState::new(3, 1280.0, 720.0, 0);
        state.platforms.clear();
        state
    }

    #[test]
    fn test_projectile_pruned_off_screen() {
        let mut state = base_state();
        state.projectiles.push(Projectile {
            rect: Rect::new(1270.0, 100.0, 20.0, 20.0),
            vel: Vec2::new(30.0, 0.0),
        });
        advance(&mut state, 0);
        assert_eq!(state.projectiles.len(), 1, "still within the margin");
        advance(&mut state, 16);
        assert!(state.projectiles.is_empty(), "fully past the margin");
    }

    #[test]
    fn test_projectile_overlap_is_lethal() {
        let mut state = base_state();
        let p = state.player.rect();
        state.projectiles.push(Projectile {
            rect: Rect::new(p.left() + 5.0, p.top() + 5.0, 20.0, 20.0),
            vel: Vec2::ZERO,
        });
        assert!(lethal_overlap(&state));
    }

    #[test]
    fn test_charging_laser_is_harmless_then_fires_then_expires() {
        let mut state = base_state();
        let p = state.player.rect();
        state.lasers.push(Laser {
            rect: Rect::new(0.0, p.top(), 1280.0, 100.0),
            orientation: Orientation::Horizontal,
            phase: LaserPhase::Charging,
            phase_since_ms: 0,
        });

        advance(&mut state, 1_000);
        assert_eq!(state.lasers[0].phase, LaserPhase::Charging);
        assert!(!lethal_overlap(&state));

        advance(&mut state, LASER_CHARGE_MS);
        assert_eq!(state.lasers[0].phase, LaserPhase::Firing);
        assert!(lethal_overlap(&state));

        advance(&mut state, LASER_CHARGE_MS + LASER_ACTIVE_MS);
        assert!(state.lasers.is_empty());
    }

    #[test]
    fn test_wall_hole_neutralizes_collision() {
        let mut state = base_state();
        let p = state.player.rect();
        let mut wall = Wall {
            rect: Rect::new(p.left() - 5.0, 0.0, WALL_THICKNESS, 720.0),
            vel: Vec2::ZERO,
            orientation: Orientation::Vertical,
            holes: vec![],
        };
        assert!({
            state.walls.push(wall.clone());
            let hit = lethal_overlap(&state);
            state.walls.clear();
            hit
        });

        // Same wall with a hole overlapping the player is safe
        wall.holes.push(Rect::new(
            p.left() - 5.0,
            p.top() + 10.0,
            WALL_THICKNESS,
            WALL_HOLE_SIZE,
        ));
        state.walls.push(wall);
        assert!(!lethal_overlap(&state));
    }

    #[test]
    fn test_wall_holes_move_with_wall() {
        let mut state = base_state();
        state.walls.push(Wall {
            rect: Rect::new(-50.0, 0.0, WALL_THICKNESS, 720.0),
            vel: Vec2::new(4.0, 0.0),
            orientation: Orientation::Vertical,
            holes: vec![Rect::new(-50.0, 300.0, WALL_THICKNESS, WALL_HOLE_SIZE)],
        });
        advance(&mut state, 0);
        let wall = &state.walls[0];
        assert_eq!(wall.rect.left(), -46.0);
        assert_eq!(wall.holes[0].left(), -46.0);
    }

    #[test]
    fn test_wall_pruned_past_double_extent() {
        let mut state = base_state();
        state.walls.push(Wall {
            rect: Rect::new(-99.0, 0.0, WALL_THICKNESS, 720.0),
            vel: Vec2::new(-2.0, 0.0),
            orientation: Orientation::Vertical,
            holes: vec![],
        });
        advance(&mut state, 0);
        // At -101, past 2x its 50-unit extent
        assert!(state.walls.is_empty());
    }

    #[test]
    fn test_flow_multiplier_scales_motion() {
        let mut state = base_state();
        state.projectiles.push(Projectile {
            rect: Rect::new(100.0, 100.0, 20.0, 20.0),
            vel: Vec2::new(10.0, 0.0),
        });
        state.flow.balance = 10.0;
        state.flow.toggle(0, &state.tuning);
        advance(&mut state, 0);
        let expected = 100.0 + 10.0 * state.tuning.flow_multiplier;
        assert!((state.projectiles[0].rect.left() - expected).abs() < 1e-6);
    }
}
