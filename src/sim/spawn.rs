//! Time-gated hazard spawning
//!
//! Each hazard type keeps an independent last-spawn timestamp; a spawn
//! fires when the per-type interval has elapsed and the type's survival
//! unlock has been crossed. All randomized parameters come from the
//! state's seeded RNG, bounded by the current difficulty.

use glam::Vec2;
use rand::Rng;

use super::difficulty::{self, Difficulty};
use super::rect::Rect;
use super::state::{GameState, Laser, LaserPhase, Orientation, Projectile, Wall};
use crate::consts::*;

/// Last-spawn timestamps, one per hazard type
#[derive(Debug, Clone, Copy)]
pub struct SpawnClocks {
    pub projectile_ms: u64,
    pub vertical_projectile_ms: u64,
    pub laser_ms: u64,
    pub vertical_laser_ms: u64,
    pub wall_ms: u64,
}

impl SpawnClocks {
    pub fn new(now_ms: u64) -> Self {
        Self {
            projectile_ms: now_ms,
            vertical_projectile_ms: now_ms,
            laser_ms: now_ms,
            vertical_laser_ms: now_ms,
            wall_ms: now_ms,
        }
    }
}

/// Run every spawner that is due at `now_ms`
pub fn run(state: &mut GameState, diff: &Difficulty, now_ms: u64) {
    let t = state.survival_secs;

    if now_ms - state.spawns.projectile_ms > diff.projectile_interval_ms {
        spawn_projectile(state, diff.projectile_speed_bonus);
        state.spawns.projectile_ms = now_ms;
    }

    if t >= VERTICAL_PROJECTILE_UNLOCK_SECS
        && now_ms - state.spawns.vertical_projectile_ms > diff.vertical_projectile_interval_ms
    {
        spawn_vertical_projectile(state, diff.projectile_speed_bonus);
        state.spawns.vertical_projectile_ms = now_ms;
    }

    if t >= LASER_UNLOCK_SECS && now_ms - state.spawns.laser_ms > diff.laser_interval_ms {
        spawn_laser(state, Orientation::Horizontal, diff.laser_thickness_frac, now_ms);
        state.spawns.laser_ms = now_ms;
    }

    if t >= VERTICAL_LASER_UNLOCK_SECS
        && now_ms - state.spawns.vertical_laser_ms > diff.vertical_laser_interval_ms
    {
        spawn_laser(state, Orientation::Vertical, diff.laser_thickness_frac, now_ms);
        state.spawns.vertical_laser_ms = now_ms;
    }

    if t >= WALL_UNLOCK_SECS && now_ms - state.spawns.wall_ms > diff.wall_interval_ms {
        spawn_wall(state, diff.wall_speed);
        state.spawns.wall_ms = now_ms;
    }
}

/// A projectile entering from the left or right edge
fn spawn_projectile(state: &mut GameState, speed_bonus: f32) {
    let size = state
        .rng
        .random_range(PROJECTILE_MIN_SIZE..PROJECTILE_MAX_SIZE);
    let speed = state
        .rng
        .random_range(PROJECTILE_MIN_SPEED..PROJECTILE_MAX_SPEED)
        + speed_bonus;
    let from_left = state.rng.random_bool(0.5);
    let x = if from_left { -size } else { state.width };
    let direction = if from_left { 1.0 } else { -1.0 };
    // Stay clear of the ground strip and a top margin; tiny viewports
    // collapse the band to a sliver instead of inverting it
    let band = (state.height - size - GROUND_HEIGHT - 50.0).max(1.0);
    let y = state.rng.random_range(0.0..band) + 50.0;

    state.projectiles.push(Projectile {
        rect: Rect::new(x, y, size, size),
        vel: Vec2::new(speed * direction, 0.0),
    });
    log::debug!("spawned projectile at y={y:.0} speed={speed:.2}");
}

/// A projectile entering from the top or bottom edge
fn spawn_vertical_projectile(state: &mut GameState, speed_bonus: f32) {
    let size = state
        .rng
        .random_range(PROJECTILE_MIN_SIZE..PROJECTILE_MAX_SIZE);
    let speed = state
        .rng
        .random_range(PROJECTILE_MIN_SPEED..PROJECTILE_MAX_SPEED)
        + speed_bonus;
    let from_top = state.rng.random_bool(0.5);
    let y = if from_top { -size } else { state.height };
    let direction = if from_top { 1.0 } else { -1.0 };
    let x = state.rng.random_range(0.0..(state.width - size).max(1.0));

    state.projectiles.push(Projectile {
        rect: Rect::new(x, y, size, size),
        vel: Vec2::new(0.0, speed * direction),
    });
    log::debug!("spawned vertical projectile at x={x:.0} speed={speed:.2}");
}

/// A full-span laser in its charging phase
fn spawn_laser(state: &mut GameState, orientation: Orientation, thickness_frac: f32, now_ms: u64) {
    let rect = match orientation {
        Orientation::Horizontal => {
            let thickness = state.height * thickness_frac;
            let band = (state.height - thickness - GROUND_HEIGHT - 50.0).max(1.0);
            let y = state.rng.random_range(0.0..band) + 50.0;
            Rect::new(0.0, y, state.width, thickness)
        }
        Orientation::Vertical => {
            let thickness = state.width * thickness_frac;
            let x = state
                .rng
                .random_range(0.0..(state.width - thickness).max(1.0));
            Rect::new(x, 0.0, thickness, state.height)
        }
    };

    state.lasers.push(Laser {
        rect,
        orientation,
        phase: LaserPhase::Charging,
        phase_since_ms: now_ms,
    });
    log::debug!("laser charging ({orientation:?})");
}

/// A moving wall with randomized safe gaps
fn spawn_wall(state: &mut GameState, base_speed: f32) {
    let t = state.survival_secs;
    let vertical = state.rng.random_bool(0.5);
    let speed = base_speed + difficulty::wall_speed_bonus(t, vertical);

    if vertical {
        // Enters at the left edge, sweeps right
        let start_x = -WALL_THICKNESS;
        let hole_count = state.rng.random_range(3..=5);
        let mut holes = Vec::with_capacity(hole_count);
        for _ in 0..hole_count {
            let band = (state.height - GROUND_HEIGHT - 50.0).max(1.0);
            let center_y = state.rng.random_range(0.0..band) + 25.0;
            holes.push(Rect::new(
                start_x,
                center_y - WALL_HOLE_SIZE / 2.0,
                WALL_THICKNESS,
                WALL_HOLE_SIZE,
            ));
        }
        state.walls.push(Wall {
            rect: Rect::new(start_x, 0.0, WALL_THICKNESS, state.height),
            vel: Vec2::new(speed, 0.0),
            orientation: Orientation::Vertical,
            holes,
        });
    } else {
        // Enters at the top edge, sweeps down
        let start_y = -WALL_THICKNESS;
        let hole_count = state.rng.random_range(1..=3);
        let mut holes = Vec::with_capacity(hole_count);
        for _ in 0..hole_count {
            let band = (state.width - 50.0).max(1.0);
            let center_x = state.rng.random_range(0.0..band) + 25.0;
            holes.push(Rect::new(
                center_x - WALL_HOLE_SIZE / 2.0,
                start_y,
                WALL_HOLE_SIZE,
                WALL_THICKNESS,
            ));
        }
        state.walls.push(Wall {
            rect: Rect::new(0.0, start_y, state.width, WALL_THICKNESS),
            vel: Vec2::new(0.0, speed),
            orientation: Orientation::Horizontal,
            holes,
        });
    }
    log::debug!("spawned wall (vertical={vertical}) speed={speed:.2}");
}
