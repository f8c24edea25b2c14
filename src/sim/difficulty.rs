//! Difficulty scaling
//!
//! A pure function of whole survival seconds. Recomputed every tick and
//! fed straight into the spawner; holds no state of its own.

/// Spawn intervals and parameter bonuses for a given survival time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    pub projectile_interval_ms: u64,
    pub vertical_projectile_interval_ms: u64,
    /// Added to each new projectile's uniform base speed
    pub projectile_speed_bonus: f32,
    pub laser_interval_ms: u64,
    pub vertical_laser_interval_ms: u64,
    /// Fraction of the spanned-against viewport dimension
    pub laser_thickness_frac: f32,
    pub wall_interval_ms: u64,
    /// Base wall speed; orientation-specific bonuses are added at spawn
    pub wall_speed: f32,
}

/// Evaluate the difficulty curve at `t` survival seconds
pub fn curve(t: u64) -> Difficulty {
    let ti = t as i64;
    Difficulty {
        projectile_interval_ms: (1_250 - 50 * ti).max(500) as u64,
        vertical_projectile_interval_ms: 2_000,
        projectile_speed_bonus: 0.1 * t as f32,
        laser_interval_ms: (15_000 - 500 * ti).max(5_000) as u64,
        vertical_laser_interval_ms: (20_000 - 500 * (ti - 35)).max(5_000) as u64,
        laser_thickness_frac: (0.10 + 0.0025 * t as f32).min(0.20),
        wall_interval_ms: 10_000,
        wall_speed: (1.0 + 0.025 * t as f32).min(10.0),
    }
}

/// Extra wall speed added at spawn time, per orientation
pub fn wall_speed_bonus(t: u64, vertical: bool) -> f32 {
    if vertical { 0.02 * t as f32 } else { 0.03 * t as f32 }
}
