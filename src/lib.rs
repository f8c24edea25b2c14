//! Skydodge - a 2D platform-survival dodging game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `tuning`: Data-driven movement and flow balance
//!
//! The crate is simulation-only. A host drives it by calling
//! [`sim::tick`] once per animation frame with the current input and a
//! millisecond timestamp, and hands [`sim::FrameSnapshot`]s to whatever
//! render sink it owns.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Player bounding box edge length (square)
    pub const PLAYER_SIZE: f32 = 40.0;
    /// Jump credits between ground contacts (double jump)
    pub const MAX_JUMPS: u8 = 2;

    /// Ground strip height at the bottom of the viewport
    pub const GROUND_HEIGHT: f32 = 60.0;

    /// Platforms per generation (constant per run)
    pub const PLATFORM_COUNT: usize = 10;
    pub const PLATFORM_WIDTH: f32 = 120.0;
    pub const PLATFORM_HEIGHT: f32 = 20.0;

    /// Projectile edge length bounds (uniform draw)
    pub const PROJECTILE_MIN_SIZE: f32 = 20.0;
    pub const PROJECTILE_MAX_SIZE: f32 = 40.0;
    /// Projectile base speed bounds, before the difficulty bonus
    pub const PROJECTILE_MIN_SPEED: f32 = 2.0;
    pub const PROJECTILE_MAX_SPEED: f32 = 4.0;

    /// Laser telegraph duration before it becomes lethal
    pub const LASER_CHARGE_MS: u64 = 5_000;
    /// Lethal duration after firing
    pub const LASER_ACTIVE_MS: u64 = 2_000;

    /// Wall slab thickness along its travel axis
    pub const WALL_THICKNESS: f32 = 50.0;
    /// Safe-gap edge length (3x player size)
    pub const WALL_HOLE_SIZE: f32 = PLAYER_SIZE * 3.0;

    /// Survival-time unlock thresholds (seconds)
    pub const VERTICAL_PROJECTILE_UNLOCK_SECS: u64 = 25;
    pub const LASER_UNLOCK_SECS: u64 = 15;
    pub const VERTICAL_LASER_UNLOCK_SECS: u64 = 35;
    pub const WALL_UNLOCK_SECS: u64 = 10;

    /// Default viewport for hosts that do not resize
    pub const DEFAULT_WIDTH: f32 = 1280.0;
    pub const DEFAULT_HEIGHT: f32 = 720.0;
}
