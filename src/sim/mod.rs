//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Injectable millisecond timestamps (no wall-clock reads)
//! - No rendering or platform dependencies

pub mod difficulty;
pub mod flow;
pub mod hazard;
pub mod physics;
pub mod rect;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use difficulty::{Difficulty, curve};
pub use flow::FlowMeter;
pub use rect::Rect;
pub use snapshot::FrameSnapshot;
pub use state::{
    GamePhase, GameState, Laser, LaserPhase, Orientation, Platform, PlatformKind, Player,
    Projectile, Wall,
};
pub use tick::{TickInput, tick};
