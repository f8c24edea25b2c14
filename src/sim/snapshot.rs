//! Read-only frame snapshots for the render sink
//!
//! The simulation exposes one borrowed view per frame; nothing a sink
//! does with it can affect gameplay. Serializable so out-of-process
//! sinks can consume frames too.

use serde::Serialize;

use super::state::{GamePhase, GameState, Laser, Platform, Player, Projectile, Wall};
use super::rect::Rect;

/// Everything a render sink needs to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot<'a> {
    pub player: &'a Player,
    pub ground: Rect,
    pub platforms: &'a [Platform],
    pub projectiles: &'a [Projectile],
    pub lasers: &'a [Laser],
    pub walls: &'a [Wall],
    pub survival_secs: u64,
    pub flow_balance: f32,
    pub flow_active: bool,
    /// Cosmetic full-screen color inversion while flow is active
    pub inverted: bool,
    /// Enlarging "FLOW" label animation progress, if still running
    pub flow_label_progress: Option<f32>,
    pub phase: GamePhase,
}

impl GameState {
    /// Build the render view for the current frame
    pub fn snapshot(&self, now_ms: u64) -> FrameSnapshot<'_> {
        FrameSnapshot {
            player: &self.player,
            ground: self.ground,
            platforms: &self.platforms,
            projectiles: &self.projectiles,
            lasers: &self.lasers,
            walls: &self.walls,
            survival_secs: self.survival_secs,
            flow_balance: self.flow.balance,
            flow_active: self.flow.active,
            inverted: self.flow.active,
            flow_label_progress: self.flow.label_progress(now_ms, &self.tuning),
            phase: self.phase,
        }
    }
}
