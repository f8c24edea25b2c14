//! Game state and core simulation types
//!
//! All mutable gameplay state lives in [`GameState`]; subsystems receive
//! it by `&mut` so multiple independent games can coexist and tests can
//! drive time and randomness deterministically.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::flow::FlowMeter;
use super::rect::Rect;
use super::spawn::SpawnClocks;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended on a lethal collision; only restart leaves this phase
    GameOver,
}

/// The player avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub on_ground: bool,
    /// Jumps taken since the last ground contact (capped at [`MAX_JUMPS`])
    pub jump_count: u8,
    /// Set while the collision resolver runs; blocks re-entrant jumps
    pub resolving: bool,
}

impl Player {
    /// Spawn position: horizontally centered, just above the ground
    pub fn spawn(width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(width / 2.0 - PLAYER_SIZE / 2.0, height - 80.0),
            vel: Vec2::ZERO,
            on_ground: false,
            jump_count: 0,
            resolving: false,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: Vec2::splat(PLAYER_SIZE),
        }
    }
}

/// Platform behavior variant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlatformKind {
    Static,
    /// Patrols horizontally, reversing at either viewport edge
    Moving { direction: f32, speed: f32 },
    /// Removed the moment the player lands on it
    Disappearing,
}

/// A platform the player can stand on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
    pub kind: PlatformKind,
}

/// A projectile moving along exactly one axis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub rect: Rect,
    pub vel: Vec2,
}

impl Projectile {
    /// Visual radius (projectiles render as circles)
    #[inline]
    pub fn radius(&self) -> f32 {
        self.rect.size.x / 2.0
    }
}

/// Span axis for lasers and walls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Spans the full viewport width
    Horizontal,
    /// Spans the full viewport height
    Vertical,
}

/// Laser phase; transitions are monotonic Charging -> Firing -> removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaserPhase {
    /// Translucent telegraph, harmless
    Charging,
    /// Opaque and lethal
    Firing,
}

/// A full-span laser hazard; never moves
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Laser {
    pub rect: Rect,
    pub orientation: Orientation,
    pub phase: LaserPhase,
    /// Timestamp of the last phase transition
    pub phase_since_ms: u64,
}

impl Laser {
    #[inline]
    pub fn lethal(&self) -> bool {
        self.phase == LaserPhase::Firing
    }
}

/// A full-span moving barrier carrying safe gaps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wall {
    pub rect: Rect,
    pub vel: Vec2,
    pub orientation: Orientation,
    /// Safe gaps, rigid with the wall body
    pub holes: Vec<Rect>,
}

/// Complete game state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub tuning: Tuning,

    /// Viewport extent
    pub width: f32,
    pub height: f32,

    pub player: Player,
    pub ground: Rect,
    pub platforms: Vec<Platform>,
    pub projectiles: Vec<Projectile>,
    pub lasers: Vec<Laser>,
    pub walls: Vec<Wall>,

    pub flow: FlowMeter,
    pub spawns: SpawnClocks,

    /// Timestamp the current attempt began
    pub run_start_ms: u64,
    /// Whole seconds survived this attempt
    pub survival_secs: u64,
}

impl GameState {
    /// Create a new game with the given seed and viewport, starting at `now_ms`
    pub fn new(seed: u64, width: f32, height: f32, now_ms: u64) -> Self {
        Self::with_tuning(seed, width, height, now_ms, Tuning::default())
    }

    pub fn with_tuning(seed: u64, width: f32, height: f32, now_ms: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            tuning,
            width,
            height,
            player: Player::spawn(width, height),
            ground: ground_rect(width, height),
            platforms: Vec::with_capacity(PLATFORM_COUNT),
            projectiles: Vec::new(),
            lasers: Vec::new(),
            walls: Vec::new(),
            flow: FlowMeter::new(now_ms),
            spawns: SpawnClocks::new(now_ms),
            run_start_ms: now_ms,
            survival_secs: 0,
        };
        state.generate_platforms();
        state
    }

    /// Regenerate the platform batch for the current viewport
    pub fn generate_platforms(&mut self) {
        self.platforms.clear();
        let spacing = (self.height - GROUND_HEIGHT - 100.0) / PLATFORM_COUNT as f32;

        for i in 0..PLATFORM_COUNT {
            // 20% moving, else 10% disappearing, else static
            let kind = if self.rng.random::<f32>() < 0.2 {
                PlatformKind::Moving {
                    direction: 1.0,
                    speed: 1.0,
                }
            } else if self.rng.random::<f32>() < 0.1 {
                PlatformKind::Disappearing
            } else {
                PlatformKind::Static
            };

            let x = self.rng.random::<f32>() * (self.width - 150.0) + 50.0;
            let y = i as f32 * spacing + 50.0;
            self.platforms.push(Platform {
                rect: Rect::new(x, y, PLATFORM_WIDTH, PLATFORM_HEIGHT),
                kind,
            });
        }
    }

    /// Viewport resize: recompute the ground band and relayout platforms
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.ground = ground_rect(width, height);
        self.generate_platforms();
        log::debug!("viewport resized to {width}x{height}");
    }

    /// Full reinitialization back to Playing; the seed and tuning carry over
    pub fn reset(&mut self, now_ms: u64) {
        self.phase = GamePhase::Playing;
        self.player = Player::spawn(self.width, self.height);
        self.projectiles.clear();
        self.lasers.clear();
        self.walls.clear();
        self.flow = FlowMeter::new(now_ms);
        self.spawns = SpawnClocks::new(now_ms);
        self.run_start_ms = now_ms;
        self.survival_secs = 0;
        self.generate_platforms();
        log::info!("game reset");
    }
}

fn ground_rect(width: f32, height: f32) -> Rect {
    Rect::new(0.0, height - GROUND_HEIGHT, width, GROUND_HEIGHT)
}
