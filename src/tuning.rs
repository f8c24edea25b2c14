//! Data-driven game balance
//!
//! Movement and flow knobs live here rather than in `consts` so a host
//! can ship alternate balance as JSON without recompiling.

use serde::{Deserialize, Serialize};

/// Movement and flow balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Added to vertical velocity every tick
    pub gravity: f32,
    /// Horizontal velocity multiplier applied every tick
    pub friction: f32,
    /// Horizontal acceleration per tick while a direction is held
    pub move_accel: f32,
    /// Horizontal speed cap while accelerating
    pub max_speed: f32,
    /// Upward impulse magnitude on jump
    pub jump_strength: f32,
    /// Hard cap on either velocity component magnitude
    pub velocity_cap: f32,

    /// Flow balance required (exclusive) to activate, also the entry cost
    pub flow_cost: f32,
    /// Flow balance drained per second while active
    pub flow_drain_per_sec: f32,
    /// Flow balance accrued per second (never stops)
    pub flow_regen_per_sec: f32,
    /// Hazard/platform motion multiplier while flow is active
    pub flow_multiplier: f32,
    /// Lifetime of the transient "FLOW" label animation
    pub flow_label_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.25,
            friction: 0.9,
            move_accel: 0.5,
            max_speed: 5.0,
            jump_strength: 30.0,
            velocity_cap: 10.0,

            flow_cost: 4.0,
            flow_drain_per_sec: 4.0,
            flow_regen_per_sec: 1.0,
            flow_multiplier: 0.2,
            flow_label_ms: 1_000,
        }
    }
}

impl Tuning {
    /// Parse a tuning override from JSON; missing fields keep defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
