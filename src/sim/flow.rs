//! Flow: resource-gated time dilation
//!
//! A scalar meter accrues continuously; activating it slows every hazard
//! and moving platform by a fixed multiplier until the player toggles
//! out or the meter runs dry. Activation also starts a transient label
//! animation and a cosmetic screen inversion mirrored in the snapshot.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// The flow resource meter and its two-state machine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowMeter {
    /// Current balance; never negative
    pub balance: f32,
    pub active: bool,
    multiplier: f32,
    last_accrual_ms: u64,
    last_drain_ms: u64,
    /// Set at activation; drives the enlarging on-screen label
    label_started_ms: Option<u64>,
}

impl FlowMeter {
    pub fn new(now_ms: u64) -> Self {
        Self {
            balance: 0.0,
            active: false,
            multiplier: 1.0,
            last_accrual_ms: now_ms,
            last_drain_ms: now_ms,
            label_started_ms: None,
        }
    }

    /// Motion multiplier applied to all hazard and moving-platform motion
    #[inline]
    pub fn multiplier(&self) -> f32 {
        self.multiplier
    }

    /// Manual toggle. Activation requires balance above the entry cost
    /// and deducts it immediately; deactivation is free.
    pub fn toggle(&mut self, now_ms: u64, tuning: &Tuning) {
        if self.active {
            self.deactivate();
        } else if self.balance > tuning.flow_cost {
            self.balance -= tuning.flow_cost;
            self.active = true;
            self.multiplier = tuning.flow_multiplier;
            self.last_drain_ms = now_ms;
            self.label_started_ms = Some(now_ms);
            log::debug!("flow activated, balance={:.1}", self.balance);
        }
    }

    /// Per-tick accrual and, while active, the 1-second drain cadence.
    /// Regeneration never stops, even while active.
    pub fn update(&mut self, now_ms: u64, tuning: &Tuning) {
        let elapsed_ms = now_ms.saturating_sub(self.last_accrual_ms);
        self.balance += tuning.flow_regen_per_sec * elapsed_ms as f32 / 1_000.0;
        self.last_accrual_ms = now_ms;

        if self.active {
            while now_ms.saturating_sub(self.last_drain_ms) >= 1_000 {
                self.balance -= tuning.flow_drain_per_sec;
                self.last_drain_ms += 1_000;
                if self.balance <= 0.0 {
                    self.balance = 0.0;
                    self.deactivate();
                    break;
                }
            }
        }
    }

    fn deactivate(&mut self) {
        self.active = false;
        self.multiplier = 1.0;
        log::debug!("flow deactivated, balance={:.1}", self.balance);
    }

    /// Label animation progress in [0, 1), or None once expired
    pub fn label_progress(&self, now_ms: u64, tuning: &Tuning) -> Option<f32> {
        let started = self.label_started_ms?;
        let elapsed = now_ms.saturating_sub(started);
        if elapsed < tuning.flow_label_ms {
            Some(elapsed as f32 / tuning.flow_label_ms as f32)
        } else {
            None
        }
    }
}
