// ABOUTME: RPE-driven load autoregulation for a single exercise
// ABOUTME: Decides increase, decrease, or maintain from last-session effort and missed reps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

//! Load Autoregulator Module
//!
//! Rules are evaluated in priority order and the first match wins:
//!
//! 1. Missed reps: decrease
//! 2. RPE at least one point under target: increase
//! 3. RPE at or above the ceiling: decrease
//! 4. Otherwise: maintain
//!
//! The autoregulator knows nothing about exercise identity. Matching a
//! performance record to a planned slot and rounding the displayed weight
//! are the caller's job.

use crate::config::LoadConfig;
use liftwise_core::models::AdjustmentKind;
use serde::{Deserialize, Serialize};

/// Which rule produced a load adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadReason {
    /// Completed fewer reps than prescribed
    MissedReps,
    /// Effort came in comfortably under target
    RpeBelowTarget,
    /// Effort reached the ceiling
    RpeAtCeiling,
    /// Effort landed in the target window
    WithinTarget,
}

/// Outcome of one load decision, before rounding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadAdjustment {
    /// Unrounded new working weight
    pub new_weight: f64,
    /// `LoadIncrease`, `LoadDecrease`, or `Maintenance`
    pub kind: AdjustmentKind,
    /// Rule that fired
    pub reason: LoadReason,
}

/// Load autoregulator
pub struct LoadAutoregulator;

impl LoadAutoregulator {
    /// Decide the next working weight from the last session
    #[must_use]
    pub fn adjust_load(
        current_weight: f64,
        rpe: f64,
        target_rpe: f64,
        missed_reps: bool,
        config: &LoadConfig,
    ) -> LoadAdjustment {
        let decrease = |reason| LoadAdjustment {
            new_weight: current_weight * config.decrease_multiplier,
            kind: AdjustmentKind::LoadDecrease,
            reason,
        };

        if missed_reps {
            return decrease(LoadReason::MissedReps);
        }
        if rpe <= target_rpe - config.progression_rpe_margin {
            return LoadAdjustment {
                new_weight: current_weight * config.increase_multiplier,
                kind: AdjustmentKind::LoadIncrease,
                reason: LoadReason::RpeBelowTarget,
            };
        }
        if rpe >= config.rpe_ceiling {
            return decrease(LoadReason::RpeAtCeiling);
        }
        LoadAdjustment {
            new_weight: current_weight,
            kind: AdjustmentKind::Maintenance,
            reason: LoadReason::WithinTarget,
        }
    }

    /// Round a weight to the nearest plate increment
    #[must_use]
    pub fn round_to_increment(weight: f64, increment: f64) -> f64 {
        (weight / increment).round() * increment
    }
}
