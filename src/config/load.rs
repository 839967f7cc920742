// ABOUTME: Load autoregulation configuration for RPE-driven weight changes
// ABOUTME: Progression margin, RPE ceiling, multipliers, and plate rounding increment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use liftwise_core::constants::load;
use serde::{Deserialize, Serialize};

/// Load Autoregulation Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadConfig {
    /// RPE this far under target triggers an increase
    pub progression_rpe_margin: f64,
    /// RPE at or above this triggers a decrease
    pub rpe_ceiling: f64,
    /// Multiplier applied on increase
    pub increase_multiplier: f64,
    /// Multiplier applied on decrease (missed reps or ceiling)
    pub decrease_multiplier: f64,
    /// Rounding increment for displayed loads
    pub weight_increment: f64,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            progression_rpe_margin: load::PROGRESSION_RPE_MARGIN,
            rpe_ceiling: load::RPE_CEILING,
            increase_multiplier: load::INCREASE_MULTIPLIER,
            decrease_multiplier: load::DECREASE_MULTIPLIER,
            weight_increment: load::WEIGHT_INCREMENT,
        }
    }
}
