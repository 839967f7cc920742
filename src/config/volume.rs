// ABOUTME: Volume autoregulation configuration keyed on readiness bands
// ABOUTME: Deload and reduction thresholds plus the load progression gate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use liftwise_core::constants::volume;
use serde::{Deserialize, Serialize};

/// Volume Autoregulation Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeConfig {
    /// Readiness below this deloads the whole workout
    pub deload_threshold: u8,
    /// Readiness below this (and not deloading) removes one set per exercise
    pub reduction_threshold: u8,
    /// Fraction of sets kept during a deload
    pub deload_set_factor: f64,
    /// Readiness required before load progression runs
    pub progression_min_readiness: u8,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            deload_threshold: volume::DELOAD_THRESHOLD,
            reduction_threshold: volume::REDUCTION_THRESHOLD,
            deload_set_factor: volume::DELOAD_SET_FACTOR,
            progression_min_readiness: volume::DELOAD_THRESHOLD,
        }
    }
}
