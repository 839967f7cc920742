// ABOUTME: Readiness scoring configuration for subjective recovery feedback
// ABOUTME: Baseline score plus sleep, soreness, and stress adjustments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use liftwise_core::constants::readiness;
use serde::{Deserialize, Serialize};

/// Readiness Scoring Configuration
///
/// Sleep buckets are evaluated as an ordered chain (poor, then fair, then
/// good); soreness penalties stack at the extreme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessConfig {
    /// Score before adjustments
    pub baseline_score: i32,
    /// Highest sleep rating that counts as poor
    pub poor_sleep_max: u8,
    /// Penalty for poor sleep
    pub poor_sleep_penalty: i32,
    /// Highest sleep rating that counts as fair
    pub fair_sleep_max: u8,
    /// Penalty for fair sleep
    pub fair_sleep_penalty: i32,
    /// Lowest sleep rating that earns the bonus
    pub good_sleep_min: u8,
    /// Bonus for good sleep
    pub good_sleep_bonus: i32,
    /// Lowest soreness rating that is penalized
    pub high_soreness_min: u8,
    /// Penalty for high soreness
    pub high_soreness_penalty: i32,
    /// Soreness rating that takes the additional penalty
    pub extreme_soreness: u8,
    /// Additional penalty at extreme soreness
    pub extreme_soreness_penalty: i32,
    /// Penalty for high stress
    pub high_stress_penalty: i32,
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            baseline_score: readiness::BASELINE_SCORE,
            poor_sleep_max: readiness::POOR_SLEEP_MAX,
            poor_sleep_penalty: readiness::POOR_SLEEP_PENALTY,
            fair_sleep_max: readiness::FAIR_SLEEP_MAX,
            fair_sleep_penalty: readiness::FAIR_SLEEP_PENALTY,
            good_sleep_min: readiness::GOOD_SLEEP_MIN,
            good_sleep_bonus: readiness::GOOD_SLEEP_BONUS,
            high_soreness_min: readiness::HIGH_SORENESS_MIN,
            high_soreness_penalty: readiness::HIGH_SORENESS_PENALTY,
            extreme_soreness: readiness::EXTREME_SORENESS,
            extreme_soreness_penalty: readiness::EXTREME_SORENESS_PENALTY,
            high_stress_penalty: readiness::HIGH_STRESS_PENALTY,
        }
    }
}
