// ABOUTME: Readiness scoring from subjective sleep, soreness, and stress feedback
// ABOUTME: Maps daily feedback to a clamped 0-100 score and a readiness band
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

//! Readiness Calculator Module
//!
//! Starts from a baseline and applies independent, additive adjustments:
//! - Sleep: exactly one bucket applies (poor, fair, or good; the middle value earns nothing)
//! - Soreness: high soreness is penalized, and the extreme rating stacks a second penalty
//! - Stress: high stress is penalized
//!
//! The sum saturates and is then clamped to `[0, 100]`.

use crate::config::{ReadinessConfig, VolumeConfig};
use liftwise_core::constants::readiness::{MAX_SCORE, MIN_SCORE};
use liftwise_core::models::{Feedback, ReadinessBand, StressLevel};
use tracing::debug;

/// Readiness calculator
pub struct ReadinessCalculator;

impl ReadinessCalculator {
    /// Calculate the readiness score for one day's feedback
    ///
    /// Pure and deterministic: the same feedback always yields the same score.
    #[must_use]
    pub fn calculate_readiness(feedback: &Feedback, config: &ReadinessConfig) -> u8 {
        let sleep = Self::sleep_adjustment(feedback.sleep_quality, config);
        let soreness = Self::soreness_adjustment(feedback.soreness, config);
        let stress = Self::stress_adjustment(feedback.stress_level, config);

        let raw = config
            .baseline_score
            .saturating_add(sleep)
            .saturating_add(soreness)
            .saturating_add(stress);
        let score = raw.clamp(MIN_SCORE, MAX_SCORE);

        debug!(
            raw,
            score, sleep, soreness, stress, "Calculated readiness score"
        );

        u8::try_from(score).unwrap_or(u8::MAX)
    }

    /// Classify a score into the band that gates volume and load rules
    #[must_use]
    pub const fn categorize(score: u8, config: &VolumeConfig) -> ReadinessBand {
        if score < config.deload_threshold {
            ReadinessBand::Deload
        } else if score < config.reduction_threshold {
            ReadinessBand::Reduced
        } else {
            ReadinessBand::Ready
        }
    }

    /// Sleep bucket adjustment, evaluated as an ordered chain
    #[must_use]
    pub const fn sleep_adjustment(sleep_quality: u8, config: &ReadinessConfig) -> i32 {
        if sleep_quality <= config.poor_sleep_max {
            0_i32.saturating_sub(config.poor_sleep_penalty)
        } else if sleep_quality <= config.fair_sleep_max {
            0_i32.saturating_sub(config.fair_sleep_penalty)
        } else if sleep_quality >= config.good_sleep_min {
            config.good_sleep_bonus
        } else {
            0
        }
    }

    /// Soreness adjustment; both penalties apply at the extreme rating
    #[must_use]
    pub const fn soreness_adjustment(soreness: u8, config: &ReadinessConfig) -> i32 {
        let mut adjustment: i32 = 0;
        if soreness >= config.high_soreness_min {
            adjustment = adjustment.saturating_sub(config.high_soreness_penalty);
        }
        if soreness == config.extreme_soreness {
            adjustment = adjustment.saturating_sub(config.extreme_soreness_penalty);
        }
        adjustment
    }

    /// Stress adjustment
    #[must_use]
    pub const fn stress_adjustment(stress_level: StressLevel, config: &ReadinessConfig) -> i32 {
        match stress_level {
            StressLevel::High => 0_i32.saturating_sub(config.high_stress_penalty),
            StressLevel::Low | StressLevel::Medium => 0,
        }
    }
}
