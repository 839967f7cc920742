// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Default rule thresholds, multipliers, and validation bounds for autoregulation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

//! Constants module
//!
//! Defaults for every fixed threshold the decision rules use. Engine
//! configuration starts from these values; nothing reads them as hidden
//! module state at decision time.

/// Readiness scoring from subjective feedback
pub mod readiness {
    /// Score before any feedback adjustment
    pub const BASELINE_SCORE: i32 = 80;
    /// Lower clamp for the final score
    pub const MIN_SCORE: i32 = 0;
    /// Upper clamp for the final score
    pub const MAX_SCORE: i32 = 100;

    /// Sleep at or below this value takes the severe penalty
    pub const POOR_SLEEP_MAX: u8 = 4;
    /// Penalty for poor sleep
    pub const POOR_SLEEP_PENALTY: i32 = 20;
    /// Sleep at or below this value (and above poor) takes the mild penalty
    pub const FAIR_SLEEP_MAX: u8 = 6;
    /// Penalty for fair sleep
    pub const FAIR_SLEEP_PENALTY: i32 = 10;
    /// Sleep at or above this value earns the bonus
    pub const GOOD_SLEEP_MIN: u8 = 8;
    /// Bonus for good sleep
    pub const GOOD_SLEEP_BONUS: i32 = 5;

    /// Soreness at or above this value is penalized
    pub const HIGH_SORENESS_MIN: u8 = 4;
    /// Penalty for high soreness
    pub const HIGH_SORENESS_PENALTY: i32 = 10;
    /// Soreness at exactly this value takes an additional penalty
    pub const EXTREME_SORENESS: u8 = 5;
    /// Additional penalty stacked on top of the high soreness penalty
    pub const EXTREME_SORENESS_PENALTY: i32 = 20;

    /// Penalty for high reported stress
    pub const HIGH_STRESS_PENALTY: i32 = 15;
}

/// Readiness bands gating volume and load rules
pub mod volume {
    /// Scores below this trigger a deload and block load progression
    pub const DELOAD_THRESHOLD: u8 = 40;
    /// Scores below this (and at or above deload) drop one set per exercise
    pub const REDUCTION_THRESHOLD: u8 = 60;
    /// Fraction of sets kept during a deload
    pub const DELOAD_SET_FACTOR: f64 = 0.5;
    /// Fewest sets a reduced exercise may keep
    pub const MIN_SETS_AFTER_REDUCTION: u32 = 1;
    /// Sets removed in a volume reduction
    pub const REDUCTION_SET_STEP: u32 = 1;
}

/// Per-exercise load autoregulation
pub mod load {
    /// Target RPE when a plan does not specify one
    pub const DEFAULT_TARGET_RPE: f64 = 8.0;
    /// RPE this far below target counts as too easy
    pub const PROGRESSION_RPE_MARGIN: f64 = 1.0;
    /// RPE at or above this counts as a grinder
    pub const RPE_CEILING: f64 = 9.5;
    /// Multiplier for a load increase (+2.5%)
    pub const INCREASE_MULTIPLIER: f64 = 1.025;
    /// Multiplier for a load decrease (-5%)
    pub const DECREASE_MULTIPLIER: f64 = 0.95;
    /// Smallest plate increment loads are rounded to
    pub const WEIGHT_INCREMENT: f64 = 2.5;
}

/// Injury substitution protocol
pub mod injury {
    /// Suffix appended to the original id for substitute exercises
    pub const SUBSTITUTE_ID_SUFFIX: &str = "_sub";
    /// Fraction of the original load used for the back-friendly row
    pub const BACK_SUBSTITUTE_LOAD_FACTOR: f64 = 0.7;
}

/// Bounds enforced when validating engine inputs
pub mod validation {
    /// Lowest accepted sleep quality rating
    pub const MIN_SLEEP_QUALITY: u8 = 1;
    /// Highest accepted sleep quality rating
    pub const MAX_SLEEP_QUALITY: u8 = 10;
    /// Lowest accepted soreness rating
    pub const MIN_SORENESS: u8 = 1;
    /// Highest accepted soreness rating
    pub const MAX_SORENESS: u8 = 5;
    /// Lowest accepted RPE
    pub const MIN_RPE: f64 = 1.0;
    /// Highest accepted RPE
    pub const MAX_RPE: f64 = 10.0;
}
