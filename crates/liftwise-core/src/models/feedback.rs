// ABOUTME: Daily subjective recovery feedback model
// ABOUTME: Sleep, soreness, stress ratings and ordered pain flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Self-reported stress level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StressLevel {
    /// Little or no life stress
    Low,
    /// Normal day
    Medium,
    /// Stressful day; penalized in readiness
    High,
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        };
        f.write_str(label)
    }
}

/// Recovery feedback for one decision call
///
/// `pain_flags` order matters: flags are applied in sequence and a later flag
/// overwrites an earlier substitution on the same slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    /// Sleep quality rating (higher is better)
    pub sleep_quality: u8,
    /// Muscle soreness rating, 1-5
    pub soreness: u8,
    /// Stress level
    pub stress_level: StressLevel,
    /// Body-part identifiers reporting pain, e.g. `left_knee`
    #[serde(default)]
    pub pain_flags: Vec<String>,
}

impl Feedback {
    /// Feedback with no pain flags
    #[must_use]
    pub const fn new(sleep_quality: u8, soreness: u8, stress_level: StressLevel) -> Self {
        Self {
            sleep_quality,
            soreness,
            stress_level,
            pain_flags: Vec::new(),
        }
    }

    /// Append a pain flag
    #[must_use]
    pub fn with_pain_flag(mut self, flag: impl Into<String>) -> Self {
        self.pain_flags.push(flag.into());
        self
    }
}
