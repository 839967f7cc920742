// ABOUTME: Decision request and result models for the daily autoregulation call
// ABOUTME: AdjustmentKind, ReadinessBand, AppliedAdjustment, DecisionRequest, DailyDecision
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use super::{ExercisePerformance, Feedback, User, Workout};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Kind of adjustment a rule produced
///
/// Parsing never fails: any string outside the known set becomes
/// `Unknown`, which explanation generation renders as a generic notice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AdjustmentKind {
    /// Load raised after an easy session
    LoadIncrease,
    /// Load lowered after missed reps or a grinder
    LoadDecrease,
    /// One set removed per exercise
    VolumeReduction,
    /// Sets halved across the workout
    Deload,
    /// Exercise swapped for a safer alternative
    InjurySubstitution,
    /// No change warranted
    Maintenance,
    /// Kind outside the known set
    Unknown(String),
}

impl AdjustmentKind {
    /// Canonical wire name
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::LoadIncrease => "LOAD_INCREASE",
            Self::LoadDecrease => "LOAD_DECREASE",
            Self::VolumeReduction => "VOLUME_REDUCTION",
            Self::Deload => "DELOAD",
            Self::InjurySubstitution => "INJURY_SUBSTITUTION",
            Self::Maintenance => "MAINTENANCE",
            Self::Unknown(raw) => raw,
        }
    }

    /// Whether this kind leaves the plan untouched
    #[must_use]
    pub const fn is_maintenance(&self) -> bool {
        matches!(self, Self::Maintenance)
    }
}

impl fmt::Display for AdjustmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdjustmentKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "LOAD_INCREASE" => Self::LoadIncrease,
            "LOAD_DECREASE" => Self::LoadDecrease,
            "VOLUME_REDUCTION" => Self::VolumeReduction,
            "DELOAD" => Self::Deload,
            "INJURY_SUBSTITUTION" => Self::InjurySubstitution,
            "MAINTENANCE" => Self::Maintenance,
            other => Self::Unknown(other.to_owned()),
        })
    }
}

impl Serialize for AdjustmentKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AdjustmentKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.parse::<Self>() {
            Ok(kind) => Ok(kind),
            Err(never) => match never {},
        }
    }
}

/// Readiness classification gating volume and load rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessBand {
    /// Recovered enough for the full plan
    Ready,
    /// Trim one set per exercise
    Reduced,
    /// Halve volume and skip load progression
    Deload,
}

/// Structured counterpart of one explanation line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedAdjustment {
    /// Rule outcome
    pub kind: AdjustmentKind,
    /// Exercise slot the rule touched; `None` for workout-wide rules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_id: Option<String>,
}

/// Everything one decision call needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionRequest {
    /// Athlete
    pub user: User,
    /// Plan for the day
    pub planned_workout: Workout,
    /// Recovery feedback
    pub feedback: Feedback,
    /// Prior-session performance, first record per exercise id wins
    #[serde(default)]
    pub history: Vec<ExercisePerformance>,
}

/// Consolidated output of one decision call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyDecision {
    /// Readiness score, 0-100
    pub readiness_score: u8,
    /// Band the score falls into
    pub readiness_band: ReadinessBand,
    /// Fully adjusted workout
    pub workout: Workout,
    /// One rationale per triggered rule, in evaluation order
    pub explanations: Vec<String>,
    /// Structured record per explanation, same order
    pub adjustments: Vec<AppliedAdjustment>,
}
