// ABOUTME: Explanation layer turning adjustment decisions into user-facing rationale
// ABOUTME: Closed dispatch over adjustment kinds with a generic fallback that never fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

//! Explanation Generator
//!
//! One template per adjustment kind, filled from an `ExplanationContext`.
//! Missing context fields render neutral wording and unknown kinds render a
//! generic notice, so generating text can never block delivery of a decision.

use super::load_autoregulator::LoadReason;
use liftwise_core::models::AdjustmentKind;

/// Fields available to explanation templates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExplanationContext {
    /// Exercise the rule applied to
    pub exercise_name: Option<String>,
    /// Replacement exercise for substitutions
    pub substitute_name: Option<String>,
    /// Pain flag that triggered a substitution
    pub pain_flag: Option<String>,
    /// Weight before the change
    pub previous_weight: Option<f64>,
    /// Weight after the change
    pub new_weight: Option<f64>,
    /// Last-session RPE
    pub rpe: Option<f64>,
    /// Target RPE for the exercise
    pub target_rpe: Option<f64>,
    /// Load rule that fired
    pub load_reason: Option<LoadReason>,
    /// Readiness score for the day
    pub readiness_score: Option<u8>,
}

impl ExplanationContext {
    /// Context for a single exercise
    #[must_use]
    pub fn for_exercise(name: impl Into<String>) -> Self {
        Self {
            exercise_name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Context for a workout-wide readiness rule
    #[must_use]
    pub fn for_readiness(score: u8) -> Self {
        Self {
            readiness_score: Some(score),
            ..Self::default()
        }
    }

    /// Attach a weight change
    #[must_use]
    pub const fn with_weights(mut self, previous: f64, new: f64) -> Self {
        self.previous_weight = Some(previous);
        self.new_weight = Some(new);
        self
    }

    /// Attach last-session effort against target
    #[must_use]
    pub const fn with_effort(mut self, rpe: f64, target_rpe: f64) -> Self {
        self.rpe = Some(rpe);
        self.target_rpe = Some(target_rpe);
        self
    }

    /// Attach the load rule that fired
    #[must_use]
    pub const fn with_load_reason(mut self, reason: LoadReason) -> Self {
        self.load_reason = Some(reason);
        self
    }

    /// Attach a substitution
    #[must_use]
    pub fn with_substitution(
        mut self,
        substitute_name: impl Into<String>,
        pain_flag: impl Into<String>,
    ) -> Self {
        self.substitute_name = Some(substitute_name.into());
        self.pain_flag = Some(pain_flag.into());
        self
    }
}

/// Explanation generator
pub struct ExplanationGenerator;

impl ExplanationGenerator {
    /// Render the rationale for one adjustment
    #[must_use]
    pub fn explain(kind: &AdjustmentKind, context: &ExplanationContext) -> String {
        let exercise = context.exercise_name.as_deref().unwrap_or("This exercise");
        match kind {
            AdjustmentKind::LoadIncrease => format!(
                "{exercise}: last session felt easier than planned ({}). Load increased from {} to {}.",
                effort(context),
                weight(context.previous_weight),
                weight(context.new_weight),
            ),
            AdjustmentKind::LoadDecrease => format!(
                "{exercise}: {}. Load reduced from {} to {} to keep reps high quality.",
                decrease_cause(context),
                weight(context.previous_weight),
                weight(context.new_weight),
            ),
            AdjustmentKind::VolumeReduction => format!(
                "Readiness is {}, below optimal. Removed one set from each exercise to manage fatigue.",
                readiness(context.readiness_score),
            ),
            AdjustmentKind::Deload => format!(
                "Readiness is {}, indicating significant fatigue. Sets cut roughly in half (deload) and load progression paused for today.",
                readiness(context.readiness_score),
            ),
            AdjustmentKind::InjurySubstitution => format!(
                "Replaced {exercise} with {} because you reported {} pain.",
                context
                    .substitute_name
                    .as_deref()
                    .unwrap_or("a safer alternative"),
                context.pain_flag.as_deref().unwrap_or("unspecified"),
            ),
            AdjustmentKind::Maintenance => format!(
                "{exercise}: no change needed. Train at {}.",
                weight(context.new_weight),
            ),
            AdjustmentKind::Unknown(raw) => format!(
                "An adjustment was applied ({raw}). Review today's plan for details."
            ),
        }
    }

    /// Render the rationale for a kind given as its wire name
    #[must_use]
    pub fn explain_raw(kind: &str, context: &ExplanationContext) -> String {
        match kind.parse::<AdjustmentKind>() {
            Ok(kind) => Self::explain(&kind, context),
            Err(never) => match never {},
        }
    }
}

fn weight(value: Option<f64>) -> String {
    value.map_or_else(|| "the previous load".to_owned(), |w| format!("{w}kg"))
}

fn readiness(score: Option<u8>) -> String {
    score.map_or_else(|| "low".to_owned(), |s| format!("{s}/100"))
}

fn effort(context: &ExplanationContext) -> String {
    match (context.rpe, context.target_rpe) {
        (Some(rpe), Some(target)) => format!("RPE {rpe} vs target {target}"),
        (Some(rpe), None) => format!("RPE {rpe}"),
        _ => "effort below target".to_owned(),
    }
}

fn decrease_cause(context: &ExplanationContext) -> String {
    match context.load_reason {
        Some(LoadReason::MissedReps) => "reps were missed last session".to_owned(),
        Some(LoadReason::RpeAtCeiling) => context.rpe.map_or_else(
            || "last session was near maximal effort".to_owned(),
            |rpe| format!("last session was near maximal effort (RPE {rpe})"),
        ),
        _ => "last session was harder than planned".to_owned(),
    }
}
