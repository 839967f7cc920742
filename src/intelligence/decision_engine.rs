// ABOUTME: Daily decision orchestrator composing injury, volume, and load rules in priority order
// ABOUTME: Produces the adjusted workout, readiness score, and one explanation per triggered rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

//! Decision Engine
//!
//! Precedence is safety, then recovery, then progression:
//!
//! 1. Copy the plan (the caller's workout is never touched)
//! 2. Injury substitution, one pain flag at a time
//! 3. Readiness scoring and volume autoregulation on the substituted workout
//! 4. Load progression per exercise, never on a deload day and only when
//!    readiness clears the gate; substituted slots are skipped
//!
//! Each call is independent. An engine holds nothing but its configuration
//! and can be shared across threads.

use super::explanation::{ExplanationContext, ExplanationGenerator};
use super::injury_protocol::InjurySubstitutionProtocol;
use super::load_autoregulator::LoadAutoregulator;
use super::readiness_calculator::ReadinessCalculator;
use super::validation::validate_inputs;
use super::volume_autoregulator::VolumeAutoregulator;
use crate::config::EngineConfig;
use liftwise_core::errors::AppResult;
use liftwise_core::models::{
    AdjustmentKind, AppliedAdjustment, DailyDecision, DecisionRequest, ExercisePerformance,
    Feedback, ReadinessBand, User, Workout,
};
use std::collections::HashSet;
use tracing::{debug, info};

/// Explanations and their structured records, kept in lockstep
#[derive(Debug, Default)]
struct DecisionLog {
    explanations: Vec<String>,
    adjustments: Vec<AppliedAdjustment>,
}

impl DecisionLog {
    fn record(
        &mut self,
        kind: AdjustmentKind,
        exercise_id: Option<String>,
        context: &ExplanationContext,
    ) {
        self.explanations
            .push(ExplanationGenerator::explain(&kind, context));
        self.adjustments
            .push(AppliedAdjustment { kind, exercise_id });
    }
}

/// Daily autoregulation engine
#[derive(Debug, Clone, Default)]
pub struct AutoregulationEngine {
    config: EngineConfig,
}

impl AutoregulationEngine {
    /// Create an engine with a validated configuration
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error if the configuration fails validation
    pub fn new(config: EngineConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create an engine from defaults plus `LIFTWISE_*` environment overrides
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error if an override is unparseable or invalid
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            config: EngineConfig::load()?,
        })
    }

    /// Configuration this engine decides with
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Decide from a bundled request
    ///
    /// # Errors
    ///
    /// Returns an error if any input fails validation
    pub fn decide(&self, request: &DecisionRequest) -> AppResult<DailyDecision> {
        self.generate_daily_workout(
            &request.user,
            &request.planned_workout,
            &request.feedback,
            &request.history,
        )
    }

    /// Produce today's adjusted workout with rationale
    ///
    /// # Errors
    ///
    /// Returns an error if any input fails validation; no adjustment is applied in that case
    pub fn generate_daily_workout(
        &self,
        user: &User,
        planned: &Workout,
        feedback: &Feedback,
        history: &[ExercisePerformance],
    ) -> AppResult<DailyDecision> {
        validate_inputs(user, planned, feedback, history)?;

        let mut log = DecisionLog::default();

        // Safety first: swap risky exercises before any volume or load rule sees them
        let protocol =
            InjurySubstitutionProtocol::new(&self.config.injury, self.config.load.weight_increment);
        let (mut workout, substitutions) = protocol.substitute_all(planned, &feedback.pain_flags);
        for substitution in &substitutions {
            let context = ExplanationContext::for_exercise(substitution.original.name.clone())
                .with_substitution(
                    substitution.replacement.name.clone(),
                    substitution.pain_flag.clone(),
                );
            log.record(
                AdjustmentKind::InjurySubstitution,
                Some(substitution.replacement.id.clone()),
                &context,
            );
        }

        let readiness_score =
            ReadinessCalculator::calculate_readiness(feedback, &self.config.readiness);
        let readiness_band = ReadinessCalculator::categorize(readiness_score, &self.config.volume);

        let volume =
            VolumeAutoregulator::adjust_volume(&workout, readiness_score, &self.config.volume);
        if !volume.kind.is_maintenance() {
            log.record(
                volume.kind,
                None,
                &ExplanationContext::for_readiness(readiness_score),
            );
            workout = volume.workout;
        }

        if readiness_band != ReadinessBand::Deload
            && readiness_score >= self.config.volume.progression_min_readiness
        {
            let substituted: HashSet<&str> = substitutions
                .iter()
                .map(|substitution| substitution.replacement.id.as_str())
                .collect();
            self.apply_load_progression(&mut workout, &substituted, history, &mut log);
        } else {
            debug!(
                readiness_score,
                "Readiness below progression gate, skipping load autoregulation"
            );
        }

        info!(
            user_id = %user.id,
            workout_id = %planned.id,
            readiness_score,
            readiness_band = ?readiness_band,
            adjustments = log.adjustments.len(),
            "Generated daily workout decision"
        );

        Ok(DailyDecision {
            readiness_score,
            readiness_band,
            workout,
            explanations: log.explanations,
            adjustments: log.adjustments,
        })
    }

    /// Apply RPE-driven load changes to every slot with a matching performance record
    fn apply_load_progression(
        &self,
        workout: &mut Workout,
        substituted: &HashSet<&str>,
        history: &[ExercisePerformance],
        log: &mut DecisionLog,
    ) {
        let load_config = &self.config.load;

        for exercise in &mut workout.exercises {
            // Substitutes have no history of their own, whatever their id happens to be
            if substituted.contains(exercise.id.as_str()) {
                continue;
            }
            // First record per id wins
            let Some(performance) = history
                .iter()
                .find(|record| record.exercise_id == exercise.id)
            else {
                continue;
            };

            let missed_reps = performance.completed_reps < exercise.reps;
            let adjustment = LoadAutoregulator::adjust_load(
                performance.weight,
                performance.rpe,
                exercise.target_rpe,
                missed_reps,
                load_config,
            );

            let new_weight = LoadAutoregulator::round_to_increment(
                adjustment.new_weight,
                load_config.weight_increment,
            );
            // A change the plate increment cannot express is a maintenance day
            if adjustment.kind.is_maintenance()
                || (new_weight - performance.weight).abs() < f64::EPSILON
            {
                exercise.weight = performance.weight;
                continue;
            }

            let context = ExplanationContext::for_exercise(exercise.name.clone())
                .with_weights(performance.weight, new_weight)
                .with_effort(performance.rpe, exercise.target_rpe)
                .with_load_reason(adjustment.reason);

            exercise.weight = new_weight;
            log.record(adjustment.kind, Some(exercise.id.clone()), &context);
        }
    }
}
