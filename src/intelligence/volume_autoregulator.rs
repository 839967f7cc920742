// ABOUTME: Whole-workout volume autoregulation driven by the readiness score
// ABOUTME: Deloads, trims one set per exercise, or leaves set counts unchanged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

//! Volume Autoregulator Module
//!
//! Operates on its own copy of the workout; the input is never mutated and the
//! returned workout becomes the caller's source of truth. Every exercise is
//! treated as equally fatiguing.

use super::readiness_calculator::ReadinessCalculator;
use crate::config::VolumeConfig;
use liftwise_core::constants::volume::{MIN_SETS_AFTER_REDUCTION, REDUCTION_SET_STEP};
use liftwise_core::models::{AdjustmentKind, Exercise, ReadinessBand, Workout};
use tracing::debug;

/// Outcome of one volume decision
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeAdjustment {
    /// Workout with adjusted set counts
    pub workout: Workout,
    /// `Deload`, `VolumeReduction`, or `Maintenance`
    pub kind: AdjustmentKind,
}

/// Volume autoregulator
pub struct VolumeAutoregulator;

impl VolumeAutoregulator {
    /// Adjust set counts for the day's readiness
    #[must_use]
    pub fn adjust_volume(
        planned: &Workout,
        readiness_score: u8,
        config: &VolumeConfig,
    ) -> VolumeAdjustment {
        let mut workout = planned.clone();

        let kind = match ReadinessCalculator::categorize(readiness_score, config) {
            ReadinessBand::Deload => {
                for exercise in &mut workout.exercises {
                    exercise.sets = Self::deload_sets(exercise, config.deload_set_factor);
                }
                AdjustmentKind::Deload
            }
            ReadinessBand::Reduced => {
                for exercise in &mut workout.exercises {
                    if exercise.sets > MIN_SETS_AFTER_REDUCTION {
                        exercise.sets -= REDUCTION_SET_STEP;
                    }
                }
                AdjustmentKind::VolumeReduction
            }
            ReadinessBand::Ready => AdjustmentKind::Maintenance,
        };

        debug!(
            readiness_score,
            kind = %kind,
            planned_sets = planned.total_sets(),
            adjusted_sets = workout.total_sets(),
            "Volume autoregulation evaluated"
        );

        VolumeAdjustment { workout, kind }
    }

    /// Halved set count, never below one; rest placeholders keep zero sets
    fn deload_sets(exercise: &Exercise, factor: f64) -> u32 {
        if exercise.is_rest_placeholder() {
            return 0;
        }
        let kept = (f64::from(exercise.sets) * factor).floor() as u32;
        kept.max(MIN_SETS_AFTER_REDUCTION)
    }
}
