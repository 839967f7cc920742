// ABOUTME: Planned workout, exercise, and prior-session performance models
// ABOUTME: Exercise builders plus the zero-volume rest placeholder used by injury substitution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use crate::constants::load::DEFAULT_TARGET_RPE;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Movement classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseCategory {
    /// Multi-joint movement (squat, press, row)
    Compound,
    /// Single-joint movement (curl, raise, bridge)
    Isolation,
}

const fn default_target_rpe() -> f64 {
    DEFAULT_TARGET_RPE
}

/// One exercise slot of a workout
///
/// Adjustments never edit a planned exercise in place; the engine works on
/// its own copy and replaces whole records when substituting.
///
/// # Examples
///
/// ```rust
/// use liftwise_core::models::{Exercise, ExerciseCategory};
///
/// let squat = Exercise::new("ex-1", "Barbell Squat", ExerciseCategory::Compound, 100.0, 3, 5)
///     .with_target_muscles(["quads", "glutes"]);
/// assert!((squat.target_rpe - 8.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Identifier, unique within the workout
    pub id: String,
    /// Display name; injury rules match against this text
    pub name: String,
    /// Movement classification
    pub category: ExerciseCategory,
    /// Muscle groups trained
    #[serde(default)]
    pub target_muscles: BTreeSet<String>,
    /// Working weight
    pub weight: f64,
    /// Working sets
    pub sets: u32,
    /// Reps per set
    pub reps: u32,
    /// Intended effort per set
    #[serde(default = "default_target_rpe")]
    pub target_rpe: f64,
}

impl Exercise {
    /// Create an exercise with the default target RPE and no muscle tags
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: ExerciseCategory,
        weight: f64,
        sets: u32,
        reps: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            target_muscles: BTreeSet::new(),
            weight,
            sets,
            reps,
            target_rpe: DEFAULT_TARGET_RPE,
        }
    }

    /// Replace the muscle tags
    #[must_use]
    pub fn with_target_muscles<I, S>(mut self, muscles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.target_muscles = muscles.into_iter().map(Into::into).collect();
        self
    }

    /// Override the target RPE
    #[must_use]
    pub const fn with_target_rpe(mut self, target_rpe: f64) -> Self {
        self.target_rpe = target_rpe;
        self
    }

    /// Zero-volume slot that stands in for an exercise the athlete should skip
    #[must_use]
    pub fn rest_placeholder(id: impl Into<String>, affected_area: &str) -> Self {
        Self {
            id: id.into(),
            name: format!("Rest ({affected_area})"),
            category: ExerciseCategory::Isolation,
            target_muscles: BTreeSet::new(),
            weight: 0.0,
            sets: 0,
            reps: 0,
            target_rpe: DEFAULT_TARGET_RPE,
        }
    }

    /// Whether this slot is a rest placeholder
    #[must_use]
    pub const fn is_rest_placeholder(&self) -> bool {
        self.sets == 0
    }
}

/// Planned training session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Workout identifier
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// Display name
    pub name: String,
    /// Exercise slots in session order
    pub exercises: Vec<Exercise>,
    /// Scheduled date
    pub date: NaiveDate,
}

impl Workout {
    /// Look up an exercise slot by id
    #[must_use]
    pub fn exercise(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|exercise| exercise.id == id)
    }

    /// Total working sets across all slots
    #[must_use]
    pub fn total_sets(&self) -> u32 {
        self.exercises.iter().map(|exercise| exercise.sets).sum()
    }
}

/// Last completed session for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExercisePerformance {
    /// Exercise id this record refers to
    pub exercise_id: String,
    /// Weight actually lifted
    pub weight: f64,
    /// Reps completed per set
    pub completed_reps: u32,
    /// Sets completed
    pub completed_sets: u32,
    /// Reported effort, 1-10
    pub rpe: f64,
}
