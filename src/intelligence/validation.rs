// ABOUTME: Fail-fast validation of decision inputs before any rule runs
// ABOUTME: Rejects blank ids, empty workouts, duplicate slots, and out-of-range ratings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

//! Input validation for the decision pipeline.
//!
//! Validation runs before the first rule so a rejected call never applies a
//! partial adjustment. Unmatched performance records and unmapped pain flags
//! are not errors.

use liftwise_core::constants::validation::{
    MAX_RPE, MAX_SLEEP_QUALITY, MAX_SORENESS, MIN_RPE, MIN_SLEEP_QUALITY, MIN_SORENESS,
};
use liftwise_core::errors::{AppError, AppResult, ErrorCode};
use liftwise_core::models::{Exercise, ExercisePerformance, Feedback, User, Workout};
use serde_json::json;
use std::collections::HashSet;

/// Validate every input of one decision call
///
/// # Errors
///
/// Returns the first violation found, in user, workout, feedback, history order
pub fn validate_inputs(
    user: &User,
    workout: &Workout,
    feedback: &Feedback,
    history: &[ExercisePerformance],
) -> AppResult<()> {
    require_non_blank("user.id", &user.id)?;
    validate_workout(workout)?;
    validate_feedback(feedback)?;
    history
        .iter()
        .enumerate()
        .try_for_each(|(index, record)| validate_performance(index, record))
}

/// Validate the planned workout
///
/// # Errors
///
/// Returns an error for blank ids, an empty exercise list, duplicate exercise
/// ids, or out-of-range exercise fields
pub fn validate_workout(workout: &Workout) -> AppResult<()> {
    require_non_blank("workout.id", &workout.id)?;
    if workout.exercises.is_empty() {
        return Err(AppError::invalid_input(
            "Workout must contain at least one exercise",
        )
        .with_details(json!({ "workoutId": workout.id })));
    }

    let mut seen = HashSet::with_capacity(workout.exercises.len());
    for (index, exercise) in workout.exercises.iter().enumerate() {
        validate_exercise(index, exercise)?;
        if !seen.insert(exercise.id.as_str()) {
            return Err(AppError::invalid_input(format!(
                "Duplicate exercise id '{}' in workout",
                exercise.id
            ))
            .with_details(json!({ "exerciseId": exercise.id })));
        }
    }
    Ok(())
}

/// Validate the day's feedback ratings
///
/// # Errors
///
/// Returns an error if sleep quality or soreness is outside its documented range
pub fn validate_feedback(feedback: &Feedback) -> AppResult<()> {
    require_range(
        "feedback.sleepQuality",
        f64::from(feedback.sleep_quality),
        f64::from(MIN_SLEEP_QUALITY),
        f64::from(MAX_SLEEP_QUALITY),
    )?;
    require_range(
        "feedback.soreness",
        f64::from(feedback.soreness),
        f64::from(MIN_SORENESS),
        f64::from(MAX_SORENESS),
    )
}

fn validate_exercise(index: usize, exercise: &Exercise) -> AppResult<()> {
    let field = |name: &str| format!("workout.exercises[{index}].{name}");

    require_non_blank(&field("id"), &exercise.id)?;
    require_non_blank(&field("name"), &exercise.name)?;
    require_non_negative(&field("weight"), exercise.weight)?;
    require_positive_count(&field("sets"), exercise.sets)?;
    require_positive_count(&field("reps"), exercise.reps)?;
    require_range(&field("targetRpe"), exercise.target_rpe, MIN_RPE, MAX_RPE)
}

fn validate_performance(index: usize, record: &ExercisePerformance) -> AppResult<()> {
    let field = |name: &str| format!("history[{index}].{name}");

    require_non_negative(&field("weight"), record.weight)?;
    require_range(&field("rpe"), record.rpe, MIN_RPE, MAX_RPE)
}

fn require_non_blank(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::missing_field(field));
    }
    Ok(())
}

fn require_range(field: &str, value: f64, min: f64, max: f64) -> AppResult<()> {
    if !(min..=max).contains(&value) {
        return Err(AppError::out_of_range(field, value, min, max));
    }
    Ok(())
}

fn require_non_negative(field: &str, value: f64) -> AppResult<()> {
    if !(value.is_finite() && value >= 0.0) {
        return Err(AppError::new(
            ErrorCode::ValueOutOfRange,
            format!("{field} must be a non-negative number, got {value}"),
        )
        .with_details(json!({ "field": field })));
    }
    Ok(())
}

fn require_positive_count(field: &str, value: u32) -> AppResult<()> {
    if value == 0 {
        return Err(AppError::new(
            ErrorCode::ValueOutOfRange,
            format!("{field} must be at least 1"),
        )
        .with_details(json!({ "field": field, "value": value })));
    }
    Ok(())
}
