// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides logging setup plus standard plans, feedback, and history records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::wildcard_in_or_patterns
)]
//! Shared test utilities for `liftwise`
//!
//! This module provides common fixtures to reduce duplication across
//! integration tests.

use chrono::NaiveDate;
use liftwise::models::{
    Exercise, ExerciseCategory, ExercisePerformance, Feedback, StressLevel, User, Workout,
};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Athlete owning the standard plan
pub fn test_user() -> User {
    User::new("user-1", "Test Athlete")
}

/// Squat 100kg 3x5, Bench 80kg 3x5, Row 60kg 3x10
pub fn standard_plan() -> Workout {
    Workout {
        id: "workout-1".into(),
        user_id: "user-1".into(),
        name: "Full Body A".into(),
        exercises: vec![
            Exercise::new("squat", "Squat", ExerciseCategory::Compound, 100.0, 3, 5)
                .with_target_muscles(["quads", "glutes"]),
            Exercise::new("bench", "Bench", ExerciseCategory::Compound, 80.0, 3, 5)
                .with_target_muscles(["chest", "triceps"]),
            Exercise::new("row", "Row", ExerciseCategory::Compound, 60.0, 3, 10)
                .with_target_muscles(["lats", "upper back"]),
        ],
        date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
    }
}

/// Plan with a single exercise
pub fn single_exercise_plan(exercise: Exercise) -> Workout {
    Workout {
        exercises: vec![exercise],
        ..standard_plan()
    }
}

/// Sleep 8, soreness 2, low stress: readiness 85
pub fn fresh_feedback() -> Feedback {
    Feedback::new(8, 2, StressLevel::Low)
}

/// Sleep 5, soreness 3, high stress: readiness 55
pub fn tired_feedback() -> Feedback {
    Feedback::new(5, 3, StressLevel::High)
}

/// Sleep 2, soreness 5, high stress: readiness 15
pub fn exhausted_feedback() -> Feedback {
    Feedback::new(2, 5, StressLevel::High)
}

/// Completed session record
pub fn performance(exercise_id: &str, weight: f64, reps: u32, rpe: f64) -> ExercisePerformance {
    ExercisePerformance {
        exercise_id: exercise_id.into(),
        weight,
        completed_reps: reps,
        completed_sets: 3,
        rpe,
    }
}

/// Compare weights without tripping on float representation
pub fn assert_weight(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected weight {expected}, got {actual}"
    );
}
