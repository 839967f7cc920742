// ABOUTME: Benchmark fixtures generating training plans and performance history
// ABOUTME: Deterministic data so decision timings are reproducible between runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

//! Benchmark fixtures for generating plans and history.

use chrono::NaiveDate;
use liftwise::models::{
    Exercise, ExerciseCategory, ExercisePerformance, Feedback, StressLevel, User, Workout,
};

/// Predefined plan sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum PlanSize {
    /// Typical session (6 exercises)
    Session,
    /// Oversized plan (60 exercises) to expose per-slot costs
    Block,
}

impl PlanSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Session => 6,
            Self::Block => 60,
        }
    }
}

const MOVEMENTS: [(&str, ExerciseCategory); 6] = [
    ("Back Squat", ExerciseCategory::Compound),
    ("Bench Press", ExerciseCategory::Compound),
    ("Barbell Row", ExerciseCategory::Compound),
    ("Romanian Deadlift", ExerciseCategory::Compound),
    ("Lateral Raise", ExerciseCategory::Isolation),
    ("Curl", ExerciseCategory::Isolation),
];

#[must_use]
pub fn bench_user() -> User {
    User::new("bench-user", "Benchmark Athlete")
}

/// Plan cycling through a fixed movement list
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::expect_used
)]
#[must_use]
pub fn generate_plan(size: PlanSize) -> Workout {
    let exercises = (0..size.count())
        .map(|index| {
            let (name, category) = MOVEMENTS[index % MOVEMENTS.len()];
            let weight = 40.0 + (index % 10) as f64 * 10.0;
            Exercise::new(
                format!("ex-{index}"),
                format!("{name} {index}"),
                category,
                weight,
                3 + (index % 3) as u32,
                5 + (index % 4) as u32 * 2,
            )
        })
        .collect();

    Workout {
        id: "bench-workout".into(),
        user_id: "bench-user".into(),
        name: "Benchmark Session".into(),
        exercises,
        date: NaiveDate::from_ymd_opt(2025, 3, 3).expect("valid benchmark date"),
    }
}

/// One performance record per planned exercise, with varied effort
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn generate_history(plan: &Workout) -> Vec<ExercisePerformance> {
    plan.exercises
        .iter()
        .enumerate()
        .map(|(index, exercise)| ExercisePerformance {
            exercise_id: exercise.id.clone(),
            weight: exercise.weight,
            completed_reps: exercise.reps,
            completed_sets: exercise.sets,
            rpe: 6.5 + (index % 7) as f64 * 0.5,
        })
        .collect()
}

/// Feedback for each readiness band, with pain flags on the reduced day
#[must_use]
pub fn feedback_scenarios() -> [(&'static str, Feedback); 3] {
    [
        ("ready", Feedback::new(8, 2, StressLevel::Low)),
        (
            "reduced_with_pain",
            Feedback::new(5, 3, StressLevel::High)
                .with_pain_flag("left_knee")
                .with_pain_flag("lower_back"),
        ),
        ("deload", Feedback::new(2, 5, StressLevel::High)),
    ]
}
