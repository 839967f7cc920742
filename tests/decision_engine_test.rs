// ABOUTME: End-to-end tests for the daily decision pipeline
// ABOUTME: Covers rule precedence, explanation ordering, validation, idempotence, and JSON requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    assert_weight, exhausted_feedback, fresh_feedback, performance, standard_plan, test_user,
    tired_feedback,
};
use liftwise::{
    config::{EngineConfig, VolumeConfig},
    errors::ErrorCode,
    intelligence::AutoregulationEngine,
    models::{
        AdjustmentKind, AppliedAdjustment, DailyDecision, DecisionRequest, Exercise,
        ExerciseCategory, ExercisePerformance, Feedback, ReadinessBand, StressLevel, Workout,
    },
};
use serde_json::json;

fn decide(
    planned: &Workout,
    feedback: &Feedback,
    history: &[ExercisePerformance],
) -> DailyDecision {
    AutoregulationEngine::default()
        .generate_daily_workout(&test_user(), planned, feedback, history)
        .unwrap()
}

fn curl(id: &str, weight: f64) -> Exercise {
    Exercise::new(id, "Curl", ExerciseCategory::Isolation, weight, 3, 12)
}

fn kinds(decision: &DailyDecision) -> Vec<AdjustmentKind> {
    decision
        .adjustments
        .iter()
        .map(|adjustment| adjustment.kind.clone())
        .collect()
}

#[test]
fn test_easy_squat_session_progresses_load() {
    common::init_test_logging();
    let history = vec![performance("squat", 100.0, 5, 7.0)];
    let decision = decide(&standard_plan(), &fresh_feedback(), &history);

    assert_eq!(decision.readiness_score, 85);
    assert_eq!(decision.readiness_band, ReadinessBand::Ready);
    assert_weight(decision.workout.exercise("squat").unwrap().weight, 102.5);
    assert_weight(decision.workout.exercise("bench").unwrap().weight, 80.0);
    assert_weight(decision.workout.exercise("row").unwrap().weight, 60.0);

    assert_eq!(decision.explanations.len(), 1);
    assert!(decision.explanations[0].contains("RPE 7"));
    assert_eq!(
        decision.adjustments,
        vec![AppliedAdjustment {
            kind: AdjustmentKind::LoadIncrease,
            exercise_id: Some("squat".into()),
        }]
    );
}

#[test]
fn test_poor_recovery_trims_one_set_per_exercise() {
    let plan = standard_plan();
    let decision = decide(&plan, &tired_feedback(), &[]);

    assert_eq!(decision.readiness_score, 55);
    assert_eq!(decision.readiness_band, ReadinessBand::Reduced);
    for (planned, adjusted) in plan.exercises.iter().zip(&decision.workout.exercises) {
        assert_eq!(adjusted.sets, planned.sets - 1, "{}", planned.id);
    }
    assert_eq!(kinds(&decision), vec![AdjustmentKind::VolumeReduction]);
    assert!(decision.explanations[0].contains("55/100"));
}

#[test]
fn test_deload_skips_load_progression() {
    let history = vec![performance("squat", 100.0, 5, 7.0)];
    let decision = decide(&standard_plan(), &exhausted_feedback(), &history);

    assert_eq!(decision.readiness_score, 15);
    assert_eq!(decision.readiness_band, ReadinessBand::Deload);
    let squat = decision.workout.exercise("squat").unwrap();
    assert_eq!(squat.sets, 1);
    assert_weight(squat.weight, 100.0);
    assert_eq!(kinds(&decision), vec![AdjustmentKind::Deload]);
}

#[test]
fn test_reduced_band_still_progresses_load() {
    let history = vec![performance("bench", 80.0, 5, 6.5)];
    let decision = decide(&standard_plan(), &tired_feedback(), &history);

    assert_weight(decision.workout.exercise("bench").unwrap().weight, 82.5);
    assert_eq!(
        kinds(&decision),
        vec![AdjustmentKind::VolumeReduction, AdjustmentKind::LoadIncrease]
    );
}

#[test]
fn test_progression_gate_is_configurable() {
    let config = EngineConfig {
        volume: VolumeConfig {
            progression_min_readiness: 60,
            ..VolumeConfig::default()
        },
        ..EngineConfig::default()
    };
    let engine = AutoregulationEngine::new(config).unwrap();
    let history = vec![performance("bench", 80.0, 5, 6.5)];
    let decision = engine
        .generate_daily_workout(&test_user(), &standard_plan(), &tired_feedback(), &history)
        .unwrap();

    assert_weight(decision.workout.exercise("bench").unwrap().weight, 80.0);
    assert_eq!(kinds(&decision), vec![AdjustmentKind::VolumeReduction]);
}

#[test]
fn test_missed_reps_reduce_load() {
    let history = vec![performance("squat", 100.0, 4, 8.0)];
    let decision = decide(&standard_plan(), &fresh_feedback(), &history);

    assert_weight(decision.workout.exercise("squat").unwrap().weight, 95.0);
    assert_eq!(kinds(&decision), vec![AdjustmentKind::LoadDecrease]);
    assert!(decision.explanations[0].contains("reps were missed"));
}

#[test]
fn test_maintenance_carries_over_last_used_weight() {
    let history = vec![performance("squat", 97.5, 5, 8.0)];
    let decision = decide(&standard_plan(), &fresh_feedback(), &history);

    assert_weight(decision.workout.exercise("squat").unwrap().weight, 97.5);
    assert!(decision.explanations.is_empty());
    assert!(decision.adjustments.is_empty());
}

#[test]
fn test_first_history_record_wins() {
    let history = vec![
        performance("squat", 100.0, 5, 7.0),
        performance("squat", 100.0, 5, 9.5),
    ];
    let decision = decide(&standard_plan(), &fresh_feedback(), &history);

    assert_weight(decision.workout.exercise("squat").unwrap().weight, 102.5);
}

#[test]
fn test_unmatched_history_is_ignored() {
    let history = vec![performance("deadlift", 140.0, 5, 6.0)];
    let plan = standard_plan();
    let decision = decide(&plan, &fresh_feedback(), &history);

    assert_eq!(decision.workout, plan);
    assert!(decision.explanations.is_empty());
}

#[test]
fn test_substituted_slot_skips_progression() {
    let history = vec![performance("squat", 100.0, 5, 7.0)];
    let feedback = fresh_feedback().with_pain_flag("left_knee");
    let decision = decide(&standard_plan(), &feedback, &history);

    let slot = &decision.workout.exercises[0];
    assert_eq!(slot.id, "squat_sub");
    assert_eq!(slot.name, "Glute Bridge");
    assert_weight(slot.weight, 0.0);
    assert_eq!(
        decision.adjustments,
        vec![AppliedAdjustment {
            kind: AdjustmentKind::InjurySubstitution,
            exercise_id: Some("squat_sub".into()),
        }]
    );
    assert_eq!(
        decision.explanations[0],
        "Replaced Squat with Glute Bridge because you reported left_knee pain."
    );
}

#[test]
fn test_explanations_follow_rule_order() {
    let history = vec![performance("bench", 80.0, 5, 6.0)];
    let feedback = Feedback::new(5, 3, StressLevel::High).with_pain_flag("knee");
    let decision = decide(&standard_plan(), &feedback, &history);

    assert_eq!(
        kinds(&decision),
        vec![
            AdjustmentKind::InjurySubstitution,
            AdjustmentKind::VolumeReduction,
            AdjustmentKind::LoadIncrease,
        ]
    );
    assert_eq!(decision.explanations.len(), decision.adjustments.len());
    // Substitute picks up the volume reduction like any other slot
    assert_eq!(decision.workout.exercises[0].sets, 2);
}

#[test]
fn test_slot_count_and_order_preserved() {
    let feedback = exhausted_feedback()
        .with_pain_flag("knee")
        .with_pain_flag("shoulder")
        .with_pain_flag("back");
    let plan = standard_plan();
    let decision = decide(&plan, &feedback, &[]);

    assert_eq!(decision.workout.exercises.len(), plan.exercises.len());
    let ids: Vec<&str> = decision
        .workout
        .exercises
        .iter()
        .map(|exercise| exercise.id.as_str())
        .collect();
    assert_eq!(ids, vec!["squat_sub", "bench", "row_sub"]);
}

#[test]
fn test_plan_is_never_mutated() {
    let plan = standard_plan();
    let snapshot = plan.clone();
    let history = vec![performance("squat", 100.0, 5, 7.0)];
    let feedback = tired_feedback().with_pain_flag("back");

    let _ = decide(&plan, &feedback, &history);

    assert_eq!(plan, snapshot);
}

#[test]
fn test_repeated_calls_are_byte_identical() {
    let plan = standard_plan();
    let history = vec![
        performance("squat", 100.0, 5, 7.0),
        performance("row", 60.0, 8, 9.0),
    ];
    let feedback = tired_feedback().with_pain_flag("shoulder");
    let engine = AutoregulationEngine::default();

    let first = engine
        .generate_daily_workout(&test_user(), &plan, &feedback, &history)
        .unwrap();
    let second = engine
        .generate_daily_workout(&test_user(), &plan, &feedback, &history)
        .unwrap();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_out_of_range_feedback_rejected() {
    let engine = AutoregulationEngine::default();
    for feedback in [
        Feedback::new(0, 2, StressLevel::Low),
        Feedback::new(11, 2, StressLevel::Low),
        Feedback::new(8, 0, StressLevel::Low),
        Feedback::new(8, 6, StressLevel::Low),
    ] {
        let error = engine
            .generate_daily_workout(&test_user(), &standard_plan(), &feedback, &[])
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert_eq!(error.http_status(), 400);
    }
}

#[test]
fn test_structural_problems_rejected() {
    let engine = AutoregulationEngine::default();

    let mut empty = standard_plan();
    empty.exercises.clear();
    let error = engine
        .generate_daily_workout(&test_user(), &empty, &fresh_feedback(), &[])
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);

    let mut duplicated = standard_plan();
    duplicated.exercises[1].id = "squat".into();
    let error = engine
        .generate_daily_workout(&test_user(), &duplicated, &fresh_feedback(), &[])
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(error.details["exerciseId"], "squat");

    let mut anonymous = test_user();
    anonymous.id = "  ".into();
    let error = engine
        .generate_daily_workout(&anonymous, &standard_plan(), &fresh_feedback(), &[])
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);
}

#[test]
fn test_bad_exercise_fields_rejected() {
    let engine = AutoregulationEngine::default();

    let mut negative = standard_plan();
    negative.exercises[0].weight = -5.0;
    let error = engine
        .generate_daily_workout(&test_user(), &negative, &fresh_feedback(), &[])
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);

    let mut no_sets = standard_plan();
    no_sets.exercises[2].sets = 0;
    let error = engine
        .generate_daily_workout(&test_user(), &no_sets, &fresh_feedback(), &[])
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(error.details["field"], "workout.exercises[2].sets");
}

#[test]
fn test_history_rpe_out_of_range_rejected() {
    let history = vec![performance("squat", 100.0, 5, 11.0)];
    let error = AutoregulationEngine::default()
        .generate_daily_workout(&test_user(), &standard_plan(), &fresh_feedback(), &history)
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(error.details["field"], "history[0].rpe");
}

#[test]
fn test_json_request_round_trip() {
    let request = json!({
        "user": { "id": "user-7", "name": "Sam" },
        "plannedWorkout": {
            "id": "w-1",
            "userId": "user-7",
            "name": "Lower",
            "date": "2025-03-03",
            "exercises": [
                {
                    "id": "squat",
                    "name": "Barbell Squat",
                    "category": "compound",
                    "targetMuscles": ["quads"],
                    "weight": 100.0,
                    "sets": 3,
                    "reps": 5
                }
            ]
        },
        "feedback": { "sleepQuality": 8, "soreness": 2, "stressLevel": "Low" },
        "history": [
            { "exerciseId": "squat", "weight": 100.0, "completedReps": 5, "completedSets": 3, "rpe": 7.0 }
        ]
    });
    let request: DecisionRequest = serde_json::from_value(request).unwrap();
    let decision = AutoregulationEngine::default().decide(&request).unwrap();
    let encoded = serde_json::to_value(&decision).unwrap();

    assert_eq!(encoded["readinessScore"], 85);
    assert_eq!(encoded["readinessBand"], "ready");
    assert_eq!(encoded["workout"]["exercises"][0]["weight"], 102.5);
    assert_eq!(encoded["workout"]["exercises"][0]["targetRpe"], 8.0);
    assert_eq!(encoded["adjustments"][0]["kind"], "LOAD_INCREASE");
    assert_eq!(encoded["adjustments"][0]["exerciseId"], "squat");
}

#[test]
fn test_invalid_config_rejected_by_constructor() {
    let config = EngineConfig {
        volume: VolumeConfig {
            deload_threshold: 70,
            ..VolumeConfig::default()
        },
        ..EngineConfig::default()
    };
    let error = AutoregulationEngine::new(config).unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_deload_band_blocks_progression_under_custom_thresholds() {
    let config = EngineConfig {
        volume: VolumeConfig {
            deload_threshold: 60,
            reduction_threshold: 70,
            progression_min_readiness: 60,
            ..VolumeConfig::default()
        },
        ..EngineConfig::default()
    };
    let engine = AutoregulationEngine::new(config).unwrap();
    let history = vec![performance("bench", 80.0, 5, 6.5)];
    let decision = engine
        .generate_daily_workout(&test_user(), &standard_plan(), &tired_feedback(), &history)
        .unwrap();

    assert_eq!(decision.readiness_band, ReadinessBand::Deload);
    assert_weight(decision.workout.exercise("bench").unwrap().weight, 80.0);
    assert_eq!(kinds(&decision), vec![AdjustmentKind::Deload]);
}

#[test]
fn test_progression_gate_below_deload_threshold_rejected() {
    let config = EngineConfig {
        volume: VolumeConfig {
            deload_threshold: 60,
            reduction_threshold: 70,
            ..VolumeConfig::default()
        },
        ..EngineConfig::default()
    };
    let error = AutoregulationEngine::new(config).unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_substitute_never_inherits_other_slot_history() {
    let mut plan = standard_plan();
    plan.exercises[1] = curl("squat_sub", 80.0);
    let history = vec![performance("squat_sub", 80.0, 12, 6.0)];
    let feedback = fresh_feedback().with_pain_flag("knee");
    let decision = decide(&plan, &feedback, &history);

    let bridge = &decision.workout.exercises[0];
    assert_eq!(bridge.id, "squat_sub_sub");
    assert_weight(bridge.weight, 0.0);
    assert_weight(decision.workout.exercise("squat_sub").unwrap().weight, 82.5);
    assert_eq!(
        decision.adjustments,
        vec![
            AppliedAdjustment {
                kind: AdjustmentKind::InjurySubstitution,
                exercise_id: Some("squat_sub_sub".into()),
            },
            AppliedAdjustment {
                kind: AdjustmentKind::LoadIncrease,
                exercise_id: Some("squat_sub".into()),
            },
        ]
    );
}

#[test]
fn test_change_lost_to_rounding_is_maintenance() {
    // 20 * 0.95 = 19 rounds back to 20
    let history = vec![performance("squat", 20.0, 5, 9.5)];
    let decision = decide(&standard_plan(), &fresh_feedback(), &history);

    assert_weight(decision.workout.exercise("squat").unwrap().weight, 20.0);
    assert!(decision.explanations.is_empty());
    assert!(decision.adjustments.is_empty());
}
