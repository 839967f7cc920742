// ABOUTME: Core data models for the Liftwise autoregulation engine
// ABOUTME: Re-exports Workout, Exercise, Feedback, User and decision records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

//! # Data Models
//!
//! Plain records the engine consumes and produces. All of them serialize with
//! camelCase field names so a transport adapter can pass request payloads
//! straight through serde.
//!
//! ## Core Models
//!
//! - `Workout` / `Exercise`: the planned session
//! - `Feedback`: subjective recovery signals for the day
//! - `ExercisePerformance`: last completed session per exercise
//! - `User`: athlete identity and reserved training data
//! - `DailyDecision`: the engine's consolidated output

mod athlete;
mod decision;
mod feedback;
mod workout;

pub use athlete::User;
pub use decision::{
    AdjustmentKind, AppliedAdjustment, DailyDecision, DecisionRequest, ReadinessBand,
};
pub use feedback::{Feedback, StressLevel};
pub use workout::{Exercise, ExerciseCategory, ExercisePerformance, Workout};
