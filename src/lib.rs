// ABOUTME: Main library entry point for the Liftwise daily autoregulation engine
// ABOUTME: Exposes configuration, the rule components, and the decision engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

#![deny(unsafe_code)]

//! # Liftwise
//!
//! A rule engine that turns a planned strength workout, today's recovery
//! feedback, and last-session performance into an adjusted workout with a
//! rationale for every change.
//!
//! ## Rule precedence
//!
//! - **Safety**: exercises that load a painful body part are substituted
//! - **Recovery**: low readiness trims or halves set counts
//! - **Progression**: RPE from the last session moves the working weight
//!
//! The engine performs no I/O. Transport, persistence, and presentation are
//! the caller's concern.
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use liftwise::intelligence::AutoregulationEngine;
//! use liftwise::models::{Exercise, ExerciseCategory, Feedback, StressLevel, User, Workout};
//!
//! let plan = Workout {
//!     id: "w-1".into(),
//!     user_id: "u-1".into(),
//!     name: "Lower A".into(),
//!     exercises: vec![Exercise::new("squat", "Squat", ExerciseCategory::Compound, 100.0, 3, 5)],
//!     date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
//! };
//! let engine = AutoregulationEngine::default();
//! let decision = engine
//!     .generate_daily_workout(
//!         &User::new("u-1", "Sam"),
//!         &plan,
//!         &Feedback::new(7, 2, StressLevel::Medium),
//!         &[],
//!     )
//!     .map_err(|e| e.to_string());
//! assert_eq!(decision.map(|d| d.readiness_score), Ok(80));
//! ```

/// Engine configuration with environment overrides
pub mod config;

/// Readiness, load, volume, injury, and explanation rules plus the decision engine
pub mod intelligence;

/// Core data models re-exported from `liftwise-core`
pub mod models {
    pub use liftwise_core::models::*;
}

/// Error types re-exported from `liftwise-core`
pub mod errors {
    pub use liftwise_core::errors::*;
}

/// Rule constants re-exported from `liftwise-core`
pub mod constants {
    pub use liftwise_core::constants::*;
}
