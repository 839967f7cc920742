// ABOUTME: Core types and constants for the Liftwise autoregulation engine
// ABOUTME: Foundation crate with error handling, training models, and rule constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

#![deny(unsafe_code)]

//! # Liftwise Core
//!
//! Foundation crate providing shared types and constants for the Liftwise
//! daily autoregulation engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Rule thresholds and validation bounds organized by domain
//! - **models**: Workout, exercise, feedback, performance, and decision records

/// Unified error handling system with standard error codes
pub mod errors;

/// Rule constants and validation bounds organized by domain
pub mod constants;

/// Core data models (Workout, Exercise, Feedback, DailyDecision, etc.)
pub mod models;
