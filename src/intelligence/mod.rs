// ABOUTME: Autoregulation intelligence: readiness, load, volume, injury, and explanation rules
// ABOUTME: Re-exports the decision engine and the individual rule components
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

//! Autoregulation rule engine
//!
//! Leaf components are pure functions over small records; the decision
//! engine composes them with fixed precedence.

/// Daily decision orchestrator
pub mod decision_engine;
/// Rationale text for adjustments
pub mod explanation;
/// Pain-flag driven exercise substitution
pub mod injury_protocol;
/// RPE-driven load changes
pub mod load_autoregulator;
/// Feedback to readiness score
pub mod readiness_calculator;
/// Input validation
pub mod validation;
/// Readiness-driven set count changes
pub mod volume_autoregulator;

pub use decision_engine::AutoregulationEngine;
pub use explanation::{ExplanationContext, ExplanationGenerator};
pub use injury_protocol::{InjurySubstitutionProtocol, Substitution};
pub use load_autoregulator::{LoadAdjustment, LoadAutoregulator, LoadReason};
pub use readiness_calculator::ReadinessCalculator;
pub use volume_autoregulator::{VolumeAdjustment, VolumeAutoregulator};
