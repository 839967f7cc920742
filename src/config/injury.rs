// ABOUTME: Injury substitution tables mapping body parts to risky movements and safe swaps
// ABOUTME: Risk table and substitute templates are data so new body parts need no code changes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

//! Injury Protocol Configuration
//!
//! Two tables drive the substitution protocol:
//!
//! - the **risk table**: body-part key to exercise-name fragments that load it
//! - the **substitute table**: body-part key to the replacement template
//!
//! A body part listed in the risk table without a substitute template gets a
//! zero-volume rest placeholder.

use super::ConfigError;
use liftwise_core::constants::injury::{BACK_SUBSTITUTE_LOAD_FACTOR, SUBSTITUTE_ID_SUFFIX};
use liftwise_core::models::ExerciseCategory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Exercises that load one body part
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskEntry {
    /// Key matched (case-insensitively) as a substring of the pain flag
    pub body_part: String,
    /// Fragments matched as substrings of the exercise name
    pub risky_exercises: Vec<String>,
}

impl RiskEntry {
    fn new(body_part: &str, risky_exercises: &[&str]) -> Self {
        Self {
            body_part: body_part.to_owned(),
            risky_exercises: risky_exercises.iter().map(|&name| name.to_owned()).collect(),
        }
    }
}

/// How a substitute's working weight is derived
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "value")]
pub enum SubstituteLoad {
    /// No external load
    Bodyweight,
    /// Fraction of the replaced exercise's weight, rounded to the plate increment
    FractionOfOriginal(f64),
}

/// Replacement exercise for a body part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstituteTemplate {
    /// Display name
    pub name: String,
    /// Movement classification
    pub category: ExerciseCategory,
    /// Muscle groups trained
    pub target_muscles: Vec<String>,
    /// Weight derivation
    pub load: SubstituteLoad,
    /// Working sets
    pub sets: u32,
    /// Reps per set
    pub reps: u32,
}

/// Injury Protocol Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjuryProtocolConfig {
    /// Body parts in evaluation order
    pub risk_table: Vec<RiskEntry>,
    /// Replacement per body part
    pub substitutes: BTreeMap<String, SubstituteTemplate>,
    /// Suffix appended to the replaced exercise id
    pub substitute_id_suffix: String,
}

impl InjuryProtocolConfig {
    /// Add or replace the risk entry for a body part
    #[must_use]
    pub fn with_risk_entry(mut self, body_part: &str, risky_exercises: &[&str]) -> Self {
        self.risk_table.retain(|entry| entry.body_part != body_part);
        self.risk_table.push(RiskEntry::new(body_part, risky_exercises));
        self
    }

    /// Add or replace the substitute for a body part
    #[must_use]
    pub fn with_substitute(mut self, body_part: &str, template: SubstituteTemplate) -> Self {
        self.substitutes.insert(body_part.to_owned(), template);
        self
    }

    /// Check table consistency
    ///
    /// # Errors
    ///
    /// Returns an error if a key is blank, a template prescribes zero volume,
    /// or a load fraction is not positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.substitute_id_suffix.is_empty() {
            return Err(ConfigError::ValueOutOfRange(
                "substitute_id_suffix must not be empty",
            ));
        }
        if self
            .risk_table
            .iter()
            .any(|entry| entry.body_part.trim().is_empty())
        {
            return Err(ConfigError::ValueOutOfRange(
                "risk table body parts must not be blank",
            ));
        }
        for template in self.substitutes.values() {
            if template.sets == 0 || template.reps == 0 {
                return Err(ConfigError::ValueOutOfRange(
                    "substitute templates must prescribe at least one set and rep",
                ));
            }
            if let SubstituteLoad::FractionOfOriginal(fraction) = template.load {
                if !(fraction.is_finite() && fraction > 0.0) {
                    return Err(ConfigError::ValueOutOfRange(
                        "substitute load fraction must be positive",
                    ));
                }
            }
        }
        Ok(())
    }
}

impl Default for InjuryProtocolConfig {
    fn default() -> Self {
        let risk_table = vec![
            RiskEntry::new("knee", &["Squat", "Lunge", "Leg Press"]),
            RiskEntry::new("shoulder", &["Bench Press", "Overhead Press", "Dip"]),
            RiskEntry::new("back", &["Deadlift", "Row", "Good Morning"]),
        ];

        let mut substitutes = BTreeMap::new();
        substitutes.insert(
            "knee".to_owned(),
            SubstituteTemplate {
                name: "Glute Bridge".into(),
                category: ExerciseCategory::Isolation,
                target_muscles: vec!["glutes".into(), "hamstrings".into()],
                load: SubstituteLoad::Bodyweight,
                sets: 3,
                reps: 15,
            },
        );
        substitutes.insert(
            "shoulder".to_owned(),
            SubstituteTemplate {
                name: "Neutral-Grip Push-Up".into(),
                category: ExerciseCategory::Compound,
                target_muscles: vec!["chest".into(), "triceps".into()],
                load: SubstituteLoad::Bodyweight,
                sets: 3,
                reps: 12,
            },
        );
        substitutes.insert(
            "back".to_owned(),
            SubstituteTemplate {
                name: "Chest-Supported Row".into(),
                category: ExerciseCategory::Compound,
                target_muscles: vec!["lats".into(), "upper back".into()],
                load: SubstituteLoad::FractionOfOriginal(BACK_SUBSTITUTE_LOAD_FACTOR),
                sets: 3,
                reps: 10,
            },
        );

        Self {
            risk_table,
            substitutes,
            substitute_id_suffix: SUBSTITUTE_ID_SUFFIX.to_owned(),
        }
    }
}
