// ABOUTME: Injury substitution protocol swapping risky exercises for safe alternatives
// ABOUTME: Matches pain flags to body parts and exercise names to configured risk fragments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

//! Injury Substitution Protocol
//!
//! A heuristic safety layer over exercise name text:
//!
//! - a pain flag selects every body part whose key it contains (case-insensitive)
//! - an exercise is risky for that body part when its name contains one of the
//!   configured fragments (case-sensitive)
//! - risky slots are replaced by the body part's substitute, or by a rest
//!   placeholder when no substitute is configured
//! - a substitute's id is the original id plus a suffix, repeated until no
//!   other slot uses it, so it never picks up another exercise's history
//!
//! Flags are applied in order over the same exercise list, so when two flags
//! hit one slot the later flag's substitute is what remains. Name matching is
//! deliberately loose: "Row" also matches "Upright Row".

use super::load_autoregulator::LoadAutoregulator;
use crate::config::{InjuryProtocolConfig, RiskEntry, SubstituteLoad, SubstituteTemplate};
use liftwise_core::models::{Exercise, Workout};
use std::mem;
use tracing::debug;

/// One slot replacement performed by the protocol
#[derive(Debug, Clone, PartialEq)]
pub struct Substitution {
    /// Position of the replaced slot in the workout
    pub slot: usize,
    /// Body-part key that matched
    pub body_part: String,
    /// Pain flag as reported
    pub pain_flag: String,
    /// Exercise that was in the slot
    pub original: Exercise,
    /// Exercise now in the slot
    pub replacement: Exercise,
}

/// Injury substitution protocol bound to one configuration
pub struct InjurySubstitutionProtocol<'a> {
    config: &'a InjuryProtocolConfig,
    weight_increment: f64,
}

impl<'a> InjurySubstitutionProtocol<'a> {
    /// Create a protocol over the given tables
    ///
    /// `weight_increment` rounds loads derived from the original exercise.
    #[must_use]
    pub const fn new(config: &'a InjuryProtocolConfig, weight_increment: f64) -> Self {
        Self {
            config,
            weight_increment,
        }
    }

    /// Apply every pain flag in order to a copy of the workout
    #[must_use]
    pub fn substitute_all(
        &self,
        workout: &Workout,
        pain_flags: &[String],
    ) -> (Workout, Vec<Substitution>) {
        let mut adjusted = workout.clone();
        let substitutions = pain_flags
            .iter()
            .flat_map(|flag| self.apply_pain_flag(&mut adjusted.exercises, flag))
            .collect();
        (adjusted, substitutions)
    }

    /// Apply one pain flag to the exercise list in place
    pub fn apply_pain_flag(
        &self,
        exercises: &mut [Exercise],
        pain_flag: &str,
    ) -> Vec<Substitution> {
        let mut substitutions = Vec::new();

        for entry in self.matching_body_parts(pain_flag) {
            for slot in 0..exercises.len() {
                if !Self::is_risky(&exercises[slot].name, entry) {
                    continue;
                }
                let id = self.substitute_id(exercises, &exercises[slot].id);
                let replacement = self.build_substitute(id, &exercises[slot], entry, pain_flag);
                debug!(
                    pain_flag,
                    body_part = %entry.body_part,
                    original = %exercises[slot].name,
                    replacement = %replacement.name,
                    slot,
                    "Substituting risky exercise"
                );
                let original = mem::replace(&mut exercises[slot], replacement.clone());
                substitutions.push(Substitution {
                    slot,
                    body_part: entry.body_part.clone(),
                    pain_flag: pain_flag.to_owned(),
                    original,
                    replacement,
                });
            }
        }

        substitutions
    }

    /// Risk entries whose body-part key appears in the pain flag
    pub fn matching_body_parts(&self, pain_flag: &str) -> impl Iterator<Item = &'a RiskEntry> {
        let flag = pain_flag.to_lowercase();
        self.config
            .risk_table
            .iter()
            .filter(move |entry| flag.contains(&entry.body_part.to_lowercase()))
    }

    /// Whether an exercise name contains any risky fragment for the body part
    #[must_use]
    pub fn is_risky(exercise_name: &str, entry: &RiskEntry) -> bool {
        entry
            .risky_exercises
            .iter()
            .any(|fragment| exercise_name.contains(fragment.as_str()))
    }

    /// Derived id for a substitute, suffixed until no slot in the workout uses it
    #[must_use]
    pub fn substitute_id(&self, exercises: &[Exercise], original_id: &str) -> String {
        let suffix = &self.config.substitute_id_suffix;
        let mut id = format!("{original_id}{suffix}");
        while !suffix.is_empty() && exercises.iter().any(|exercise| exercise.id == id) {
            id.push_str(suffix);
        }
        id
    }

    /// Build the replacement for one risky exercise under the given id
    #[must_use]
    pub fn build_substitute(
        &self,
        id: String,
        original: &Exercise,
        entry: &RiskEntry,
        pain_flag: &str,
    ) -> Exercise {
        match self.config.substitutes.get(&entry.body_part) {
            Some(template) => self.from_template(id, original, template),
            None => Exercise::rest_placeholder(id, pain_flag),
        }
    }

    fn from_template(
        &self,
        id: String,
        original: &Exercise,
        template: &SubstituteTemplate,
    ) -> Exercise {
        let weight = match template.load {
            SubstituteLoad::Bodyweight => 0.0,
            SubstituteLoad::FractionOfOriginal(fraction) => LoadAutoregulator::round_to_increment(
                original.weight * fraction,
                self.weight_increment,
            ),
        };
        Exercise::new(
            id,
            template.name.clone(),
            template.category,
            weight,
            template.sets,
            template.reps,
        )
        .with_target_muscles(template.target_muscles.iter().cloned())
        .with_target_rpe(original.target_rpe)
    }
}
