// ABOUTME: Athlete identity model consumed by the decision engine
// ABOUTME: User record with reserved training maxes and injury history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Athlete the plan belongs to
///
/// Only `id` and `name` are read by the current rules. Training maxes and
/// injury history are accepted and carried so callers can send a complete
/// profile today.
///
/// # Examples
///
/// ```rust
/// use liftwise_core::models::User;
///
/// let user = User::new("u-1", "Sam");
/// assert!(user.training_maxes.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// One-rep max per exercise id
    #[serde(default)]
    pub training_maxes: BTreeMap<String, f64>,
    /// Free-text injury notes, oldest first
    #[serde(default)]
    pub injury_history: Vec<String>,
}

impl User {
    /// Create a user with no training maxes or injury history
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            training_maxes: BTreeMap::new(),
            injury_history: Vec::new(),
        }
    }
}
