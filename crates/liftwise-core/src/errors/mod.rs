// ABOUTME: Unified error types for the Liftwise engine with standard error codes
// ABOUTME: AppError carries an ErrorCode, a message, and structured details for adapters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

//! # Unified Error Handling
//!
//! Every fallible engine call returns `AppResult<T>`. Errors carry a stable
//! `ErrorCode` so a transport adapter can map them to a status without
//! parsing messages.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed a structural check (empty workout, duplicate ids, ...)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required field was blank or absent
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// A numeric field fell outside its documented range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Configuration (6000-6999)
    /// Engine configuration is inconsistent or unparseable
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,
}

impl ErrorCode {
    /// HTTP status a transport adapter should report for this code
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput | Self::MissingRequiredField | Self::ValueOutOfRange => 400,
            Self::ConfigInvalid => 500,
        }
    }

    /// User-facing description of this code
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ConfigInvalid => "Configuration is invalid",
        }
    }
}

/// Unified error type for the engine
#[derive(Debug, Clone, Error)]
#[error("{}: {message}", .code.description())]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Structured context (offending field, value, bounds)
    pub details: Value,
}

impl AppError {
    /// Create a new error with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Value::Null,
        }
    }

    /// Attach structured details
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// HTTP status for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Structural input problem
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Required field is blank
    #[must_use]
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("Missing required field: {field}"),
        )
        .with_details(json!({ "field": field }))
    }

    /// Numeric value outside `[min, max]`
    #[must_use]
    pub fn out_of_range(field: &str, value: f64, min: f64, max: f64) -> Self {
        Self::new(
            ErrorCode::ValueOutOfRange,
            format!("{field} must be between {min} and {max}, got {value}"),
        )
        .with_details(json!({ "field": field, "value": value, "min": min, "max": max }))
    }

    /// Configuration problem
    #[must_use]
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
