// ABOUTME: Engine configuration with defaults, environment overrides, and validation
// ABOUTME: Groups readiness, load, volume, and injury settings held by each engine instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

//! Configuration module for the Liftwise engine
//!
//! Every threshold the decision rules use lives in an `EngineConfig` owned
//! by the engine instance, so differently tuned engines can coexist in one
//! process.
//!
//! - **Readiness**: baseline and feedback adjustments
//! - **Load**: RPE margins, multipliers, rounding increment
//! - **Volume**: readiness bands and the progression gate
//! - **Injury**: risk and substitute tables

/// Configuration error types
pub mod error;
/// Injury substitution tables
pub mod injury;
/// Load autoregulation settings
pub mod load;
/// Readiness scoring settings
pub mod readiness;
/// Volume autoregulation settings
pub mod volume;

pub use error::ConfigError;
pub use injury::{InjuryProtocolConfig, RiskEntry, SubstituteLoad, SubstituteTemplate};
pub use load::LoadConfig;
pub use readiness::ReadinessConfig;
pub use volume::VolumeConfig;

use liftwise_core::constants::{readiness as readiness_bounds, validation};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::warn;

/// Main engine configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Readiness scoring
    pub readiness: ReadinessConfig,
    /// Load autoregulation
    pub load: LoadConfig,
    /// Volume autoregulation
    pub volume: VolumeConfig,
    /// Injury substitution tables
    pub injury: InjuryProtocolConfig,
}

impl EngineConfig {
    /// Load configuration from defaults plus `LIFTWISE_*` environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when overrides are unusable
    #[must_use]
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!("Failed to load engine config: {e}, using defaults");
            Self::default()
        })
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if thresholds are out of order or values are out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let readiness = &self.readiness;
        if !(readiness_bounds::MIN_SCORE..=readiness_bounds::MAX_SCORE)
            .contains(&readiness.baseline_score)
        {
            return Err(ConfigError::ValueOutOfRange(
                "baseline readiness must be between 0 and 100",
            ));
        }
        if readiness.poor_sleep_max >= readiness.fair_sleep_max
            || readiness.fair_sleep_max >= readiness.good_sleep_min
        {
            return Err(ConfigError::InvalidRange(
                "sleep buckets must satisfy poor_max < fair_max < good_min",
            ));
        }
        let adjustments = [
            readiness.poor_sleep_penalty,
            readiness.fair_sleep_penalty,
            readiness.good_sleep_bonus,
            readiness.high_soreness_penalty,
            readiness.extreme_soreness_penalty,
            readiness.high_stress_penalty,
        ];
        let score_range = readiness_bounds::MIN_SCORE..=readiness_bounds::MAX_SCORE;
        if adjustments.iter().any(|value| !score_range.contains(value)) {
            return Err(ConfigError::ValueOutOfRange(
                "readiness penalties and bonuses must be between 0 and 100",
            ));
        }
        if readiness.high_soreness_min > readiness.extreme_soreness {
            return Err(ConfigError::InvalidRange(
                "high_soreness_min must be <= extreme_soreness",
            ));
        }

        let volume = &self.volume;
        if volume.deload_threshold > volume.reduction_threshold {
            return Err(ConfigError::InvalidRange(
                "deload_threshold must be <= reduction_threshold",
            ));
        }
        if volume.progression_min_readiness < volume.deload_threshold {
            return Err(ConfigError::InvalidRange(
                "progression_min_readiness must be >= deload_threshold",
            ));
        }
        if volume.reduction_threshold > 100 || volume.progression_min_readiness > 100 {
            return Err(ConfigError::ValueOutOfRange(
                "readiness thresholds must be between 0 and 100",
            ));
        }
        if !(volume.deload_set_factor > 0.0 && volume.deload_set_factor <= 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "deload_set_factor must be in (0, 1]",
            ));
        }

        let load = &self.load;
        if !(load.increase_multiplier.is_finite() && load.increase_multiplier > 0.0)
            || !(load.decrease_multiplier.is_finite() && load.decrease_multiplier > 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "load multipliers must be positive",
            ));
        }
        if !(load.weight_increment.is_finite() && load.weight_increment > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "weight_increment must be positive",
            ));
        }
        if !(validation::MIN_RPE..=validation::MAX_RPE).contains(&load.rpe_ceiling) {
            return Err(ConfigError::ValueOutOfRange(
                "rpe_ceiling must be between 1 and 10",
            ));
        }
        if !load.progression_rpe_margin.is_finite() || load.progression_rpe_margin < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "progression_rpe_margin must not be negative",
            ));
        }

        self.injury.validate()
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Readiness overrides
        Self::apply_env_var(
            "LIFTWISE_READINESS_BASELINE",
            &mut self.readiness.baseline_score,
        )?;
        Self::apply_env_var(
            "LIFTWISE_HIGH_STRESS_PENALTY",
            &mut self.readiness.high_stress_penalty,
        )?;

        // Volume overrides
        Self::apply_env_var(
            "LIFTWISE_DELOAD_THRESHOLD",
            &mut self.volume.deload_threshold,
        )?;
        Self::apply_env_var(
            "LIFTWISE_VOLUME_REDUCTION_THRESHOLD",
            &mut self.volume.reduction_threshold,
        )?;
        Self::apply_env_var(
            "LIFTWISE_PROGRESSION_MIN_READINESS",
            &mut self.volume.progression_min_readiness,
        )?;

        // Load overrides
        Self::apply_env_var(
            "LIFTWISE_LOAD_INCREASE_MULTIPLIER",
            &mut self.load.increase_multiplier,
        )?;
        Self::apply_env_var(
            "LIFTWISE_LOAD_DECREASE_MULTIPLIER",
            &mut self.load.decrease_multiplier,
        )?;
        Self::apply_env_var("LIFTWISE_RPE_CEILING", &mut self.load.rpe_ceiling)?;
        Self::apply_env_var("LIFTWISE_WEIGHT_INCREMENT", &mut self.load.weight_increment)?;

        Ok(self)
    }
}
