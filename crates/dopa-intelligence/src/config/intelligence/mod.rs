// ABOUTME: Statistics engine configuration with lookup tables and recovery model parameters
// ABOUTME: Loads defaults, applies DOPA_* environment overrides, and validates the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

//! Intelligence Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `lookup` - calorie and drinks-per-week tables
//! - `recovery` - recovery curve parameters and the fat-energy constant
//!
//! Defaults reproduce the published model exactly. Environment variables can
//! tune the model parameters; lookup tables are extended in code.

pub mod error;
pub mod lookup;
pub mod recovery;

pub use error::ConfigError;
pub use lookup::{normalize_label, LookupTables};
pub use recovery::{CardioModelConfig, ProjectionConfig, RecoveryModelConfig, SleepModelConfig};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main statistics engine configuration container
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Label lookup tables
    pub lookup: LookupTables,
    /// Recovery curve parameters
    pub recovery: RecoveryModelConfig,
    /// Cumulative projection parameters
    pub projection: ProjectionConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error naming the first parameter that would make a curve
    /// undefined or a projection negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::validate_table("calories_per_drink", &self.lookup.calories_per_drink)?;
        Self::validate_table("drinks_per_week", &self.lookup.drinks_per_week)?;

        if self.projection.kcal_per_kg_fat <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "kcal_per_kg_fat must be positive",
            ));
        }

        let cardio = &self.recovery.cardio;
        if cardio.ramp_days <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("cardio ramp_days must be positive"));
        }
        if cardio.max_reduction_bpm <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "cardio max_reduction_bpm must be positive",
            ));
        }
        if cardio.fallback_rate_per_day < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "cardio fallback_rate_per_day must be non-negative",
            ));
        }

        let sleep = &self.recovery.sleep;
        if sleep.fast_rate_per_day < 0.0 || sleep.slow_rate_per_day < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "sleep phase rates must be non-negative",
            ));
        }
        if sleep.phase_cap <= 0.0 || sleep.phase_cap > 50.0 {
            return Err(ConfigError::InvalidRange(
                "sleep phase_cap must be in (0, 50] so two phases stay within 100",
            ));
        }
        if sleep.slow_phase_start_day < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "sleep slow_phase_start_day must be non-negative",
            ));
        }
        if sleep.scale_max <= 1.0 {
            return Err(ConfigError::InvalidRange("sleep scale_max must be > 1"));
        }

        if self.recovery.liver_rate_per_day < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "liver_rate_per_day must be non-negative",
            ));
        }
        if self.recovery.weight_normalization_per_kg < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "weight_normalization_per_kg must be non-negative",
            ));
        }

        Ok(())
    }

    fn validate_table(
        table: &'static str,
        entries: &HashMap<String, f64>,
    ) -> Result<(), ConfigError> {
        match entries
            .iter()
            .find(|(_, value)| !value.is_finite() || **value < 0.0)
        {
            Some((key, value)) => Err(ConfigError::InvalidLookupEntry {
                table,
                key: key.clone(),
                value: *value,
            }),
            None => Ok(()),
        }
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
        Self::apply_env_var(
            "DOPA_KCAL_PER_KG_FAT",
            &mut self.projection.kcal_per_kg_fat,
        )?;

        let cardio = &mut self.recovery.cardio;
        Self::apply_env_var(
            "DOPA_CARDIO_FALLBACK_RATE_PER_DAY",
            &mut cardio.fallback_rate_per_day,
        )?;
        Self::apply_env_var("DOPA_CARDIO_MAX_REDUCTION_BPM", &mut cardio.max_reduction_bpm)?;
        Self::apply_env_var("DOPA_CARDIO_RAMP_DAYS", &mut cardio.ramp_days)?;

        let sleep = &mut self.recovery.sleep;
        Self::apply_env_var("DOPA_SLEEP_FAST_RATE_PER_DAY", &mut sleep.fast_rate_per_day)?;
        Self::apply_env_var("DOPA_SLEEP_PHASE_CAP", &mut sleep.phase_cap)?;
        Self::apply_env_var(
            "DOPA_SLEEP_SLOW_PHASE_START_DAY",
            &mut sleep.slow_phase_start_day,
        )?;
        Self::apply_env_var("DOPA_SLEEP_SLOW_RATE_PER_DAY", &mut sleep.slow_rate_per_day)?;

        Self::apply_env_var(
            "DOPA_LIVER_RATE_PER_DAY",
            &mut self.recovery.liver_rate_per_day,
        )?;
        Self::apply_env_var(
            "DOPA_WEIGHT_NORMALIZATION_PER_KG",
            &mut self.recovery.weight_normalization_per_kg,
        )?;

        Ok(self)
    }
}
