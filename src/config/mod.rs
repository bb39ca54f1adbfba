// ABOUTME: Deployment configuration for range filter ceilings and the default measurement system
// ABOUTME: Defaults from constants, environment overrides, validation, and a cached global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Filter Configuration
//!
//! Ceilings are expressed in display units (a length ceiling of 300 means
//! 300 mi, nmi or km depending on the active system). Each ceiling can be
//! overridden with an environment variable:
//!
//! - `TRACK_FILTERS_LENGTH_MAX`
//! - `TRACK_FILTERS_SPEED_MAX`
//! - `TRACK_FILTERS_DURATION_MAX`
//! - `TRACK_FILTERS_ALTITUDE_MAX`
//! - `TRACK_FILTERS_ELEVATION_CHANGE_MAX`
//! - `TRACK_FILTERS_METRIC_SYSTEM` (e.g. `MILES_AND_FEET`)

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use std::env::{self, VarError};
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use track_filters_core::constants::ceilings::{
    ALTITUDE_MAX_VALUE, DEFAULT_MAX_VALUE, DURATION_MAX_VALUE, ELEVATION_CHANGE_MAX_VALUE,
    LENGTH_MAX_VALUE,
};
use track_filters_core::constants::env_config;
use track_filters_core::models::{FilterType, MeasurementSystem};

/// Global configuration singleton
static FILTER_CEILINGS_CONFIG: OnceLock<FilterCeilingsConfig> = OnceLock::new();

/// Upper bounds of each filter's domain plus the startup measurement system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCeilingsConfig {
    /// Length ceiling in display distance units
    pub length_max: f64,
    /// Max/average speed ceiling in display speed units
    pub speed_max: f64,
    /// Duration and time-in-motion ceiling in minutes
    pub duration_max: f64,
    /// Max/average altitude ceiling in feet or meters
    pub altitude_max: f64,
    /// Uphill/downhill ceiling in feet or meters
    pub elevation_change_max: f64,
    /// System filters are initialised with before the settings store answers
    pub default_measurement_system: MeasurementSystem,
}

impl Default for FilterCeilingsConfig {
    fn default() -> Self {
        Self {
            length_max: LENGTH_MAX_VALUE,
            speed_max: DEFAULT_MAX_VALUE,
            duration_max: DURATION_MAX_VALUE,
            altitude_max: ALTITUDE_MAX_VALUE,
            elevation_change_max: ELEVATION_CHANGE_MAX_VALUE,
            default_measurement_system: MeasurementSystem::default(),
        }
    }
}

impl FilterCeilingsConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        FILTER_CEILINGS_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load filter ceilings config: {e}, using defaults");
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
        info!(
            length_max = config.length_max,
            speed_max = config.speed_max,
            system = %config.default_measurement_system,
            "Filter ceilings loaded"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` if any ceiling is not a positive finite number
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ceilings = [
            (self.length_max, "length_max must be a positive finite number"),
            (self.speed_max, "speed_max must be a positive finite number"),
            (self.duration_max, "duration_max must be a positive finite number"),
            (self.altitude_max, "altitude_max must be a positive finite number"),
            (
                self.elevation_change_max,
                "elevation_change_max must be a positive finite number",
            ),
        ];
        for (value, message) in ceilings {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidRange(message));
            }
        }
        Ok(())
    }

    /// Configured ceiling for `filter_type`
    #[must_use]
    pub const fn ceiling_for(&self, filter_type: FilterType) -> f64 {
        match filter_type {
            FilterType::Length => self.length_max,
            FilterType::MaxSpeed | FilterType::AverageSpeed => self.speed_max,
            FilterType::Duration | FilterType::TimeInMotion => self.duration_max,
            FilterType::MaxAltitude | FilterType::AverageAltitude => self.altitude_max,
            FilterType::Uphill | FilterType::Downhill => self.elevation_change_max,
        }
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
                Ok(())
            }
            Err(VarError::NotPresent) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(env_config::LENGTH_MAX, &mut self.length_max)?;
        Self::apply_env_var(env_config::SPEED_MAX, &mut self.speed_max)?;
        Self::apply_env_var(env_config::DURATION_MAX, &mut self.duration_max)?;
        Self::apply_env_var(env_config::ALTITUDE_MAX, &mut self.altitude_max)?;
        Self::apply_env_var(
            env_config::ELEVATION_CHANGE_MAX,
            &mut self.elevation_change_max,
        )?;
        Self::apply_env_var(
            env_config::METRIC_SYSTEM,
            &mut self.default_measurement_system,
        )?;
        Ok(self)
    }
}
