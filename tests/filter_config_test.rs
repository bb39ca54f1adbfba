// ABOUTME: Tests for filter ceiling configuration and logging configuration
// ABOUTME: Validates defaults, environment overrides, validation errors, and config-built filters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use std::env;
use std::ptr;

use serial_test::serial;
use track_range_filters::config::{ConfigError, FilterCeilingsConfig};
use track_range_filters::constants::env_config;
use track_range_filters::filters::{attributes, noop_listener, RangeFilter};
use track_range_filters::logging::{LogFormat, LoggingConfig};
use track_range_filters::models::{FilterType, MeasurementSystem};

fn clear_filter_env() {
    for name in [
        env_config::LENGTH_MAX,
        env_config::SPEED_MAX,
        env_config::DURATION_MAX,
        env_config::ALTITUDE_MAX,
        env_config::ELEVATION_CHANGE_MAX,
        env_config::METRIC_SYSTEM,
    ] {
        env::remove_var(name);
    }
}

#[test]
fn test_default_config_is_valid() {
    let config = FilterCeilingsConfig::default();

    assert!(config.validate().is_ok());
    assert_eq!(config.length_max, 300.0);
    assert_eq!(config.speed_max, 300.0);
    assert_eq!(config.altitude_max, 10_000.0);
    assert_eq!(
        config.default_measurement_system,
        MeasurementSystem::KilometersAndMeters
    );
}

#[test]
fn test_ceiling_for_groups_related_attributes() {
    let config = FilterCeilingsConfig {
        speed_max: 120.0,
        elevation_change_max: 4_000.0,
        ..FilterCeilingsConfig::default()
    };

    assert_eq!(config.ceiling_for(FilterType::MaxSpeed), 120.0);
    assert_eq!(config.ceiling_for(FilterType::AverageSpeed), 120.0);
    assert_eq!(config.ceiling_for(FilterType::Uphill), 4_000.0);
    assert_eq!(config.ceiling_for(FilterType::Downhill), 4_000.0);
    assert_eq!(config.ceiling_for(FilterType::Length), 300.0);
}

#[test]
fn test_non_positive_ceiling_fails_validation() {
    let config = FilterCeilingsConfig {
        length_max: 0.0,
        ..FilterCeilingsConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange(message)) if message.starts_with("length_max")
    ));

    let config = FilterCeilingsConfig {
        duration_max: f64::NAN,
        ..FilterCeilingsConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
#[serial]
fn test_environment_overrides_are_applied() {
    clear_filter_env();
    env::set_var(env_config::LENGTH_MAX, "150");
    env::set_var(env_config::SPEED_MAX, " 80.5 ");
    env::set_var(env_config::METRIC_SYSTEM, "MILES_AND_FEET");

    let config = FilterCeilingsConfig::load().unwrap();

    assert_eq!(config.length_max, 150.0);
    assert_eq!(config.speed_max, 80.5);
    assert_eq!(config.duration_max, 300.0);
    assert_eq!(
        config.default_measurement_system,
        MeasurementSystem::MilesAndFeet
    );

    clear_filter_env();
}

#[test]
#[serial]
fn test_unparsable_override_is_a_parse_error() {
    clear_filter_env();
    env::set_var(env_config::ALTITUDE_MAX, "very high");

    let err = FilterCeilingsConfig::load().unwrap_err();
    assert!(matches!(err, ConfigError::Parse(ref message) if message.contains("ALTITUDE")));

    clear_filter_env();
}

#[test]
#[serial]
fn test_unknown_system_override_is_a_parse_error() {
    clear_filter_env();
    env::set_var(env_config::METRIC_SYSTEM, "LEAGUES");

    assert!(matches!(
        FilterCeilingsConfig::load(),
        Err(ConfigError::Parse(_))
    ));

    clear_filter_env();
}

#[test]
#[serial]
fn test_negative_override_fails_validation() {
    clear_filter_env();
    env::set_var(env_config::SPEED_MAX, "-5");

    assert!(matches!(
        FilterCeilingsConfig::load(),
        Err(ConfigError::InvalidRange(_))
    ));

    clear_filter_env();
}

#[cfg(unix)]
#[test]
#[serial]
fn test_non_unicode_override_is_an_env_var_error() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    clear_filter_env();
    env::set_var(env_config::LENGTH_MAX, OsStr::from_bytes(b"15\xff0"));

    assert!(matches!(
        FilterCeilingsConfig::load(),
        Err(ConfigError::EnvVar(env::VarError::NotUnicode(_)))
    ));

    clear_filter_env();
}

#[test]
#[serial]
fn test_global_config_is_cached_and_valid() {
    clear_filter_env();

    let first = FilterCeilingsConfig::global();
    let second = FilterCeilingsConfig::global();

    assert!(ptr::eq(first, second));
    assert!(first.validate().is_ok());
    assert_eq!(first.ceiling_for(FilterType::Length), first.length_max);
}

#[test]
fn test_filter_from_config_uses_ceiling_and_default_system() {
    common::init_test_logging();
    let config = FilterCeilingsConfig {
        speed_max: 60.0,
        default_measurement_system: MeasurementSystem::NauticalMilesAndMeters,
        ..FilterCeilingsConfig::default()
    };

    let filter = RangeFilter::from_config(attributes::max_speed(), &config, noop_listener());

    assert_eq!(filter.max_value(), 60.0);
    assert_eq!(filter.value_to(), 60.0);
    assert_eq!(filter.coefficient(), 1.943_84);
    assert!(!filter.is_enabled());
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("LOG_INCLUDE_LOCATION", "1");
    env::remove_var("LOG_INCLUDE_THREAD");

    let config = LoggingConfig::from_env();

    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(!config.include_thread);

    env::remove_var("LOG_FORMAT");
    env::remove_var("LOG_INCLUDE_LOCATION");
}

#[test]
fn test_logging_env_filter_targets_crate() {
    let config = LoggingConfig {
        level: "debug".into(),
        ..LoggingConfig::default()
    };

    let directives = config.env_filter().to_string();
    assert!(directives.contains("track_range_filters=debug"));
}
