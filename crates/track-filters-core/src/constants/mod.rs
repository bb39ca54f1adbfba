// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for unit conversion and filter ceilings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Unit conversion and measurement constants
pub mod units;

/// Default upper bounds of each attribute's filter domain
pub mod ceilings;

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Length filter ceiling in display units
    pub const LENGTH_MAX: &str = "TRACK_FILTERS_LENGTH_MAX";
    /// Speed filter ceiling in display units
    pub const SPEED_MAX: &str = "TRACK_FILTERS_SPEED_MAX";
    /// Duration filter ceiling in minutes
    pub const DURATION_MAX: &str = "TRACK_FILTERS_DURATION_MAX";
    /// Altitude filter ceiling in display units
    pub const ALTITUDE_MAX: &str = "TRACK_FILTERS_ALTITUDE_MAX";
    /// Uphill/downhill filter ceiling in display units
    pub const ELEVATION_CHANGE_MAX: &str = "TRACK_FILTERS_ELEVATION_CHANGE_MAX";
    /// Measurement system assumed before the settings store answers
    pub const METRIC_SYSTEM: &str = "TRACK_FILTERS_METRIC_SYSTEM";
}
