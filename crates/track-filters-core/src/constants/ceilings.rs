// ABOUTME: Default ceilings for each range filter, expressed in display units
// ABOUTME: Deployments may override them through environment configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Lower bound shared by every attribute filter
pub const DEFAULT_MIN_VALUE: f64 = 0.0;

/// Length ceiling (miles, nautical miles or kilometers)
pub const LENGTH_MAX_VALUE: f64 = 300.0;

/// Generic ceiling, used for speed filters
pub const DEFAULT_MAX_VALUE: f64 = 300.0;

/// Duration and time-in-motion ceiling in minutes
pub const DURATION_MAX_VALUE: f64 = 300.0;

/// Altitude ceiling (feet or meters)
pub const ALTITUDE_MAX_VALUE: f64 = 10_000.0;

/// Uphill/downhill ceiling (feet or meters)
pub const ELEVATION_CHANGE_MAX_VALUE: f64 = 10_000.0;
