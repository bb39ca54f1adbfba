// ABOUTME: Unit conversion constants for distance, speed, altitude, and time
// ABOUTME: Provides named constants to eliminate magic numbers in filter coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Meters per statute mile
pub const METERS_IN_ONE_MILE: f64 = 1609.344;

/// Meters per nautical mile
pub const METERS_IN_ONE_NAUTICAL_MILE: f64 = 1852.0;

/// Meters per kilometer
pub const METERS_IN_KILOMETER: f64 = 1000.0;

/// Feet per meter
pub const FEET_IN_ONE_METER: f64 = 3.280_84;

/// Seconds per minute
pub const SECONDS_IN_MINUTE: f64 = 60.0;

/// Miles per hour in one meter per second
pub const MPS_TO_MPH: f64 = 2.237;

/// Knots in one meter per second
pub const MPS_TO_KNOTS: f64 = 1.943_84;

/// Kilometers per hour in one meter per second
pub const MPS_TO_KMH: f64 = 3.6;
