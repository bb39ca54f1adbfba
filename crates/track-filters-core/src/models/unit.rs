// ABOUTME: Abstract display unit tags selected by attribute filters
// ABOUTME: The UI layer resolves each tag into a localized label
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

/// Display unit of a filter's normalized values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitTag {
    /// Statute mile
    Mile,
    /// Nautical mile
    NauticalMile,
    /// Kilometer
    Kilometer,
    /// Miles per hour
    MilesPerHour,
    /// Knots (nautical miles per hour)
    Knots,
    /// Kilometers per hour
    KilometersPerHour,
    /// Foot
    Foot,
    /// Meter
    Meter,
    /// Minute
    Minute,
}

impl UnitTag {
    /// Stable string-resource key for the label resolver
    #[must_use]
    pub const fn resource_key(self) -> &'static str {
        match self {
            Self::Mile => "mile",
            Self::NauticalMile => "nm",
            Self::Kilometer => "km",
            Self::MilesPerHour => "mile_per_hour",
            Self::Knots => "nm_h",
            Self::KilometersPerHour => "km_h",
            Self::Foot => "foot",
            Self::Meter => "m",
            Self::Minute => "shared_string_minute_lowercase",
        }
    }
}

impl fmt::Display for UnitTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resource_key())
    }
}
