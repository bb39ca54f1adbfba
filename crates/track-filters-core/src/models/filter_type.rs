// ABOUTME: Attribute identity of a range filter
// ABOUTME: Used by the hosting system to route UI and persistence to the right filter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::TrackFilterError;

/// Track attribute a range filter operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterType {
    /// Total distance of the track
    Length,
    /// Maximum recorded speed
    MaxSpeed,
    /// Average speed over the track
    AverageSpeed,
    /// Wall-clock span between first and last point
    Duration,
    /// Time spent moving
    TimeInMotion,
    /// Highest recorded elevation
    MaxAltitude,
    /// Mean elevation
    AverageAltitude,
    /// Cumulative ascent
    Uphill,
    /// Cumulative descent
    Downhill,
}

impl FilterType {
    /// Every range filter type, in display order
    pub const ALL: [Self; 9] = [
        Self::Length,
        Self::MaxSpeed,
        Self::AverageSpeed,
        Self::Duration,
        Self::TimeInMotion,
        Self::MaxAltitude,
        Self::AverageAltitude,
        Self::Uphill,
        Self::Downhill,
    ];

    /// Key under which the filter's state is persisted
    #[must_use]
    pub const fn property_name(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::MaxSpeed => "max_speed",
            Self::AverageSpeed => "average_speed",
            Self::Duration => "duration",
            Self::TimeInMotion => "time_in_motion",
            Self::MaxAltitude => "max_altitude",
            Self::AverageAltitude => "average_altitude",
            Self::Uphill => "uphill",
            Self::Downhill => "downhill",
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.property_name())
    }
}

impl FromStr for FilterType {
    type Err = TrackFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|filter_type| filter_type.property_name() == s)
            .ok_or_else(|| TrackFilterError::UnknownFilterType(s.to_owned()))
    }
}
