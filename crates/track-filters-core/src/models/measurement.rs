// ABOUTME: Measurement system enumeration and its collapse into distance buckets
// ABOUTME: Parsing from settings-store names plus the provider trait for the active system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::TrackFilterError;

/// Measurement system selected by the user
///
/// The set is closed: anything the settings store hands over that is not one
/// of these names fails to parse, so code holding a `MeasurementSystem` can
/// match exhaustively without a fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeasurementSystem {
    /// Miles for distance, meters for altitude
    MilesAndMeters,
    /// Miles for distance, feet for altitude
    MilesAndFeet,
    /// Miles for distance, yards for short distances
    MilesAndYards,
    /// Nautical miles for distance, feet for altitude
    NauticalMilesAndFeet,
    /// Nautical miles for distance, meters for altitude
    NauticalMilesAndMeters,
    /// Kilometers and meters
    #[default]
    KilometersAndMeters,
}

/// Conversion bucket shared by the distance and speed filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistanceBucket {
    /// Statute mile based (mi, mph)
    Mile,
    /// Nautical mile based (nmi, knots)
    NauticalMile,
    /// Kilometer based (km, km/h)
    Kilometer,
}

impl MeasurementSystem {
    /// Every supported system, in settings order
    pub const ALL: [Self; 6] = [
        Self::MilesAndMeters,
        Self::MilesAndFeet,
        Self::MilesAndYards,
        Self::NauticalMilesAndFeet,
        Self::NauticalMilesAndMeters,
        Self::KilometersAndMeters,
    ];

    /// Collapse the system into one of the three distance buckets
    #[must_use]
    pub const fn distance_bucket(self) -> DistanceBucket {
        match self {
            Self::MilesAndMeters | Self::MilesAndFeet | Self::MilesAndYards => DistanceBucket::Mile,
            Self::NauticalMilesAndFeet | Self::NauticalMilesAndMeters => {
                DistanceBucket::NauticalMile
            }
            Self::KilometersAndMeters => DistanceBucket::Kilometer,
        }
    }

    /// Whether altitudes are shown in feet
    #[must_use]
    pub const fn uses_feet(self) -> bool {
        matches!(
            self,
            Self::MilesAndFeet | Self::MilesAndYards | Self::NauticalMilesAndFeet
        )
    }

    /// Settings-store key for this system
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MilesAndMeters => "MILES_AND_METERS",
            Self::MilesAndFeet => "MILES_AND_FEET",
            Self::MilesAndYards => "MILES_AND_YARDS",
            Self::NauticalMilesAndFeet => "NAUTICAL_MILES_AND_FEET",
            Self::NauticalMilesAndMeters => "NAUTICAL_MILES_AND_METERS",
            Self::KilometersAndMeters => "KILOMETERS_AND_METERS",
        }
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeasurementSystem {
    type Err = TrackFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|system| system.as_str() == normalized)
            .ok_or_else(|| TrackFilterError::UnknownMeasurementSystem(s.to_owned()))
    }
}

/// Read accessor for the currently active measurement system
///
/// Implemented by the settings collaborator. The accessor always yields a
/// value; the settings store owns the default.
pub trait MeasurementSystemProvider {
    /// Currently selected measurement system
    fn measurement_system(&self) -> MeasurementSystem;
}

impl MeasurementSystemProvider for MeasurementSystem {
    fn measurement_system(&self) -> MeasurementSystem {
        *self
    }
}
