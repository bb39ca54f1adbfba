// ABOUTME: Built-in attribute specifications for recorded tracks
// ABOUTME: Length, speed, duration, and elevation tables keyed by measurement system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Built-in attribute specifications
//!
//! | Attribute            | Canonical | Direction | Units                 |
//! |----------------------|-----------|-----------|-----------------------|
//! | length               | m         | divide    | mi / nmi / km         |
//! | max / average speed  | m/s       | multiply  | mph / kn / km/h       |
//! | duration, in motion  | s         | divide    | min                   |
//! | altitudes, up/down   | m         | multiply  | ft or m               |

use track_filters_core::constants::ceilings::{
    ALTITUDE_MAX_VALUE, DEFAULT_MAX_VALUE, DURATION_MAX_VALUE, ELEVATION_CHANGE_MAX_VALUE,
    LENGTH_MAX_VALUE,
};
use track_filters_core::constants::units::{
    FEET_IN_ONE_METER, METERS_IN_KILOMETER, METERS_IN_ONE_MILE, METERS_IN_ONE_NAUTICAL_MILE,
    MPS_TO_KMH, MPS_TO_KNOTS, MPS_TO_MPH, SECONDS_IN_MINUTE,
};
use track_filters_core::models::{
    DistanceBucket, FilterType, MeasurementSystem, TrackItem, UnitTag,
};

use super::spec::{AttributeSpec, Conversion, Normalization};

/// Meters per display unit of distance
#[must_use]
pub const fn length_conversion(system: MeasurementSystem) -> Conversion {
    match system.distance_bucket() {
        DistanceBucket::Mile => Conversion::new(METERS_IN_ONE_MILE, UnitTag::Mile),
        DistanceBucket::NauticalMile => {
            Conversion::new(METERS_IN_ONE_NAUTICAL_MILE, UnitTag::NauticalMile)
        }
        DistanceBucket::Kilometer => Conversion::new(METERS_IN_KILOMETER, UnitTag::Kilometer),
    }
}

/// Display speed units per meter per second
#[must_use]
pub const fn speed_conversion(system: MeasurementSystem) -> Conversion {
    match system.distance_bucket() {
        DistanceBucket::Mile => Conversion::new(MPS_TO_MPH, UnitTag::MilesPerHour),
        DistanceBucket::NauticalMile => Conversion::new(MPS_TO_KNOTS, UnitTag::Knots),
        DistanceBucket::Kilometer => Conversion::new(MPS_TO_KMH, UnitTag::KilometersPerHour),
    }
}

/// Seconds per minute, identical in every system
#[must_use]
pub const fn duration_conversion(_system: MeasurementSystem) -> Conversion {
    Conversion::new(SECONDS_IN_MINUTE, UnitTag::Minute)
}

/// Feet per meter for feet-based systems, identity otherwise
#[must_use]
pub const fn elevation_conversion(system: MeasurementSystem) -> Conversion {
    if system.uses_feet() {
        Conversion::new(FEET_IN_ONE_METER, UnitTag::Foot)
    } else {
        Conversion::new(1.0, UnitTag::Meter)
    }
}

/// Total distance
#[must_use]
pub fn length() -> AttributeSpec<TrackItem> {
    AttributeSpec {
        filter_type: FilterType::Length,
        extract: TrackItem::total_distance,
        normalization: Normalization::Divide,
        unit_table: length_conversion,
        default_max: LENGTH_MAX_VALUE,
    }
}

/// Maximum speed
#[must_use]
pub fn max_speed() -> AttributeSpec<TrackItem> {
    AttributeSpec {
        filter_type: FilterType::MaxSpeed,
        extract: TrackItem::max_speed,
        normalization: Normalization::Multiply,
        unit_table: speed_conversion,
        default_max: DEFAULT_MAX_VALUE,
    }
}

/// Average speed
#[must_use]
pub fn average_speed() -> AttributeSpec<TrackItem> {
    AttributeSpec {
        filter_type: FilterType::AverageSpeed,
        extract: TrackItem::avg_speed,
        ..max_speed()
    }
}

/// Time between first and last point
#[must_use]
pub fn duration() -> AttributeSpec<TrackItem> {
    AttributeSpec {
        filter_type: FilterType::Duration,
        extract: TrackItem::time_span,
        normalization: Normalization::Divide,
        unit_table: duration_conversion,
        default_max: DURATION_MAX_VALUE,
    }
}

/// Time spent moving
#[must_use]
pub fn time_in_motion() -> AttributeSpec<TrackItem> {
    AttributeSpec {
        filter_type: FilterType::TimeInMotion,
        extract: TrackItem::time_moving,
        ..duration()
    }
}

/// Highest elevation
#[must_use]
pub fn max_altitude() -> AttributeSpec<TrackItem> {
    AttributeSpec {
        filter_type: FilterType::MaxAltitude,
        extract: TrackItem::max_elevation,
        normalization: Normalization::Multiply,
        unit_table: elevation_conversion,
        default_max: ALTITUDE_MAX_VALUE,
    }
}

/// Mean elevation
#[must_use]
pub fn average_altitude() -> AttributeSpec<TrackItem> {
    AttributeSpec {
        filter_type: FilterType::AverageAltitude,
        extract: TrackItem::avg_elevation,
        ..max_altitude()
    }
}

/// Cumulative ascent
#[must_use]
pub fn uphill() -> AttributeSpec<TrackItem> {
    AttributeSpec {
        filter_type: FilterType::Uphill,
        extract: TrackItem::diff_elevation_up,
        normalization: Normalization::Multiply,
        unit_table: elevation_conversion,
        default_max: ELEVATION_CHANGE_MAX_VALUE,
    }
}

/// Cumulative descent
#[must_use]
pub fn downhill() -> AttributeSpec<TrackItem> {
    AttributeSpec {
        filter_type: FilterType::Downhill,
        extract: TrackItem::diff_elevation_down,
        ..uphill()
    }
}

/// Built-in specification for `filter_type`
#[must_use]
pub fn for_type(filter_type: FilterType) -> AttributeSpec<TrackItem> {
    match filter_type {
        FilterType::Length => length(),
        FilterType::MaxSpeed => max_speed(),
        FilterType::AverageSpeed => average_speed(),
        FilterType::Duration => duration(),
        FilterType::TimeInMotion => time_in_motion(),
        FilterType::MaxAltitude => max_altitude(),
        FilterType::AverageAltitude => average_altitude(),
        FilterType::Uphill => uphill(),
        FilterType::Downhill => downhill(),
    }
}
