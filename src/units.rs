// ABOUTME: Resolution of abstract unit tags into user-facing labels
// ABOUTME: The UI layer supplies its own resolver; DefaultUnitLabels covers English abbreviations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use track_filters_core::models::UnitTag;

/// Maps a unit tag to the string shown next to a range slider
pub trait UnitLabelResolver {
    /// Label for `tag`
    fn resolve(&self, tag: UnitTag) -> String;
}

/// English unit abbreviations
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultUnitLabels;

impl UnitLabelResolver for DefaultUnitLabels {
    fn resolve(&self, tag: UnitTag) -> String {
        let label = match tag {
            UnitTag::Mile => "mi",
            UnitTag::NauticalMile => "nmi",
            UnitTag::Kilometer => "km",
            UnitTag::MilesPerHour => "mph",
            UnitTag::Knots => "kn",
            UnitTag::KilometersPerHour => "km/h",
            UnitTag::Foot => "ft",
            UnitTag::Meter => "m",
            UnitTag::Minute => "min",
        };
        label.to_owned()
    }
}
