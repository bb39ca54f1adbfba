// ABOUTME: Attribute specification record that parameterizes the generic range filter
// ABOUTME: Normalization direction, coefficient/unit conversion, and record extraction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use track_filters_core::models::{FilterType, MeasurementSystem, UnitTag};

/// Direction in which the coefficient is applied to a raw value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalization {
    /// `raw * coefficient` (coefficient is display units per canonical unit)
    Multiply,
    /// `raw / coefficient` (coefficient is canonical units per display unit)
    Divide,
}

impl Normalization {
    /// Convert a canonical value into display units
    #[must_use]
    pub fn apply(self, raw: f64, coefficient: f64) -> f64 {
        match self {
            Self::Multiply => raw * coefficient,
            Self::Divide => raw / coefficient,
        }
    }
}

/// Coefficient and display unit for one measurement system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    /// Factor applied according to the attribute's `Normalization`
    pub coefficient: f64,
    /// Unit of the normalized value
    pub unit: UnitTag,
}

impl Conversion {
    /// Create a conversion entry
    #[must_use]
    pub const fn new(coefficient: f64, unit: UnitTag) -> Self {
        Self { coefficient, unit }
    }
}

/// Everything attribute-specific about a range filter
///
/// `R` is the record type the filter reads. The unit table must be a total
/// function over `MeasurementSystem`.
pub struct AttributeSpec<R> {
    /// Identity used for routing and persistence
    pub filter_type: FilterType,
    /// Canonical (metric) value of the attribute, `None` when unmeasured
    pub extract: fn(&R) -> Option<f64>,
    /// Whether the coefficient multiplies or divides the raw value
    pub normalization: Normalization,
    /// Coefficient and unit per measurement system
    pub unit_table: fn(MeasurementSystem) -> Conversion,
    /// Default ceiling of the filter domain, in display units
    pub default_max: f64,
}

impl<R> AttributeSpec<R> {
    /// Conversion entry for `system`
    #[must_use]
    pub fn conversion(&self, system: MeasurementSystem) -> Conversion {
        (self.unit_table)(system)
    }
}

impl<R> Clone for AttributeSpec<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for AttributeSpec<R> {}

impl<R> fmt::Debug for AttributeSpec<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeSpec")
            .field("filter_type", &self.filter_type)
            .field("normalization", &self.normalization)
            .field("default_max", &self.default_max)
            .finish_non_exhaustive()
    }
}
