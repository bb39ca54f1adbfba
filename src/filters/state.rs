// ABOUTME: Plain persisted view of a range filter
// ABOUTME: The persistence collaborator owns encoding; this struct only carries the values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use track_filters_core::errors::{TrackFilterError, TrackFilterResult};
use track_filters_core::models::FilterType;

/// The five values a host persists for each range filter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeFilterState {
    /// Lower bound of the attribute's domain
    pub min_value: f64,
    /// Upper bound of the attribute's domain
    pub max_value: f64,
    /// Selected lower bound
    pub value_from: f64,
    /// Selected upper bound
    pub value_to: f64,
    /// Whether the filter participates in filtering
    pub enabled: bool,
}

impl RangeFilterState {
    /// Check `min_value <= value_from <= value_to <= max_value`
    ///
    /// Filters never clamp on write. Owners restoring state from storage can
    /// call this before handing the state to `RangeFilter::restore`.
    ///
    /// # Errors
    ///
    /// Returns `TrackFilterError::InvalidBounds` naming the first violated ordering
    pub fn check_bounds(&self, filter: FilterType) -> TrackFilterResult<()> {
        let values = [self.min_value, self.max_value, self.value_from, self.value_to];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(TrackFilterError::invalid_bounds(
                filter,
                "bounds must be finite",
            ));
        }
        if self.value_from < self.min_value {
            return Err(TrackFilterError::invalid_bounds(
                filter,
                format!(
                    "value_from {} is below min_value {}",
                    self.value_from, self.min_value
                ),
            ));
        }
        if self.value_from > self.value_to {
            return Err(TrackFilterError::invalid_bounds(
                filter,
                format!(
                    "value_from {} exceeds value_to {}",
                    self.value_from, self.value_to
                ),
            ));
        }
        if self.value_to > self.max_value {
            return Err(TrackFilterError::invalid_bounds(
                filter,
                format!(
                    "value_to {} exceeds max_value {}",
                    self.value_to, self.max_value
                ),
            ));
        }
        Ok(())
    }
}
