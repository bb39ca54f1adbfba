// ABOUTME: Generic unit-aware range filter shared by every numeric track attribute
// ABOUTME: Holds range state, converts canonical values, and implements the acceptance predicate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Range Filter
//!
//! State and predicate shared by all numeric attribute filters.
//!
//! ## Acceptance
//!
//! A disabled filter accepts everything. An enabled filter rejects records
//! whose attribute is absent or exactly zero, normalizes the raw value with
//! the current coefficient, and accepts when any of the following holds:
//!
//! - `value_from < value < value_to` (strict on both ends)
//! - `value < min_value` while `value_from == min_value`
//! - `value > max_value` while `value_to == max_value`
//!
//! The last two clauses let outliers through as long as the user has not
//! moved the corresponding slider away from the domain edge.
//!
//! ## Preconditions
//!
//! The owner keeps `min_value <= value_from <= value_to <= max_value`. Writes
//! are never clamped; debug builds assert `value_from <= value_to` when
//! evaluating.
//!
//! ## Concurrency
//!
//! `is_track_accepted` only reads. Mutating calls take `&mut self`, so the
//! borrow checker serializes them against concurrent evaluation.

use std::fmt;
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, trace};
use track_filters_core::constants::ceilings::DEFAULT_MIN_VALUE;
use track_filters_core::models::{
    FilterType, MeasurementSystem, MeasurementSystemProvider, TrackItem, UnitTag,
};

use super::attributes;
use super::listener::FilterChangeListener;
use super::spec::AttributeSpec;
use super::state::RangeFilterState;
use crate::config::FilterCeilingsConfig;
use crate::units::UnitLabelResolver;

/// Range filter over one numeric attribute of records of type `R`
pub struct RangeFilter<R = TrackItem> {
    spec: AttributeSpec<R>,
    listener: Arc<dyn FilterChangeListener>,
    min_value: f64,
    max_value: f64,
    value_from: f64,
    value_to: f64,
    enabled: bool,
    coefficient: f64,
    measurement_system: MeasurementSystem,
}

/// Bit-level comparison so that changing a bound from 0.0 to 0.0 is a no-op
fn changed(old: f64, new: f64) -> bool {
    old.to_bits() != new.to_bits()
}

impl<R> RangeFilter<R> {
    /// Disabled filter spanning `[0, spec.default_max]`
    ///
    /// The coefficient is set for the default measurement system until the
    /// owner calls `init_filter` with the user's actual selection.
    #[must_use]
    pub fn new(spec: AttributeSpec<R>, listener: Arc<dyn FilterChangeListener>) -> Self {
        Self::with_bounds(spec, DEFAULT_MIN_VALUE, spec.default_max, listener)
    }

    /// Disabled filter spanning `[min_value, max_value]`, fully open
    #[must_use]
    pub fn with_bounds(
        spec: AttributeSpec<R>,
        min_value: f64,
        max_value: f64,
        listener: Arc<dyn FilterChangeListener>,
    ) -> Self {
        let measurement_system = MeasurementSystem::default();
        Self {
            spec,
            listener,
            min_value,
            max_value,
            value_from: min_value,
            value_to: max_value,
            enabled: false,
            coefficient: spec.conversion(measurement_system).coefficient,
            measurement_system,
        }
    }

    /// Filter whose ceiling comes from deployment configuration
    ///
    /// The filter is initialised with the configured default measurement system.
    #[must_use]
    pub fn from_config(
        spec: AttributeSpec<R>,
        config: &FilterCeilingsConfig,
        listener: Arc<dyn FilterChangeListener>,
    ) -> Self {
        let mut filter = Self::with_bounds(
            spec,
            DEFAULT_MIN_VALUE,
            config.ceiling_for(spec.filter_type),
            listener,
        );
        filter.init_filter(config.default_measurement_system);
        filter
    }

    /// Attribute identity
    #[must_use]
    pub const fn filter_type(&self) -> FilterType {
        self.spec.filter_type
    }

    /// Attribute specification this filter was built with
    #[must_use]
    pub const fn spec(&self) -> &AttributeSpec<R> {
        &self.spec
    }

    /// Recompute the coefficient for `system`
    ///
    /// Must be called once after construction and again after every
    /// measurement-system change, before evaluating records. Range values are
    /// left untouched: they are interpreted in the new unit from now on.
    pub fn init_filter(&mut self, system: MeasurementSystem) {
        let conversion = self.spec.conversion(system);
        self.coefficient = conversion.coefficient;
        self.measurement_system = system;
        debug!(
            filter = %self.spec.filter_type,
            system = %system,
            coefficient = conversion.coefficient,
            unit = %conversion.unit,
            "Range filter initialised"
        );
    }

    /// `init_filter` with the system read from a settings provider
    pub fn init_from<P>(&mut self, provider: &P)
    where
        P: MeasurementSystemProvider + ?Sized,
    {
        self.init_filter(provider.measurement_system());
    }

    /// Current canonical-to-display factor
    #[must_use]
    pub const fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// System the filter was last initialised with
    #[must_use]
    pub const fn measurement_system(&self) -> MeasurementSystem {
        self.measurement_system
    }

    /// Display unit, recomputed from the current measurement system on each call
    #[must_use]
    pub fn unit(&self) -> UnitTag {
        self.spec.conversion(self.measurement_system).unit
    }

    /// Display label of `unit()`
    #[must_use]
    pub fn unit_label<L>(&self, resolver: &L) -> String
    where
        L: UnitLabelResolver + ?Sized,
    {
        resolver.resolve(self.unit())
    }

    /// Whether the filter participates in filtering
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the filter
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            trace!(filter = %self.spec.filter_type, enabled, "Range filter toggled");
            self.notify();
        }
    }

    /// Lower bound of the domain
    #[must_use]
    pub const fn min_value(&self) -> f64 {
        self.min_value
    }

    /// Upper bound of the domain
    #[must_use]
    pub const fn max_value(&self) -> f64 {
        self.max_value
    }

    /// Selected lower bound
    #[must_use]
    pub const fn value_from(&self) -> f64 {
        self.value_from
    }

    /// Selected upper bound
    #[must_use]
    pub const fn value_to(&self) -> f64 {
        self.value_to
    }

    /// Set the selected lower bound (not clamped)
    pub fn set_value_from(&mut self, value: f64) {
        if changed(self.value_from, value) {
            self.value_from = value;
            trace!(filter = %self.spec.filter_type, value_from = value, "Range lower bound changed");
            self.notify();
        }
    }

    /// Set the selected upper bound (not clamped)
    pub fn set_value_to(&mut self, value: f64) {
        if changed(self.value_to, value) {
            self.value_to = value;
            trace!(filter = %self.spec.filter_type, value_to = value, "Range upper bound changed");
            self.notify();
        }
    }

    /// Re-open the selection to the full domain
    pub fn reset_values(&mut self) {
        if changed(self.value_from, self.min_value) || changed(self.value_to, self.max_value) {
            self.value_from = self.min_value;
            self.value_to = self.max_value;
            trace!(filter = %self.spec.filter_type, "Range selection reset");
            self.notify();
        }
    }

    /// Move the domain ceiling
    ///
    /// An untouched `value_to` (sitting on the old ceiling) follows the new
    /// one. A narrowed `value_to` above the new ceiling is clamped to just
    /// below it, so it stays narrowed and outliers above the ceiling remain
    /// excluded. `value_from` is pulled down if it would exceed `value_to`.
    #[allow(clippy::float_cmp)] // Exact equality marks an untouched slider
    pub fn update_max_value(&mut self, max_value: f64) {
        if !changed(self.max_value, max_value) {
            return;
        }
        let upper_untouched = self.value_to == self.max_value;
        self.max_value = max_value;
        if upper_untouched {
            self.value_to = max_value;
        } else if self.value_to >= max_value {
            self.value_to = max_value.next_down();
        }
        if self.value_from > self.value_to {
            self.value_from = self.value_to;
        }
        trace!(filter = %self.spec.filter_type, max_value, "Range ceiling updated");
        self.notify();
    }

    /// Whether the user moved either slider away from the domain edge
    #[must_use]
    pub fn is_narrowed(&self) -> bool {
        self.value_from > self.min_value || self.value_to < self.max_value
    }

    /// Persistable view of the range
    #[must_use]
    pub const fn state(&self) -> RangeFilterState {
        RangeFilterState {
            min_value: self.min_value,
            max_value: self.max_value,
            value_from: self.value_from,
            value_to: self.value_to,
            enabled: self.enabled,
        }
    }

    /// Replace the range with a persisted one (not validated, not clamped)
    pub fn restore(&mut self, state: RangeFilterState) {
        if self.state() == state {
            return;
        }
        self.min_value = state.min_value;
        self.max_value = state.max_value;
        self.value_from = state.value_from;
        self.value_to = state.value_to;
        self.enabled = state.enabled;
        trace!(filter = %self.spec.filter_type, ?state, "Range filter restored");
        self.notify();
    }

    /// Convert a canonical value into the current display unit
    #[must_use]
    pub fn normalize(&self, raw: f64) -> f64 {
        self.spec.normalization.apply(raw, self.coefficient)
    }

    /// Acceptance predicate for a single record
    #[must_use]
    pub fn is_track_accepted(&self, record: &R) -> bool {
        if !self.enabled {
            return true;
        }
        debug_assert!(
            self.value_from <= self.value_to,
            "value_from must not exceed value_to"
        );
        match (self.spec.extract)(record) {
            Some(raw) if raw != 0.0 => self.accepts_normalized(self.normalize(raw)),
            _ => false,
        }
    }

    /// Range test on an already normalized value
    #[allow(clippy::float_cmp)] // Exact equality marks an untouched slider
    #[must_use]
    pub fn accepts_normalized(&self, value: f64) -> bool {
        (value > self.value_from && value < self.value_to)
            || (value < self.min_value && self.value_from == self.min_value)
            || (value > self.max_value && self.value_to == self.max_value)
    }

    fn notify(&self) {
        self.listener.on_filter_changed(self.spec.filter_type);
    }
}

impl<R: Sync> RangeFilter<R> {
    /// Records accepted by this filter, in input order
    ///
    /// Evaluation runs on the rayon pool; the filter is only read.
    #[must_use]
    pub fn accepted<'a>(&self, records: &'a [R]) -> Vec<&'a R> {
        records
            .par_iter()
            .filter(|record| self.is_track_accepted(record))
            .collect()
    }
}

impl RangeFilter<TrackItem> {
    /// Total-distance filter (meters to mi / nmi / km)
    #[must_use]
    pub fn length(listener: Arc<dyn FilterChangeListener>) -> Self {
        Self::new(attributes::length(), listener)
    }

    /// Maximum-speed filter (m/s to mph / kn / km/h)
    #[must_use]
    pub fn max_speed(listener: Arc<dyn FilterChangeListener>) -> Self {
        Self::new(attributes::max_speed(), listener)
    }

    /// Built-in filter for any track attribute
    #[must_use]
    pub fn for_type(filter_type: FilterType, listener: Arc<dyn FilterChangeListener>) -> Self {
        Self::new(attributes::for_type(filter_type), listener)
    }
}

impl<R> fmt::Debug for RangeFilter<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeFilter")
            .field("filter_type", &self.spec.filter_type)
            .field("min_value", &self.min_value)
            .field("max_value", &self.max_value)
            .field("value_from", &self.value_from)
            .field("value_to", &self.value_to)
            .field("enabled", &self.enabled)
            .field("coefficient", &self.coefficient)
            .field("measurement_system", &self.measurement_system)
            .finish_non_exhaustive()
    }
}
