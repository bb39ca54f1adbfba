// ABOUTME: Range filter module: generic predicate, attribute specifications, listener, and state
// ABOUTME: Re-exports RangeFilter and the building blocks hosts use to configure it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Range Filters
//!
//! A single `RangeFilter` type hosts every numeric track attribute. What
//! differs between attributes lives in an `AttributeSpec`:
//!
//! - how to extract the canonical value from a record
//! - whether the coefficient multiplies or divides that value
//! - the measurement-system to (coefficient, unit) table
//! - the default ceiling of the attribute's domain
//!
//! The owner constructs one filter per attribute, calls `init_filter` at
//! startup and after every measurement-system change, and calls
//! `is_track_accepted` per record.

/// Built-in attribute specifications for `TrackItem`
pub mod attributes;

/// Change notification sent to the owner
pub mod listener;

/// The generic range filter
pub mod range;

/// Conversion types shared by attribute specifications
pub mod spec;

/// Plain persisted view of a filter's range
pub mod state;

pub use listener::{noop_listener, FilterChangeListener};
pub use range::RangeFilter;
pub use spec::{AttributeSpec, Conversion, Normalization};
pub use state::RangeFilterState;
