// ABOUTME: Main library entry point for unit-aware track range filters
// ABOUTME: Generic range filter, attribute specifications, configuration, and logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Track Range Filters
//!
//! Decides whether a recorded track passes a user-configured numeric range
//! after converting the track's canonical metric value into the user's
//! selected measurement system.
//!
//! ## Architecture
//!
//! - **Filters**: one generic `RangeFilter` parameterized by an
//!   `AttributeSpec` (extraction, normalization direction, unit table, ceiling)
//! - **Units**: resolution of abstract unit tags into display labels
//! - **Config**: deployment ceilings loaded from the environment
//! - **Logging**: structured `tracing` subscriber setup
//!
//! ## Example Usage
//!
//! ```rust
//! use track_range_filters::filters::{noop_listener, RangeFilter};
//! use track_range_filters::models::{MeasurementSystem, TrackAnalysisBuilder, TrackItem};
//!
//! let mut filter = RangeFilter::length(noop_listener());
//! filter.init_filter(MeasurementSystem::KilometersAndMeters);
//! filter.set_enabled(true);
//! filter.set_value_to(50.0);
//!
//! let track = TrackItem::new("Morning ride", "tracks/ride.gpx")
//!     .with_analysis(TrackAnalysisBuilder::new().total_distance(30_000.0).build());
//!
//! assert!(filter.is_track_accepted(&track));
//! ```

/// Generic range filter and the built-in track attribute specifications
pub mod filters;

/// Unit label resolution for display
pub mod units;

/// Environment-driven filter ceilings
pub mod config;

/// Structured logging setup
pub mod logging;

/// Constants re-exported from the core crate
pub mod constants {
    pub use track_filters_core::constants::*;
}

/// Errors re-exported from the core crate
pub mod errors {
    pub use track_filters_core::errors::*;
}

/// Data models re-exported from the core crate
pub mod models {
    pub use track_filters_core::models::*;
}
