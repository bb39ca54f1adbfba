// ABOUTME: Core data models for unit-aware track filtering
// ABOUTME: Re-exports MeasurementSystem, UnitTag, FilterType and the track record types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `MeasurementSystem`: the user's selected unit system, collapsed into
//!   distance buckets for coefficient lookup
//! - `UnitTag`: abstract display unit selected by a filter
//! - `FilterType`: identity of an attribute filter, used for routing and persistence
//! - `TrackItem` / `TrackAnalysis`: read-only records consumed by the filters

mod filter_type;
mod measurement;
mod track;
mod unit;

pub use filter_type::FilterType;
pub use measurement::{DistanceBucket, MeasurementSystem, MeasurementSystemProvider};
pub use track::{TrackAnalysis, TrackAnalysisBuilder, TrackItem};
pub use unit::UnitTag;
