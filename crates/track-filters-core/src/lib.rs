// ABOUTME: Core types and constants for unit-aware track range filtering
// ABOUTME: Foundation crate with error handling, unit constants, and track/measurement models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Track Filters Core
//!
//! Foundation crate providing shared types and constants for the track range
//! filters. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: `TrackFilterError` for parsing and bound validation failures
//! - **constants**: Unit conversion factors and default filter ceilings
//! - **models**: Measurement systems, unit tags, filter types, and track records

/// Error types shared by the filter crates
pub mod errors;

/// Unit conversion factors and default ceilings organized by domain
pub mod constants;

/// Core data models (`MeasurementSystem`, `FilterType`, `TrackItem`, etc.)
pub mod models;

pub use errors::{TrackFilterError, TrackFilterResult};
