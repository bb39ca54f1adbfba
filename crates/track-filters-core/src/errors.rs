// ABOUTME: Error types for measurement system parsing, filter identity, and bound validation
// ABOUTME: Structured thiserror variants consumed by the settings and persistence collaborators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Track Filter Error Types
//!
//! Absent or zero attribute values are not errors: filters simply reject the
//! track. Errors only arise at the boundaries where untrusted text or
//! persisted state enters the core.

use thiserror::Error;

use crate::models::FilterType;

/// Errors raised by the track filter core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackFilterError {
    /// Settings store returned a measurement system name we do not know
    #[error("Unknown measurement system: {0}")]
    UnknownMeasurementSystem(String),

    /// Persisted filter identity does not match any supported attribute
    #[error("Unknown filter type: {0}")]
    UnknownFilterType(String),

    /// Range bounds violate `min <= from <= to <= max`
    #[error("Invalid bounds for {filter} filter: {reason}")]
    InvalidBounds {
        /// Filter whose bounds are invalid
        filter: FilterType,
        /// Which ordering constraint failed
        reason: String,
    },
}

impl TrackFilterError {
    /// Create an "invalid bounds" error
    #[must_use]
    pub fn invalid_bounds(filter: FilterType, reason: impl Into<String>) -> Self {
        Self::InvalidBounds {
            filter,
            reason: reason.into(),
        }
    }
}

/// Result alias for track filter operations
pub type TrackFilterResult<T> = Result<T, TrackFilterError>;
