// ABOUTME: Track records consumed read-only by the range filters
// ABOUTME: TrackItem wraps an optional analysis; TrackAnalysisBuilder constructs analyses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Analyzed attributes of a recorded track, in canonical metric units
///
/// Every attribute is optional: providers and older files may not carry all
/// of them. Filters treat an absent value and an exact zero alike, as "not
/// measured". Fields are private; use `TrackAnalysisBuilder` to construct.
///
/// # Examples
///
/// ```rust
/// use track_filters_core::models::TrackAnalysisBuilder;
///
/// let analysis = TrackAnalysisBuilder::new()
///     .total_distance(12_500.0)
///     .max_speed(8.4)
///     .build();
///
/// assert_eq!(analysis.total_distance(), Some(12_500.0));
/// assert_eq!(analysis.avg_speed(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackAnalysis {
    /// Total distance in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    total_distance: Option<f64>,
    /// Maximum speed in meters per second
    #[serde(skip_serializing_if = "Option::is_none")]
    max_speed: Option<f64>,
    /// Average speed in meters per second
    #[serde(skip_serializing_if = "Option::is_none")]
    avg_speed: Option<f64>,
    /// Span between first and last point in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    time_span: Option<f64>,
    /// Time spent moving in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    time_moving: Option<f64>,
    /// Highest elevation in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    max_elevation: Option<f64>,
    /// Mean elevation in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    avg_elevation: Option<f64>,
    /// Cumulative ascent in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    diff_elevation_up: Option<f64>,
    /// Cumulative descent in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    diff_elevation_down: Option<f64>,
}

impl TrackAnalysis {
    /// Returns the total distance in meters
    #[must_use]
    pub const fn total_distance(&self) -> Option<f64> {
        self.total_distance
    }

    /// Returns the maximum speed in meters per second
    #[must_use]
    pub const fn max_speed(&self) -> Option<f64> {
        self.max_speed
    }

    /// Returns the average speed in meters per second
    #[must_use]
    pub const fn avg_speed(&self) -> Option<f64> {
        self.avg_speed
    }

    /// Returns the time span in seconds
    #[must_use]
    pub const fn time_span(&self) -> Option<f64> {
        self.time_span
    }

    /// Returns the moving time in seconds
    #[must_use]
    pub const fn time_moving(&self) -> Option<f64> {
        self.time_moving
    }

    /// Returns the highest elevation in meters
    #[must_use]
    pub const fn max_elevation(&self) -> Option<f64> {
        self.max_elevation
    }

    /// Returns the mean elevation in meters
    #[must_use]
    pub const fn avg_elevation(&self) -> Option<f64> {
        self.avg_elevation
    }

    /// Returns the cumulative ascent in meters
    #[must_use]
    pub const fn diff_elevation_up(&self) -> Option<f64> {
        self.diff_elevation_up
    }

    /// Returns the cumulative descent in meters
    #[must_use]
    pub const fn diff_elevation_down(&self) -> Option<f64> {
        self.diff_elevation_down
    }
}

/// Builder for `TrackAnalysis`
#[derive(Debug, Clone, Default)]
pub struct TrackAnalysisBuilder {
    analysis: TrackAnalysis,
}

impl TrackAnalysisBuilder {
    /// Creates a builder with every attribute unmeasured
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the total distance in meters
    #[must_use]
    pub const fn total_distance(mut self, value: f64) -> Self {
        self.analysis.total_distance = Some(value);
        self
    }

    /// Sets the maximum speed in meters per second
    #[must_use]
    pub const fn max_speed(mut self, value: f64) -> Self {
        self.analysis.max_speed = Some(value);
        self
    }

    /// Sets the average speed in meters per second
    #[must_use]
    pub const fn avg_speed(mut self, value: f64) -> Self {
        self.analysis.avg_speed = Some(value);
        self
    }

    /// Sets the time span in seconds
    #[must_use]
    pub const fn time_span(mut self, value: f64) -> Self {
        self.analysis.time_span = Some(value);
        self
    }

    /// Sets the moving time in seconds
    #[must_use]
    pub const fn time_moving(mut self, value: f64) -> Self {
        self.analysis.time_moving = Some(value);
        self
    }

    /// Sets the highest elevation in meters
    #[must_use]
    pub const fn max_elevation(mut self, value: f64) -> Self {
        self.analysis.max_elevation = Some(value);
        self
    }

    /// Sets the mean elevation in meters
    #[must_use]
    pub const fn avg_elevation(mut self, value: f64) -> Self {
        self.analysis.avg_elevation = Some(value);
        self
    }

    /// Sets the cumulative ascent in meters
    #[must_use]
    pub const fn diff_elevation_up(mut self, value: f64) -> Self {
        self.analysis.diff_elevation_up = Some(value);
        self
    }

    /// Sets the cumulative descent in meters
    #[must_use]
    pub const fn diff_elevation_down(mut self, value: f64) -> Self {
        self.analysis.diff_elevation_down = Some(value);
        self
    }

    /// Finish building
    #[must_use]
    pub const fn build(self) -> TrackAnalysis {
        self.analysis
    }
}

/// A recorded track as listed by the hosting system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackItem {
    name: String,
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    analysis: Option<TrackAnalysis>,
}

impl TrackItem {
    /// Track whose analysis has not been computed yet
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            analysis: None,
        }
    }

    /// Attach an analysis
    #[must_use]
    pub fn with_analysis(mut self, analysis: TrackAnalysis) -> Self {
        self.analysis = Some(analysis);
        self
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// File path of the track
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Analysis, if already computed
    #[must_use]
    pub const fn analysis(&self) -> Option<&TrackAnalysis> {
        self.analysis.as_ref()
    }

    /// Total distance in meters
    #[must_use]
    pub fn total_distance(&self) -> Option<f64> {
        self.analysis.as_ref().and_then(TrackAnalysis::total_distance)
    }

    /// Maximum speed in meters per second
    #[must_use]
    pub fn max_speed(&self) -> Option<f64> {
        self.analysis.as_ref().and_then(TrackAnalysis::max_speed)
    }

    /// Average speed in meters per second
    #[must_use]
    pub fn avg_speed(&self) -> Option<f64> {
        self.analysis.as_ref().and_then(TrackAnalysis::avg_speed)
    }

    /// Time span in seconds
    #[must_use]
    pub fn time_span(&self) -> Option<f64> {
        self.analysis.as_ref().and_then(TrackAnalysis::time_span)
    }

    /// Moving time in seconds
    #[must_use]
    pub fn time_moving(&self) -> Option<f64> {
        self.analysis.as_ref().and_then(TrackAnalysis::time_moving)
    }

    /// Highest elevation in meters
    #[must_use]
    pub fn max_elevation(&self) -> Option<f64> {
        self.analysis.as_ref().and_then(TrackAnalysis::max_elevation)
    }

    /// Mean elevation in meters
    #[must_use]
    pub fn avg_elevation(&self) -> Option<f64> {
        self.analysis.as_ref().and_then(TrackAnalysis::avg_elevation)
    }

    /// Cumulative ascent in meters
    #[must_use]
    pub fn diff_elevation_up(&self) -> Option<f64> {
        self.analysis.as_ref().and_then(TrackAnalysis::diff_elevation_up)
    }

    /// Cumulative descent in meters
    #[must_use]
    pub fn diff_elevation_down(&self) -> Option<f64> {
        self.analysis
            .as_ref()
            .and_then(TrackAnalysis::diff_elevation_down)
    }
}
