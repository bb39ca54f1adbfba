// ABOUTME: Shared test utilities and fixtures for range filter integration tests
// ABOUTME: Provides quiet logging setup, track builders, and a recording change listener
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `track_range_filters`

use std::env;
use std::sync::{Arc, Mutex, Once};

use tracing::Level;
use track_range_filters::filters::FilterChangeListener;
use track_range_filters::models::{FilterType, TrackAnalysisBuilder, TrackItem};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; WARN keeps test output quiet
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Track with only a total distance (meters)
pub fn track_with_distance(meters: f64) -> TrackItem {
    TrackItem::new(format!("{meters} m"), format!("tracks/{meters}.gpx"))
        .with_analysis(TrackAnalysisBuilder::new().total_distance(meters).build())
}

/// Track with only a maximum speed (m/s)
pub fn track_with_max_speed(mps: f64) -> TrackItem {
    TrackItem::new(format!("{mps} m/s"), format!("tracks/{mps}.gpx"))
        .with_analysis(TrackAnalysisBuilder::new().max_speed(mps).build())
}

/// Track whose analysis has not been computed
pub fn unanalyzed_track() -> TrackItem {
    TrackItem::new("pending", "tracks/pending.gpx")
}

/// Listener that records every notification it receives
#[derive(Default)]
pub struct RecordingListener {
    events: Mutex<Vec<FilterType>>,
}

impl RecordingListener {
    /// Shared listener ready to hand to a filter
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Filter types notified so far, in order
    pub fn events(&self) -> Vec<FilterType> {
        self.events.lock().unwrap().clone()
    }

    /// Number of notifications received
    pub fn count(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

impl FilterChangeListener for RecordingListener {
    fn on_filter_changed(&self, filter_type: FilterType) {
        self.events.lock().unwrap().push(filter_type);
    }
}
