// ABOUTME: Benchmark fixtures generating deterministic track libraries
// ABOUTME: Mixes analyzed, partially analyzed, and unanalyzed tracks like a real track list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Deterministic track generation for reproducible measurements.

use track_range_filters::models::{TrackAnalysisBuilder, TrackItem};

/// Predefined library sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum TrackLibrarySize {
    /// Small library (100 tracks)
    Small,
    /// Typical user library (1 000 tracks)
    Medium,
    /// Heavy user library (20 000 tracks)
    Large,
}

impl TrackLibrarySize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 100,
            Self::Medium => 1_000,
            Self::Large => 20_000,
        }
    }
}

/// Generate a single track; every 17th has no analysis yet
#[allow(clippy::cast_precision_loss)]
fn generate_track(index: usize) -> TrackItem {
    let item = TrackItem::new(
        format!("Track {index}"),
        format!("tracks/bench_{index}.gpx"),
    );
    if index.is_multiple_of(17) {
        return item;
    }
    let distance = ((index * 7_919) % 250_000) as f64;
    let duration = 600.0 + ((index * 131) % 14_400) as f64;
    let analysis = TrackAnalysisBuilder::new()
        .total_distance(distance)
        .max_speed(((index * 37) % 60) as f64)
        .avg_speed(distance / duration)
        .time_span(duration)
        .time_moving(duration * 0.8)
        .max_elevation(((index * 53) % 4_000) as f64)
        .diff_elevation_up(((index * 29) % 2_500) as f64)
        .build();
    item.with_analysis(analysis)
}

/// Generate a library of the given size
#[must_use]
pub fn generate_tracks(size: TrackLibrarySize) -> Vec<TrackItem> {
    (0..size.count()).map(generate_track).collect()
}
