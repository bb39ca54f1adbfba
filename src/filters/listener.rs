// ABOUTME: Change-notification callback fired when a filter's range or enabled flag changes
// ABOUTME: Fire-and-forget and synchronous; closures implement the trait directly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use track_filters_core::models::FilterType;

/// Receives a notification each time a filter's state changes
pub trait FilterChangeListener: Send + Sync {
    /// Called synchronously after the change has been applied
    fn on_filter_changed(&self, filter_type: FilterType);
}

impl<F> FilterChangeListener for F
where
    F: Fn(FilterType) + Send + Sync,
{
    fn on_filter_changed(&self, filter_type: FilterType) {
        self(filter_type);
    }
}

/// Listener that ignores every notification
#[must_use]
pub fn noop_listener() -> Arc<dyn FilterChangeListener> {
    Arc::new(|_: FilterType| {})
}
