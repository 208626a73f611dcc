//! Prometheus metrics for core components.
//!
//! The server registers these alongside its HTTP metrics via [`all_metrics`].

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts};

// =============================================================================
// Lists
// =============================================================================

/// List toggles by list kind, direction and outcome.
pub static LIST_MUTATIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "cineguru_list_mutations_total",
            "Favorite and watch-later toggles",
        ),
        // outcome: "added", "already_present", "removed", "not_found", "error"
        &["list", "direction", "outcome"],
    )
    .unwrap()
});

/// Activity entries appended.
pub static ACTIVITY_ENTRIES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "cineguru_activity_entries_total",
            "Activity ledger entries appended",
        ),
        &["activity_type"],
    )
    .unwrap()
});

// =============================================================================
// Search
// =============================================================================

/// Titles returned per search.
pub static SEARCH_RESULTS: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "cineguru_search_results",
            "Number of titles returned per catalog search",
        )
        .buckets(vec![0.0, 1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0, 500.0]),
        &["sort"],
    )
    .unwrap()
});

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(LIST_MUTATIONS.clone()),
        Box::new(ACTIVITY_ENTRIES.clone()),
        Box::new(SEARCH_RESULTS.clone()),
    ]
}
