//! Progress summary aggregation tests.

use skillpath_engine::{ProgressStore, ProgressSummary};
use skillpath_graph::GraphStore;

const CATALOG: &str = include_str!("fixtures/web_dev_catalog.json");

fn store() -> GraphStore {
    GraphStore::from_json(CATALOG).expect("fixture catalog is valid")
}

#[test]
fn empty_progress_summary() {
    let store = store();
    let progress = ProgressStore::new();
    let summary = ProgressSummary::compute(&store, progress.snapshot());

    assert_eq!(summary.total, 12);
    assert_eq!(summary.completed, 0);
    assert_eq!(summary.unlocked, 1); // only the root
    assert_eq!(summary.locked, 11);
    assert_eq!(summary.percent_complete, 0.0);
    assert_eq!(summary.completed_duration.as_seconds(), 0);
    assert_eq!(summary.by_category["Foundation"].total, 1);
    assert_eq!(summary.by_category["HTML"].total, 3);
}

#[test]
fn summary_tracks_completion_and_durations() {
    let store = store();
    let mut progress = ProgressStore::new();
    progress.mark_complete("web-dev-intro");
    progress.mark_complete("html-fundamentals");
    progress.mark_complete("css-fundamentals");

    let summary = ProgressSummary::compute(&store, progress.snapshot());
    assert_eq!(summary.completed, 3);
    assert_eq!(summary.unlocked, 4); // the four level-3 nodes
    assert_eq!(summary.locked, 5);
    assert_eq!(summary.percent_complete, 25.0);
    // 1:30:00 + 2:00:00 + 2:30:00
    assert_eq!(summary.completed_duration.to_string(), "6:00:00");
    assert_eq!(summary.by_category["Foundation"].completed, 1);
    assert_eq!(summary.by_category["CSS"].completed, 1);
    assert_eq!(summary.by_category["JavaScript"].completed, 0);
}
