//! Progress bookkeeping for dashboard-style consumers.

use std::collections::BTreeMap;

use serde::Serialize;
use skillpath_graph::GraphStore;
use skillpath_model::{Duration, NodeStatus, ProgressSnapshot};

use crate::status::resolve_status;

/// Completed/total counts for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryProgress {
    pub completed: usize,
    pub total: usize,
}

/// Aggregate view of one learner's progress over a catalog.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressSummary {
    pub total: usize,
    pub completed: usize,
    pub unlocked: usize,
    pub locked: usize,
    /// Share of completed nodes, 0.0..=100.0. Zero for an empty catalog.
    pub percent_complete: f64,
    pub completed_duration: Duration,
    pub total_duration: Duration,
    pub by_category: BTreeMap<String, CategoryProgress>,
}

impl ProgressSummary {
    pub fn compute(store: &GraphStore, snapshot: &ProgressSnapshot) -> Self {
        let mut summary = Self {
            total: store.len(),
            completed: 0,
            unlocked: 0,
            locked: 0,
            percent_complete: 0.0,
            completed_duration: Duration::default(),
            total_duration: Duration::default(),
            by_category: BTreeMap::new(),
        };

        for node in store.all_nodes() {
            let status = resolve_status(node, snapshot);
            summary.total_duration += node.duration;
            let entry = summary.by_category.entry(node.category.clone()).or_default();
            entry.total += 1;
            match status {
                NodeStatus::Completed => {
                    summary.completed += 1;
                    summary.completed_duration += node.duration;
                    entry.completed += 1;
                }
                NodeStatus::Unlocked => summary.unlocked += 1,
                NodeStatus::Locked => summary.locked += 1,
            }
        }

        if summary.total > 0 {
            summary.percent_complete =
                summary.completed as f64 / summary.total as f64 * 100.0;
        }
        summary
    }
}
