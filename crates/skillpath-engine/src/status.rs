//! Status resolution.
//!
//! Resolution is a direct lookup against the snapshot, never a transitive
//! walk: a node's unlock decision depends only on whether its immediate
//! prerequisites are individually marked completed. Completion already
//! implies a prerequisite was itself reachable, so recursion buys nothing
//! and would only reintroduce a loop risk if the acyclicity invariant
//! were ever violated upstream.

use std::collections::BTreeMap;

use skillpath_graph::GraphStore;
use skillpath_model::{Node, NodeStatus, ProgressSnapshot};

/// Derive the access status of one node from a progress snapshot.
///
/// Pure and deterministic; a node id absent from the snapshot is treated
/// as "not completed", never as an error.
pub fn resolve_status(node: &Node, snapshot: &ProgressSnapshot) -> NodeStatus {
    if is_completed(snapshot, &node.id) {
        NodeStatus::Completed
    } else if node
        .prerequisites
        .iter()
        .all(|id| is_completed(snapshot, id))
    {
        NodeStatus::Unlocked
    } else {
        NodeStatus::Locked
    }
}

/// Resolve every node in the store. Keyed by node id.
pub fn resolve_all(store: &GraphStore, snapshot: &ProgressSnapshot) -> BTreeMap<String, NodeStatus> {
    store
        .all_nodes()
        .iter()
        .map(|node| (node.id.clone(), resolve_status(node, snapshot)))
        .collect()
}

fn is_completed(snapshot: &ProgressSnapshot, id: &str) -> bool {
    snapshot.get(id).is_some_and(|record| record.completed)
}

/// Memoized status resolution keyed by the progress snapshot version.
///
/// Correctness never requires this; it only avoids O(N*P) recomputation
/// for large corpora when the snapshot has not changed between calls.
#[derive(Debug, Default)]
pub struct StatusCache {
    version: Option<u64>,
    statuses: BTreeMap<String, NodeStatus>,
}

impl StatusCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Statuses for the given store and progress session, recomputing only
    /// when the session's snapshot version has advanced.
    pub fn statuses(
        &mut self,
        store: &GraphStore,
        progress: &crate::progress::ProgressStore,
    ) -> &BTreeMap<String, NodeStatus> {
        if self.version != Some(progress.version()) {
            self.statuses = resolve_all(store, progress.snapshot());
            self.version = Some(progress.version());
        }
        &self.statuses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::ProgressStore;
    use skillpath_model::{Difficulty, Position};

    fn node(id: &str, prerequisites: &[&str]) -> Node {
        Node {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            prerequisites: prerequisites.iter().map(ToString::to_string).collect(),
            children: vec![],
            level: 1,
            category: "Foundation".to_string(),
            difficulty: Difficulty::Beginner,
            duration: "1:00:00".parse().unwrap(),
            tags: vec![],
            position: Position { x: 50.0, y: 10.0 },
            video_id: None,
            objectives: vec![],
            icon: None,
        }
    }

    #[test]
    fn root_is_unlocked_then_completed() {
        let root = node("root", &[]);
        let mut progress = ProgressStore::new();
        assert_eq!(
            resolve_status(&root, progress.snapshot()),
            NodeStatus::Unlocked
        );
        progress.mark_complete("root");
        assert_eq!(
            resolve_status(&root, progress.snapshot()),
            NodeStatus::Completed
        );
    }

    #[test]
    fn partially_satisfied_prerequisites_stay_locked() {
        let d = node("d", &["b", "c"]);
        let mut progress = ProgressStore::new();
        progress.mark_complete("b");
        assert_eq!(resolve_status(&d, progress.snapshot()), NodeStatus::Locked);
        progress.mark_complete("c");
        assert_eq!(
            resolve_status(&d, progress.snapshot()),
            NodeStatus::Unlocked
        );
    }

    #[test]
    fn resolution_is_idempotent() {
        let d = node("d", &["b"]);
        let mut progress = ProgressStore::new();
        progress.mark_complete("b");
        let first = resolve_status(&d, progress.snapshot());
        let second = resolve_status(&d, progress.snapshot());
        assert_eq!(first, second);
    }
}
