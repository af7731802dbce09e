//! Connector enumeration over a realistic catalog.

use skillpath_engine::{ProgressStore, resolve_all};
use skillpath_graph::GraphStore;
use skillpath_layout::{CARD_EDGE_OFFSET, EdgeState, connectors};

const CATALOG: &str = include_str!("fixtures/web_dev_catalog.json");

#[test]
fn one_connector_per_prerequisite_edge() {
    let store = GraphStore::from_json(CATALOG).unwrap();
    let progress = ProgressStore::new();
    let statuses = resolve_all(&store, progress.snapshot());

    let all = connectors(&store, &statuses);
    assert_eq!(all.len(), store.edges().len());

    // Fresh session: no parent is completed, every edge renders blocked.
    assert!(all.iter().all(|c| c.state == EdgeState::Blocked));
}

#[test]
fn completing_a_parent_activates_edges_to_reachable_children() {
    let store = GraphStore::from_json(CATALOG).unwrap();
    let mut progress = ProgressStore::new();
    progress.mark_complete("web-dev-intro");
    let statuses = resolve_all(&store, progress.snapshot());

    let all = connectors(&store, &statuses);
    let root_edges: Vec<_> = all.iter().filter(|c| c.parent == "web-dev-intro").collect();
    assert_eq!(root_edges.len(), 2);
    assert!(root_edges.iter().all(|c| c.state == EdgeState::Connected));

    // Edges deeper in the tree stay blocked.
    let deep = all.iter().find(|c| c.parent == "javascript-async").unwrap();
    assert_eq!(deep.state, EdgeState::Blocked);
}

#[test]
fn segments_span_between_card_edges() {
    let store = GraphStore::from_json(CATALOG).unwrap();
    let progress = ProgressStore::new();
    let statuses = resolve_all(&store, progress.snapshot());

    for c in connectors(&store, &statuses) {
        let parent = store.node(&c.parent).unwrap();
        let child = store.node(&c.child).unwrap();
        assert_eq!(c.segments[0].from.x, parent.position.x);
        assert_eq!(c.segments[0].from.y, parent.position.y + CARD_EDGE_OFFSET);
        assert_eq!(c.segments[2].to.x, child.position.x);
        assert_eq!(c.segments[2].to.y, child.position.y - CARD_EDGE_OFFSET);
        // The horizontal run sits halfway between the two card edges.
        let mid = (c.segments[0].from.y + c.segments[2].to.y) / 2.0;
        assert_eq!(c.segments[1].from.y, mid);
        assert_eq!(c.segments[1].to.y, mid);
        assert_eq!(c.arrow, c.segments[2].to);
    }
}
