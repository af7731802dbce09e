//! Layout geometry for rendering consumers.
//!
//! Positions are pre-computed percentages stored on each node; this crate
//! passes them through unchanged and derives connector geometry for each
//! prerequisite edge. The edge state classification is a rendering hint
//! only and carries no semantics back into the graph.

use std::collections::BTreeMap;

use serde::Serialize;
use skillpath_graph::GraphStore;
use skillpath_model::{Node, NodeStatus};

/// Vertical offset between a node's center and its card edge, in
/// percentage points. Connectors leave a parent at its bottom edge and
/// enter a child at its top edge.
pub const CARD_EDGE_OFFSET: f64 = 8.0;

/// A point in percentage coordinates of the rendered canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One straight connector segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Rendering state of a connector, derived from the statuses of its two
/// endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeState {
    /// Parent completed and child reachable: draw as an active path.
    Connected,
    /// Anything else: draw dimmed/dashed.
    Blocked,
}

/// Orthogonal connector for one prerequisite edge: vertical drop from the
/// parent, horizontal run to the child's column, vertical entry into the
/// child, with a terminal arrow at the child's top edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Connector {
    pub parent: String,
    pub child: String,
    pub segments: [Segment; 3],
    pub arrow: Point,
    pub state: EdgeState,
}

/// A node's stored position, unchanged. Layout is pre-computed in the
/// catalog, not derived here.
pub fn node_anchor(node: &Node) -> Point {
    Point {
        x: node.position.x,
        y: node.position.y,
    }
}

/// Classify an edge from the resolved statuses of its endpoints.
pub fn edge_state(parent: NodeStatus, child: NodeStatus) -> EdgeState {
    if parent == NodeStatus::Completed && child != NodeStatus::Locked {
        EdgeState::Connected
    } else {
        EdgeState::Blocked
    }
}

/// Build the connector for one parent -> child edge.
pub fn connector(
    parent: &Node,
    child: &Node,
    parent_status: NodeStatus,
    child_status: NodeStatus,
) -> Connector {
    let start = Point {
        x: parent.position.x,
        y: parent.position.y + CARD_EDGE_OFFSET,
    };
    let end = Point {
        x: child.position.x,
        y: child.position.y - CARD_EDGE_OFFSET,
    };
    let mid_y = start.y + (end.y - start.y) / 2.0;

    Connector {
        parent: parent.id.clone(),
        child: child.id.clone(),
        segments: [
            Segment {
                from: start,
                to: Point { x: start.x, y: mid_y },
            },
            Segment {
                from: Point { x: start.x, y: mid_y },
                to: Point { x: end.x, y: mid_y },
            },
            Segment {
                from: Point { x: end.x, y: mid_y },
                to: end,
            },
        ],
        arrow: end,
        state: edge_state(parent_status, child_status),
    }
}

/// Connector geometry for every prerequisite edge in the store, in parent
/// declaration order. Nodes missing from `statuses` are treated as
/// locked, which renders the edge blocked.
pub fn connectors(
    store: &GraphStore,
    statuses: &BTreeMap<String, NodeStatus>,
) -> Vec<Connector> {
    let status_of = |id: &str| statuses.get(id).copied().unwrap_or(NodeStatus::Locked);
    store
        .edges()
        .into_iter()
        .map(|(parent, child)| {
            connector(parent, child, status_of(&parent.id), status_of(&child.id))
        })
        .collect()
}
