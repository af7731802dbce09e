//! Versioned catalog envelope.
//!
//! A deployment ships exactly one catalog; the `version` field lets the
//! loader reject snapshots written for a different schema revision.

use serde::{Deserialize, Serialize};

use crate::node::Node;

/// Catalog schema revision this crate reads and writes.
pub const CATALOG_VERSION: u32 = 1;

/// A versioned snapshot of a node set.
///
/// Nodes are kept as an ordered list: declaration order is the default
/// presentation order and the tiebreaker for every stable sort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub version: u32,
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Declared category labels. When non-empty, every node's category
    /// must be one of these.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    pub nodes: Vec<Node>,
}
