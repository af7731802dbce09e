//! Search, filter, and sort over the node set.
//!
//! Filters are conjunctive and all optional; an absent selector is a
//! no-op. Every call recomputes a fresh result, so the query layer is
//! safe to re-run on each keystroke of a search box. Degenerate input
//! yields an empty result, never an error.

use std::collections::BTreeMap;

use skillpath_graph::GraphStore;
use skillpath_model::{Difficulty, Node, NodeStatus};

/// Sort key for query results. Every sort is stable: nodes comparing
/// equal retain their relative declaration order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Catalog declaration order.
    #[default]
    Declaration,
    /// Case-insensitive lexicographic title order.
    Title,
    /// Beginner before Intermediate before Advanced.
    Difficulty,
    /// Completed before unlocked before locked. Nodes without a resolved
    /// status sort last.
    Status,
}

/// A filtered, ordered view over a graph store.
#[derive(Debug, Clone, Default)]
pub struct NodeQuery {
    /// Case-insensitive substring matched against title, description, or
    /// any tag.
    pub text: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub level: Option<u32>,
    pub sort: SortKey,
}

impl NodeQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the query. `statuses` is only consulted by the status sort
    /// key; pass the output of `resolve_all` when sorting by status.
    pub fn run<'a>(
        &self,
        store: &'a GraphStore,
        statuses: Option<&BTreeMap<String, NodeStatus>>,
    ) -> Vec<&'a Node> {
        let mut nodes: Vec<&Node> = store
            .all_nodes()
            .iter()
            .filter(|node| self.matches(node))
            .collect();

        match self.sort {
            SortKey::Declaration => {}
            SortKey::Title => {
                nodes.sort_by_key(|node| node.title.to_lowercase());
            }
            SortKey::Difficulty => {
                nodes.sort_by_key(|node| node.difficulty.rank());
            }
            SortKey::Status => {
                nodes.sort_by_key(|node| status_rank(statuses, &node.id));
            }
        }
        nodes
    }

    fn matches(&self, node: &Node) -> bool {
        if let Some(text) = &self.text {
            let text = text.trim();
            if !text.is_empty() && !node.matches_text(text) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if node.category != *category {
                return false;
            }
        }
        if let Some(difficulty) = self.difficulty {
            if node.difficulty != difficulty {
                return false;
            }
        }
        if let Some(level) = self.level {
            if node.level != level {
                return false;
            }
        }
        true
    }
}

fn status_rank(statuses: Option<&BTreeMap<String, NodeStatus>>, id: &str) -> u8 {
    statuses
        .and_then(|map| map.get(id))
        .map_or(u8::MAX, NodeStatus::rank)
}
