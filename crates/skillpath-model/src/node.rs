//! Node and catalog schema types.
//!
//! These structs mirror the persisted catalog format. `prerequisites` is
//! the authoritative edge direction; `children` may be authored for
//! readability but is verified against the derived inverse at load time
//! and regenerated on serialization.

use serde::{Deserialize, Serialize};

use crate::duration::Duration;
use crate::difficulty::Difficulty;

/// Pre-computed layout position, in percentages of the rendered canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// One learning unit in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Ids of nodes that must be completed before this one unlocks.
    #[serde(default)]
    pub prerequisites: Vec<String>,
    /// Inverse view of the edge set. Optional in authored catalogs;
    /// normalized to the derived value when a store is built.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
    /// Generation depth as authored (roots are 1).
    pub level: u32,
    pub category: String,
    pub difficulty: Difficulty,
    pub duration: Duration,
    #[serde(default)]
    pub tags: Vec<String>,
    pub position: Position,
    /// Opaque reference to the external video collaborator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub objectives: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Node {
    /// A root has no prerequisites.
    pub fn is_root(&self) -> bool {
        self.prerequisites.is_empty()
    }

    /// A convergence node has more than one prerequisite.
    pub fn is_convergence(&self) -> bool {
        self.prerequisites.len() > 1
    }

    /// Case-insensitive substring match against title, description, or any tag.
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, prerequisites: &[&str]) -> Node {
        Node {
            id: id.to_string(),
            title: "HTML Fundamentals".to_string(),
            description: "Master HTML structure".to_string(),
            prerequisites: prerequisites.iter().map(ToString::to_string).collect(),
            children: vec![],
            level: 1,
            category: "HTML".to_string(),
            difficulty: Difficulty::Beginner,
            duration: "2:00:00".parse().unwrap(),
            tags: vec!["html".to_string(), "structure".to_string()],
            position: Position { x: 30.0, y: 15.0 },
            video_id: None,
            objectives: vec![],
            icon: None,
        }
    }

    #[test]
    fn root_and_convergence_predicates() {
        assert!(node("a", &[]).is_root());
        assert!(!node("b", &["a"]).is_root());
        assert!(!node("b", &["a"]).is_convergence());
        assert!(node("c", &["a", "b"]).is_convergence());
    }

    #[test]
    fn text_match_covers_title_description_and_tags() {
        let n = node("a", &[]);
        assert!(n.matches_text("html"));
        assert!(n.matches_text("STRUCT"));
        assert!(!n.matches_text("css"));
    }
}
