//! Access status derived for a node from a progress snapshot.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Access status of a node for one learner.
///
/// The three statuses are mutually exclusive: a node is `Completed` when
/// the learner has finished it, `Unlocked` when all of its immediate
/// prerequisites are completed (trivially so for roots), and `Locked`
/// otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    Completed,
    Unlocked,
    Locked,
}

impl NodeStatus {
    /// Sort rank used by the query layer: completed=1, unlocked=2, locked=3.
    pub fn rank(&self) -> u8 {
        match self {
            NodeStatus::Completed => 1,
            NodeStatus::Unlocked => 2,
            NodeStatus::Locked => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeStatus::Completed => "completed",
            NodeStatus::Unlocked => "unlocked",
            NodeStatus::Locked => "locked",
        }
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NodeStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "completed" => Ok(NodeStatus::Completed),
            "unlocked" => Ok(NodeStatus::Unlocked),
            "locked" => Ok(NodeStatus::Locked),
            _ => Err(ModelError::UnknownStatus(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_orders_completed_first() {
        assert!(NodeStatus::Completed.rank() < NodeStatus::Unlocked.rank());
        assert!(NodeStatus::Unlocked.rank() < NodeStatus::Locked.rank());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&NodeStatus::Unlocked).unwrap();
        assert_eq!(json, "\"unlocked\"");
    }
}
