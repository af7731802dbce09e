//! Learner progress records.
//!
//! The core only ever reads these; the single mutation entry point lives
//! in the engine crate's session store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-node progress for one learner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub completed: bool,
    pub completed_at: DateTime<Utc>,
    /// Free-form annotation owned by the notes collaborator. Preserved
    /// verbatim so host-serialized records round-trip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ProgressRecord {
    /// Record a completion at the given instant.
    pub fn completed_at(instant: DateTime<Utc>) -> Self {
        Self {
            completed: true,
            completed_at: instant,
            note: None,
        }
    }
}

/// Read-only view of a learner's progress: node id to record.
///
/// A node id absent from the snapshot means "not completed", never an
/// error.
pub type ProgressSnapshot = BTreeMap<String, ProgressRecord>;
