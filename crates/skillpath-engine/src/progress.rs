//! Session-scoped progress store.
//!
//! The store is created empty at session start (or restored from a
//! host-persisted record map) and changes only through `mark_complete`,
//! the single mutation entry point exposed to the host. The core reads it
//! as an immutable snapshot for the duration of one resolution pass.

use chrono::Utc;
use skillpath_model::{ProgressRecord, ProgressSnapshot};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct ProgressStore {
    records: ProgressSnapshot,
    version: u64,
}

impl ProgressStore {
    /// Empty store: nothing completed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a store from host-persisted records.
    pub fn from_records(records: ProgressSnapshot) -> Self {
        Self {
            records,
            version: 0,
        }
    }

    /// Parse a persisted progress map (node id -> record).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::from_records(serde_json::from_str(json)?))
    }

    /// Serialize the record map for persistence. The snapshot version is
    /// session-local and deliberately not persisted.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.records)
    }

    /// Mark a node completed. Last write wins and a collaborator-owned
    /// note on an existing record is preserved. Every call advances the
    /// snapshot version.
    pub fn mark_complete(&mut self, node_id: &str) {
        let now = Utc::now();
        self.records
            .entry(node_id.to_string())
            .and_modify(|record| {
                record.completed = true;
                record.completed_at = now;
            })
            .or_insert_with(|| ProgressRecord::completed_at(now));
        self.version += 1;
        debug!(node = node_id, version = self.version, "marked complete");
    }

    /// Read-only snapshot of the current progress map.
    pub fn snapshot(&self) -> &ProgressSnapshot {
        &self.records
    }

    /// Monotonic counter bumped on every mutation; cache invalidation key.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn completed_count(&self) -> usize {
        self.records.values().filter(|r| r.completed).count()
    }
}
