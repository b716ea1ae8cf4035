//! Outcome of a sync run.

use sekai_honors_core::{Server, SyncType};
use serde::Serialize;

/// Result of syncing one entity type for one server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncOutcome {
    /// Entity type synced
    pub sync_type: SyncType,
    /// Records written; zero on failure
    pub record_count: usize,
    /// Failure message, if the run failed
    pub error: Option<String>,
    /// Failure message, if the sync log row could not be written
    pub log_error: Option<String>,
}

impl SyncOutcome {
    /// Whether this entity type synced cleanly and its log row was written.
    pub fn is_success(&self) -> bool {
        self.error.is_none() && self.log_error.is_none()
    }
}

/// Result of syncing every entity type for one server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    /// Server synced
    pub server: Server,
    /// One outcome per entity type, in sync order
    pub outcomes: Vec<SyncOutcome>,
}

impl SyncReport {
    /// True only if every entity type succeeded.
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(SyncOutcome::is_success)
    }

    /// Outcome for one entity type.
    pub fn outcome(&self, sync_type: SyncType) -> Option<&SyncOutcome> {
        self.outcomes.iter().find(|o| o.sync_type == sync_type)
    }

    /// Records written across all entity types.
    pub fn total_records(&self) -> usize {
        self.outcomes.iter().map(|o| o.record_count).sum()
    }
}
