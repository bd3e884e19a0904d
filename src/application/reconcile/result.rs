//! Reconcile result types

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::services::{MoveFailure, QuarantineRecord};
use crate::domain::value_objects::NamingPolicy;

/// The `{count: N}` response shared by all three operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountResponse {
    pub count: usize,
}

impl CountResponse {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

/// Result of a full reconcile run
#[derive(Debug, Clone)]
pub struct ReconcileResult {
    /// Files found under the storage root
    pub inventory: usize,
    /// Distinct normalized references
    pub references: usize,
    /// Files nothing references
    pub orphans: usize,
    /// Orphans relocated (or planned, in a dry run)
    pub moved: Vec<QuarantineRecord>,
    /// Orphans that could not be relocated
    pub failed: Vec<MoveFailure>,
    /// Moves that replaced an existing backup file
    pub overwritten: usize,
    pub naming: NamingPolicy,
    pub dry_run: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl ReconcileResult {
    /// Number of files moved; this is the `count` of the reconcile response
    pub fn moved_count(&self) -> usize {
        self.moved.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    /// True when every orphan was relocated
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn response(&self) -> CountResponse {
        CountResponse::new(self.moved_count())
    }

    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}
