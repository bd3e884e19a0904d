//! Reconcile options

use crate::domain::value_objects::NamingPolicy;

/// Options for one reconcile run
#[derive(Debug, Clone, Default)]
pub struct ReconcileOptions {
    /// Compute the plan without moving anything
    pub dry_run: bool,
    /// Naming policy for this run (None = configured policy)
    pub naming: Option<NamingPolicy>,
}

impl ReconcileOptions {
    /// Create new reconcile options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Override the naming policy
    pub fn with_naming(mut self, naming: Option<NamingPolicy>) -> Self {
        self.naming = naming;
        self
    }
}
