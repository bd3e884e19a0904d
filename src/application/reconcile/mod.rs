//! Reconcile Use Case
//!
//! Compares the upload directory with the files content records reference
//! and relocates the unreferenced ones into the backup directory.
//!
//! This module handles:
//! - Counting the inventory and the reference set on their own
//! - Running the scan, aggregate, diff and move pipeline under the run lock
//! - Reporting per-stage counts and per-file outcomes

mod options;
mod result;
mod use_case;

pub use options::ReconcileOptions;
pub use result::{CountResponse, ReconcileResult};
pub use use_case::{LocalReport, ReconciliationReport};
