//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ReconciliationReport` - Inventory count, reference count, and the
//!   scan/aggregate/diff/move reconcile pipeline

pub mod reconcile;

pub use reconcile::{
    CountResponse, LocalReport, ReconcileOptions, ReconcileResult, ReconciliationReport,
};
