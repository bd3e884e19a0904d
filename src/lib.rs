//! upload-reconciler - orphan upload quarantine for CMS document roots
//!
//! Compares the files under `<document root>/<static dir>/upload` with the
//! image paths content records reference, and moves every unreferenced file
//! into `<static dir>/backup/ImageExt` instead of deleting it.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    CountResponse, LocalReport, ReconcileOptions, ReconcileResult, ReconciliationReport,
};
pub use config::{Config, ConfigWarning, ReferenceBase, ResolvedPaths};
pub use domain::value_objects::{ContentCategory, FilePath, NamingPolicy, RawReference};
pub use error::{AggregationError, MoveError, ReconcilerError, ReconcilerResult, ScanError};
