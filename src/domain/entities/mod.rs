//! Domain Entities
//!
//! The ephemeral sets the reconciliation pipeline builds on every run.

mod path_set;

pub use path_set::{Inventory, OrphanSet, ReferenceSet};
