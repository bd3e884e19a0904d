//! Domain Layer
//!
//! The reconciliation core: path normalization, set construction, orphan
//! detection and quarantine planning.
//!
//! ## Structure
//!
//! - `entities/` - Inventory, ReferenceSet, OrphanSet
//! - `value_objects/` - FilePath, RawReference, ContentCategory, NamingPolicy
//! - `services/` - ReferenceAggregator, DifferenceEngine, QuarantineMover
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **Ports & Adapters** - All I/O goes through trait-defined ports
//! 2. **Deterministic** - Every set iterates in lexicographic order

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
