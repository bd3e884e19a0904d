//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod inventory_scanner;
pub mod reference_provider;

pub use file_system::{FileSystem, FsError, FsResult};
pub use inventory_scanner::InventoryScanner;
pub use reference_provider::{ProviderError, ReferenceProvider};
