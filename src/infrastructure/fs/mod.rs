//! File System Implementations
//!
//! Concrete implementations of the FileSystem and InventoryScanner ports.

mod local;
mod walk;

pub use local::LocalFs;
pub use walk::WalkScanner;
