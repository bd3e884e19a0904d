//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system and storage root walker
//! - `providers/` - Reference providers (JSON exports, in-memory)
//! - `lock` - Advisory run lock

pub mod fs;
pub mod lock;
pub mod providers;

// Re-export for convenience
pub use fs::{LocalFs, WalkScanner};
pub use lock::{RunLock, RunLockGuard};
pub use providers::{file_providers, JsonFileProvider, StaticProvider};
