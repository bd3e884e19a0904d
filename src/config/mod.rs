//! Configuration module
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (UPLOAD_RECONCILER_*)
//! 3. Config file (`--config`, `./reconciler.toml`, or
//!    `<config dir>/upload-reconciler/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, ENV_PREFIX, LOCAL_CONFIG_FILE};
pub use types::{
    Config, LockConfig, PathsConfig, QuarantineConfig, ReferenceBase, ReferencesConfig,
    ResolvedPaths, ScanConfig, BACKUP_DIR, LOCK_FILE, UPLOAD_DIR,
};
