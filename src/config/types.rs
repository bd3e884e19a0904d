//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{clean, NamingPolicy};
use crate::error::ReconcilerResult;

use super::loader::{self, ConfigWarning};

/// Name of the upload directory below the static directory
pub const UPLOAD_DIR: &str = "upload";

/// Quarantine directory below the static directory
pub const BACKUP_DIR: &str = "backup/ImageExt";

/// Lock file below the static directory
pub const LOCK_FILE: &str = "backup/.reconcile.lock";

/// Document root and static directory layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_document_root")]
    pub document_root: PathBuf,

    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            document_root: default_document_root(),
            static_dir: default_static_dir(),
        }
    }
}

fn default_document_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_static_dir() -> String {
    "static".to_string()
}

/// Directory relative reference values are resolved against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceBase {
    /// Values are web paths below the document root
    #[default]
    DocumentRoot,
    /// Values are paths below the upload directory
    StorageRoot,
}

/// Where reference exports live and how to read them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferencesConfig {
    #[serde(default = "default_references_dir")]
    pub dir: PathBuf,

    #[serde(default)]
    pub base: ReferenceBase,

    #[serde(default)]
    pub allow_missing: bool,
}

impl Default for ReferencesConfig {
    fn default() -> Self {
        Self {
            dir: default_references_dir(),
            base: ReferenceBase::default(),
            allow_missing: false,
        }
    }
}

fn default_references_dir() -> PathBuf {
    PathBuf::from("references")
}

/// Directory walk options
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScanConfig {
    #[serde(default)]
    pub follow_links: bool,
}

/// Quarantine options
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QuarantineConfig {
    #[serde(default)]
    pub naming: NamingPolicy,
}

/// Run lock options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockConfig {
    /// Block on a concurrent run instead of failing
    #[serde(default = "default_true")]
    pub wait: bool,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self { wait: true }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub references: ReferencesConfig,

    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub quarantine: QuarantineConfig,

    #[serde(default)]
    pub lock: LockConfig,
}

/// Absolute paths derived from a configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub document_root: PathBuf,
    /// Document root as configured, before symlinks were resolved
    pub configured_document_root: PathBuf,
    pub storage_root: PathBuf,
    pub backup_root: PathBuf,
    pub lock_path: PathBuf,
    pub references_dir: PathBuf,
    /// Base for relative reference values
    pub reference_base: PathBuf,
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ReconcilerResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit file, the working directory, the user config
    /// directory, or defaults, then apply environment overrides
    pub fn load_or_default(explicit: Option<&Path>) -> ReconcilerResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(explicit)
    }

    /// Apply environment variable overrides (UPLOAD_RECONCILER_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Turn the configured layout into absolute paths.
    ///
    /// The document root is canonicalized once when it exists; every other
    /// root derives from it so inventory and reference paths compare equal.
    /// The configured spelling is kept so absolute references written with
    /// it can be mapped onto the canonical root.
    pub fn resolve_paths(&self) -> ReconcilerResult<ResolvedPaths> {
        let configured_document_root = absolutize(&self.paths.document_root)?;
        let document_root = configured_document_root
            .canonicalize()
            .unwrap_or_else(|_| configured_document_root.clone());

        let static_root = clean(&document_root.join(&self.paths.static_dir));
        let storage_root = static_root.join(UPLOAD_DIR);
        let backup_root = static_root.join(BACKUP_DIR);
        let lock_path = static_root.join(LOCK_FILE);

        let reference_base = match self.references.base {
            ReferenceBase::DocumentRoot => document_root.clone(),
            ReferenceBase::StorageRoot => storage_root.clone(),
        };

        Ok(ResolvedPaths {
            references_dir: absolutize(&self.references.dir)?,
            document_root,
            configured_document_root,
            storage_root,
            backup_root,
            lock_path,
            reference_base,
        })
    }
}

fn absolutize(path: &Path) -> ReconcilerResult<PathBuf> {
    if path.is_absolute() {
        Ok(clean(path))
    } else {
        Ok(clean(&std::env::current_dir()?.join(path)))
    }
}
