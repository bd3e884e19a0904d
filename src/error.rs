//! Error types for the reconciler
//!
//! Library errors use `thiserror`; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{FsError, ProviderError};
use crate::domain::value_objects::ContentCategory;

/// Result type alias for reconciler operations
pub type ReconcilerResult<T> = Result<T, ReconcilerError>;

/// The storage root could not be enumerated.
///
/// Fatal for the current invocation; no partial inventory is returned.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("storage root not found: {path}")]
    RootNotFound { path: PathBuf },

    #[error("storage root is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("walking {root} failed: {message}")]
    Walk { root: PathBuf, message: String },
}

/// A reference provider failed, so no reference set can be trusted.
#[derive(Error, Debug)]
#[error("reference provider '{category}' failed: {source}")]
pub struct AggregationError {
    pub category: ContentCategory,
    #[source]
    pub source: ProviderError,
}

/// Relocation into the quarantine directory failed.
#[derive(Error, Debug)]
pub enum MoveError {
    /// Raised before any file is touched
    #[error("cannot create backup root {path}: {source}")]
    BackupRoot {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    #[error("cannot move {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: FsError,
    },

    #[error("cannot hash {path}: {source}")]
    Hash {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    #[error("orphan has no file name: {path}")]
    NoFileName { path: PathBuf },
}

/// Main error type for reconciler operations
#[derive(Error, Debug)]
pub enum ReconcilerError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Aggregation(#[from] AggregationError),

    #[error(transparent)]
    Move(#[from] MoveError),

    /// Configuration file unreadable or invalid
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Another run holds the lock, or the lock file is unusable
    #[error("cannot lock {path}: {message}")]
    Lock { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
