//! Advisory run lock
//!
//! Serializes reconcile runs that share a backup root. The lock is an
//! exclusive `fs2` lock on a small file next to the backup root and is held
//! for the whole pipeline.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::debug;

use crate::error::ReconcilerError;

pub struct RunLock {
    path: PathBuf,
    wait: bool,
}

impl RunLock {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            wait: true,
        }
    }

    /// Block until the lock is free (default) or fail immediately
    pub fn wait(mut self, wait: bool) -> Self {
        self.wait = wait;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Take the lock; it is released when the guard drops
    pub fn acquire(&self) -> Result<RunLockGuard, ReconcilerError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.error(e.to_string()))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&self.path)
            .map_err(|e| self.error(e.to_string()))?;

        if self.wait {
            file.lock_exclusive()
                .map_err(|e| self.error(e.to_string()))?;
        } else {
            file.try_lock_exclusive()
                .map_err(|_| self.error("another reconcile run is in progress".to_string()))?;
        }

        debug!(lock = %self.path.display(), "run lock acquired");
        Ok(RunLockGuard {
            file,
            path: self.path.clone(),
        })
    }

    fn error(&self, message: String) -> ReconcilerError {
        ReconcilerError::Lock {
            path: self.path.clone(),
            message,
        }
    }
}

/// Holds the lock until dropped
pub struct RunLockGuard {
    file: File,
    path: PathBuf,
}

impl Drop for RunLockGuard {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
        debug!(lock = %self.path.display(), "run lock released");
    }
}
