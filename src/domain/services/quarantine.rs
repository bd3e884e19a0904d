//! Quarantine relocation
//!
//! Moves orphans into the flat backup root instead of deleting them. The
//! backup root is created up front; if that fails nothing is touched.
//! Individual rename failures are logged and skipped, and there is no
//! rollback of files already moved.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::domain::entities::OrphanSet;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{FilePath, NamingPolicy};
use crate::error::MoveError;

/// One orphan and where it went (or would go, in a dry run)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuarantineRecord {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// An orphan that could not be relocated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of one relocation batch
#[derive(Debug, Clone, Default)]
pub struct MoveReport {
    pub moved: Vec<QuarantineRecord>,
    pub failed: Vec<MoveFailure>,
    /// Moves that replaced a file already sitting at the destination
    pub overwritten: usize,
    pub dry_run: bool,
}

impl MoveReport {
    pub fn moved_count(&self) -> usize {
        self.moved.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Relocates orphans from the storage root into the backup root
pub struct QuarantineMover<FS: FileSystem> {
    fs: FS,
    storage_root: PathBuf,
    backup_root: PathBuf,
    naming: NamingPolicy,
}

impl<FS: FileSystem> QuarantineMover<FS> {
    pub fn new(fs: FS, storage_root: impl Into<PathBuf>, backup_root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            storage_root: storage_root.into(),
            backup_root: backup_root.into(),
            naming: NamingPolicy::default(),
        }
    }

    pub fn with_naming(mut self, naming: NamingPolicy) -> Self {
        self.naming = naming;
        self
    }

    pub fn backup_root(&self) -> &Path {
        &self.backup_root
    }

    pub fn naming(&self) -> NamingPolicy {
        self.naming
    }

    /// Destination path for one orphan under the current naming policy
    pub fn target_for(&self, orphan: &FilePath) -> Result<PathBuf, MoveError> {
        let base_name = orphan.file_name().ok_or_else(|| MoveError::NoFileName {
            path: orphan.as_path().to_path_buf(),
        })?;

        let target = match self.naming {
            NamingPolicy::BaseName => self.backup_root.join(base_name),
            NamingPolicy::RelativePath => match orphan.relative_to(&self.storage_root) {
                Some(relative) => self
                    .backup_root
                    .join(NamingPolicy::escape_relative(relative)),
                None => self.backup_root.join(base_name),
            },
            NamingPolicy::ContentHash => {
                let digest = self
                    .fs
                    .hash(orphan.as_path())
                    .map_err(|source| MoveError::Hash {
                        path: orphan.as_path().to_path_buf(),
                        source,
                    })?;
                self.backup_root
                    .join(NamingPolicy::hashed_name(&digest, base_name))
            }
        };

        Ok(target)
    }

    /// Make sure the backup root exists, creating parents as needed
    pub fn ensure_backup_root(&self) -> Result<(), MoveError> {
        if self.fs.is_dir(&self.backup_root) {
            return Ok(());
        }
        self.fs
            .create_dir_all(&self.backup_root)
            .map_err(|source| MoveError::BackupRoot {
                path: self.backup_root.clone(),
                source,
            })?;
        debug!(backup_root = %self.backup_root.display(), "created backup root");
        Ok(())
    }

    /// Relocate every orphan. Returns an error only if the backup root cannot
    /// be prepared; per-file failures land in the report.
    pub fn relocate(&self, orphans: &OrphanSet) -> Result<MoveReport, MoveError> {
        self.run(orphans, false)
    }

    /// Compute the relocation plan without touching the filesystem
    pub fn plan(&self, orphans: &OrphanSet) -> MoveReport {
        match self.run(orphans, true) {
            Ok(report) => report,
            Err(_) => MoveReport {
                dry_run: true,
                ..MoveReport::default()
            },
        }
    }

    fn run(&self, orphans: &OrphanSet, dry_run: bool) -> Result<MoveReport, MoveError> {
        let mut report = MoveReport {
            dry_run,
            ..MoveReport::default()
        };

        if !dry_run {
            self.ensure_backup_root()?;
        }

        let mut planned: HashSet<PathBuf> = HashSet::new();

        for orphan in orphans {
            let target = match self.target_for(orphan) {
                Ok(target) => target,
                Err(err) => {
                    warn!(path = %orphan, error = %err, "skipping orphan");
                    report.failed.push(MoveFailure {
                        path: orphan.as_path().to_path_buf(),
                        reason: err.to_string(),
                    });
                    continue;
                }
            };

            let replaces = self.fs.exists(&target) || planned.contains(&target);

            if !dry_run {
                if let Err(source) = self.fs.rename(orphan.as_path(), &target) {
                    let err = MoveError::Rename {
                        from: orphan.as_path().to_path_buf(),
                        to: target,
                        source,
                    };
                    warn!(error = %err, "skipping orphan");
                    report.failed.push(MoveFailure {
                        path: orphan.as_path().to_path_buf(),
                        reason: err.to_string(),
                    });
                    continue;
                }
            }

            if replaces {
                if self.naming.can_collide() {
                    warn!(
                        path = %orphan,
                        target = %target.display(),
                        "quarantine name collision, existing file replaced"
                    );
                } else {
                    warn!(
                        path = %orphan,
                        target = %target.display(),
                        naming = %self.naming,
                        "backup from an earlier run replaced"
                    );
                }
                report.overwritten += 1;
            }
            debug!(from = %orphan, to = %target.display(), dry_run, "quarantined");

            planned.insert(target.clone());
            report.moved.push(QuarantineRecord {
                from: orphan.as_path().to_path_buf(),
                to: target,
            });
        }

        info!(
            moved = report.moved.len(),
            failed = report.failed.len(),
            overwritten = report.overwritten,
            dry_run,
            "quarantine finished"
        );
        Ok(report)
    }
}
