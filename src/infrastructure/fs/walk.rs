//! Storage root walker
//!
//! Implements the InventoryScanner port with `ignore::WalkBuilder`. All of
//! the crate's filters are switched off: hidden files and files matched by
//! ignore rules are still uploads.

use std::path::Path;

use ignore::WalkBuilder;
use tracing::{debug, info, warn};

use crate::domain::entities::Inventory;
use crate::domain::ports::InventoryScanner;
use crate::domain::value_objects::FilePath;
use crate::error::ScanError;

/// Recursive directory scanner
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkScanner {
    follow_links: bool,
}

impl WalkScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Follow symbolic links; cycles are detected and skipped
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.follow_links = yes;
        self
    }

    fn check_root(root: &Path) -> Result<(), ScanError> {
        let metadata = std::fs::metadata(root).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ScanError::RootNotFound {
                path: root.to_path_buf(),
            },
            _ => ScanError::Unreadable {
                path: root.to_path_buf(),
                source: e,
            },
        })?;

        if !metadata.is_dir() {
            return Err(ScanError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        std::fs::read_dir(root).map_err(|e| ScanError::Unreadable {
            path: root.to_path_buf(),
            source: e,
        })?;
        Ok(())
    }
}

impl InventoryScanner for WalkScanner {
    fn scan(&self, root: &Path) -> Result<Inventory, ScanError> {
        Self::check_root(root)?;

        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(self.follow_links)
            .build();

        let mut inventory = Inventory::new();
        let mut loops = 0usize;

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if is_loop(&err) => {
                    warn!(error = %err, "symlink cycle, branch skipped");
                    loops += 1;
                    continue;
                }
                Err(err) => {
                    return Err(ScanError::Walk {
                        root: root.to_path_buf(),
                        message: err.to_string(),
                    });
                }
            };

            if entry.file_type().is_some_and(|ft| ft.is_file()) {
                inventory.insert(FilePath::new(entry.path()));
            } else if entry.path_is_symlink() && !self.follow_links {
                debug!(path = %entry.path().display(), "symlink not followed");
            }
        }

        info!(
            root = %root.display(),
            files = inventory.len(),
            loops,
            "inventory scanned"
        );
        Ok(inventory)
    }
}

fn is_loop(err: &ignore::Error) -> bool {
    match err {
        ignore::Error::Loop { .. } => true,
        ignore::Error::WithPath { err, .. }
        | ignore::Error::WithDepth { err, .. }
        | ignore::Error::WithLineNumber { err, .. } => is_loop(err),
        ignore::Error::Partial(errs) => !errs.is_empty() && errs.iter().all(is_loop),
        _ => false,
    }
}
