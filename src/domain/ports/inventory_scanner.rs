//! InventoryScanner port
//!
//! Enumerates the regular files under a storage root.

use std::path::Path;

use crate::domain::entities::Inventory;
use crate::error::ScanError;

pub trait InventoryScanner {
    /// Walk `root` recursively and collect every regular file.
    ///
    /// Directories are never members. Read-only.
    fn scan(&self, root: &Path) -> Result<Inventory, ScanError>;
}

impl<T: InventoryScanner + ?Sized> InventoryScanner for &T {
    fn scan(&self, root: &Path) -> Result<Inventory, ScanError> {
        (**self).scan(root)
    }
}
