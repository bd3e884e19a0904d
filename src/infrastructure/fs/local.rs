//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs::File;
use std::io;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(|e| FsError::at(path, e))
    }

    fn rename(&self, from: &Path, to: &Path) -> FsResult<()> {
        std::fs::rename(from, to).map_err(|e| FsError::at(from, e))
    }

    fn hash(&self, path: &Path) -> FsResult<String> {
        let mut file = File::open(path).map_err(|e| FsError::at(path, e))?;
        let mut hasher = Sha256::new();
        io::copy(&mut file, &mut hasher).map_err(|e| FsError::at(path, e))?;
        Ok(format!("{:x}", hasher.finalize()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn local_fs_exists_and_is_dir() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("exists.txt");
        let fs = LocalFs::new();

        assert!(!fs.exists(&file));
        std::fs::write(&file, "content").unwrap();

        assert!(fs.exists(&file));
        assert!(!fs.is_dir(&file));
        assert!(fs.is_dir(dir.path()));
    }

    #[test]
    fn local_fs_rename_moves_file() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("a.jpg");
        let to = dir.path().join("b.jpg");
        std::fs::write(&from, "img").unwrap();
        let fs = LocalFs::new();

        fs.rename(&from, &to).unwrap();

        assert!(!from.exists());
        assert_eq!(std::fs::read_to_string(&to).unwrap(), "img");
    }

    #[test]
    fn local_fs_rename_replaces_existing_target() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("a.jpg");
        let to = dir.path().join("b.jpg");
        std::fs::write(&from, "new").unwrap();
        std::fs::write(&to, "old").unwrap();

        LocalFs::new().rename(&from, &to).unwrap();

        assert_eq!(std::fs::read_to_string(&to).unwrap(), "new");
    }

    #[test]
    fn local_fs_rename_missing_source() {
        let dir = tempdir().unwrap();
        let err = LocalFs::new()
            .rename(&dir.path().join("gone.jpg"), &dir.path().join("x.jpg"))
            .unwrap_err();
        assert!(matches!(err, FsError::NotFound(p) if p.ends_with("gone.jpg")));
    }

    #[test]
    fn local_fs_create_dir_all() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("c");
        let fs = LocalFs::new();

        fs.create_dir_all(&nested).unwrap();

        assert!(nested.exists());
    }

    #[test]
    fn local_fs_hash() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("hash.txt");
        std::fs::write(&file, "hello").unwrap();

        let hash = LocalFs::new().hash(&file).unwrap();

        assert_eq!(
            hash,
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }
}
