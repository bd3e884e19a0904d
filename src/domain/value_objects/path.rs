//! File path value objects
//!
//! `FilePath` is the single representation shared by the inventory and the
//! reference set. Both sides go through the same lexical cleaning, otherwise
//! the set difference would compare unlike strings.

use std::ffi::OsStr;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// An absolute, lexically normalized path to one file
///
/// Ordering is by path components, which gives every set a stable
/// lexicographic iteration order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FilePath(PathBuf);

impl FilePath {
    /// Create a FilePath, normalizing `.`, `..` and repeated separators
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self(clean(path.as_ref()))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// The final component, if any
    pub fn file_name(&self) -> Option<&OsStr> {
        self.0.file_name()
    }

    /// Path below `root`, or None when this path is not inside it
    pub fn relative_to(&self, root: &Path) -> Option<&Path> {
        self.0.strip_prefix(root).ok()
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl AsRef<Path> for FilePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

/// Lexical cleanup; never touches the filesystem.
///
/// `..` pops a component but never climbs above the root.
pub fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Turns raw reference values into `FilePath`s
///
/// Relative values are resolved against `base`. Values that are already
/// absolute and inside `base` are kept; other absolute values are treated as
/// web paths (`/static/upload/a.jpg`) and re-rooted under `base`.
///
/// Apart from leading separators the value is taken byte for byte: a
/// trailing space or a backslash is part of a Unix file name, and the
/// inventory side keeps them too.
#[derive(Debug, Clone)]
pub struct PathNormalizer {
    base: PathBuf,
    aliases: Vec<(PathBuf, PathBuf)>,
}

impl PathNormalizer {
    pub fn new<P: AsRef<Path>>(base: P) -> Self {
        Self {
            base: clean(base.as_ref()),
            aliases: Vec::new(),
        }
    }

    /// Treat absolute values under `alias` as if they were written under
    /// `target`, e.g. a symlinked document root and its resolved form.
    pub fn with_alias<A: AsRef<Path>, T: AsRef<Path>>(mut self, alias: A, target: T) -> Self {
        let alias = clean(alias.as_ref());
        let target = clean(target.as_ref());
        if alias != target {
            self.aliases.push((alias, target));
        }
        self
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Normalize one raw value; `None` means "not a path"
    pub fn normalize(&self, raw: &str) -> Option<FilePath> {
        if raw.trim().is_empty() {
            return None;
        }

        let candidate = Path::new(raw);
        if candidate.is_absolute() {
            let cleaned = self.resolve_alias(clean(candidate));
            if cleaned.starts_with(&self.base) {
                return Some(FilePath(cleaned));
            }
        }

        let relative = raw.trim_start_matches('/');
        if relative.is_empty() {
            return None;
        }
        Some(FilePath::new(self.base.join(relative)))
    }

    fn resolve_alias(&self, path: PathBuf) -> PathBuf {
        for (alias, target) in &self.aliases {
            if let Ok(rest) = path.strip_prefix(alias) {
                return target.join(rest);
            }
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_drops_dot_and_duplicate_separators() {
        assert_eq!(
            clean(Path::new("/srv//www/./static/upload")),
            PathBuf::from("/srv/www/static/upload")
        );
    }

    #[test]
    fn clean_never_climbs_above_root() {
        assert_eq!(clean(Path::new("/../../etc")), PathBuf::from("/etc"));
        assert_eq!(clean(Path::new("/srv/a/../b")), PathBuf::from("/srv/b"));
    }

    #[test]
    fn normalize_rejects_empty_values() {
        let n = PathNormalizer::new("/srv/www");
        assert_eq!(n.normalize(""), None);
        assert_eq!(n.normalize("   "), None);
        assert_eq!(n.normalize("/"), None);
    }

    #[test]
    fn normalize_prefixes_relative_values() {
        let n = PathNormalizer::new("/srv/www");
        assert_eq!(
            n.normalize("static/upload/a.jpg"),
            Some(FilePath::new("/srv/www/static/upload/a.jpg"))
        );
    }

    #[test]
    fn normalize_reroots_web_paths() {
        let n = PathNormalizer::new("/srv/www");
        assert_eq!(
            n.normalize("/static/upload/image/20240101/a.jpg"),
            Some(FilePath::new("/srv/www/static/upload/image/20240101/a.jpg"))
        );
    }

    #[test]
    fn normalize_keeps_absolute_paths_inside_base() {
        let n = PathNormalizer::new("/srv/www");
        assert_eq!(
            n.normalize("/srv/www/static/upload/a.jpg"),
            Some(FilePath::new("/srv/www/static/upload/a.jpg"))
        );
    }

    #[test]
    fn normalize_keeps_backslashes_and_spaces_in_names() {
        let n = PathNormalizer::new("/srv/www");
        assert_eq!(
            n.normalize("/static/upload/a\\b.jpg"),
            Some(FilePath::new("/srv/www/static/upload/a\\b.jpg"))
        );
        assert_eq!(
            n.normalize("/static/upload/a.jpg "),
            Some(FilePath::new("/srv/www/static/upload/a.jpg "))
        );
        assert_ne!(n.normalize("a.jpg "), n.normalize("a.jpg"));
    }

    #[test]
    fn normalize_rebases_aliased_root() {
        let n = PathNormalizer::new("/srv/www").with_alias("/var/www", "/srv/www");
        assert_eq!(
            n.normalize("/var/www/static/upload/a.jpg"),
            Some(FilePath::new("/srv/www/static/upload/a.jpg"))
        );
        assert_eq!(
            n.normalize("/var/www/static/upload/../upload/a.jpg"),
            Some(FilePath::new("/srv/www/static/upload/a.jpg"))
        );
    }

    #[test]
    fn identical_alias_is_ignored() {
        let n = PathNormalizer::new("/srv/www").with_alias("/srv/www/", "/srv/www");
        assert!(n.aliases.is_empty());
    }

    #[test]
    fn equal_after_normalization() {
        assert_eq!(
            FilePath::new("/srv/www/static//upload/./a.jpg"),
            FilePath::new("/srv/www/static/upload/a.jpg")
        );
    }

    #[test]
    fn relative_to_root() {
        let p = FilePath::new("/srv/www/static/upload/dirA/x.jpg");
        assert_eq!(
            p.relative_to(Path::new("/srv/www/static/upload")),
            Some(Path::new("dirA/x.jpg"))
        );
        assert_eq!(p.relative_to(Path::new("/elsewhere")), None);
    }
}
