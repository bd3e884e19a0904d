//! Quarantine naming policy
//!
//! Decides which file name an orphan receives inside the flat backup root.

use std::ffi::{OsStr, OsString};
use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

/// How relocated files are named in the backup root
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum NamingPolicy {
    /// Bare base name. Orphans sharing a base name overwrite each other.
    #[default]
    #[value(alias = "base_name")]
    BaseName,
    /// Path below the storage root, `_` escaped as `_5F` and separators as `__`
    #[value(alias = "relative_path")]
    RelativePath,
    /// Truncated SHA-256 of the content, then the base name
    #[value(alias = "content_hash")]
    ContentHash,
}

impl NamingPolicy {
    /// Separator replacement used by `RelativePath`
    pub const ESCAPED_SEPARATOR: &'static str = "__";

    /// Underscore replacement used by `RelativePath`
    pub const ESCAPED_UNDERSCORE: &'static str = "_5F";

    /// Hex characters of the digest kept by `ContentHash`
    pub const HASH_PREFIX_LEN: usize = 16;

    /// Whether two distinct orphans can map to the same name
    pub fn can_collide(&self) -> bool {
        matches!(self, NamingPolicy::BaseName)
    }

    /// Escape a storage-relative path into a single file name.
    ///
    /// Both escapes start with `_` and differ in the second byte, so distinct
    /// paths always give distinct names.
    pub fn escape_relative(relative: &Path) -> OsString {
        let mut name = OsString::new();
        for component in relative.components() {
            let Component::Normal(part) = component else {
                continue;
            };
            if !name.is_empty() {
                name.push(Self::ESCAPED_SEPARATOR);
            }
            name.push(escape_underscores(part));
        }
        name
    }

    /// Name for the `ContentHash` policy
    pub fn hashed_name(hex_digest: &str, base_name: &OsStr) -> OsString {
        let prefix = hex_digest
            .get(..Self::HASH_PREFIX_LEN)
            .unwrap_or(hex_digest);
        let mut name = OsString::from(format!("{prefix}-"));
        name.push(base_name);
        name
    }
}

#[cfg(unix)]
fn escape_underscores(part: &OsStr) -> OsString {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let escaped = NamingPolicy::ESCAPED_UNDERSCORE.as_bytes();
    let mut out = Vec::with_capacity(part.len());
    for &byte in part.as_bytes() {
        if byte == b'_' {
            out.extend_from_slice(escaped);
        } else {
            out.push(byte);
        }
    }
    OsString::from_vec(out)
}

#[cfg(not(unix))]
fn escape_underscores(part: &OsStr) -> OsString {
    OsString::from(
        part.to_string_lossy()
            .replace('_', NamingPolicy::ESCAPED_UNDERSCORE),
    )
}

impl std::fmt::Display for NamingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NamingPolicy::BaseName => write!(f, "base_name"),
            NamingPolicy::RelativePath => write!(f, "relative_path"),
            NamingPolicy::ContentHash => write!(f, "content_hash"),
        }
    }
}

impl std::str::FromStr for NamingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "base_name" | "basename" => Ok(NamingPolicy::BaseName),
            "relative_path" => Ok(NamingPolicy::RelativePath),
            "content_hash" | "hash" => Ok(NamingPolicy::ContentHash),
            other => Err(format!("unknown naming policy '{other}'")),
        }
    }
}
