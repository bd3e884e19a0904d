//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::value_objects::NamingPolicy;
use crate::error::{ReconcilerError, ReconcilerResult};

use super::types::Config;

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "reconciler.toml";

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "UPLOAD_RECONCILER_";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ReconcilerResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| ReconcilerError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ReconcilerError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from an explicit file, `./reconciler.toml`, the user config, or
/// defaults, then apply environment overrides.
///
/// An explicit file must exist; the implicit locations are optional.
pub fn load_or_default(explicit: Option<&Path>) -> ReconcilerResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        debug!(config = %path.display(), "loading explicit config");
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    for candidate in implicit_locations() {
        if candidate.is_file() {
            debug!(config = %candidate.display(), "loading config");
            let (config, warnings) = load_with_warnings(&candidate)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    debug!("no config file found, using defaults");
    Ok((with_env_overrides(Config::default()), Vec::new()))
}

fn implicit_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("upload-reconciler").join("config.toml"));
    }
    locations
}

/// Apply environment variable overrides (UPLOAD_RECONCILER_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(format!("{ENV_PREFIX}{name}")).ok())
}

/// Apply overrides from `lookup`, keyed by the variable name without prefix
pub(crate) fn apply_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(root) = lookup("DOCUMENT_ROOT") {
        config.paths.document_root = PathBuf::from(root);
    }

    if let Some(dir) = lookup("STATIC_DIR") {
        config.paths.static_dir = dir;
    }

    if let Some(dir) = lookup("REFERENCES_DIR") {
        config.references.dir = PathBuf::from(dir);
    }

    if let Some(naming) = lookup("NAMING") {
        match naming.parse::<NamingPolicy>() {
            Ok(policy) => config.quarantine.naming = policy,
            Err(e) => warn!("ignoring {ENV_PREFIX}NAMING: {e}"),
        }
    }

    if let Some(val) = lookup("FOLLOW_LINKS") {
        config.scan.follow_links = parse_flag(&val);
    }

    config
}

fn parse_flag(val: &str) -> bool {
    let val = val.trim().to_lowercase();
    val != "false" && val != "0" && !val.is_empty()
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "paths",
        "document_root",
        "static_dir",
        "references",
        "dir",
        "base",
        "allow_missing",
        "scan",
        "follow_links",
        "quarantine",
        "naming",
        "lock",
        "wait",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
