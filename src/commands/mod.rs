//! Command handlers

pub mod inventory;
pub mod reconcile;
pub mod references;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;
use upload_reconciler::{Config, LocalReport};

/// Load the layered config; a `--document-root` flag beats everything else
pub fn load_config(explicit: Option<&Path>, document_root: Option<&Path>) -> Result<Config> {
    let (mut config, warnings) =
        Config::load_or_default(explicit).context("failed to load configuration")?;

    for warning in &warnings {
        warn!("{warning}");
    }

    if let Some(root) = document_root {
        config.paths.document_root = root.to_path_buf();
    }

    Ok(config)
}

/// Build the report wired to the local filesystem
pub fn build_report(config: &Config) -> Result<LocalReport> {
    LocalReport::from_config(config).context("failed to resolve paths")
}
