//! JSON export reference provider
//!
//! Each content category is exported to `<dir>/<category>.json`. The export
//! holds the raw image field values of every record in whatever shape the
//! records have: nested arrays, objects, nulls and empty strings are fine.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::ports::{ProviderError, ReferenceProvider};
use crate::domain::value_objects::{ContentCategory, RawReference};

/// Reads one category's export file
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    category: ContentCategory,
    path: PathBuf,
    allow_missing: bool,
}

impl JsonFileProvider {
    pub fn new(category: ContentCategory, path: impl Into<PathBuf>) -> Self {
        Self {
            category,
            path: path.into(),
            allow_missing: false,
        }
    }

    /// Provider for `category` inside an export directory
    pub fn in_dir(category: ContentCategory, dir: &Path) -> Self {
        Self::new(category, dir.join(category.export_file_name()))
    }

    /// Treat a missing export as "no references" instead of an error
    pub fn allow_missing(mut self, yes: bool) -> Self {
        self.allow_missing = yes;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReferenceProvider for JsonFileProvider {
    fn category(&self) -> ContentCategory {
        self.category
    }

    fn fetch_references(&self) -> Result<RawReference, ProviderError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if self.allow_missing {
                    debug!(category = %self.category, path = %self.path.display(), "export missing, treated as empty");
                    return Ok(RawReference::Empty);
                }
                return Err(ProviderError::NotFound {
                    path: self.path.clone(),
                });
            }
            Err(e) => {
                return Err(ProviderError::Read {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        let value: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| ProviderError::Parse {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        Ok(RawReference::from(value))
    }
}

/// One provider per category, all reading from `dir`
pub fn file_providers(dir: &Path, allow_missing: bool) -> Vec<Box<dyn ReferenceProvider>> {
    ContentCategory::ALL
        .iter()
        .map(|category| {
            Box::new(JsonFileProvider::in_dir(*category, dir).allow_missing(allow_missing))
                as Box<dyn ReferenceProvider>
        })
        .collect()
}
