//! ReferenceProvider port
//!
//! One provider per content category. Each exposes a single read-only
//! operation returning the raw reference tree for all of its records.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::value_objects::{ContentCategory, RawReference};

/// Errors a provider can report
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("reference export not found: {path}")]
    NotFound { path: PathBuf },

    #[error("cannot read reference export {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed reference export {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("reference source unavailable: {message}")]
    Unavailable { message: String },
}

/// Source of image references for one content category
pub trait ReferenceProvider {
    /// Category this provider covers
    fn category(&self) -> ContentCategory;

    /// Fetch the full, possibly nested, reference tree
    fn fetch_references(&self) -> Result<RawReference, ProviderError>;
}

impl<T: ReferenceProvider + ?Sized> ReferenceProvider for Box<T> {
    fn category(&self) -> ContentCategory {
        (**self).category()
    }

    fn fetch_references(&self) -> Result<RawReference, ProviderError> {
        (**self).fetch_references()
    }
}
