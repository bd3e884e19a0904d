//! In-memory reference provider
//!
//! For embedding callers that already hold their records in memory, and for
//! tests.

use crate::domain::ports::{ProviderError, ReferenceProvider};
use crate::domain::value_objects::{ContentCategory, RawReference};

#[derive(Debug, Clone)]
pub struct StaticProvider {
    category: ContentCategory,
    tree: RawReference,
}

impl StaticProvider {
    pub fn new(category: ContentCategory, tree: RawReference) -> Self {
        Self { category, tree }
    }

    /// A provider whose records reference nothing
    pub fn empty(category: ContentCategory) -> Self {
        Self::new(category, RawReference::Nodes(Vec::new()))
    }

    /// Leaves given as plain strings; empty strings stay placeholders
    pub fn from_paths<I, S>(category: ContentCategory, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            category,
            RawReference::nodes(paths.into_iter().map(|p| RawReference::Leaf(p.into()))),
        )
    }
}

impl ReferenceProvider for StaticProvider {
    fn category(&self) -> ContentCategory {
        self.category
    }

    fn fetch_references(&self) -> Result<RawReference, ProviderError> {
        Ok(self.tree.clone())
    }
}
