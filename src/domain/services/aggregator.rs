//! Reference aggregation
//!
//! Queries every provider, flattens its tree and normalizes each leaf into a
//! single deduplicated `ReferenceSet`.

use tracing::{debug, info};

use crate::domain::entities::ReferenceSet;
use crate::domain::ports::ReferenceProvider;
use crate::domain::value_objects::{ContentCategory, PathNormalizer, RawReference};
use crate::error::AggregationError;

/// Per-provider counters, logged at debug level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProviderStats {
    /// Leaves in the tree, placeholders included
    pub leaves: usize,
    /// Leaves that were empty or not a path
    pub skipped: usize,
    /// Paths that were new to the set
    pub added: usize,
}

/// Builds the reference set from a list of providers
pub struct ReferenceAggregator {
    providers: Vec<Box<dyn ReferenceProvider>>,
    normalizer: PathNormalizer,
}

impl ReferenceAggregator {
    pub fn new(normalizer: PathNormalizer) -> Self {
        Self {
            providers: Vec::new(),
            normalizer,
        }
    }

    pub fn with_providers(
        normalizer: PathNormalizer,
        providers: Vec<Box<dyn ReferenceProvider>>,
    ) -> Self {
        Self {
            providers,
            normalizer,
        }
    }

    /// Append one provider
    pub fn with_provider<P>(mut self, provider: P) -> Self
    where
        P: ReferenceProvider + 'static,
    {
        self.providers.push(Box::new(provider));
        self
    }

    pub fn categories(&self) -> Vec<ContentCategory> {
        self.providers.iter().map(|p| p.category()).collect()
    }

    /// Fetch every provider and merge the results.
    ///
    /// The first provider failure aborts the whole aggregation; an incomplete
    /// set would misclassify referenced files as orphans.
    pub fn aggregate(&self) -> Result<ReferenceSet, AggregationError> {
        let mut references = ReferenceSet::new();

        for provider in &self.providers {
            let category = provider.category();
            let tree = provider
                .fetch_references()
                .map_err(|source| AggregationError { category, source })?;

            let stats = self.merge(&tree, &mut references);
            debug!(
                category = %category,
                leaves = stats.leaves,
                skipped = stats.skipped,
                added = stats.added,
                "merged provider references"
            );
        }

        info!(
            providers = self.providers.len(),
            references = references.len(),
            "reference set built"
        );
        Ok(references)
    }

    /// Flatten one tree into `references`
    pub fn merge(&self, tree: &RawReference, references: &mut ReferenceSet) -> ProviderStats {
        let mut stats = ProviderStats {
            leaves: tree.leaf_count(),
            ..ProviderStats::default()
        };
        let mut paths = 0;

        tree.for_each_leaf(&mut |raw| match self.normalizer.normalize(raw) {
            Some(path) => {
                paths += 1;
                if references.insert(path) {
                    stats.added += 1;
                }
            }
            None => stats.skipped += 1,
        });

        stats.skipped += stats.leaves.saturating_sub(paths + stats.skipped);
        stats
    }
}
