//! Orphan detection
//!
//! Pure set subtraction over already-normalized paths. No I/O.

use crate::domain::entities::{Inventory, OrphanSet, ReferenceSet};

/// Result of comparing the inventory with the reference set
#[derive(Debug, Clone, Default)]
pub struct OrphanDetection {
    /// Files nothing references, in lexicographic order
    pub orphans: OrphanSet,
    /// Inventory files that are still referenced
    pub retained: usize,
    /// References that point at no file on disk
    pub dangling: usize,
}

pub struct DifferenceEngine;

impl DifferenceEngine {
    /// OrphanSet = Inventory - ReferenceSet
    pub fn orphans(inventory: &Inventory, references: &ReferenceSet) -> OrphanSet {
        inventory
            .iter()
            .filter(|path| !references.contains(path))
            .cloned()
            .collect()
    }

    /// Orphans plus the counts on either side of the intersection
    pub fn detect(inventory: &Inventory, references: &ReferenceSet) -> OrphanDetection {
        let orphans = Self::orphans(inventory, references);
        let retained = inventory.len() - orphans.len();
        OrphanDetection {
            dangling: references.len() - retained,
            retained,
            orphans,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::FilePath;

    fn inventory(paths: &[&str]) -> Inventory {
        paths.iter().map(FilePath::new).collect()
    }

    fn references(paths: &[&str]) -> ReferenceSet {
        paths.iter().map(FilePath::new).collect()
    }

    #[test]
    fn subtracts_referenced_files() {
        let inv = inventory(&["/u/a.jpg", "/u/b.jpg", "/u/c.jpg"]);
        let refs = references(&["/u/a.jpg"]);

        let orphans = DifferenceEngine::orphans(&inv, &refs);
        let names: Vec<String> = orphans.iter().map(|p| p.to_string()).collect();
        assert_eq!(names, vec!["/u/b.jpg", "/u/c.jpg"]);
    }

    #[test]
    fn dangling_references_are_ignored() {
        let inv = inventory(&["/u/a.jpg"]);
        let refs = references(&["/u/a.jpg", "/u/gone.jpg"]);

        let detection = DifferenceEngine::detect(&inv, &refs);
        assert!(detection.orphans.is_empty());
        assert_eq!(detection.retained, 1);
        assert_eq!(detection.dangling, 1);
    }

    #[test]
    fn empty_reference_set_orphans_everything() {
        let inv = inventory(&["/u/a.jpg", "/u/x/b.jpg"]);
        let orphans = DifferenceEngine::orphans(&inv, &ReferenceSet::new());
        assert_eq!(orphans.len(), 2);
    }
}
