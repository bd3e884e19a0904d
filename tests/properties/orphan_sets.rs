//! Property tests for orphan detection set algebra.

use proptest::prelude::*;

use upload_reconciler::domain::entities::{Inventory, ReferenceSet};
use upload_reconciler::domain::services::DifferenceEngine;
use upload_reconciler::FilePath;

fn file_path() -> impl Strategy<Value = FilePath> {
    proptest::collection::vec("[a-d]{1,2}", 1..=3)
        .prop_map(|parts| FilePath::new(format!("/srv/www/static/upload/{}", parts.join("/"))))
}

fn path_sets() -> impl Strategy<Value = (Inventory, ReferenceSet)> {
    (
        proptest::collection::vec(file_path(), 0..24),
        proptest::collection::vec(file_path(), 0..24),
    )
        .prop_map(|(inventory, references)| {
            let inventory: Inventory = inventory.into_iter().collect();
            let references: ReferenceSet = references.into_iter().collect();
            (inventory, references)
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: OrphanSet ∩ ReferenceSet = ∅.
    #[test]
    fn property_orphans_are_never_referenced((inventory, references) in path_sets()) {
        let orphans = DifferenceEngine::orphans(&inventory, &references);
        for orphan in &orphans {
            prop_assert!(!references.contains(orphan));
        }
    }

    /// PROPERTY: OrphanSet ⊆ Inventory and Inventory \ OrphanSet = Inventory ∩ ReferenceSet.
    #[test]
    fn property_orphans_partition_inventory((inventory, references) in path_sets()) {
        let orphans = DifferenceEngine::orphans(&inventory, &references);

        for orphan in &orphans {
            prop_assert!(inventory.contains(orphan));
        }
        for path in &inventory {
            prop_assert_eq!(orphans.contains(path), !references.contains(path));
        }
    }

    /// PROPERTY: Orphans iterate in lexicographic order.
    #[test]
    fn property_orphans_are_sorted((inventory, references) in path_sets()) {
        let orphans: Vec<FilePath> = DifferenceEngine::orphans(&inventory, &references)
            .into_iter()
            .collect();
        let mut sorted = orphans.clone();
        sorted.sort();
        prop_assert_eq!(orphans, sorted);
    }

    /// PROPERTY: Detection counts add up on both sides.
    #[test]
    fn property_detection_counts_balance((inventory, references) in path_sets()) {
        let detection = DifferenceEngine::detect(&inventory, &references);
        prop_assert_eq!(detection.orphans.len() + detection.retained, inventory.len());
        prop_assert_eq!(detection.retained + detection.dangling, references.len());
    }

    /// PROPERTY: A second pass over the surviving inventory finds no orphans.
    #[test]
    fn property_reconcile_is_idempotent((inventory, references) in path_sets()) {
        let orphans = DifferenceEngine::orphans(&inventory, &references);
        let survivors: Inventory = inventory
            .iter()
            .filter(|p| !orphans.contains(p))
            .cloned()
            .collect();
        prop_assert!(DifferenceEngine::orphans(&survivors, &references).is_empty());
    }
}
