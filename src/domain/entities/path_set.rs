//! Path sets: inventory, reference set and orphan set
//!
//! All three are ordered sets of `FilePath`, so iteration is lexicographic
//! and logging/tests see the same order on every run.

use std::collections::btree_set;
use std::collections::BTreeSet;

use crate::domain::value_objects::FilePath;

macro_rules! path_set {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name(BTreeSet<FilePath>);

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            /// Insert a path; returns false when it was already present
            pub fn insert(&mut self, path: FilePath) -> bool {
                self.0.insert(path)
            }

            pub fn contains(&self, path: &FilePath) -> bool {
                self.0.contains(path)
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            pub fn iter(&self) -> btree_set::Iter<'_, FilePath> {
                self.0.iter()
            }
        }

        impl FromIterator<FilePath> for $name {
            fn from_iter<I: IntoIterator<Item = FilePath>>(iter: I) -> Self {
                Self(iter.into_iter().collect())
            }
        }

        impl IntoIterator for $name {
            type Item = FilePath;
            type IntoIter = btree_set::IntoIter<FilePath>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a FilePath;
            type IntoIter = btree_set::Iter<'a, FilePath>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }
    };
}

path_set!(
    /// Every regular file found under the storage root
    Inventory
);

path_set!(
    /// Every file referenced by a content record, deduplicated
    ReferenceSet
);

path_set!(
    /// Inventory members that no record references
    OrphanSet
);
