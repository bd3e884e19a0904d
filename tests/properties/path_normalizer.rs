//! Property tests for reference path normalization.

use std::path::{Component, Path};

use proptest::prelude::*;

use upload_reconciler::domain::value_objects::{clean, PathNormalizer};

// The space keeps generated segments from ever spelling the base itself
const BASE: &str = "/srv/doc root";

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-][A-Za-z0-9._-]{0,11}").unwrap()
}

/// Relative paths made of plain names only (no `.` or `..`)
fn plain_relative() -> impl Strategy<Value = String> {
    proptest::collection::vec(segment(), 1..=5).prop_map(|segments| segments.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Normalization never panics on arbitrary input.
    #[test]
    fn property_normalize_never_panics(raw in "(?s).{0,256}") {
        let normalizer = PathNormalizer::new(BASE);
        let _ = normalizer.normalize(&raw);
    }

    /// PROPERTY: Every produced path is absolute and free of `.`/`..`.
    #[test]
    fn property_normalized_paths_are_absolute_and_clean(raw in "[A-Za-z0-9./\\\\ _-]{0,64}") {
        let normalizer = PathNormalizer::new(BASE);
        if let Some(path) = normalizer.normalize(&raw) {
            prop_assert!(path.as_path().is_absolute());
            prop_assert!(path
                .as_path()
                .components()
                .all(|c| !matches!(c, Component::CurDir | Component::ParentDir)));
        }
    }

    /// PROPERTY: Whitespace-only values are never paths.
    #[test]
    fn property_blank_is_not_a_path(raw in "[ \t\r\n]{0,16}") {
        let normalizer = PathNormalizer::new(BASE);
        prop_assert!(normalizer.normalize(&raw).is_none());
    }

    /// PROPERTY: Web paths and their relative spelling land on the same file.
    #[test]
    fn property_leading_slash_is_irrelevant(relative in plain_relative()) {
        let normalizer = PathNormalizer::new(BASE);
        let with_slash = normalizer.normalize(&format!("/{relative}"));
        let without = normalizer.normalize(&relative);
        prop_assert_eq!(with_slash.clone(), without);
        prop_assert_eq!(
            with_slash.map(|p| p.into_path_buf()),
            Some(Path::new(BASE).join(&relative))
        );
    }

    /// PROPERTY: Normalizing an already-normalized path is a no-op.
    #[test]
    fn property_normalize_is_idempotent(relative in plain_relative()) {
        let normalizer = PathNormalizer::new(BASE);
        let once = normalizer.normalize(&relative).unwrap();
        let twice = normalizer.normalize(&once.to_string()).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: A value naming a file exactly lands on that file, even when
    /// its last segment carries backslashes or trailing spaces.
    #[test]
    fn property_file_names_are_taken_verbatim(
        dir in plain_relative(),
        name in "[A-Za-z0-9\\\\ ._-]{0,12}[A-Za-z0-9]\\\\?[ ]{0,3}",
    ) {
        let normalizer = PathNormalizer::new(BASE);
        let expected = clean(&Path::new(BASE).join(&dir).join(&name));
        prop_assert_eq!(
            normalizer.normalize(&format!("/{dir}/{name}")).map(|p| p.into_path_buf()),
            Some(expected)
        );
    }

    /// PROPERTY: `clean` is idempotent.
    #[test]
    fn property_clean_is_idempotent(raw in "[a-z./]{0,48}") {
        let once = clean(Path::new(&raw));
        prop_assert_eq!(clean(&once), once.clone());
    }
}
