//! Property tests for splitting an entry's files by kind.

use std::sync::Arc;

use proptest::prelude::*;

use webpack_manifest::domain::entities::EntryGroup;
use webpack_manifest::domain::value_objects::{AssetKind, StaticUrl};
use webpack_manifest::infrastructure::MemoryFs;

fn rel_path() -> impl Strategy<Value = String> {
    let stem = proptest::string::string_regex("[a-z0-9_-]{1,8}(/[a-z0-9_-]{1,8}){0,2}").unwrap();
    let ext = prop_oneof![
        Just("js"),
        Just("css"),
        Just("JS"),
        Just("map"),
        Just("png"),
        Just("js.map"),
    ];
    (stem, ext).prop_map(|(stem, ext)| format!("{}.{}", stem, ext))
}

fn build(paths: &[String]) -> EntryGroup {
    EntryGroup::build(
        paths,
        &StaticUrl::new("/static/"),
        None,
        Arc::new(MemoryFs::new()),
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Each group keeps exactly the files of its kind, in manifest order.
    #[test]
    fn property_groups_partition_in_order(
        paths in proptest::collection::vec(rel_path(), 0..12)
    ) {
        let entry = build(&paths);

        for kind in AssetKind::ALL {
            let expected: Vec<&str> = paths
                .iter()
                .filter(|p| AssetKind::for_path(p) == Some(kind))
                .map(String::as_str)
                .collect();
            let urls: Vec<&str> = entry.group(kind).urls().iter().map(String::as_str).collect();
            prop_assert_eq!(urls, expected);
        }
    }

    /// PROPERTY: Unsupported extensions never reach either group.
    #[test]
    fn property_unsupported_files_dropped(
        paths in proptest::collection::vec(rel_path(), 0..12)
    ) {
        let entry = build(&paths);
        let supported = paths.iter().filter(|p| AssetKind::for_path(p).is_some()).count();

        prop_assert_eq!(entry.script().len() + entry.stylesheet().len(), supported);
        prop_assert_eq!(entry.rel_paths(), paths.as_slice());
    }

    /// PROPERTY: The rendered output holds one element per file.
    #[test]
    fn property_output_has_one_tag_per_file(
        paths in proptest::collection::vec(rel_path(), 0..12)
    ) {
        let entry = build(&paths);

        prop_assert_eq!(
            entry.script().output().matches("<script src=").count(),
            entry.script().len()
        );
        prop_assert_eq!(
            entry.stylesheet().output().matches("<link rel=").count(),
            entry.stylesheet().len()
        );
    }
}
