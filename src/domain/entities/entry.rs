//! EntryGroup entity - every built file of one named entry, split by kind

use std::path::Path;
use std::sync::Arc;

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{AssetKind, StaticUrl};

use super::asset_group::TypedAssetGroup;

/// Files of one manifest entry.
///
/// Built eagerly from the entry's relative paths. Paths whose extension is
/// not a supported [`AssetKind`] are skipped.
#[derive(Debug)]
pub struct EntryGroup {
    rel_paths: Vec<String>,
    static_url: StaticUrl,
    script: TypedAssetGroup,
    stylesheet: TypedAssetGroup,
}

impl EntryGroup {
    pub fn build(
        rel_paths: &[String],
        static_url: &StaticUrl,
        static_root: Option<&Path>,
        fs: Arc<dyn FileSystem>,
    ) -> Self {
        let mut entry = Self {
            rel_paths: rel_paths.to_vec(),
            static_url: static_url.clone(),
            script: TypedAssetGroup::new(
                AssetKind::Script,
                static_url.clone(),
                static_root,
                fs.clone(),
            ),
            stylesheet: TypedAssetGroup::new(
                AssetKind::Stylesheet,
                static_url.clone(),
                static_root,
                fs,
            ),
        };

        for rel_path in rel_paths {
            if let Some(kind) = AssetKind::for_path(rel_path) {
                entry.group_mut(kind).add_file(rel_path);
            }
        }

        entry
    }

    pub fn group(&self, kind: AssetKind) -> &TypedAssetGroup {
        match kind {
            AssetKind::Script => &self.script,
            AssetKind::Stylesheet => &self.stylesheet,
        }
    }

    fn group_mut(&mut self, kind: AssetKind) -> &mut TypedAssetGroup {
        match kind {
            AssetKind::Script => &mut self.script,
            AssetKind::Stylesheet => &mut self.stylesheet,
        }
    }

    pub fn script(&self) -> &TypedAssetGroup {
        &self.script
    }

    pub fn stylesheet(&self) -> &TypedAssetGroup {
        &self.stylesheet
    }

    /// Paths exactly as listed in the manifest, including skipped ones
    pub fn rel_paths(&self) -> &[String] {
        &self.rel_paths
    }

    pub fn static_url(&self) -> &StaticUrl {
        &self.static_url
    }

    /// Script URLs (older name for `script().urls()`)
    pub fn rel_js(&self) -> &[String] {
        self.script.urls()
    }

    /// Stylesheet URLs (older name for `stylesheet().urls()`)
    pub fn rel_css(&self) -> &[String] {
        self.stylesheet.urls()
    }
}
