//! TypedAssetGroup entity - one entry's files of a single kind
//!
//! A group keeps the relative URLs in manifest order, the rendered tags for
//! those URLs, and (only when a static root is known) the absolute paths of
//! the same files so their content can be inlined.

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{rel_url_from_path, AssetKind, StaticUrl};
use crate::error::{ManifestError, ManifestResult};

/// Message returned when content is requested without a static root
pub const MISSING_STATIC_ROOT: &str = "Provide static_root to access webpack entry content.";

/// Files of one [`AssetKind`] within an entry
#[derive(Debug)]
pub struct TypedAssetGroup {
    kind: AssetKind,
    static_url: StaticUrl,
    static_root: Option<PathBuf>,
    rel_urls: Vec<String>,
    output: String,
    /// Parallel to `rel_urls`; `None` when no static root was supplied
    paths: Option<Vec<PathBuf>>,
    content: OnceLock<String>,
    fs: Arc<dyn FileSystem>,
}

impl TypedAssetGroup {
    pub(crate) fn new(
        kind: AssetKind,
        static_url: StaticUrl,
        static_root: Option<&Path>,
        fs: Arc<dyn FileSystem>,
    ) -> Self {
        Self {
            kind,
            static_url,
            static_root: static_root.map(Path::to_path_buf),
            rel_urls: Vec::new(),
            output: String::new(),
            paths: static_root.map(|_| Vec::new()),
            content: OnceLock::new(),
            fs,
        }
    }

    pub(crate) fn add_file(&mut self, rel_path: &str) {
        let rel_url = rel_url_from_path(rel_path);
        self.output
            .push_str(&self.kind.render_tag(&self.static_url.join(&rel_url)));
        self.rel_urls.push(rel_url);
        if let (Some(root), Some(paths)) = (&self.static_root, &mut self.paths) {
            paths.push(root.join(rel_path));
        }
    }

    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    /// Relative URLs, in manifest order
    pub fn urls(&self) -> &[String] {
        &self.rel_urls
    }

    /// Rendered tags for every file, concatenated
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Absolute file paths, present only when a static root was supplied
    pub fn paths(&self) -> Option<&[PathBuf]> {
        self.paths.as_deref()
    }

    pub fn len(&self) -> usize {
        self.rel_urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rel_urls.is_empty()
    }

    /// Raw content of every file joined with `\n`, read once and memoized.
    pub fn content(&self) -> ManifestResult<&str> {
        if let Some(content) = self.content.get() {
            return Ok(content);
        }

        let paths = self
            .paths
            .as_ref()
            .ok_or_else(|| ManifestError::config(MISSING_STATIC_ROOT))?;

        let mut buffer = Vec::with_capacity(paths.len());
        for path in paths {
            let text = self.fs.read(path).map_err(|source| ManifestError::Io {
                path: path.clone(),
                source,
            })?;
            buffer.push(text);
        }
        tracing::debug!(kind = %self.kind, files = paths.len(), "read entry content");

        Ok(self.content.get_or_init(|| buffer.join("\n")))
    }

    /// Content wrapped in an inline element, or empty when there is none
    pub fn inline(&self) -> ManifestResult<String> {
        let content = self.content()?;
        if content.is_empty() {
            Ok(String::new())
        } else {
            Ok(self.kind.render_inline(content))
        }
    }
}

impl std::fmt::Display for TypedAssetGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fs::MemoryFs;

    fn group(static_root: Option<&Path>, fs: &Arc<MemoryFs>) -> TypedAssetGroup {
        let fs: Arc<dyn FileSystem> = fs.clone();
        TypedAssetGroup::new(
            AssetKind::Script,
            StaticUrl::new("/static/"),
            static_root,
            fs,
        )
    }

    #[test]
    fn add_file_renders_tag_and_keeps_order() {
        let fs = Arc::new(MemoryFs::new());
        let mut scripts = group(None, &fs);
        scripts.add_file("foo/bar.js");
        scripts.add_file("woz/bar.js");

        assert_eq!(scripts.urls(), ["foo/bar.js", "woz/bar.js"]);
        assert_eq!(
            scripts.output(),
            "<script src=\"/static/foo/bar.js\"></script><script src=\"/static/woz/bar.js\"></script>"
        );
        assert_eq!(scripts.to_string(), scripts.output());
        assert!(scripts.paths().is_none());
    }

    #[test]
    fn duplicates_are_kept() {
        let fs = Arc::new(MemoryFs::new());
        let mut scripts = group(None, &fs);
        scripts.add_file("a.js");
        scripts.add_file("a.js");

        assert_eq!(scripts.len(), 2);
    }

    #[test]
    fn paths_parallel_urls_with_static_root() {
        let fs = Arc::new(MemoryFs::new());
        let mut scripts = group(Some(Path::new("/srv/static")), &fs);
        scripts.add_file("foo/bar.js");
        scripts.add_file("woz/bar.js");

        let paths = scripts.paths().unwrap();
        assert_eq!(paths.len(), scripts.urls().len());
        assert_eq!(paths[0], Path::new("/srv/static/foo/bar.js"));
        assert_eq!(paths[1], Path::new("/srv/static/woz/bar.js"));
    }

    #[test]
    fn content_without_static_root_is_config_error() {
        let fs = Arc::new(MemoryFs::new());
        let mut scripts = group(None, &fs);
        scripts.add_file("foo/bar.js");

        let err = scripts.content().unwrap_err();
        assert!(matches!(err, ManifestError::Config { .. }));
        assert_eq!(err.to_string(), MISSING_STATIC_ROOT);
    }

    #[test]
    fn content_joins_files_and_is_memoized() {
        let fs = Arc::new(MemoryFs::new());
        fs.insert("/srv/static/foo/bar.js", "foo_bar=1\n");
        fs.insert("/srv/static/woz/bar.js", "woz_bar=1\n");

        let mut scripts = group(Some(Path::new("/srv/static")), &fs);
        scripts.add_file("foo/bar.js");
        scripts.add_file("woz/bar.js");

        assert_eq!(scripts.content().unwrap(), "foo_bar=1\n\nwoz_bar=1\n");
        assert_eq!(scripts.content().unwrap(), "foo_bar=1\n\nwoz_bar=1\n");
        assert_eq!(fs.read_count("/srv/static/foo/bar.js"), 1);
        assert_eq!(
            scripts.inline().unwrap(),
            "<script>foo_bar=1\n\nwoz_bar=1\n</script>"
        );
    }

    #[test]
    fn empty_group_content_does_not_touch_filesystem() {
        let fs = Arc::new(MemoryFs::new());
        let scripts = group(Some(Path::new("/srv/static")), &fs);

        assert_eq!(scripts.content().unwrap(), "");
        assert_eq!(scripts.inline().unwrap(), "");
        assert_eq!(fs.total_reads(), 0);
    }

    #[test]
    fn missing_content_file_is_io_error() {
        let fs = Arc::new(MemoryFs::new());
        let mut scripts = group(Some(Path::new("/srv/static")), &fs);
        scripts.add_file("gone.js");

        let err = scripts.content().unwrap_err();
        assert!(matches!(err, ManifestError::Io { .. }));
    }
}
