//! ManifestModel entity - a successfully built manifest
//!
//! Entries are built the first time they are asked for and kept for the
//! lifetime of the model.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::StaticUrl;
use crate::error::{ManifestError, ManifestResult};

use super::entry::EntryGroup;
use super::raw_manifest::EntryFiles;

/// Resolved manifest with lazily built entries
#[derive(Debug)]
pub struct ManifestModel {
    path: PathBuf,
    static_url: StaticUrl,
    static_root: Option<PathBuf>,
    files: EntryFiles,
    entries: Mutex<HashMap<String, Arc<EntryGroup>>>,
    fs: Arc<dyn FileSystem>,
}

impl ManifestModel {
    /// Create a model from the entry files of a `built` manifest.
    ///
    /// An empty `static_root` counts as not supplied.
    pub fn new(
        path: impl Into<PathBuf>,
        files: EntryFiles,
        static_url: &str,
        static_root: Option<&Path>,
        fs: Arc<dyn FileSystem>,
    ) -> Self {
        Self {
            path: path.into(),
            static_url: StaticUrl::new(static_url),
            static_root: static_root
                .filter(|root| !root.as_os_str().is_empty())
                .map(Path::to_path_buf),
            files,
            entries: Mutex::new(HashMap::new()),
            fs,
        }
    }

    /// Look up an entry, building it on first access
    pub fn entry(&self, name: &str) -> ManifestResult<Arc<EntryGroup>> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(entry) = entries.get(name) {
            return Ok(entry.clone());
        }

        let rel_paths = self
            .files
            .get(name)
            .ok_or_else(|| ManifestError::UnknownEntry {
                entry: name.to_string(),
                path: self.path.clone(),
            })?;

        tracing::debug!(entry = name, files = rel_paths.len(), "building manifest entry");
        let entry = Arc::new(EntryGroup::build(
            rel_paths,
            &self.static_url,
            self.static_root.as_deref(),
            self.fs.clone(),
        ));
        entries.insert(name.to_string(), entry.clone());
        Ok(entry)
    }

    pub fn contains_entry(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    /// Names of every entry in the manifest, sorted
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// Absolute path of the manifest file this model was read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn static_url(&self) -> &StaticUrl {
        &self.static_url
    }

    pub fn static_root(&self) -> Option<&Path> {
        self.static_root.as_deref()
    }
}
