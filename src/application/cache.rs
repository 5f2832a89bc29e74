//! Manifest cache
//!
//! Maps absolute manifest paths to resolved models. Entries are never
//! evicted; `clear` exists for tests and for processes that want to force a
//! re-read (e.g. after a deploy).

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use crate::domain::entities::ManifestModel;

/// Path-keyed cache of resolved manifests.
///
/// The lock is only held for a lookup or an insert, never across a resolve,
/// so two callers missing on the same path at once both resolve and the
/// later insert wins.
#[derive(Debug, Default)]
pub struct ManifestCache {
    entries: Mutex<HashMap<PathBuf, Arc<ManifestModel>>>,
}

impl ManifestCache {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache used by [`crate::load`]
    pub fn global() -> Arc<ManifestCache> {
        static GLOBAL: OnceLock<Arc<ManifestCache>> = OnceLock::new();
        GLOBAL.get_or_init(|| Arc::new(ManifestCache::new())).clone()
    }

    pub fn get(&self, path: &Path) -> Option<Arc<ManifestModel>> {
        self.lock().get(path).cloned()
    }

    pub fn put(&self, path: &Path, model: Arc<ManifestModel>) {
        self.lock().insert(path.to_path_buf(), model);
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<PathBuf, Arc<ManifestModel>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
