//! Load Use Case implementation

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::application::cache::ManifestCache;
use crate::domain::entities::ManifestModel;
use crate::domain::ports::FileSystem;
use crate::error::ManifestResult;
use crate::infrastructure::fs::LocalFs;
use crate::infrastructure::repositories::JsonManifestReader;

use super::options::LoadOptions;
use super::resolver::BuildStatusResolver;

/// Loads manifests through a cache.
///
/// Outside debug mode the first successful load of a path is cached and
/// returned for every later call. Debug mode skips the cache in both
/// directions so every call re-reads the file.
#[derive(Debug, Clone)]
pub struct ManifestLoader {
    cache: Arc<ManifestCache>,
    resolver: BuildStatusResolver,
}

impl ManifestLoader {
    /// Loader over the local file system and the process-wide cache
    pub fn new() -> Self {
        Self::with_cache(ManifestCache::global())
    }

    /// Loader over the local file system and a caller-owned cache
    pub fn with_cache(cache: Arc<ManifestCache>) -> Self {
        Self::with_fs(cache, Arc::new(LocalFs::new()))
    }

    /// Loader over a custom file system (for testing)
    pub fn with_fs(cache: Arc<ManifestCache>, fs: Arc<dyn FileSystem>) -> Self {
        let source = Arc::new(JsonManifestReader::with_fs(fs.clone()));
        Self {
            cache,
            resolver: BuildStatusResolver::new(source, fs),
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.resolver = self.resolver.with_poll_interval(poll_interval);
        self
    }

    pub fn cache(&self) -> &Arc<ManifestCache> {
        &self.cache
    }

    pub fn load(
        &self,
        path: impl AsRef<Path>,
        options: &LoadOptions,
    ) -> ManifestResult<Arc<ManifestModel>> {
        let path = path.as_ref();

        if !options.debug {
            if let Some(model) = self.cache.get(path) {
                tracing::trace!(path = %path.display(), "manifest cache hit");
                return Ok(model);
            }
            tracing::trace!(path = %path.display(), "manifest cache miss");
        }

        let model = Arc::new(self.resolver.resolve(path, options)?);

        if !options.debug {
            tracing::debug!(path = %path.display(), "caching manifest");
            self.cache.put(path, model.clone());
        }

        Ok(model)
    }
}

impl Default for ManifestLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Load a manifest from the local file system through the process-wide cache
pub fn load(path: impl AsRef<Path>, options: &LoadOptions) -> ManifestResult<Arc<ManifestModel>> {
    ManifestLoader::new().load(path, options)
}
