//! Named manifest lookup
//!
//! What a template layer calls: take a bundle name, find its configuration,
//! and load the manifest it points at.

use std::sync::Arc;

use crate::config::Config;
use crate::domain::entities::ManifestModel;
use crate::error::ManifestResult;

use super::load::ManifestLoader;

impl ManifestLoader {
    /// Load the manifest configured under `name`
    pub fn load_named(&self, config: &Config, name: &str) -> ManifestResult<Arc<ManifestModel>> {
        let (path, options) = config.bundle(name)?.load_options(name)?;
        tracing::debug!(bundle = name, path = %path.display(), debug = options.debug, "loading bundle");
        self.load(&path, &options)
    }
}

/// Load the manifest configured under `name` through the process-wide cache
pub fn load_webpack_manifest(config: &Config, name: &str) -> ManifestResult<Arc<ManifestModel>> {
    ManifestLoader::new().load_named(config, name)
}
