//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::application::LoadOptions;
use crate::domain::value_objects::ConfigWarning;
use crate::error::{ManifestError, ManifestResult};

use super::loader;

/// Keys every manifest bundle must define
pub const REQUIRED_KEYS: [&str; 3] = ["path", "static_url", "static_root"];

/// One named manifest bundle.
///
/// Every field is optional at the serde level so a missing required key is
/// reported with the bundle name instead of a bare TOML error.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ManifestConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,

    #[serde(default)]
    pub static_url: Option<String>,

    #[serde(default)]
    pub static_root: Option<PathBuf>,

    #[serde(default)]
    pub debug: Option<bool>,

    /// Seconds
    #[serde(default)]
    pub timeout: Option<f64>,

    /// Seconds
    #[serde(default)]
    pub read_retry: Option<f64>,
}

impl ManifestConfig {
    /// Turn this bundle into a manifest path and load options
    pub fn load_options(&self, name: &str) -> ManifestResult<(PathBuf, LoadOptions)> {
        let missing = |key: &str| {
            ManifestError::config(format!(
                "\"{}\" has not been defined in manifests.{}",
                key, name
            ))
        };

        let path = self.path.clone().ok_or_else(|| missing("path"))?;
        let static_url = self.static_url.clone().ok_or_else(|| missing("static_url"))?;
        let static_root = self.static_root.clone().ok_or_else(|| missing("static_root"))?;

        let mut options = LoadOptions::new(static_url)
            .with_debug(self.debug.unwrap_or(false))
            .with_static_root(static_root);
        if let Some(timeout) = self.timeout {
            options = options.with_timeout(seconds(name, "timeout", timeout)?);
        }
        if let Some(read_retry) = self.read_retry {
            options = options.with_read_retry(Some(seconds(name, "read_retry", read_retry)?));
        }

        Ok((path, options))
    }
}

fn seconds(name: &str, key: &str, value: f64) -> ManifestResult<Duration> {
    Duration::try_from_secs_f64(value).map_err(|_| {
        ManifestError::config(format!(
            "\"{}\" in manifests.{} must be a non-negative number of seconds, got {}",
            key, name, value
        ))
    })
}

/// Full configuration: manifest bundles keyed by name
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub manifests: BTreeMap<String, ManifestConfig>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ManifestResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ManifestResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (WEBPACK_MANIFEST_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Look up a bundle by name
    pub fn bundle(&self, name: &str) -> ManifestResult<&ManifestConfig> {
        self.manifests.get(name).ok_or_else(|| {
            ManifestError::config(format!("\"{}\" has not been defined in manifests", name))
        })
    }

    /// Names of all configured bundles, sorted
    pub fn bundle_names(&self) -> impl Iterator<Item = &str> {
        self.manifests.keys().map(String::as_str)
    }
}
