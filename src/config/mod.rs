//! Configuration module
//!
//! Named manifest bundles, resolved in this order:
//! 1. Explicit `--config` file (CLI)
//! 2. Project config (`webpack-manifest.toml`)
//! 3. User config (`<config dir>/webpack-manifest/config.toml`)
//! 4. Empty defaults
//!
//! Environment variables (`WEBPACK_MANIFEST_*`) override per-bundle values.

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;
pub use loader::{config_candidates, PROJECT_CONFIG_FILE};
pub use types::{Config, ManifestConfig, REQUIRED_KEYS};
