//! webpack-manifest - resolve webpack build manifests into renderable asset references
//!
//! A webpack plugin writes a JSON status file describing the current build
//! (`building`, `built` with per-entry file lists, or `errors`). This crate
//! reads that file, optionally waits for an in-progress build to finish,
//! and exposes each entry's script and stylesheet files as URLs, rendered
//! tags, or inline content for server-side templates.
//!
//! ```no_run
//! use webpack_manifest::{load, LoadOptions};
//!
//! let options = LoadOptions::new("/static/").with_static_root("/srv/app/static");
//! let manifest = load("/srv/app/webpack-manifest.json", &options)?;
//! let main = manifest.entry("main")?;
//! println!("{}{}", main.stylesheet(), main.script());
//! # Ok::<(), webpack_manifest::ManifestError>(())
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{load, load_webpack_manifest, LoadOptions, ManifestCache, ManifestLoader};
pub use config::{Config, ManifestConfig};
pub use domain::entities::{EntryGroup, ManifestModel, RawManifestData, TypedAssetGroup};
pub use domain::value_objects::{AssetKind, BuildStatus};
pub use error::{ManifestError, ManifestErrorKind, ManifestResult};
pub use infrastructure::{JsonManifestReader, ManifestEmitter};
