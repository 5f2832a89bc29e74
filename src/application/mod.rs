//! Application Layer
//!
//! Use cases that orchestrate the manifest flow.
//! This layer:
//! - Depends on Domain layer (entities, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ManifestLoader` - cache lookup, status resolution, caching
//! - `BuildStatusResolver` - wait out builds in debug mode, classify status
//! - `load_webpack_manifest` - load a named bundle from configuration

pub mod cache;
pub mod load;
pub mod lookup;

pub use cache::ManifestCache;
pub use load::{
    load, BuildStatusResolver, LoadOptions, ManifestLoader, DEBUG_READ_RETRY, DEFAULT_TIMEOUT,
    POLL_INTERVAL,
};
pub use lookup::load_webpack_manifest;
