//! ManifestSource port - where raw manifest documents come from
//!
//! The resolver polls through this trait so it never depends on how the
//! status file is fetched or parsed.

use std::path::Path;
use std::time::Duration;

use crate::domain::entities::RawManifestData;
use crate::error::ManifestResult;

/// Source of raw manifest documents
pub trait ManifestSource: std::fmt::Debug + Send + Sync {
    /// Read and parse the manifest at `path`.
    ///
    /// When `retry` is a non-zero delay, a parse failure is retried once
    /// after sleeping that long.
    fn read(&self, path: &Path, retry: Option<Duration>) -> ManifestResult<RawManifestData>;
}
