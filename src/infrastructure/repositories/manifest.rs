//! JSON Manifest Reader
//!
//! Implements the ManifestSource port on top of the FileSystem port.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::RawManifestData;
use crate::domain::ports::{FileSystem, ManifestSource};
use crate::error::{FileProblem, ManifestError, ManifestResult};
use crate::infrastructure::fs::LocalFs;

/// Reads manifest status files as JSON.
///
/// The build tool and the reader are separate processes, so a read can land
/// while the file is being rewritten and come back empty or truncated. A
/// configured retry delay gives such reads exactly one more attempt.
#[derive(Debug, Clone)]
pub struct JsonManifestReader {
    fs: Arc<dyn FileSystem>,
}

impl JsonManifestReader {
    /// Create a reader over the local file system
    pub fn new() -> Self {
        Self::with_fs(Arc::new(LocalFs::new()))
    }

    /// Create with a custom file system (for testing)
    pub fn with_fs(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    fn check_path(&self, path: &Path) -> ManifestResult<()> {
        if !self.fs.is_file(path) {
            return Err(ManifestError::File {
                path: path.to_path_buf(),
                reason: FileProblem::Missing,
            });
        }
        if !path.is_absolute() {
            return Err(ManifestError::File {
                path: path.to_path_buf(),
                reason: FileProblem::NotAbsolute,
            });
        }
        Ok(())
    }
}

impl Default for JsonManifestReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestSource for JsonManifestReader {
    fn read(&self, path: &Path, retry: Option<Duration>) -> ManifestResult<RawManifestData> {
        let mut retry = retry.filter(|delay| !delay.is_zero());

        loop {
            self.check_path(path)?;

            let content = self.fs.read(path).map_err(|source| ManifestError::Io {
                path: path.to_path_buf(),
                source,
            })?;

            match RawManifestData::from_json(&content) {
                Ok(data) => return Ok(data),
                Err(source) => match retry.take() {
                    Some(delay) => {
                        tracing::warn!(
                            path = %path.display(),
                            error = %source,
                            delay = ?delay,
                            "manifest could not be parsed, retrying once"
                        );
                        std::thread::sleep(delay);
                    }
                    None => {
                        return Err(ManifestError::InvalidJson {
                            path: path.to_path_buf(),
                            source,
                        })
                    }
                },
            }
        }
    }
}
