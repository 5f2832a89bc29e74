//! Manifest Emitter
//!
//! Writes status files in the same shape the webpack plugin emits, so Rust
//! build steps (and tests) can produce manifests the loader understands.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::entities::RawManifestData;
use crate::domain::ports::FsError;
use crate::error::{ManifestError, ManifestResult};

/// Writes manifest documents atomically
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestEmitter;

impl ManifestEmitter {
    pub fn new() -> Self {
        Self
    }

    /// Write `data` to `path` as pretty JSON.
    ///
    /// Parent directories are created. The document is written to a sibling
    /// temp file and renamed into place, so a concurrent reader sees either
    /// the old manifest or the new one.
    pub fn write(&self, path: &Path, data: &RawManifestData) -> ManifestResult<()> {
        let io_err = |err: std::io::Error| ManifestError::Io {
            path: path.to_path_buf(),
            source: FsError::from_io(path, err),
        };

        let content = data.to_json_pretty().map_err(|source| ManifestError::InvalidJson {
            path: path.to_path_buf(),
            source,
        })?;

        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(io_err)?;

        let mut file = NamedTempFile::new_in(parent).map_err(io_err)?;
        file.write_all(content.as_bytes()).map_err(io_err)?;
        file.flush().map_err(io_err)?;
        file.persist(path).map_err(|e| io_err(e.error))?;

        tracing::debug!(path = %path.display(), status = %data.status(), "wrote manifest");
        Ok(())
    }
}
