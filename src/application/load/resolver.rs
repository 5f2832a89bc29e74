//! Build-Status Resolver
//!
//! Turns whatever the build tool last wrote into either a [`ManifestModel`]
//! or a typed failure. `building` is only waited out in debug mode; outside
//! debug mode rendering must never block, so a build in progress is reported
//! as an unknown status straight away.

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::domain::entities::ManifestModel;
use crate::domain::ports::{FileSystem, ManifestSource};
use crate::domain::value_objects::BuildStatus;
use crate::error::{ManifestError, ManifestResult};

use super::options::LoadOptions;

/// Delay between reads while a build is in progress
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Resolves a manifest path to a built model
#[derive(Debug, Clone)]
pub struct BuildStatusResolver {
    source: Arc<dyn ManifestSource>,
    fs: Arc<dyn FileSystem>,
    poll_interval: Duration,
}

impl BuildStatusResolver {
    /// `source` supplies manifest documents, `fs` is handed to the model for
    /// content reads.
    pub fn new(source: Arc<dyn ManifestSource>, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            source,
            fs,
            poll_interval: POLL_INTERVAL,
        }
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn resolve(&self, path: &Path, options: &LoadOptions) -> ManifestResult<ManifestModel> {
        let started = Instant::now();
        let read_retry = options.effective_read_retry();
        let mut data = self.source.read(path, read_retry)?;

        if options.debug {
            let mut polls = 0u32;
            while data.status().is_building() {
                std::thread::sleep(self.poll_interval);
                if started.elapsed() > options.timeout {
                    tracing::warn!(
                        path = %path.display(),
                        polls,
                        timeout = ?options.timeout,
                        "gave up waiting for build"
                    );
                    return Err(ManifestError::BuildTimeout {
                        path: path.to_path_buf(),
                    });
                }
                polls += 1;
                tracing::trace!(path = %path.display(), polls, "build in progress, polling");
                data = self.source.read(path, read_retry)?;
            }
        }

        let status = data.status();
        tracing::debug!(path = %path.display(), %status, "manifest status");

        match status {
            BuildStatus::Built => {
                let files = data
                    .entry_files()
                    .map_err(|source| ManifestError::InvalidJson {
                        path: path.to_path_buf(),
                        source,
                    })?;
                Ok(ManifestModel::new(
                    path,
                    files,
                    &options.static_url,
                    options.static_root.as_deref(),
                    self.fs.clone(),
                ))
            }
            BuildStatus::Errors => Err(ManifestError::Build {
                errors: data.error_messages(),
            }),
            BuildStatus::Building | BuildStatus::Unknown(_) => Err(ManifestError::Status {
                status: status.as_str().map(str::to_string),
            }),
        }
    }
}
