//! Load Options
//!
//! Parameters for resolving a manifest.

use std::path::PathBuf;
use std::time::Duration;

/// How long debug-mode polling waits for a build to finish
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Read retry delay used in debug mode when none is configured
pub const DEBUG_READ_RETRY: Duration = Duration::from_secs(1);

/// Options for loading a manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// URL prefix the built files are served under
    pub static_url: String,
    /// Wait out in-progress builds and skip the cache
    pub debug: bool,
    /// Upper bound on debug-mode polling
    pub timeout: Duration,
    /// Delay before the single retry of an unparsable read
    pub read_retry: Option<Duration>,
    /// Directory the built files live in; needed for inline content
    pub static_root: Option<PathBuf>,
}

impl LoadOptions {
    pub fn new(static_url: impl Into<String>) -> Self {
        Self {
            static_url: static_url.into(),
            debug: false,
            timeout: DEFAULT_TIMEOUT,
            read_retry: None,
            static_root: None,
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_read_retry(mut self, read_retry: Option<Duration>) -> Self {
        self.read_retry = read_retry;
        self
    }

    /// An empty path leaves the static root unset
    pub fn with_static_root(mut self, static_root: impl Into<PathBuf>) -> Self {
        self.static_root = Some(static_root.into()).filter(|root| !root.as_os_str().is_empty());
        self
    }

    /// Retry delay actually used: debug mode defaults to one second
    pub fn effective_read_retry(&self) -> Option<Duration> {
        match self.read_retry {
            None if self.debug => Some(DEBUG_READ_RETRY),
            other => other,
        }
    }
}
