//! Error types for webpack-manifest
//!
//! Uses `thiserror` for library errors. Every failure the loader can surface
//! is a variant of [`ManifestError`]; [`ManifestErrorKind`] groups them into
//! the categories callers usually branch on.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::file_system::FsError;

/// Result type alias for manifest operations
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Main error type for manifest operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest path is missing, not a regular file, or not absolute
    #[error("Path \"{}\" {reason}", path.display())]
    File { path: PathBuf, reason: FileProblem },

    /// The build tool reported compilation errors
    #[error("Webpack errors: \n\n{}", errors.join("\n\n"))]
    Build { errors: Vec<String> },

    /// Status field missing or not one of the recognized values
    #[error("Unknown webpack manifest status: \"{}\"", status.as_deref().unwrap_or("null"))]
    Status { status: Option<String> },

    /// Debug-mode polling gave up while the build was still running
    #[error("Timed out reading the webpack manifest at \"{}\"", path.display())]
    BuildTimeout { path: PathBuf },

    /// Requested entry is absent from the manifest's `files` mapping
    #[error("Unknown entry \"{entry}\" in manifest \"{}\"", path.display())]
    UnknownEntry { entry: String, path: PathBuf },

    /// Missing configuration, or content requested without a static root
    #[error("{message}")]
    Config { message: String },

    /// Manifest content is not valid JSON (after any configured retry)
    #[error("invalid manifest JSON in {}: {source}", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Reading a manifest or asset file failed
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: FsError,
    },
}

/// Why a manifest path was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileProblem {
    Missing,
    NotAbsolute,
}

impl std::fmt::Display for FileProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileProblem::Missing => write!(f, "is not a file or does not exist"),
            FileProblem::NotAbsolute => write!(f, "is not an absolute path to a file"),
        }
    }
}

/// Coarse failure category of a [`ManifestError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestErrorKind {
    File,
    Build,
    Status,
    BuildTimeout,
    UnknownEntry,
    Config,
    InvalidJson,
    Io,
}

impl ManifestError {
    /// Build a configuration error from any message
    pub fn config(message: impl Into<String>) -> Self {
        ManifestError::Config {
            message: message.into(),
        }
    }

    /// Category of this error
    pub fn kind(&self) -> ManifestErrorKind {
        match self {
            ManifestError::File { .. } => ManifestErrorKind::File,
            ManifestError::Build { .. } => ManifestErrorKind::Build,
            ManifestError::Status { .. } => ManifestErrorKind::Status,
            ManifestError::BuildTimeout { .. } => ManifestErrorKind::BuildTimeout,
            ManifestError::UnknownEntry { .. } => ManifestErrorKind::UnknownEntry,
            ManifestError::Config { .. } => ManifestErrorKind::Config,
            ManifestError::InvalidJson { .. } => ManifestErrorKind::InvalidJson,
            ManifestError::Io { .. } => ManifestErrorKind::Io,
        }
    }
}
