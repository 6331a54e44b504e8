//! Error types for pods-project

use std::path::PathBuf;

/// Result type for pods-project operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while editing a generated project
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The project has no target with this GUID
    #[error("Unknown target: {guid}")]
    UnknownTarget { guid: String },

    /// The project has no target with this name
    #[error("Target '{name}' not found in {path}")]
    TargetNotFound { name: String, path: PathBuf },

    /// Failed while scanning the staging directory
    #[error("Failed to scan {path}: {message}")]
    Scan { path: PathBuf, message: String },

    /// Filesystem error from pods-fs
    #[error(transparent)]
    Fs(#[from] pods_fs::Error),
}
