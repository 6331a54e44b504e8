//! Error types for pods-core

use std::path::PathBuf;

/// Result type for pods-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pods-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No per-user configuration directory on this platform
    #[error("No user configuration directory available for preferences")]
    NoConfigDir,

    /// A plugin declaration file could not be parsed
    #[error("Invalid declaration file {path}: {message}")]
    InvalidDeclarations { path: PathBuf, message: String },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from pods-fs
    #[error(transparent)]
    Fs(#[from] pods_fs::Error),

    /// Registry or version error from pods-registry
    #[error(transparent)]
    Registry(#[from] pods_registry::Error),

    /// Package manager error from pods-installer
    #[error(transparent)]
    Installer(#[from] pods_installer::Error),

    /// Project editing error from pods-project
    #[error(transparent)]
    Project(#[from] pods_project::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
