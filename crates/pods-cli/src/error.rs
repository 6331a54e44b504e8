//! Error types for pods-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from pods-core
    #[error(transparent)]
    Core(#[from] pods_core::Error),

    /// Error from pods-fs
    #[error(transparent)]
    Fs(#[from] pods_fs::Error),

    /// Error from pods-installer
    #[error(transparent)]
    Installer(#[from] pods_installer::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
