use std::path::PathBuf;

/// Errors from locating or running the package manager.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No `pod` executable in any of the searched directories.
    #[error("CocoaPods not found (searched {}).{hint}", display_paths(.searched))]
    PodNotFound { searched: Vec<PathBuf>, hint: String },

    /// The executable exists but could not be started.
    #[error("failed to run {}: {source}", .path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A query command exited with a non-zero status.
    #[error("'{command}' failed (exit code {}):\n{stdout}{stderr}", display_code(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    /// `pod --version` printed something that is not a version.
    #[error("could not read CocoaPods version from output: {output:?}")]
    UnparseableVersion { output: String },

    /// The installed CocoaPods predates 1.0.
    #[error("CocoaPods {found} is too old, version 1.0 or later is required. Update with: sudo gem install cocoapods")]
    VersionTooOld { found: String },

    /// `pod install` exited with a non-zero status.
    #[error("pod install failed (exit code {}):\n{stdout}{stderr}", display_code(.code))]
    InstallFailed {
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    #[error(transparent)]
    Fs(#[from] pods_fs::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn display_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "none".to_string(), |c| c.to_string())
}
