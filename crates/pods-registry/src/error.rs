/// Errors raised while declaring pods or reading platform versions.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A pod name that cannot be used as a registry key.
    #[error("invalid pod name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// A platform version string containing something other than digits and dots.
    #[error("invalid platform version '{value}': expected digits separated by '.'")]
    InvalidPlatformVersion { value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
