//! Dependency registry and target-version policy for declared pods.
//!
//! Plugins declare the native pods they need; the [`DependencyRegistry`]
//! merges those declarations (last write wins per name) and the
//! [`version`] module decides whether the configured minimum OS target
//! is high enough for all of them.

pub mod dependency;
pub mod error;
pub mod registry;
pub mod version;

pub use dependency::{Pod, VersionRequirement};
pub use error::{Error, Result};
pub use registry::DependencyRegistry;
pub use version::{PlatformVersion, UpgradeRequirement, VersionBucket, bucket_by_min_version, needs_upgrade};
