//! Host build settings.
//!
//! The host editor owns the active build platform and the target OS
//! version. [`BuildSettings`] is the narrow accessor the pipeline needs;
//! [`HostSettings`] backs it with `<host>/.pods/build-settings.toml`.

use pods_fs::{ConfigStore, NormalizedPath, PodPath};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Target OS version assumed when the host has not configured one.
pub const DEFAULT_TARGET_OS_VERSION: &str = "8.0";

/// Build platform selected in the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Ios,
    Android,
    Standalone,
    #[serde(other)]
    Other,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Ios => "ios",
            Self::Android => "android",
            Self::Standalone => "standalone",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

/// Read and write access to the host's build settings.
pub trait BuildSettings {
    fn active_platform(&self) -> Platform;

    /// Target OS version in `major.minor` form.
    fn target_os_version(&self) -> &str;

    fn set_target_os_version(&mut self, version: &str) -> Result<()>;
}

/// Build settings stored in the host project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostSettings {
    #[serde(default)]
    pub platform: Platform,

    #[serde(default = "default_target_os_version")]
    pub target_os_version: String,

    /// File the settings were loaded from; writes go back to it.
    #[serde(skip)]
    location: Option<NormalizedPath>,
}

fn default_target_os_version() -> String {
    DEFAULT_TARGET_OS_VERSION.to_string()
}

impl Default for HostSettings {
    fn default() -> Self {
        Self::new(Platform::default(), DEFAULT_TARGET_OS_VERSION)
    }
}

impl HostSettings {
    /// Settings held only in memory.
    pub fn new(platform: Platform, target_os_version: impl Into<String>) -> Self {
        Self {
            platform,
            target_os_version: target_os_version.into(),
            location: None,
        }
    }

    /// Load `<host>/.pods/build-settings.toml`, defaulting when absent.
    ///
    /// Later changes to the target OS version are written back to that file.
    pub fn load(host_dir: &NormalizedPath) -> Result<Self> {
        let path = host_dir.join(PodPath::BuildSettings.as_str());
        let mut settings: Self = ConfigStore::new().load_or_default(&path)?;
        settings.location = Some(path);
        Ok(settings)
    }

    pub fn location(&self) -> Option<&NormalizedPath> {
        self.location.as_ref()
    }

    /// Persist to the file this was loaded from. In-memory settings are a no-op.
    pub fn save(&self) -> Result<()> {
        if let Some(path) = &self.location {
            ConfigStore::new().save(path, self)?;
        }
        Ok(())
    }
}

impl BuildSettings for HostSettings {
    fn active_platform(&self) -> Platform {
        self.platform
    }

    fn target_os_version(&self) -> &str {
        &self.target_os_version
    }

    fn set_target_os_version(&mut self, version: &str) -> Result<()> {
        self.target_os_version = version.to_string();
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_platform_parses_as_other() {
        let settings: HostSettings = toml::from_str("platform = \"webgl\"").unwrap();
        assert_eq!(settings.platform, Platform::Other);
        assert_eq!(settings.target_os_version, DEFAULT_TARGET_OS_VERSION);
    }

    #[test]
    fn in_memory_settings_do_not_touch_disk() {
        let mut settings = HostSettings::new(Platform::Ios, "7.0");
        settings.set_target_os_version("9.0").unwrap();
        assert_eq!(settings.target_os_version(), "9.0");
        assert!(settings.location().is_none());
    }
}
