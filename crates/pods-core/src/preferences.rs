//! Persisted per-user preferences.

use std::collections::BTreeMap;
use std::path::PathBuf;

use pods_fs::{ConfigStore, NormalizedPath};

use crate::{Error, Result};

/// Whether pod integration runs during builds. Defaults to enabled.
pub const ENABLED_KEY: &str = "pods.integration.enabled";

const APP_DIR: &str = "pods";
const FILE_NAME: &str = "preferences.toml";

/// Boolean preferences stored as a flat TOML table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    path: NormalizedPath,
    values: BTreeMap<String, bool>,
}

impl Preferences {
    /// The platform-appropriate preferences file:
    /// - Linux: `~/.config/pods/preferences.toml`
    /// - macOS: `~/Library/Application Support/pods/preferences.toml`
    /// - Windows: `%APPDATA%\pods\preferences.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(FILE_NAME))
    }

    /// Load the preferences file at its default location.
    pub fn load_default() -> Result<Self> {
        let path = Self::default_path().ok_or(Error::NoConfigDir)?;
        Self::load(NormalizedPath::new(path))
    }

    /// Load preferences from `path`; a missing file means all defaults.
    pub fn load(path: NormalizedPath) -> Result<Self> {
        let values = ConfigStore::new().load_or_default(&path)?;
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.values.get(key).copied().unwrap_or(default)
    }

    pub fn set_bool(&mut self, key: impl Into<String>, value: bool) {
        self.values.insert(key.into(), value);
    }

    pub fn save(&self) -> Result<()> {
        ConfigStore::new().save(&self.path, &self.values)?;
        tracing::debug!(path = %self.path, "saved preferences");
        Ok(())
    }

    pub fn integration_enabled(&self) -> bool {
        self.get_bool(ENABLED_KEY, true)
    }

    pub fn set_integration_enabled(&mut self, enabled: bool) {
        self.set_bool(ENABLED_KEY, enabled);
    }
}
