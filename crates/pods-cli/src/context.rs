//! Host context shared by the commands.

use std::path::Path;

use pods_core::{DeclarationSession, HostSettings, PipelineConfig, Preferences};
use pods_fs::NormalizedPath;

use crate::error::Result;

/// How plugin declarations treat the host's target OS version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declaration {
    /// Raise the target OS version as soon as a declaration needs it.
    Eager,
    /// Only record the pods; the command runs the interactive check itself.
    Deferred,
}

/// Everything loaded from the host project before a command runs.
pub struct HostContext {
    pub settings: HostSettings,
    pub config: PipelineConfig,
    pub session: DeclarationSession,
}

impl HostContext {
    /// Load settings and configuration, then declare every plugin's pods.
    ///
    /// With [`Declaration::Eager`] any target OS change is written back to
    /// the host's build settings before this returns.
    pub fn load(host: &Path, declaration: Declaration) -> Result<Self> {
        let host_dir = NormalizedPath::new(host);
        let mut settings = HostSettings::load(&host_dir)?;
        let config = PipelineConfig::load(&host_dir)?;

        let mut session = DeclarationSession::new();
        match declaration {
            Declaration::Eager => session.declare_plugins_and_check(&host_dir, &mut settings)?,
            Declaration::Deferred => session.declare_plugins(&host_dir)?,
        }

        Ok(Self {
            settings,
            config,
            session,
        })
    }
}

/// Load preferences from an explicit file or the per-user default.
pub fn load_preferences(path: Option<&Path>) -> Result<Preferences> {
    let preferences = match path {
        Some(path) => Preferences::load(NormalizedPath::new(path))?,
        None => Preferences::load_default()?,
    };
    Ok(preferences)
}
