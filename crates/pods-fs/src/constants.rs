//! Well-known names in the generated project and the host project.

use std::path::Path;

/// Extension of the framework bundles deposited by the package manager.
pub const FRAMEWORK_EXTENSION: &str = "framework";

/// Fixed locations the pipeline reads from or writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PodPath {
    /// Staging directory the package manager fills, at the generated project root
    StagingDir,
    /// Destination for framework bundles inside the generated project
    FrameworksDir,
    /// Destination for bundle resources inside the generated project
    ResourcesDir,
    /// The manifest consumed by the package manager
    Podfile,
    /// Module map inside a framework bundle
    ModuleMap,
    /// Resource directory inside a framework bundle
    BundleResources,
    /// Host-side configuration root
    HostConfigDir,
    /// Host-side directory of per-plugin declaration files
    PluginsDir,
    /// Host build settings file
    BuildSettings,
    /// Pipeline configuration file
    PipelineConfig,
}

impl PodPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StagingDir => "Pods",
            Self::FrameworksDir => "Frameworks",
            Self::ResourcesDir | Self::BundleResources => "Resources",
            Self::Podfile => "Podfile",
            Self::ModuleMap => "Modules/module.modulemap",
            Self::HostConfigDir => ".pods",
            Self::PluginsDir => ".pods/plugins",
            Self::BuildSettings => ".pods/build-settings.toml",
            Self::PipelineConfig => ".pods/config.toml",
        }
    }
}

impl AsRef<Path> for PodPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for PodPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for PodPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
