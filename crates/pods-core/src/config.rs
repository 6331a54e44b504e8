//! Pipeline configuration, read from `<host>/.pods/config.toml`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use pods_fs::{ConfigStore, NormalizedPath, PodPath};
use pods_installer::default_search_paths;
use serde::{Deserialize, Serialize};

use crate::Result;

/// How the pipeline finds and edits the generated project.
///
/// Every field is optional in the file.
///
/// ```toml
/// target_name = "Unity-iPhone"
/// project_file = "Unity-iPhone.xcodeproj/project.json"
/// pod_search_paths = ["/usr/local/bin", "/opt/homebrew/bin"]
///
/// [env]
/// COCOAPODS_DISABLE_STATS = "true"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Name of the target that receives pods.
    pub target_name: String,

    /// Project file, relative to the generated project directory.
    pub project_file: String,

    /// Directories searched for the `pod` executable, in order.
    pub pod_search_paths: Vec<PathBuf>,

    /// Extra environment for `pod install`.
    pub env: BTreeMap<String, String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            target_name: "Unity-iPhone".to_string(),
            project_file: "Unity-iPhone.xcodeproj/project.json".to_string(),
            pod_search_paths: default_search_paths(),
            env: BTreeMap::new(),
        }
    }
}

impl PipelineConfig {
    /// Load the host's pipeline configuration, defaulting when absent.
    pub fn load(host_dir: &NormalizedPath) -> Result<Self> {
        let path = host_dir.join(PodPath::PipelineConfig.as_str());
        Ok(ConfigStore::new().load_or_default(&path)?)
    }

    /// Full path of the project file inside `project_dir`.
    pub fn project_path(&self, project_dir: &NormalizedPath) -> NormalizedPath {
        project_dir.join(&self.project_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: PipelineConfig = toml::from_str("target_name = \"Game\"").unwrap();
        assert_eq!(config.target_name, "Game");
        assert_eq!(config.project_file, PipelineConfig::default().project_file);
        assert_eq!(config.pod_search_paths, default_search_paths());
    }
}
