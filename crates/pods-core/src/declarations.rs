//! Plugin declaration files.
//!
//! Each plugin ships `<host>/.pods/plugins/<plugin>.toml`:
//!
//! ```toml
//! [[pod]]
//! name = "Firebase/Analytics"
//! version = "10.0+"
//! min_target_sdk = "11.0"
//!
//! [[pod]]
//! name = "LegacySdk"
//! bitcode = false
//! ```

use pods_fs::{NormalizedPath, PodPath, io};
use pods_registry::Pod;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Contents of one declaration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationFile {
    #[serde(default, rename = "pod")]
    pub pods: Vec<Pod>,
}

/// The pods one plugin declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginDeclarations {
    /// File stem of the declaration file.
    pub plugin: String,
    pub pods: Vec<Pod>,
}

/// Read every declaration file under `host_dir`, in file-name order.
///
/// A missing plugins directory yields nothing.
pub fn discover_declarations(host_dir: &NormalizedPath) -> Result<Vec<PluginDeclarations>> {
    let plugins_dir = host_dir.join(PodPath::PluginsDir.as_str());
    if !plugins_dir.is_dir() {
        tracing::debug!(dir = %plugins_dir, "no plugin declarations");
        return Ok(Vec::new());
    }

    let mut found = Vec::new();
    for path in io::list_dir(&plugins_dir)? {
        if !path.is_file() || path.extension() != Some("toml") {
            continue;
        }

        let content = io::read_text(&path)?;
        let file: DeclarationFile =
            toml::from_str(&content).map_err(|e| Error::InvalidDeclarations {
                path: path.to_native(),
                message: e.to_string(),
            })?;

        let plugin = path
            .file_name()
            .and_then(|name| name.strip_suffix(".toml"))
            .unwrap_or_default()
            .to_string();
        tracing::debug!(plugin = %plugin, count = file.pods.len(), "read declarations");
        found.push(PluginDeclarations {
            plugin,
            pods: file.pods,
        });
    }
    Ok(found)
}
