//! JSON-backed project model.

use std::collections::BTreeMap;

use pods_fs::{ConfigStore, NormalizedPath};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, ProjectMutator, Result};

/// Length of the GUIDs handed out for new targets and file references.
const GUID_LEN: usize = 24;

/// A target in the project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub name: String,

    /// Build setting key to its ordered list of values.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub build_settings: BTreeMap<String, Vec<String>>,

    /// GUIDs of file references included in the build phases.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub build_files: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub frameworks: Vec<LinkedFramework>,
}

/// A framework linked into a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedFramework {
    pub name: String,
    #[serde(default)]
    pub weak: bool,
}

/// A file known to the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReference {
    pub source_path: String,
    pub project_path: String,
}

/// Project model persisted as JSON.
///
/// Targets and file references are keyed by GUID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDocument {
    #[serde(default)]
    pub targets: BTreeMap<String, Target>,

    #[serde(default)]
    pub files: BTreeMap<String, FileReference>,
}

impl ProjectDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a project file.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let document = ConfigStore::new().load(path)?;
        tracing::debug!(path = %path, "loaded project");
        Ok(document)
    }

    /// Write the project back to disk.
    pub fn save(&self, path: &NormalizedPath) -> Result<()> {
        ConfigStore::new().save(path, self)?;
        tracing::debug!(path = %path, "saved project");
        Ok(())
    }

    /// Add a target and return its GUID.
    pub fn add_target(&mut self, name: impl Into<String>) -> String {
        let guid = new_guid();
        self.targets.insert(
            guid.clone(),
            Target {
                name: name.into(),
                ..Target::default()
            },
        );
        guid
    }

    pub fn target(&self, guid: &str) -> Option<&Target> {
        self.targets.get(guid)
    }

    /// Values of a build setting, empty when unset.
    pub fn build_property(&self, target_guid: &str, key: &str) -> &[String] {
        self.targets
            .get(target_guid)
            .and_then(|target| target.build_settings.get(key))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The file reference registered under a project path.
    pub fn find_file(&self, project_path: &str) -> Option<(&str, &FileReference)> {
        self.files
            .iter()
            .find(|(_, file)| file.project_path == project_path)
            .map(|(guid, file)| (guid.as_str(), file))
    }

    fn target_mut(&mut self, guid: &str) -> Result<&mut Target> {
        self.targets.get_mut(guid).ok_or_else(|| Error::UnknownTarget {
            guid: guid.to_string(),
        })
    }
}

impl ProjectMutator for ProjectDocument {
    fn target_guid(&self, name: &str) -> Option<String> {
        self.targets
            .iter()
            .find(|(_, target)| target.name == name)
            .map(|(guid, _)| guid.clone())
    }

    fn set_build_property(&mut self, target_guid: &str, key: &str, value: &str) -> Result<()> {
        let target = self.target_mut(target_guid)?;
        target
            .build_settings
            .insert(key.to_string(), vec![value.to_string()]);
        Ok(())
    }

    fn add_build_property(&mut self, target_guid: &str, key: &str, value: &str) -> Result<()> {
        let target = self.target_mut(target_guid)?;
        target
            .build_settings
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
        Ok(())
    }

    fn add_file(&mut self, source_path: &str, project_path: &str) -> String {
        if let Some((guid, _)) = self.find_file(project_path) {
            let guid = guid.to_string();
            if let Some(file) = self.files.get_mut(&guid) {
                file.source_path = source_path.to_string();
            }
            return guid;
        }

        let guid = new_guid();
        self.files.insert(
            guid.clone(),
            FileReference {
                source_path: source_path.to_string(),
                project_path: project_path.to_string(),
            },
        );
        guid
    }

    fn add_file_to_build(&mut self, target_guid: &str, file_guid: &str) -> Result<()> {
        let target = self.target_mut(target_guid)?;
        if !target.build_files.iter().any(|guid| guid == file_guid) {
            target.build_files.push(file_guid.to_string());
        }
        Ok(())
    }

    fn add_framework(&mut self, target_guid: &str, framework: &str, weak: bool) -> Result<()> {
        let target = self.target_mut(target_guid)?;
        match target
            .frameworks
            .iter_mut()
            .find(|linked| linked.name == framework)
        {
            Some(linked) => linked.weak = weak,
            None => target.frameworks.push(LinkedFramework {
                name: framework.to_string(),
                weak,
            }),
        }
        Ok(())
    }
}

fn new_guid() -> String {
    let mut guid = Uuid::new_v4().simple().to_string();
    guid.truncate(GUID_LEN);
    guid.make_ascii_uppercase();
    guid
}
