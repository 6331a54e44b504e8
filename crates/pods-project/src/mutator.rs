//! The project-editing surface the patcher needs.

use crate::Result;

/// Edits to a native project, addressed by target GUID.
///
/// Implementations own parsing and serializing the project file; callers
/// load once, mutate, and persist once.
pub trait ProjectMutator {
    /// GUID of the target called `name`, if any.
    fn target_guid(&self, name: &str) -> Option<String>;

    /// Replace a build setting with a single value.
    fn set_build_property(&mut self, target_guid: &str, key: &str, value: &str) -> Result<()>;

    /// Append a value to a build setting. Values are not de-duplicated.
    fn add_build_property(&mut self, target_guid: &str, key: &str, value: &str) -> Result<()>;

    /// Add a file reference and return its GUID.
    ///
    /// `source_path` is where the file lives on disk, `project_path` how the
    /// project refers to it.
    fn add_file(&mut self, source_path: &str, project_path: &str) -> String;

    /// Include a referenced file in the target's build phases.
    fn add_file_to_build(&mut self, target_guid: &str, file_guid: &str) -> Result<()>;

    /// Link a framework, weakly or not.
    fn add_framework(&mut self, target_guid: &str, framework: &str, weak: bool) -> Result<()>;
}
