//! [`TestHost`] builder for pipeline scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding a host project (`host/`) and the project
/// generated from it (`build/ios/`).
///
/// # Example
///
/// ```rust,no_run
/// use pods_test_utils::host::TestHost;
///
/// let host = TestHost::new();
/// host.write_build_settings("ios", "7.0");
/// host.write_plugin("analytics", "[[pod]]\nname = \"Firebase/Analytics\"\n");
/// host.assert_file_exists("host/.pods/plugins/analytics.toml");
/// ```
pub struct TestHost {
    temp_dir: TempDir,
}

impl Default for TestHost {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHost {
    pub fn new() -> Self {
        let host = Self {
            temp_dir: TempDir::new().unwrap(),
        };
        fs::create_dir_all(host.host_dir()).unwrap();
        fs::create_dir_all(host.project_dir()).unwrap();
        host
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Root of the host (editor) project.
    pub fn host_dir(&self) -> PathBuf {
        self.root().join("host")
    }

    /// Root of the generated native project.
    pub fn project_dir(&self) -> PathBuf {
        self.root().join("build").join("ios")
    }

    /// Write `content` to `rel` (relative to the temp root), creating parents.
    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Write `host/.pods/build-settings.toml`.
    pub fn write_build_settings(&self, platform: &str, target_os_version: &str) -> PathBuf {
        self.write(
            "host/.pods/build-settings.toml",
            &format!("platform = \"{platform}\"\ntarget_os_version = \"{target_os_version}\"\n"),
        )
    }

    /// Write a plugin declaration file `host/.pods/plugins/<name>.toml`.
    pub fn write_plugin(&self, name: &str, content: &str) -> PathBuf {
        self.write(&format!("host/.pods/plugins/{name}.toml"), content)
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.root().join(rel))
            .unwrap_or_else(|e| panic!("failed to read {rel}: {e}"))
    }

    pub fn assert_file_exists(&self, rel: &str) {
        assert!(self.root().join(rel).exists(), "expected {rel} to exist");
    }

    pub fn assert_file_not_exists(&self, rel: &str) {
        assert!(!self.root().join(rel).exists(), "expected {rel} to be absent");
    }
}
