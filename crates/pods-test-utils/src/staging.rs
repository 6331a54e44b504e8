//! Builders for the directory layout CocoaPods leaves in the staging area.

use std::fs;
use std::path::{Path, PathBuf};

/// A staging directory populated with framework bundles.
pub struct StagedPods {
    root: PathBuf,
}

impl StagedPods {
    /// Create (or reuse) the staging directory at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        fs::create_dir_all(&root).unwrap();
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Add `<root>/<pod>/Frameworks/<name>.framework` with a stub binary.
    pub fn framework(&self, pod: &str, name: &str) -> PathBuf {
        let bundle = self
            .root
            .join(pod)
            .join("Frameworks")
            .join(format!("{name}.framework"));
        fs::create_dir_all(&bundle).unwrap();
        fs::write(bundle.join(name), format!("binary:{name}")).unwrap();
        bundle
    }

    /// Write the bundle's `Modules/module.modulemap`.
    pub fn module_map(&self, bundle: &Path, content: &str) {
        let modules = bundle.join("Modules");
        fs::create_dir_all(&modules).unwrap();
        fs::write(modules.join("module.modulemap"), content).unwrap();
    }

    /// Add a file under the bundle's `Resources/` directory.
    pub fn resource(&self, bundle: &Path, rel: &str, content: &str) -> PathBuf {
        let path = bundle.join("Resources").join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}
