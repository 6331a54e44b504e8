//! Running the `pod` executable.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::env::InstallEnv;
use crate::error::{Error, Result};
use crate::locate::{INSTALL_HINT, locate};

/// Oldest CocoaPods major release that understands the generated Podfile.
pub const MIN_MAJOR_VERSION: u64 = 1;

/// Version reported by `pod --version`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolVersion {
    /// Trimmed first line of the output.
    pub raw: String,
    pub major: u64,
}

impl ToolVersion {
    /// Read the version from `pod --version` output.
    ///
    /// Strict semver first; pre-release strings such as `1.0.0.beta.8` are
    /// not semver, so the leading numeric component is used for those.
    pub fn parse(output: &str) -> Result<Self> {
        let raw = output
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or_default()
            .to_string();

        let major = match semver::Version::parse(&raw) {
            Ok(version) => Some(version.major),
            Err(_) => raw.split('.').next().and_then(|m| m.parse::<u64>().ok()),
        };

        match major {
            Some(major) => Ok(Self { raw, major }),
            None => Err(Error::UnparseableVersion {
                output: output.to_string(),
            }),
        }
    }

    pub fn is_supported(&self) -> bool {
        self.major >= MIN_MAJOR_VERSION
    }
}

/// Captured output of a successful `pod install`.
#[derive(Debug, Clone, Default)]
pub struct InstallOutput {
    pub stdout: String,
    pub stderr: String,
}

/// A located CocoaPods executable.
#[derive(Debug, Clone)]
pub struct PodTool {
    path: PathBuf,
}

impl PodTool {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Locate the executable, or explain how to install it.
    pub fn discover(search_paths: &[PathBuf]) -> Result<Self> {
        match locate(search_paths) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "found CocoaPods");
                Ok(Self::new(path))
            }
            None => Err(Error::PodNotFound {
                searched: search_paths.to_vec(),
                hint: INSTALL_HINT.to_string(),
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run `pod --version`.
    pub fn version(&self, env: &InstallEnv) -> Result<ToolVersion> {
        let output = self.run(&["--version"], None, env)?;
        if !output.status.success() {
            return Err(Error::CommandFailed {
                command: format!("{} --version", self.path.display()),
                code: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        ToolVersion::parse(&String::from_utf8_lossy(&output.stdout))
    }

    /// Fail unless the executable reports at least [`MIN_MAJOR_VERSION`].
    pub fn check_minimum_version(&self, env: &InstallEnv) -> Result<ToolVersion> {
        let version = self.version(env)?;
        if !version.is_supported() {
            return Err(Error::VersionTooOld { found: version.raw });
        }
        Ok(version)
    }

    /// Like [`Self::check_minimum_version`], reporting the failure instead of returning it.
    pub fn ensure_minimum_version(&self, env: &InstallEnv) -> bool {
        match self.check_minimum_version(env) {
            Ok(version) => {
                tracing::debug!(version = %version.raw, "CocoaPods version accepted");
                true
            }
            Err(e) => {
                tracing::error!("{e}");
                false
            }
        }
    }

    /// Run `pod install` in `working_dir`, which must contain the Podfile.
    ///
    /// Blocks until the process exits; there is no timeout.
    pub fn install(&self, working_dir: &Path, env: &InstallEnv) -> Result<InstallOutput> {
        tracing::info!(dir = %working_dir.display(), "running pod install");
        let output = self.run(&["install"], Some(working_dir), env)?;
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(Error::InstallFailed {
                code: output.status.code(),
                stdout,
                stderr,
            });
        }
        Ok(InstallOutput { stdout, stderr })
    }

    fn run(&self, args: &[&str], working_dir: Option<&Path>, env: &InstallEnv) -> Result<Output> {
        let mut cmd = Command::new(&self.path);
        cmd.args(args);
        if let Some(dir) = working_dir {
            cmd.current_dir(dir);
        }
        for (key, value) in env.iter() {
            cmd.env(key, value);
        }
        cmd.output().map_err(|source| Error::Spawn {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_semver() {
        let v = ToolVersion::parse("1.11.3\n").unwrap();
        assert_eq!(v.raw, "1.11.3");
        assert_eq!(v.major, 1);
        assert!(v.is_supported());
    }

    #[test]
    fn test_parse_prerelease_fallback() {
        let v = ToolVersion::parse("1.0.0.beta.8").unwrap();
        assert_eq!(v.major, 1);
    }

    #[test]
    fn test_parse_zero_major_unsupported() {
        let v = ToolVersion::parse("0.39.0").unwrap();
        assert!(!v.is_supported());
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(
            ToolVersion::parse("command not found"),
            Err(Error::UnparseableVersion { .. })
        ));
        assert!(ToolVersion::parse("").is_err());
    }

    #[test]
    fn test_discover_missing_reports_searched_paths() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = PodTool::discover(&[temp.path().to_path_buf()]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains(&temp.path().display().to_string()), "{msg}");
        assert!(msg.contains("gem install cocoapods"), "{msg}");
    }
}
