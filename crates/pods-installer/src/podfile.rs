//! Podfile rendering.
//!
//! The Podfile only lists pods for a single target and turns off target
//! integration: CocoaPods downloads and builds the frameworks into the
//! staging directory and the project patcher wires them in afterwards.

use pods_fs::{NormalizedPath, PodPath, io};
use pods_registry::{DependencyRegistry, Pod};

use crate::error::Result;

/// CocoaPods specs source every generated Podfile pulls from.
pub const SPECS_SOURCE: &str = "https://github.com/CocoaPods/Specs.git";

/// Render the Podfile for `target_name` at minimum OS `target_version`.
///
/// Pods are emitted in name order so the output only changes when the
/// declarations do.
pub fn render(target_version: &str, target_name: &str, registry: &DependencyRegistry) -> String {
    let mut out = String::new();
    out.push_str(&format!("source '{SPECS_SOURCE}'\n"));
    out.push_str("install! 'cocoapods', :integrate_targets => false\n");
    out.push_str(&format!("platform :ios, '{target_version}'\n"));
    out.push('\n');
    out.push_str(&format!("target '{target_name}' do\n"));
    for pod in registry.iter() {
        out.push_str(&pod_line(pod));
        out.push('\n');
    }
    out.push_str("end\n");
    out
}

/// A single `pod` line, e.g. `pod 'Firebase/Core', '~> 3.2'`.
pub fn pod_line(pod: &Pod) -> String {
    match pod.version.constraint() {
        Some(constraint) => format!("pod '{}', '{}'", pod.name, constraint),
        None => format!("pod '{}'", pod.name),
    }
}

/// Write `contents` to the Podfile at the root of `project_dir`.
pub fn write_podfile(project_dir: &NormalizedPath, contents: &str) -> Result<NormalizedPath> {
    let path = project_dir.join(PodPath::Podfile.as_str());
    io::write_text(&path, contents)?;
    tracing::debug!(path = %path, "wrote Podfile");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pod_line_forms() {
        assert_eq!(pod_line(&Pod::new("A").with_version("1.2.3")), "pod 'A', '1.2.3'");
        assert_eq!(pod_line(&Pod::new("B").with_version("2.0+")), "pod 'B', '~> 2.0'");
        assert_eq!(pod_line(&Pod::new("C")), "pod 'C'");
        assert_eq!(pod_line(&Pod::new("D").with_version("latest")), "pod 'D'");
    }
}
