//! Locating the `pod` executable.
//!
//! Editors are often launched outside a login shell, so `PATH` cannot be
//! trusted; a fixed list of install locations is searched instead.

use std::path::PathBuf;

/// Name of the CocoaPods executable.
pub const POD_EXECUTABLE: &str = "pod";

/// Directories searched, in order, when none are configured.
pub const DEFAULT_SEARCH_PATHS: &[&str] = &["/usr/local/bin", "/usr/bin", "/opt/homebrew/bin"];

/// Shown to the user when no executable is found.
pub const INSTALL_HINT: &str = "\n  Install CocoaPods with: sudo gem install cocoapods\n  See https://guides.cocoapods.org/using/getting-started.html";

pub fn default_search_paths() -> Vec<PathBuf> {
    DEFAULT_SEARCH_PATHS.iter().map(PathBuf::from).collect()
}

/// Return the first `<dir>/pod` that exists, searching `search_paths` in order.
pub fn locate(search_paths: &[PathBuf]) -> Option<PathBuf> {
    search_paths
        .iter()
        .map(|dir| dir.join(POD_EXECUTABLE))
        .find(|candidate| candidate.is_file())
}
