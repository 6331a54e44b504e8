//! Podfile generation and CocoaPods invocation.
//!
//! [`podfile`] renders the dependency registry into the manifest the
//! package manager consumes; [`locate`] and [`tool`] find and drive the
//! `pod` executable itself.

pub mod env;
pub mod error;
pub mod locate;
pub mod podfile;
pub mod tool;

pub use env::{InstallEnv, utf8_locale};
pub use error::{Error, Result};
pub use locate::{DEFAULT_SEARCH_PATHS, INSTALL_HINT, POD_EXECUTABLE, default_search_paths, locate};
pub use podfile::{SPECS_SOURCE, pod_line, render, write_podfile};
pub use tool::{InstallOutput, MIN_MAJOR_VERSION, PodTool, ToolVersion};
