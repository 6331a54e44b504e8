//! Filesystem layer for the pods integration pipeline
//!
//! Provides normalized path handling, locked atomic writes, the
//! move/copy/replace primitives used when staged artifacts are spliced into a
//! generated project, and a format-agnostic config store.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use constants::{FRAMEWORK_EXTENSION, PodPath};
pub use error::{Error, Result};
pub use path::NormalizedPath;
