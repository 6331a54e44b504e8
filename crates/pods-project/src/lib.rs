//! Generated project patching and staged artifact integration.
//!
//! The project file itself is reached only through [`ProjectMutator`];
//! [`ProjectDocument`] is the JSON-backed implementation used by the
//! pipeline. [`patcher`] holds the two project-editing stages and
//! [`modulemap`] the tokenizer for link directives in framework bundles.

pub mod document;
pub mod error;
pub mod modulemap;
pub mod mutator;
pub mod patcher;

pub use document::{FileReference, LinkedFramework, ProjectDocument, Target};
pub use error::{Error, Result};
pub use modulemap::{LinkDirective, parse_line};
pub use mutator::ProjectMutator;
pub use patcher::{IntegrationReport, apply_baseline_settings, integrate_staged_artifacts};
