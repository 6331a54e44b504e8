//! Declaration session, upgrade policy and build pipeline.
//!
//! Plugins declare pods into a [`DeclarationSession`], which raises the
//! host's target OS version as soon as a declaration needs it. Finishing the
//! session yields the read-only [`PipelineContext`] that every
//! [`Pipeline`] stage receives.

pub mod config;
pub mod context;
pub mod declarations;
pub mod error;
pub mod pipeline;
pub mod preferences;
pub mod prompt;
pub mod report;
pub mod settings;
pub mod upgrade;

pub use config::PipelineConfig;
pub use context::{DeclarationSession, PipelineContext};
pub use declarations::{DeclarationFile, PluginDeclarations, discover_declarations};
pub use error::{Error, Result};
pub use pipeline::{Gate, Pipeline};
pub use preferences::{ENABLED_KEY, Preferences};
pub use prompt::{ScriptedPrompt, UpgradePrompt};
pub use report::{PipelineReport, Stage, StageReport, StageStatus};
pub use settings::{BuildSettings, DEFAULT_TARGET_OS_VERSION, HostSettings, Platform};
pub use upgrade::{
    RESTART_REQUIRED, UpgradeOutcome, apply_upgrade, check_and_fix_interactive,
    check_and_maybe_apply_upgrade,
};
