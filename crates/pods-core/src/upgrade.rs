//! Raising the host's target OS version to what declared pods require.
//!
//! Two entry points share [`apply_upgrade`]: the eager check run after
//! every declaration applies a shortfall immediately, while the
//! interactive check asks through an [`UpgradePrompt`] first.

use pods_registry::{DependencyRegistry, PlatformVersion, UpgradeRequirement, needs_upgrade};

use crate::{BuildSettings, Result, UpgradePrompt};

/// Shown after an interactive upgrade has been applied.
pub const RESTART_REQUIRED: &str =
    "The target OS version was changed. Restart the build for the change to take effect.";

/// What an upgrade check did to the host settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpgradeOutcome {
    /// The configured target already satisfies the lowest requirement.
    NotNeeded,
    /// The target was raised.
    Applied {
        from: String,
        to: PlatformVersion,
        blockers: Vec<String>,
        /// Declaration that triggered the eager check, if any.
        trigger: Option<String>,
    },
    /// The user refused the upgrade.
    Declined {
        current: PlatformVersion,
        required: PlatformVersion,
        blockers: Vec<String>,
    },
}

impl UpgradeOutcome {
    pub fn is_needed(&self) -> bool {
        !matches!(self, Self::NotNeeded)
    }
}

/// Set the target OS version to `required` and log the change.
///
/// Returns the previous value.
pub fn apply_upgrade(
    settings: &mut dyn BuildSettings,
    required: PlatformVersion,
    trigger: Option<&str>,
) -> Result<String> {
    let previous = settings.target_os_version().to_string();
    let required = required.to_string();
    settings.set_target_os_version(&required)?;

    match trigger {
        Some(pod) => tracing::info!(
            "Target OS version changed from {previous} to {required} because pod '{pod}' requires it"
        ),
        None => tracing::info!("Target OS version changed from {previous} to {required}"),
    }
    Ok(previous)
}

/// Apply any needed upgrade without asking.
///
/// This is the check that follows each declaration; `trigger` names the
/// pod just declared.
pub fn check_and_maybe_apply_upgrade(
    settings: &mut dyn BuildSettings,
    registry: &DependencyRegistry,
    trigger: Option<&str>,
) -> Result<UpgradeOutcome> {
    let current = PlatformVersion::parse(settings.target_os_version())?;
    let Some(UpgradeRequirement { required, blocking }) = needs_upgrade(current, registry)? else {
        return Ok(UpgradeOutcome::NotNeeded);
    };

    let from = apply_upgrade(settings, required, trigger)?;
    Ok(UpgradeOutcome::Applied {
        from,
        to: required,
        blockers: blocking,
        trigger: trigger.map(str::to_string),
    })
}

/// Ask before applying a needed upgrade.
///
/// On acceptance the change is applied and [`RESTART_REQUIRED`] is logged;
/// a refusal leaves the settings untouched.
pub fn check_and_fix_interactive(
    settings: &mut dyn BuildSettings,
    registry: &DependencyRegistry,
    prompt: &mut dyn UpgradePrompt,
) -> Result<UpgradeOutcome> {
    let current = PlatformVersion::parse(settings.target_os_version())?;
    let Some(UpgradeRequirement { required, blocking }) = needs_upgrade(current, registry)? else {
        return Ok(UpgradeOutcome::NotNeeded);
    };

    if !prompt.prompt_upgrade(required, &blocking) {
        tracing::debug!(%current, %required, "target OS upgrade declined");
        return Ok(UpgradeOutcome::Declined {
            current,
            required,
            blockers: blocking,
        });
    }

    let from = apply_upgrade(settings, required, None)?;
    tracing::info!("{RESTART_REQUIRED}");
    Ok(UpgradeOutcome::Applied {
        from,
        to: required,
        blockers: blocking,
        trigger: None,
    })
}
