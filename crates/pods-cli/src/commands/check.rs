//! Check command implementation
//!
//! The explicit "check and fix" action for the target OS version.

use std::path::Path;

use colored::Colorize;
use pods_core::{RESTART_REQUIRED, UpgradeOutcome, UpgradePrompt, check_and_fix_interactive};

use crate::context::{Declaration, HostContext};
use crate::error::Result;

/// Run the check command
pub fn run_check(host: &Path, prompt: &mut dyn UpgradePrompt) -> Result<()> {
    let HostContext {
        mut settings,
        session,
        ..
    } = HostContext::load(host, Declaration::Deferred)?;

    match check_and_fix_interactive(&mut settings, session.registry(), prompt)? {
        UpgradeOutcome::NotNeeded => {
            println!(
                "{} Target OS version {} satisfies every declared pod.",
                "OK".green().bold(),
                settings.target_os_version.cyan()
            );
        }
        UpgradeOutcome::Applied { from, to, .. } => {
            println!(
                "{} Target OS version changed from {} to {}.",
                "OK".green().bold(),
                from.yellow(),
                to.to_string().green()
            );
            println!("{} {RESTART_REQUIRED}", "!".yellow().bold());
        }
        UpgradeOutcome::Declined {
            current,
            required,
            blockers,
        } => {
            println!(
                "{} Target OS version {} is below {} required by {}.",
                "WARN".yellow().bold(),
                current.to_string().yellow(),
                required.to_string().cyan(),
                blockers.join(", ")
            );
        }
    }
    Ok(())
}
