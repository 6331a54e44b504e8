//! Command implementations for pods-cli

pub mod build;
pub mod check;
pub mod list;
pub mod podfile;
pub mod prefs;

pub use build::run_build;
pub use check::run_check;
pub use list::run_list;
pub use podfile::run_podfile;
pub use prefs::run_set_enabled;

use colored::Colorize;
use pods_core::UpgradeOutcome;

/// Print the upgrades applied while plugins declared their pods.
pub(crate) fn print_upgrades(upgrades: &[UpgradeOutcome]) {
    for upgrade in upgrades {
        if let UpgradeOutcome::Applied {
            from,
            to,
            trigger,
            ..
        } = upgrade
        {
            let pod = trigger.as_deref().unwrap_or("declared pods");
            println!(
                "{} Target OS version changed from {} to {} ({} requires it)",
                "=>".blue().bold(),
                from.yellow(),
                to.to_string().green(),
                pod.cyan()
            );
        }
    }
}
