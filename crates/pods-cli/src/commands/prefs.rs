//! Enable and disable commands

use colored::Colorize;
use pods_core::Preferences;

use crate::error::Result;

/// Persist the integration preference.
pub fn run_set_enabled(preferences: &mut Preferences, enabled: bool) -> Result<()> {
    preferences.set_integration_enabled(enabled);
    preferences.save()?;

    let state = if enabled {
        "enabled".green()
    } else {
        "disabled".yellow()
    };
    println!(
        "{} Pod integration {} ({})",
        "OK".green().bold(),
        state,
        preferences.path().as_str().dimmed()
    );
    Ok(())
}
