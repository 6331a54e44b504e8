//! Terminal prompts.

use std::io::IsTerminal;

use colored::Colorize;
use dialoguer::Confirm;
use pods_core::{ScriptedPrompt, UpgradePrompt};
use pods_registry::PlatformVersion;

/// Asks on the terminal whether to raise the target OS version.
pub struct DialoguerPrompt;

impl UpgradePrompt for DialoguerPrompt {
    fn prompt_upgrade(&mut self, required: PlatformVersion, blockers: &[String]) -> bool {
        println!(
            "{} Target OS version {} is required by: {}",
            "!".yellow().bold(),
            required.to_string().cyan(),
            blockers.join(", ").yellow()
        );

        match Confirm::new()
            .with_prompt(format!("Raise the target OS version to {required}?"))
            .default(true)
            .interact()
        {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!("prompt failed, leaving the target OS version unchanged: {e}");
                false
            }
        }
    }
}

/// Pick how upgrade prompts are answered.
///
/// `--yes` accepts everything; without a terminal nothing is accepted.
pub fn upgrade_prompt(assume_yes: bool) -> Box<dyn UpgradePrompt> {
    if assume_yes {
        Box::new(ScriptedPrompt::accept())
    } else if std::io::stdin().is_terminal() {
        Box::new(DialoguerPrompt)
    } else {
        Box::new(ScriptedPrompt::decline())
    }
}
