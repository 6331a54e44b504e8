//! The confirmation capability the interactive upgrade path relies on.

use pods_registry::PlatformVersion;

/// Asks whether the target OS version may be raised.
///
/// Interactive hosts show a dialog; automated hosts answer from a script.
pub trait UpgradePrompt {
    /// `blockers` are the pods that need `required`. Returns whether to apply it.
    fn prompt_upgrade(&mut self, required: PlatformVersion, blockers: &[String]) -> bool;
}

/// Answers every prompt the same way and remembers what was asked.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    answer: bool,
    asked: Vec<(PlatformVersion, Vec<String>)>,
}

impl ScriptedPrompt {
    pub fn accept() -> Self {
        Self::answering(true)
    }

    pub fn decline() -> Self {
        Self::answering(false)
    }

    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            asked: Vec::new(),
        }
    }

    /// Every prompt shown so far, in order.
    pub fn asked(&self) -> &[(PlatformVersion, Vec<String>)] {
        &self.asked
    }
}

impl UpgradePrompt for ScriptedPrompt {
    fn prompt_upgrade(&mut self, required: PlatformVersion, blockers: &[String]) -> bool {
        self.asked.push((required, blockers.to_vec()));
        self.answer
    }
}
