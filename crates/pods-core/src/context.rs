//! Collecting declarations into the context the pipeline runs against.

use pods_fs::NormalizedPath;
use pods_registry::{DependencyRegistry, Pod};

use crate::declarations::discover_declarations;
use crate::upgrade::{UpgradeOutcome, check_and_maybe_apply_upgrade};
use crate::{BuildSettings, Result};

/// The declaration phase: plugins add pods, one after another.
///
/// [`Self::declare`] only records the pod. [`Self::declare_and_check`]
/// also raises the host's target OS version straight away when the new
/// declaration needs it.
#[derive(Debug, Default)]
pub struct DeclarationSession {
    registry: DependencyRegistry,
    outcomes: Vec<UpgradeOutcome>,
}

impl DeclarationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pod, replacing any earlier declaration of the same name.
    pub fn declare(&mut self, pod: Pod) -> Result<Option<Pod>> {
        let name = pod.name.clone();
        let replaced = self.registry.declare(pod)?;
        if replaced.is_some() {
            tracing::debug!(pod = %name, "pod redeclared, keeping the latest declaration");
        }
        Ok(replaced)
    }

    /// Declare, then apply any target OS upgrade the registry now needs.
    pub fn declare_and_check(
        &mut self,
        pod: Pod,
        settings: &mut dyn BuildSettings,
    ) -> Result<UpgradeOutcome> {
        let name = pod.name.clone();
        self.declare(pod)?;
        let outcome = check_and_maybe_apply_upgrade(settings, &self.registry, Some(&name))?;
        if outcome.is_needed() {
            self.outcomes.push(outcome.clone());
        }
        Ok(outcome)
    }

    /// Declare everything found in the host's plugin declaration files.
    ///
    /// Settings are left alone; the caller decides later whether the target
    /// OS version has to move.
    pub fn declare_plugins(&mut self, host_dir: &NormalizedPath) -> Result<()> {
        for plugin in discover_declarations(host_dir)? {
            for pod in plugin.pods {
                tracing::debug!(plugin = %plugin.plugin, pod = %pod.name, "declaring pod");
                self.declare(pod)?;
            }
        }
        Ok(())
    }

    /// Like [`Self::declare_plugins`], raising the target OS version after
    /// each declaration that needs it.
    pub fn declare_plugins_and_check(
        &mut self,
        host_dir: &NormalizedPath,
        settings: &mut dyn BuildSettings,
    ) -> Result<()> {
        for plugin in discover_declarations(host_dir)? {
            for pod in plugin.pods {
                tracing::debug!(plugin = %plugin.plugin, pod = %pod.name, "declaring pod");
                self.declare_and_check(pod, settings)?;
            }
        }
        Ok(())
    }

    pub fn registry(&self) -> &DependencyRegistry {
        &self.registry
    }

    /// Upgrades applied during the session, oldest first.
    pub fn upgrades(&self) -> &[UpgradeOutcome] {
        &self.outcomes
    }

    /// End the declaration phase.
    pub fn finish(self) -> PipelineContext {
        PipelineContext {
            registry: self.registry,
        }
    }
}

/// Read-only state shared by every pipeline stage.
#[derive(Debug, Clone, Default)]
pub struct PipelineContext {
    registry: DependencyRegistry,
}

impl PipelineContext {
    pub fn new(registry: DependencyRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &DependencyRegistry {
        &self.registry
    }
}
