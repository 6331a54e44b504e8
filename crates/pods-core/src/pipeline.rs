//! The four build stages run against a freshly generated project.
//!
//! Stages run in order and each one checks the [`Gate`] first. Package
//! manager problems become [`StageStatus::Failed`](crate::StageStatus)
//! reports rather than errors, so later stages still run and skip on their
//! own when the output they expect is missing. Filesystem and project
//! persistence errors propagate.

use pods_fs::{NormalizedPath, PodPath};
use pods_installer::{InstallEnv, MIN_MAJOR_VERSION, PodTool, podfile};
use pods_project::{
    Error as ProjectError, ProjectDocument, ProjectMutator, apply_baseline_settings,
    integrate_staged_artifacts,
};

use crate::report::{PipelineReport, Stage, StageReport};
use crate::upgrade::{RESTART_REQUIRED, UpgradeOutcome, check_and_fix_interactive};
use crate::{BuildSettings, PipelineConfig, PipelineContext, Platform, Result, UpgradePrompt};

/// Whether a stage may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Proceed,
    /// The integration preference is off.
    Disabled,
    /// The host is building for another platform.
    WrongPlatform(Platform),
    /// No pods were declared.
    NoDependencies,
}

impl Gate {
    /// Why a stage is skipped, or `None` when it may run.
    pub fn skip_reason(&self) -> Option<String> {
        match self {
            Self::Proceed => None,
            Self::Disabled => Some("pod integration is disabled".to_string()),
            Self::WrongPlatform(platform) => Some(format!("active platform is {platform}, not ios")),
            Self::NoDependencies => Some("no pods declared".to_string()),
        }
    }
}

/// Runs the build stages for one generated project.
#[derive(Debug, Clone)]
pub struct Pipeline {
    context: PipelineContext,
    config: PipelineConfig,
    project_dir: NormalizedPath,
    integration_enabled: bool,
    env: InstallEnv,
}

impl Pipeline {
    pub fn new(
        context: PipelineContext,
        config: PipelineConfig,
        project_dir: NormalizedPath,
    ) -> Self {
        let mut env = InstallEnv::from_ambient();
        env.extend(config.env.clone());
        Self {
            context,
            config,
            project_dir,
            integration_enabled: true,
            env,
        }
    }

    /// Honour the persisted integration preference.
    pub fn with_integration_enabled(mut self, enabled: bool) -> Self {
        self.integration_enabled = enabled;
        self
    }

    /// Replace the environment `pod` runs with.
    pub fn with_env(mut self, env: InstallEnv) -> Self {
        self.env = env;
        self
    }

    pub fn context(&self) -> &PipelineContext {
        &self.context
    }

    pub fn project_dir(&self) -> &NormalizedPath {
        &self.project_dir
    }

    pub fn gate(&self, settings: &dyn BuildSettings) -> Gate {
        let gate = if settings.active_platform() != Platform::Ios {
            Gate::WrongPlatform(settings.active_platform())
        } else if !self.integration_enabled {
            Gate::Disabled
        } else if self.context.registry().is_empty() {
            Gate::NoDependencies
        } else {
            Gate::Proceed
        };
        tracing::debug!(?gate, "pipeline gate");
        gate
    }

    /// Stage 1: baseline build settings and the bitcode policy.
    pub fn patch_project(&self, settings: &dyn BuildSettings) -> Result<StageReport> {
        if let Some(reason) = self.gate(settings).skip_reason() {
            return Ok(StageReport::skipped(Stage::PatchProject, reason));
        }

        let (mut project, target) = self.load_project()?;
        let bitcode_disabled = self.context.registry().bitcode_disabled_names();
        let actions = apply_baseline_settings(&mut project, &target, &bitcode_disabled)?;
        project.save(&self.project_path())?;

        tracing::info!(stage = %Stage::PatchProject, "stage complete");
        Ok(StageReport::completed(Stage::PatchProject, actions))
    }

    /// Stage 2: write the Podfile at the project root.
    pub fn generate_manifest(&self, settings: &dyn BuildSettings) -> Result<StageReport> {
        if let Some(reason) = self.gate(settings).skip_reason() {
            return Ok(StageReport::skipped(Stage::GenerateManifest, reason));
        }

        let contents = podfile::render(
            settings.target_os_version(),
            &self.config.target_name,
            self.context.registry(),
        );
        let path = podfile::write_podfile(&self.project_dir, &contents)?;

        tracing::info!(stage = %Stage::GenerateManifest, path = %path, "stage complete");
        Ok(StageReport::completed(
            Stage::GenerateManifest,
            vec![format!("wrote {path}")],
        ))
    }

    /// Stage 3: run `pod install`.
    ///
    /// Returns early, without installing, whenever the target OS version is
    /// below what the pods require: an accepted upgrade needs a fresh build,
    /// a declined one leaves the pods unusable.
    pub fn install_pods(
        &self,
        settings: &mut dyn BuildSettings,
        prompt: &mut dyn UpgradePrompt,
    ) -> Result<StageReport> {
        if let Some(reason) = self.gate(settings).skip_reason() {
            return Ok(StageReport::skipped(Stage::InstallPods, reason));
        }

        match check_and_fix_interactive(settings, self.context.registry(), prompt)? {
            UpgradeOutcome::NotNeeded => {}
            UpgradeOutcome::Applied { from, to, .. } => {
                return Ok(StageReport::skipped(
                    Stage::InstallPods,
                    format!("target OS version raised from {from} to {to}. {RESTART_REQUIRED}"),
                ));
            }
            UpgradeOutcome::Declined {
                current,
                required,
                blockers,
            } => {
                return Ok(StageReport::skipped(
                    Stage::InstallPods,
                    format!(
                        "target OS version {current} is below {required} required by {}",
                        blockers.join(", ")
                    ),
                ));
            }
        }

        let tool = match PodTool::discover(&self.config.pod_search_paths) {
            Ok(tool) => tool,
            Err(e) => return Ok(self.tool_failure(e)),
        };
        if !tool.ensure_minimum_version(&self.env) {
            return Ok(StageReport::failed(
                Stage::InstallPods,
                format!(
                    "CocoaPods at {} failed the version check, version {MIN_MAJOR_VERSION}.0 or later is required",
                    tool.path().display()
                ),
            ));
        }
        let output = match tool.install(&self.project_dir.to_native(), &self.env) {
            Ok(output) => output,
            Err(e) => return Ok(self.tool_failure(e)),
        };

        tracing::debug!(stdout = %output.stdout, "pod install output");
        tracing::info!(stage = %Stage::InstallPods, "stage complete");
        Ok(StageReport::completed(
            Stage::InstallPods,
            vec![format!("pod install with {}", tool.path().display())],
        ))
    }

    /// Stage 4: move staged frameworks and resources into the project.
    pub fn integrate(&self, settings: &dyn BuildSettings) -> Result<StageReport> {
        if let Some(reason) = self.gate(settings).skip_reason() {
            return Ok(StageReport::skipped(Stage::IntegrateArtifacts, reason));
        }

        // a missing staging dir means the install stage already failed
        let staging_dir = self.project_dir.join(PodPath::StagingDir.as_str());
        if !staging_dir.is_dir() {
            return Ok(nothing_staged(&staging_dir));
        }

        let (mut project, target) = self.load_project()?;
        let Some(report) =
            integrate_staged_artifacts(&mut project, &target, &self.project_dir, &staging_dir)?
        else {
            return Ok(nothing_staged(&staging_dir));
        };
        project.save(&self.project_path())?;

        let mut actions = Vec::new();
        actions.extend(report.frameworks.iter().map(|f| format!("added {f}")));
        actions.extend(report.resources.iter().map(|r| format!("added {r}")));
        actions.extend(report.linked_frameworks.iter().map(|f| format!("linked {f}")));
        actions.extend(report.link_flags.iter().map(|f| format!("linker flag {f}")));

        tracing::info!(stage = %Stage::IntegrateArtifacts, "stage complete");
        Ok(StageReport::completed(Stage::IntegrateArtifacts, actions))
    }

    /// Run all four stages in order.
    pub fn run_all(
        &self,
        settings: &mut dyn BuildSettings,
        prompt: &mut dyn UpgradePrompt,
    ) -> Result<PipelineReport> {
        let mut report = PipelineReport::default();
        report.stages.push(self.patch_project(settings)?);
        report.stages.push(self.generate_manifest(settings)?);
        report.stages.push(self.install_pods(settings, prompt)?);
        report.stages.push(self.integrate(settings)?);
        Ok(report)
    }

    fn project_path(&self) -> NormalizedPath {
        self.config.project_path(&self.project_dir)
    }

    fn load_project(&self) -> Result<(ProjectDocument, String)> {
        let path = self.project_path();
        let project = ProjectDocument::load(&path)?;
        let target = project
            .target_guid(&self.config.target_name)
            .ok_or_else(|| ProjectError::TargetNotFound {
                name: self.config.target_name.clone(),
                path: path.to_native(),
            })?;
        Ok((project, target))
    }

    fn tool_failure(&self, error: pods_installer::Error) -> StageReport {
        tracing::error!("{error}");
        StageReport::failed(Stage::InstallPods, error.to_string())
    }
}

fn nothing_staged(staging_dir: &NormalizedPath) -> StageReport {
    StageReport::skipped(
        Stage::IntegrateArtifacts,
        format!("nothing staged at {staging_dir}"),
    )
}
