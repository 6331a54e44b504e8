//! Per-stage results of a pipeline run.

use serde::Serialize;

/// The four pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    PatchProject,
    GenerateManifest,
    InstallPods,
    IntegrateArtifacts,
}

impl Stage {
    pub const ALL: [Stage; 4] = [
        Stage::PatchProject,
        Stage::GenerateManifest,
        Stage::InstallPods,
        Stage::IntegrateArtifacts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PatchProject => "patch-project",
            Self::GenerateManifest => "generate-manifest",
            Self::InstallPods => "install-pods",
            Self::IntegrateArtifacts => "integrate-artifacts",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a stage ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StageStatus {
    Completed { actions: Vec<String> },
    /// Gated off, or nothing to do. Not an error.
    Skipped { reason: String },
    /// The package manager was missing or failed. Later stages still run.
    Failed { message: String },
}

/// Result of one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageReport {
    pub stage: Stage,
    #[serde(flatten)]
    pub status: StageStatus,
}

impl StageReport {
    pub fn completed(stage: Stage, actions: Vec<String>) -> Self {
        Self {
            stage,
            status: StageStatus::Completed { actions },
        }
    }

    pub fn skipped(stage: Stage, reason: impl Into<String>) -> Self {
        Self {
            stage,
            status: StageStatus::Skipped {
                reason: reason.into(),
            },
        }
    }

    pub fn failed(stage: Stage, message: impl Into<String>) -> Self {
        Self {
            stage,
            status: StageStatus::Failed {
                message: message.into(),
            },
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.status, StageStatus::Completed { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self.status, StageStatus::Skipped { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, StageStatus::Failed { .. })
    }
}

/// Results of a full pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PipelineReport {
    pub stages: Vec<StageReport>,
}

impl PipelineReport {
    /// True when no stage failed.
    pub fn success(&self) -> bool {
        !self.stages.iter().any(StageReport::is_failed)
    }

    pub fn stage(&self, stage: Stage) -> Option<&StageReport> {
        self.stages.iter().find(|report| report.stage == stage)
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
