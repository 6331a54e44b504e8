//! Build command implementation
//!
//! Runs the four pipeline stages against a generated project.

use std::path::Path;

use colored::Colorize;
use pods_core::{Pipeline, PipelineReport, StageStatus, UpgradePrompt};
use pods_fs::NormalizedPath;

use crate::context::{Declaration, HostContext};
use crate::error::{CliError, Result};

/// Run the build command
pub fn run_build(
    host: &Path,
    project: &Path,
    integration_enabled: bool,
    prompt: &mut dyn UpgradePrompt,
    json: bool,
) -> Result<()> {
    let HostContext {
        mut settings,
        config,
        session,
        ..
    } = HostContext::load(host, Declaration::Deferred)?;

    if !json {
        println!(
            "{} Integrating {} pod(s) into {}",
            "=>".blue().bold(),
            session.registry().len(),
            project.display().to_string().cyan()
        );
    }

    let pipeline = Pipeline::new(session.finish(), config, NormalizedPath::new(project))
        .with_integration_enabled(integration_enabled);
    let report = pipeline.run_all(&mut settings, prompt)?;

    if json {
        println!("{}", report.to_json()?);
    } else {
        print_report(&report);
    }

    if !report.success() {
        return Err(CliError::user("one or more build stages failed"));
    }
    Ok(())
}

fn print_report(report: &PipelineReport) {
    for stage in &report.stages {
        match &stage.status {
            StageStatus::Completed { actions } => {
                println!("{} {}", "OK".green().bold(), stage.stage);
                for action in actions {
                    println!("   {action}");
                }
            }
            StageStatus::Skipped { reason } => {
                println!("{} {}: {}", "SKIP".yellow().bold(), stage.stage, reason.dimmed());
            }
            StageStatus::Failed { message } => {
                println!("{} {}", "FAILED".red().bold(), stage.stage);
                for line in message.lines() {
                    println!("   {line}");
                }
            }
        }
    }
}
