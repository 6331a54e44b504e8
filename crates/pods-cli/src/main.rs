//! Pods CLI
//!
//! Declares plugin pods, keeps the host's target OS version in step with
//! them, and integrates CocoaPods into generated iOS projects.

mod cli;
mod commands;
mod context;
mod error;
mod interactive;
mod logging;

use clap::{CommandFactory, Parser};
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    tracing::debug!(host = %cli.host.display(), "starting");

    match cli.command {
        Some(cmd) => execute_command(cmd, &cli.host, cli.preferences.as_deref()),
        None => {
            println!(
                "{} CocoaPods integration for generated iOS projects",
                "pods".green().bold()
            );
            println!();
            println!("Run {} for available commands.", "pods --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(
    cmd: Commands,
    host: &std::path::Path,
    preferences: Option<&std::path::Path>,
) -> Result<()> {
    match cmd {
        Commands::Build { project, yes, json } => {
            let enabled = context::load_preferences(preferences)?.integration_enabled();
            let mut prompt = interactive::upgrade_prompt(yes);
            commands::run_build(host, &project, enabled, prompt.as_mut(), json)
        }
        Commands::Check { yes } => {
            let mut prompt = interactive::upgrade_prompt(yes);
            commands::run_check(host, prompt.as_mut())
        }
        Commands::Podfile { output } => commands::run_podfile(host, output.as_deref()),
        Commands::List { json } => commands::run_list(host, json),
        Commands::Enable => {
            let mut prefs = context::load_preferences(preferences)?;
            commands::run_set_enabled(&mut prefs, true)
        }
        Commands::Disable => {
            let mut prefs = context::load_preferences(preferences)?;
            commands::run_set_enabled(&mut prefs, false)
        }
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "pods", &mut std::io::stdout());
            Ok(())
        }
    }
}
