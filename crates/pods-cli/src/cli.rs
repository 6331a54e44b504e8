//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Pods - CocoaPods integration for generated iOS projects
#[derive(Parser, Debug)]
#[command(name = "pods")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Host project directory, the one containing `.pods/`
    #[arg(long, global = true, env = "PODS_HOST", default_value = ".")]
    pub host: PathBuf,

    /// Preferences file to use instead of the per-user one
    #[arg(long, global = true, env = "PODS_PREFERENCES")]
    pub preferences: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the post-generation pipeline against a generated project
    ///
    /// Patches build settings, writes the Podfile, runs `pod install` and
    /// moves the installed frameworks into the project.
    ///
    /// Examples:
    ///   pods build build/ios              # Prompt before raising the target OS
    ///   pods build build/ios --yes        # Raise it without asking
    ///   pods build build/ios --json       # Machine-readable stage report
    Build {
        /// Generated project directory
        project: PathBuf,

        /// Accept target OS upgrades without prompting
        #[arg(short, long)]
        yes: bool,

        /// Output the stage report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check the target OS version against the declared pods
    Check {
        /// Apply a needed upgrade without prompting
        #[arg(short, long)]
        yes: bool,
    },

    /// Print the Podfile for the declared pods
    Podfile {
        /// Write to this generated project directory instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List declared pods
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Enable pod integration during builds
    Enable,

    /// Disable pod integration during builds
    Disable,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
