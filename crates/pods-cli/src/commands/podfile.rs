//! Podfile command implementation

use std::path::Path;

use colored::Colorize;
use pods_core::BuildSettings;
use pods_fs::NormalizedPath;
use pods_installer::{render, write_podfile};

use crate::context::{Declaration, HostContext};
use crate::error::Result;

/// Run the podfile command
///
/// Prints the rendered Podfile, or writes it into `output`.
pub fn run_podfile(host: &Path, output: Option<&Path>) -> Result<()> {
    let context = HostContext::load(host, Declaration::Eager)?;
    let contents = render(
        context.settings.target_os_version(),
        &context.config.target_name,
        context.session.registry(),
    );

    match output {
        Some(dir) => {
            let path = write_podfile(&NormalizedPath::new(dir), &contents)?;
            println!("{} Wrote {}", "OK".green().bold(), path.as_str().cyan());
        }
        None => print!("{contents}"),
    }
    Ok(())
}
