//! List command implementation

use std::path::Path;

use colored::Colorize;
use pods_registry::Pod;

use crate::context::{Declaration, HostContext};
use crate::error::Result;

/// Run the list command
pub fn run_list(host: &Path, json: bool) -> Result<()> {
    let context = HostContext::load(host, Declaration::Eager)?;
    let registry = context.session.registry();

    if json {
        let pods: Vec<&Pod> = registry.iter().collect();
        println!("{}", serde_json::to_string_pretty(&pods)?);
        return Ok(());
    }

    if registry.is_empty() {
        println!("{}", "No pods declared.".dimmed());
        return Ok(());
    }

    super::print_upgrades(context.session.upgrades());
    println!("{}", "Declared pods:".bold());
    for pod in registry.iter() {
        let version = pod.version.constraint().unwrap_or_else(|| "latest".to_string());
        let mut notes = Vec::new();
        if let Some(min) = &pod.min_target_sdk {
            notes.push(format!("min OS {min}"));
        }
        if !pod.bitcode {
            notes.push("no bitcode".to_string());
        }
        let notes = if notes.is_empty() {
            String::new()
        } else {
            format!(" ({})", notes.join(", "))
        };
        println!("  {} {}{}", pod.name.cyan(), version, notes.dimmed());
    }
    Ok(())
}
