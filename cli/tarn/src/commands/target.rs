//! `tarn target` — target listing, description, scaffolding, and validation.

use std::path::Path;

use anyhow::{bail, Context, Result};
use tarn_targets::parse::{generate_template, rules_path, rules_to_toml, validate_rules};
use tarn_targets::{RulesOrigin, TargetType};

use super::{base_config, load_catalog};
use crate::manifest::TarnManifest;

/// List built-in and project targets.
pub fn list(project_dir: Option<&Path>) -> Result<()> {
    let catalog = load_catalog(project_dir)?;

    println!("Targets:");
    println!();
    for entry in catalog.entries() {
        let origin = match entry.origin {
            RulesOrigin::Builtin => "built-in",
            RulesOrigin::Project => "project",
        };
        println!(
            "  {:<28} {:<9} {}",
            entry.rules.name, origin, entry.description
        );
    }
    println!();
    println!("Use 'tarn target describe <name>' for details.");
    Ok(())
}

/// Describe a target's rules and the versions it would resolve with.
pub fn describe(
    name: &str,
    project_dir: Option<&Path>,
    manifest: Option<&TarnManifest>,
    format: Option<&str>,
) -> Result<()> {
    let catalog = load_catalog(project_dir)?;
    let Some(entry) = catalog.get(name) else {
        bail!("unknown target: '{name}'. Use 'tarn target list' to see available targets.");
    };

    match format {
        None | Some("human") => {}
        Some("toml") => {
            print!("{}", rules_to_toml(&entry.rules)?);
            return Ok(());
        }
        Some(other) => bail!("unknown format '{other}' (expected human or toml)"),
    }

    let applied = entry.rules.apply(&base_config(manifest));
    println!("=== Target: {} ===", entry.rules.name);
    println!("Type:           {}", entry.rules.target_type);
    println!(
        "Build settings: {}{}",
        applied.build_settings_version,
        inherited(entry.rules.build_settings_version.is_none())
    );
    println!(
        "Include order:  {}{}",
        applied.include_order_version,
        inherited(entry.rules.include_order_version.is_none())
    );
    println!("Extra modules:");
    for module in &entry.rules.extra_modules {
        println!("  {module}");
    }
    Ok(())
}

fn inherited(from_base: bool) -> &'static str {
    if from_base {
        " (project default)"
    } else {
        ""
    }
}

/// Write a template rule file for a new target into `targets/`.
pub fn add(
    name: &str,
    project_dir: &Path,
    target_type: Option<&str>,
    module: Option<&str>,
) -> Result<()> {
    let target_type = target_type
        .unwrap_or("game")
        .parse::<TargetType>()
        .context("invalid --type")?;
    let module = module.unwrap_or(name);
    // Name checks (no separators or '..') must pass before the path is built.
    let content = generate_template(name, target_type, module)?;

    let path = rules_path(project_dir, name);
    if path.exists() {
        bail!("target file '{}' already exists", path.display());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;

    println!("Created {}", path.display());
    Ok(())
}

/// Validate a target's rules, failing on any error-severity issue.
pub fn validate(name: &str, project_dir: Option<&Path>) -> Result<()> {
    let catalog = load_catalog(project_dir)?;
    let Some(entry) = catalog.get(name) else {
        bail!("unknown target: '{name}'");
    };

    match validate_rules(&entry.rules) {
        Ok(()) => {
            println!("{name}: ok");
            Ok(())
        }
        Err(issues) => {
            for issue in &issues {
                println!("{name}: {}: {}", issue.severity, issue.message);
            }
            let errors = issues.iter().filter(|i| i.is_error()).count();
            if errors > 0 {
                bail!("target '{name}' has {errors} error(s)");
            }
            Ok(())
        }
    }
}
