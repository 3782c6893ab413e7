//! `tarn init` — project scaffolding.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tarn_targets::parse::{generate_template, rules_path};
use tarn_targets::TargetType;

use crate::manifest::{TarnManifest, MANIFEST_FILE};

/// Create a new Tarn project at the given path.
///
/// `name` is the project name. The directory `name` is created relative to cwd.
pub fn run(name: &str) -> Result<()> {
    let project_dir = Path::new(name);
    create_project(project_dir, name)
}

pub(crate) fn create_project(project_dir: &Path, name: &str) -> Result<()> {
    if project_dir.exists() {
        bail!("directory '{}' already exists", project_dir.display());
    }

    // Editor target linking the project's own module; checked before any I/O
    let editor = format!("{name}Editor");
    let rules = generate_template(&editor, TargetType::Editor, name)
        .with_context(|| format!("invalid project name '{name}'"))?;

    fs::create_dir_all(project_dir.join("targets")).context("creating targets/ directory")?;

    fs::write(project_dir.join(MANIFEST_FILE), TarnManifest::template(name))
        .with_context(|| format!("writing {MANIFEST_FILE}"))?;

    fs::write(rules_path(project_dir, &editor), rules)
        .with_context(|| format!("writing targets/{editor}.target.toml"))?;

    println!("Created project '{name}'");
    println!("  {name}/{MANIFEST_FILE}");
    println!("  {name}/targets/{editor}.target.toml");

    Ok(())
}
