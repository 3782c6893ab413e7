//! CLI command implementations.

pub mod init;
pub mod resolve;
pub mod target;

use std::path::Path;

use anyhow::{Context, Result};
use tarn_targets::{ResolverConfig, TargetCatalog};

use crate::manifest::TarnManifest;

/// Built-in targets plus the project's rule files, if there is a project.
pub(crate) fn load_catalog(project_dir: Option<&Path>) -> Result<TargetCatalog> {
    match project_dir {
        Some(dir) => TargetCatalog::with_project(dir)
            .with_context(|| format!("loading target rules from {}", dir.display())),
        None => Ok(TargetCatalog::builtin()),
    }
}

/// Version defaults that target rules are layered on.
pub(crate) fn base_config(manifest: Option<&TarnManifest>) -> ResolverConfig {
    manifest.map(|m| m.resolver).unwrap_or_default()
}
