//! `tarn resolve` — resolve a target request into a descriptor.

use std::path::Path;

use anyhow::{bail, Context, Result};
use tarn_targets::{TargetDescriptor, TargetInfo};

use super::{base_config, load_catalog};
use crate::manifest::TarnManifest;

/// Output format for a resolved descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
    Toml,
}

impl OutputFormat {
    pub fn parse(s: Option<&str>) -> Result<Self> {
        match s.unwrap_or("human") {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            other => bail!("unknown format '{other}' (expected human, json, or toml)"),
        }
    }
}

/// Resolve and print a target.
///
/// Any of `name`, `platform`, and `configuration` left out are taken from
/// the manifest's `[targets]` section.
pub fn run(
    project_dir: Option<&Path>,
    manifest: Option<&TarnManifest>,
    name: Option<&str>,
    platform: Option<&str>,
    configuration: Option<&str>,
    format: Option<&str>,
) -> Result<()> {
    let format = OutputFormat::parse(format)?;
    let descriptor = resolve(project_dir, manifest, name, platform, configuration)?;
    print!("{}", render(&descriptor, format)?);
    Ok(())
}

pub(crate) fn resolve(
    project_dir: Option<&Path>,
    manifest: Option<&TarnManifest>,
    name: Option<&str>,
    platform: Option<&str>,
    configuration: Option<&str>,
) -> Result<TargetDescriptor> {
    let Some(name) = name.or_else(|| manifest.and_then(TarnManifest::default_target)) else {
        bail!("no target named and no [targets] default in tarn.toml");
    };
    let Some(platform) = platform.or_else(|| manifest.and_then(TarnManifest::default_platform))
    else {
        bail!("no platform given (use --platform or set [targets] platform)");
    };
    let Some(configuration) =
        configuration.or_else(|| manifest.and_then(TarnManifest::default_configuration))
    else {
        bail!("no configuration given (use --configuration or set [targets] configuration)");
    };

    let base = base_config(manifest);
    let catalog = load_catalog(project_dir)?;
    let resolver = catalog
        .resolver(name, &base)
        .with_context(|| format!("preparing target '{name}'"))?;

    let info = TargetInfo::new(platform, configuration, name);
    let descriptor = resolver
        .resolve(info)
        .with_context(|| format!("resolving target '{name}'"))?;
    Ok(descriptor)
}

pub(crate) fn render(descriptor: &TargetDescriptor, format: OutputFormat) -> Result<String> {
    let out = match format {
        OutputFormat::Json => {
            let mut s = serde_json::to_string_pretty(descriptor)?;
            s.push('\n');
            s
        }
        OutputFormat::Toml => toml::to_string_pretty(descriptor)?,
        OutputFormat::Human => {
            let modules: Vec<&str> = descriptor.extra_modules().iter().map(String::as_str).collect();
            format!(
                "Target:          {}\n\
                 Platform:        {}\n\
                 Configuration:   {}\n\
                 Type:            {}\n\
                 Build settings:  {}\n\
                 Include order:   {}\n\
                 Extra modules:   {}\n",
                descriptor.name(),
                descriptor.platform(),
                descriptor.configuration(),
                descriptor.target_type(),
                descriptor.build_settings_version(),
                descriptor.include_order_version(),
                modules.join(", "),
            )
        }
    };
    Ok(out)
}
