//! `tarn.toml` manifest parsing and project configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tarn_targets::ResolverConfig;

/// Manifest file name searched for from the working directory upward.
pub const MANIFEST_FILE: &str = "tarn.toml";

/// The top-level manifest structure for a Tarn project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TarnManifest {
    /// Project metadata (required).
    pub project: ProjectConfig,
    /// Version defaults for targets that do not set their own.
    #[serde(default)]
    pub resolver: ResolverConfig,
    /// Default target request.
    #[serde(default)]
    pub targets: Option<TargetsConfig>,
}

/// Project metadata section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name (required).
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

/// Defaults for `tarn resolve`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetsConfig {
    /// Target resolved when none is named.
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub configuration: Option<String>,
}

impl TarnManifest {
    /// Search upward from `start_dir` for a `tarn.toml` file, parse and return it
    /// along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(MANIFEST_FILE);
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let manifest: TarnManifest = toml::from_str(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                log::debug!("loaded manifest {}", candidate.display());
                return Ok(Some((manifest, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a manifest from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing tarn.toml")
    }

    pub fn default_target(&self) -> Option<&str> {
        self.targets.as_ref().and_then(|t| t.default.as_deref())
    }

    pub fn default_platform(&self) -> Option<&str> {
        self.targets.as_ref().and_then(|t| t.platform.as_deref())
    }

    pub fn default_configuration(&self) -> Option<&str> {
        self.targets
            .as_ref()
            .and_then(|t| t.configuration.as_deref())
    }

    /// Generate the default template for `tarn init`.
    pub fn template(name: &str) -> String {
        format!(
            r#"[project]
name = "{name}"
version = "0.1.0"

[resolver]
build_settings_version = "V2"
include_order_version = "Unreal5_1"

[targets]
default = "{name}Editor"
configuration = "Development"
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tarn_targets::{BuildSettingsVersion, IncludeOrderVersion};

    #[test]
    fn parse_full_manifest() {
        let toml_str = r#"
[project]
name = "Plugin_NavMesh"
version = "1.2.0"
description = "Custom navigation mesh plugin"

[resolver]
build_settings_version = "V3"
include_order_version = "Unreal5_2"

[targets]
default = "Plugin_NavMeshEditor"
platform = "Win64"
configuration = "Development"
"#;
        let manifest = TarnManifest::from_str(toml_str).unwrap();
        assert_eq!(manifest.project.name, "Plugin_NavMesh");
        assert_eq!(manifest.project.version, "1.2.0");
        assert_eq!(
            manifest.resolver.build_settings_version,
            BuildSettingsVersion::V3
        );
        assert_eq!(
            manifest.resolver.include_order_version,
            IncludeOrderVersion::Unreal5_2
        );
        assert_eq!(manifest.default_target(), Some("Plugin_NavMeshEditor"));
        assert_eq!(manifest.default_platform(), Some("Win64"));
        assert_eq!(manifest.default_configuration(), Some("Development"));
    }

    #[test]
    fn parse_minimal_manifest() {
        let manifest = TarnManifest::from_str("[project]\nname = \"minimal\"\n").unwrap();
        assert_eq!(manifest.project.version, "0.1.0");
        assert_eq!(manifest.resolver, ResolverConfig::default());
        assert!(manifest.default_target().is_none());
        assert!(manifest.default_platform().is_none());
    }

    #[test]
    fn reject_invalid_toml() {
        assert!(TarnManifest::from_str("this is not valid toml [[[").is_err());
    }

    #[test]
    fn reject_unknown_version() {
        let toml_str = "[project]\nname = \"x\"\n\n[resolver]\nbuild_settings_version = \"V9\"\n";
        assert!(TarnManifest::from_str(toml_str).is_err());
    }

    #[test]
    fn template_is_valid_toml() {
        let manifest = TarnManifest::from_str(&TarnManifest::template("MyGame")).unwrap();
        assert_eq!(manifest.project.name, "MyGame");
        assert_eq!(manifest.default_target(), Some("MyGameEditor"));
        assert_eq!(manifest.default_configuration(), Some("Development"));
        assert!(manifest.default_platform().is_none());
    }

    #[test]
    fn find_and_load_in_current_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), "[project]\nname = \"here\"\n").unwrap();

        let (manifest, found_dir) = TarnManifest::find_and_load(dir.path()).unwrap().unwrap();
        assert_eq!(manifest.project.name, "here");
        assert_eq!(found_dir, dir.path());
    }

    #[test]
    fn find_and_load_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), "[project]\nname = \"parent\"\n").unwrap();

        let nested = dir.path().join("a").join("b").join("c");
        std::fs::create_dir_all(&nested).unwrap();

        let (manifest, found_dir) = TarnManifest::find_and_load(&nested).unwrap().unwrap();
        assert_eq!(manifest.project.name, "parent");
        assert_eq!(found_dir, dir.path());
    }

    #[test]
    fn find_and_load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), "[project]\n").unwrap();
        let err = TarnManifest::find_and_load(dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parsing"));
    }
}
