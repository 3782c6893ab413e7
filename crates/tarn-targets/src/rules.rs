//! Declarative target rules.
//!
//! A `TargetRules` value is what a `.target.toml` file holds: the target's
//! name, its type, the modules it links, and optional version overrides
//! layered on top of a base [`ResolverConfig`].

use serde::{Deserialize, Serialize};

use crate::kind::{BuildSettingsVersion, IncludeOrderVersion, ResolverConfig, TargetType};

/// Rules describing one named target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TargetRules {
    /// Target name (e.g., "Plugin_NavMeshEditor").
    pub name: String,
    /// Kind of output the target builds.
    #[serde(rename = "type")]
    pub target_type: TargetType,
    /// Overrides the base build-settings version when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_settings_version: Option<BuildSettingsVersion>,
    /// Overrides the base include-order version when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_order_version: Option<IncludeOrderVersion>,
    /// Modules to link, in link order.
    #[serde(default)]
    pub extra_modules: Vec<String>,
}

impl TargetRules {
    /// Rules with no modules and no version overrides.
    pub fn new(name: impl Into<String>, target_type: TargetType) -> Self {
        Self {
            name: name.into(),
            target_type,
            build_settings_version: None,
            include_order_version: None,
            extra_modules: Vec::new(),
        }
    }

    /// Append a module to link.
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.extra_modules.push(module.into());
        self
    }

    /// Layer this target's version overrides on top of `base`.
    pub fn apply(&self, base: &ResolverConfig) -> ResolverConfig {
        ResolverConfig {
            build_settings_version: self
                .build_settings_version
                .unwrap_or(base.build_settings_version),
            include_order_version: self
                .include_order_version
                .unwrap_or(base.include_order_version),
        }
    }

    /// The NavMesh plugin's editor target.
    pub fn plugin_navmesh_editor() -> Self {
        let mut rules =
            Self::new("Plugin_NavMeshEditor", TargetType::Editor).with_module("Plugin_NavMesh");
        rules.build_settings_version = Some(BuildSettingsVersion::V2);
        rules.include_order_version = Some(IncludeOrderVersion::Unreal5_1);
        rules
    }

    /// The NavMesh plugin's game target.
    pub fn plugin_navmesh_game() -> Self {
        let mut rules = Self::new("Plugin_NavMesh", TargetType::Game).with_module("Plugin_NavMesh");
        rules.build_settings_version = Some(BuildSettingsVersion::V2);
        rules.include_order_version = Some(IncludeOrderVersion::Unreal5_1);
        rules
    }
}

/// Rules for every built-in target, with a one-line description each.
pub fn builtin_rules() -> Vec<(TargetRules, &'static str)> {
    vec![
        (
            TargetRules::plugin_navmesh_editor(),
            "NavMesh plugin editor (Editor, V2, Unreal5_1)",
        ),
        (
            TargetRules::plugin_navmesh_game(),
            "NavMesh plugin game (Game, V2, Unreal5_1)",
        ),
    ]
}
