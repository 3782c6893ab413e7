//! Target resolution.
//!
//! A [`TargetConfigResolver`] holds immutable configuration and maps each
//! [`TargetInfo`] request to a fresh [`TargetDescriptor`]. Resolution does
//! no I/O and touches no shared state, so one resolver can serve any number
//! of threads at once.

use crate::descriptor::{ModuleList, TargetDescriptor, TargetInfo};
use crate::error::{Result, TargetError};
use crate::kind::{Configuration, ResolverConfig, TargetType};
use crate::rules::TargetRules;

/// Maps target requests to resolved descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetConfigResolver {
    target_type: TargetType,
    config: ResolverConfig,
    modules: ModuleList,
}

impl TargetConfigResolver {
    /// Editor resolver that links exactly one module.
    ///
    /// Fails if the module name is blank, as [`from_rules`](Self::from_rules) does.
    pub fn editor(config: ResolverConfig, module: impl Into<String>) -> Result<Self> {
        let mut modules = ModuleList::new();
        if !modules.push(module) {
            return Err(TargetError::Validation {
                detail: "editor target has an empty module name".into(),
            });
        }
        Ok(Self {
            target_type: TargetType::Editor,
            config,
            modules,
        })
    }

    /// Resolver for the NavMesh plugin's editor target.
    pub fn plugin_navmesh_editor() -> Self {
        let mut modules = ModuleList::new();
        modules.push("Plugin_NavMesh");
        Self {
            target_type: TargetType::Editor,
            config: ResolverConfig::default(),
            modules,
        }
    }

    /// Build a resolver from declarative rules layered on `base`.
    ///
    /// Fails if the rules list no modules, an empty module name, or the same
    /// module twice.
    pub fn from_rules(rules: &TargetRules, base: &ResolverConfig) -> Result<Self> {
        if rules.extra_modules.is_empty() {
            return Err(TargetError::Validation {
                detail: format!("target '{}' links no modules", rules.name),
            });
        }
        if rules.extra_modules.iter().any(|m| m.trim().is_empty()) {
            return Err(TargetError::Validation {
                detail: format!("target '{}' has an empty module name", rules.name),
            });
        }
        let modules = ModuleList::try_from(rules.extra_modules.clone()).map_err(|detail| {
            TargetError::Validation {
                detail: format!("target '{}': {detail}", rules.name),
            }
        })?;

        Ok(Self {
            target_type: rules.target_type,
            config: rules.apply(base),
            modules,
        })
    }

    pub fn target_type(&self) -> TargetType {
        self.target_type
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn modules(&self) -> &ModuleList {
        &self.modules
    }

    /// Resolve a request into a descriptor.
    ///
    /// The platform must be non-blank and the configuration must name a
    /// known [`Configuration`]. Surrounding whitespace is dropped from both.
    pub fn resolve(&self, info: TargetInfo) -> Result<TargetDescriptor> {
        let configuration = check_info(&info)?;
        let platform = info.platform.trim().to_string();
        log::debug!(
            "resolving {} for {} {} as {}",
            info.name,
            platform,
            configuration,
            self.target_type
        );

        Ok(TargetDescriptor::new(
            info.name,
            platform,
            configuration,
            self.target_type,
            self.config.build_settings_version,
            self.config.include_order_version,
            self.modules.clone(),
        ))
    }
}

fn check_info(info: &TargetInfo) -> Result<Configuration> {
    if info.platform.trim().is_empty() {
        return Err(TargetError::InvalidTargetInfo {
            field: "platform",
            detail: "must not be empty".into(),
        });
    }
    if info.configuration.trim().is_empty() {
        return Err(TargetError::InvalidTargetInfo {
            field: "configuration",
            detail: "must not be empty".into(),
        });
    }
    info.configuration
        .trim()
        .parse::<Configuration>()
        .map_err(|e| TargetError::InvalidTargetInfo {
            field: "configuration",
            detail: e.to_string(),
        })
}
