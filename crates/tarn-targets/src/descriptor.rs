//! Target requests and resolved target descriptors.

use serde::{Deserialize, Serialize};

use crate::kind::{BuildSettingsVersion, Configuration, IncludeOrderVersion, TargetType};

/// A target request as supplied by the host build tool.
///
/// Fields are kept as raw text; they are checked when the request is
/// resolved, not when it is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetInfo {
    /// Platform identifier (e.g., "Win64", "Linux").
    pub platform: String,
    /// Build configuration name (e.g., "Development").
    pub configuration: String,
    /// Requested target label.
    pub name: String,
}

impl TargetInfo {
    pub fn new(
        platform: impl Into<String>,
        configuration: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            platform: platform.into(),
            configuration: configuration.into(),
            name: name.into(),
        }
    }
}

/// Ordered list of module names with no duplicates.
///
/// Order is link and initialization order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ModuleList(Vec<String>);

impl ModuleList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a module name. Returns `false` if it is blank or already present.
    pub fn push(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if name.trim().is_empty() || self.contains(&name) {
            return false;
        }
        self.0.push(name);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|m| m == name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl TryFrom<Vec<String>> for ModuleList {
    type Error = String;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        let mut list = ModuleList::new();
        for name in names {
            if name.trim().is_empty() {
                return Err("empty module name".to_string());
            }
            if list.contains(&name) {
                return Err(format!("duplicate module name '{name}'"));
            }
            list.0.push(name);
        }
        Ok(list)
    }
}

impl From<ModuleList> for Vec<String> {
    fn from(list: ModuleList) -> Self {
        list.0
    }
}

impl<'a> IntoIterator for &'a ModuleList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A fully-resolved target configuration.
///
/// Produced once per resolution and never mutated afterwards. Deserializing
/// checks the same invariants resolution guarantees: a non-blank platform
/// and at least one module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "DescriptorFields")]
pub struct TargetDescriptor {
    name: String,
    platform: String,
    configuration: Configuration,
    target_type: TargetType,
    build_settings_version: BuildSettingsVersion,
    include_order_version: IncludeOrderVersion,
    extra_modules: ModuleList,
}

impl TargetDescriptor {
    pub(crate) fn new(
        name: String,
        platform: String,
        configuration: Configuration,
        target_type: TargetType,
        build_settings_version: BuildSettingsVersion,
        include_order_version: IncludeOrderVersion,
        extra_modules: ModuleList,
    ) -> Self {
        Self {
            name,
            platform,
            configuration,
            target_type,
            build_settings_version,
            include_order_version,
            extra_modules,
        }
    }

    /// Target label the request asked for.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn configuration(&self) -> Configuration {
        self.configuration
    }

    pub fn target_type(&self) -> TargetType {
        self.target_type
    }

    pub fn build_settings_version(&self) -> BuildSettingsVersion {
        self.build_settings_version
    }

    pub fn include_order_version(&self) -> IncludeOrderVersion {
        self.include_order_version
    }

    /// Modules linked into the target, in link order.
    pub fn extra_modules(&self) -> &ModuleList {
        &self.extra_modules
    }
}

/// Unchecked wire form of [`TargetDescriptor`].
#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
struct DescriptorFields {
    name: String,
    platform: String,
    configuration: Configuration,
    target_type: TargetType,
    build_settings_version: BuildSettingsVersion,
    include_order_version: IncludeOrderVersion,
    extra_modules: ModuleList,
}

impl TryFrom<DescriptorFields> for TargetDescriptor {
    type Error = String;

    fn try_from(f: DescriptorFields) -> Result<Self, Self::Error> {
        if f.platform.trim().is_empty() {
            return Err("platform must not be empty".into());
        }
        if f.extra_modules.is_empty() {
            return Err("extra-modules must not be empty".into());
        }
        Ok(Self::new(
            f.name,
            f.platform,
            f.configuration,
            f.target_type,
            f.build_settings_version,
            f.include_order_version,
            f.extra_modules,
        ))
    }
}
