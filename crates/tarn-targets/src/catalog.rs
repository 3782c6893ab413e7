//! Named target lookup.
//!
//! The catalog starts from the built-in targets and layers a project's
//! `targets/*.target.toml` files on top. A project file replaces a built-in
//! with the same name.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Result, TargetError};
use crate::kind::ResolverConfig;
use crate::parse::{check_rules, discover_rules, load_rules_toml};
use crate::resolver::TargetConfigResolver;
use crate::rules::{builtin_rules, TargetRules};

/// Where a catalog entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulesOrigin {
    Builtin,
    Project,
}

/// A catalog entry.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub rules: TargetRules,
    pub origin: RulesOrigin,
    /// One-line description for listings.
    pub description: String,
}

/// Target rules indexed by name.
#[derive(Debug, Clone, Default)]
pub struct TargetCatalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl TargetCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding only the built-in targets.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for (rules, description) in builtin_rules() {
            catalog.entries.insert(
                rules.name.clone(),
                CatalogEntry {
                    rules,
                    origin: RulesOrigin::Builtin,
                    description: description.to_string(),
                },
            );
        }
        catalog
    }

    /// Built-in targets plus every rule file under `project_dir/targets`.
    pub fn with_project(project_dir: &Path) -> Result<Self> {
        let mut catalog = Self::builtin();
        for (stem, path) in discover_rules(project_dir)? {
            let rules = load_rules_toml(&path)?;
            if rules.name != stem {
                log::warn!(
                    "{} declares target '{}'; file name suggests '{}'",
                    path.display(),
                    rules.name,
                    stem
                );
            }
            catalog.insert(rules);
        }
        Ok(catalog)
    }

    /// Add project rules, replacing any entry of the same name.
    ///
    /// Returns the replaced entry, if any.
    pub fn insert(&mut self, rules: TargetRules) -> Option<CatalogEntry> {
        let description = format!(
            "{} target linking {}",
            rules.target_type,
            rules.extra_modules.join(", ")
        );
        let name = rules.name.clone();
        let previous = self.entries.insert(
            name.clone(),
            CatalogEntry {
                rules,
                origin: RulesOrigin::Project,
                description,
            },
        );
        if let Some(previous) = &previous {
            log::warn!("target '{name}' replaces {:?} rules of the same name", previous.origin);
        }
        previous
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.get(name)
    }

    /// Target names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the resolver for `name`, layering its rules on `base`.
    ///
    /// Rules with error-severity validation issues are refused.
    pub fn resolver(&self, name: &str, base: &ResolverConfig) -> Result<TargetConfigResolver> {
        let entry = self.get(name).ok_or_else(|| TargetError::UnknownTarget {
            name: name.to_string(),
        })?;
        check_rules(&entry.rules)?;
        TargetConfigResolver::from_rules(&entry.rules, base)
    }
}
