//! TOML parsing, serialization, validation, and discovery for target rules.
//!
//! Target rules are stored as `.target.toml` files in the `targets/` directory
//! of a Tarn project. This module provides functions to load, validate,
//! serialize, and discover these files.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{Result, TargetError};
use crate::kind::TargetType;
use crate::rules::TargetRules;

/// File suffix for target rule files.
pub const RULES_SUFFIX: &str = ".target.toml";

/// A validation issue found in a rule definition.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Severity: "error" or "warning".
    pub severity: &'static str,
    /// Human-readable description.
    pub message: String,
}

impl ValidationIssue {
    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: "error",
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: "warning",
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == "error"
    }
}

/// Load target rules from a `.target.toml` file.
pub fn load_rules_toml(path: &Path) -> Result<TargetRules> {
    if !path.exists() {
        return Err(TargetError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    parse_rules_toml(&content)
}

/// Parse target rules from a TOML string.
pub fn parse_rules_toml(toml_str: &str) -> Result<TargetRules> {
    let rules: TargetRules = toml::from_str(toml_str)?;
    Ok(rules)
}

/// Serialize target rules to pretty TOML.
pub fn rules_to_toml(rules: &TargetRules) -> Result<String> {
    let toml_str = toml::to_string_pretty(rules)?;
    Ok(toml_str)
}

/// Validate target rules for structural correctness.
///
/// Returns `Ok(())` if there are no issues at all, or `Err(issues)`.
/// Warnings alone still come back as `Err`; use
/// [`ValidationIssue::is_error`] to decide whether they are fatal.
pub fn validate_rules(rules: &TargetRules) -> std::result::Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    if rules.name.trim().is_empty() {
        issues.push(ValidationIssue::error("target name is empty"));
    } else if rules.name.chars().any(char::is_whitespace) {
        issues.push(ValidationIssue::error(format!(
            "target name '{}' contains whitespace",
            rules.name
        )));
    } else if rules.name.contains(['/', '\\']) || rules.name.contains("..") {
        issues.push(ValidationIssue::error(format!(
            "target name '{}' contains a path separator or '..'",
            rules.name
        )));
    }

    if rules.extra_modules.is_empty() {
        issues.push(ValidationIssue::error("extra-modules is empty"));
    }

    let mut seen = HashSet::new();
    for module in &rules.extra_modules {
        if module.trim().is_empty() {
            issues.push(ValidationIssue::error("extra-modules contains an empty name"));
        } else if !seen.insert(module.as_str()) {
            issues.push(ValidationIssue::error(format!(
                "module '{module}' is listed more than once"
            )));
        }
    }

    if rules.target_type == TargetType::Editor && !rules.name.ends_with("Editor") {
        issues.push(ValidationIssue::warning(format!(
            "editor target '{}' does not end in 'Editor'",
            rules.name
        )));
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// Generate a template `.target.toml` for a new target.
///
/// Versions are left unset so the project's resolver defaults apply.
/// Fails with [`TargetError::Validation`] if the rules would not pass
/// [`validate_rules`]; warnings are allowed.
pub fn generate_template(name: &str, target_type: TargetType, module: &str) -> Result<String> {
    let rules = TargetRules::new(name, target_type).with_module(module);
    check_rules(&rules)?;
    rules_to_toml(&rules)
}

/// Like [`validate_rules`], but only error-severity issues fail, folded
/// into one [`TargetError::Validation`].
pub fn check_rules(rules: &TargetRules) -> Result<()> {
    let Err(issues) = validate_rules(rules) else {
        return Ok(());
    };
    let errors: Vec<_> = issues
        .iter()
        .filter(|i| i.is_error())
        .map(|i| i.message.as_str())
        .collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(TargetError::Validation {
            detail: errors.join("; "),
        })
    }
}

/// Path of the rule file for `name` inside a project.
pub fn rules_path(project_dir: &Path, name: &str) -> PathBuf {
    project_dir
        .join("targets")
        .join(format!("{name}{RULES_SUFFIX}"))
}

/// Discover all `.target.toml` files in a project's `targets/` directory.
///
/// Returns a list of (target_name, file_path) pairs sorted by name.
pub fn discover_rules(project_dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let targets_dir = project_dir.join("targets");
    if !targets_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut found = Vec::new();
    for entry in std::fs::read_dir(&targets_dir)? {
        let path = entry?.path();
        let stem = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.strip_suffix(RULES_SUFFIX))
            .map(str::to_string);
        match stem {
            Some(name) if !name.is_empty() => found.push((name, path)),
            _ => log::warn!("skipping {}: not a {RULES_SUFFIX} file", path.display()),
        }
    }
    found.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(found)
}
