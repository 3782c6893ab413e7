//! Target vocabulary.
//!
//! Target types, build configurations, and the two version tags that
//! select compatibility behavior of the external compilation toolchain.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of build output a target produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetType {
    /// Editor executable with all editor-only modules linked in.
    Editor,
    Game,
    /// Dedicated server without rendering.
    Server,
    Client,
    /// Standalone program (tools, commandlets).
    Program,
}

impl TargetType {
    /// All target types, in declaration order.
    pub const ALL: [TargetType; 5] = [
        TargetType::Editor,
        TargetType::Game,
        TargetType::Server,
        TargetType::Client,
        TargetType::Program,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TargetType::Editor => "Editor",
            TargetType::Game => "Game",
            TargetType::Server => "Server",
            TargetType::Client => "Client",
            TargetType::Program => "Program",
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetType {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseKindError::new("target type", s))
    }
}

/// Build configuration requested by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Configuration {
    Debug,
    /// Debug game code, optimized engine code.
    DebugGame,
    Development,
    Test,
    Shipping,
}

impl Configuration {
    pub const ALL: [Configuration; 5] = [
        Configuration::Debug,
        Configuration::DebugGame,
        Configuration::Development,
        Configuration::Test,
        Configuration::Shipping,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Configuration::Debug => "Debug",
            Configuration::DebugGame => "DebugGame",
            Configuration::Development => "Development",
            Configuration::Test => "Test",
            Configuration::Shipping => "Shipping",
        }
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Configuration {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Configuration::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseKindError::new("configuration", s))
    }
}

/// Default build settings applied by the toolchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BuildSettingsVersion {
    V1,
    V2,
    V3,
    V4,
    V5,
}

impl BuildSettingsVersion {
    pub const LATEST: BuildSettingsVersion = BuildSettingsVersion::V5;
}

impl fmt::Display for BuildSettingsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Header include-order convention the target compiles against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IncludeOrderVersion {
    Unreal5_0,
    Unreal5_1,
    Unreal5_2,
    Unreal5_3,
    Unreal5_4,
}

impl IncludeOrderVersion {
    pub const OLDEST: IncludeOrderVersion = IncludeOrderVersion::Unreal5_0;
    pub const LATEST: IncludeOrderVersion = IncludeOrderVersion::Unreal5_4;
}

impl fmt::Display for IncludeOrderVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Failure to parse a vocabulary value from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseKindError {
    /// Which vocabulary was being parsed.
    pub kind: &'static str,
    /// The rejected text.
    pub value: String,
}

impl ParseKindError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Version defaults injected into a resolver at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub build_settings_version: BuildSettingsVersion,
    pub include_order_version: IncludeOrderVersion,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            build_settings_version: BuildSettingsVersion::V2,
            include_order_version: IncludeOrderVersion::Unreal5_1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_type_parses_case_insensitively() {
        assert_eq!("editor".parse::<TargetType>().unwrap(), TargetType::Editor);
        assert_eq!("PROGRAM".parse::<TargetType>().unwrap(), TargetType::Program);
        let err = "tool".parse::<TargetType>().unwrap_err();
        assert_eq!(err.value, "tool");
        assert_eq!(err.to_string(), "unknown target type 'tool'");
    }

    #[test]
    fn configuration_round_trips_through_display() {
        for c in Configuration::ALL {
            assert_eq!(c.to_string().parse::<Configuration>().unwrap(), c);
        }
        assert_eq!(
            "debuggame".parse::<Configuration>().unwrap(),
            Configuration::DebugGame
        );
        assert!("".parse::<Configuration>().is_err());
        assert!("Release".parse::<Configuration>().is_err());
    }

    #[test]
    fn versions_are_ordered() {
        assert!(BuildSettingsVersion::V1 < BuildSettingsVersion::V2);
        assert_eq!(BuildSettingsVersion::LATEST, BuildSettingsVersion::V5);
        assert!(IncludeOrderVersion::OLDEST < IncludeOrderVersion::Unreal5_1);
        assert_eq!(IncludeOrderVersion::Unreal5_1.to_string(), "Unreal5_1");
    }

    #[test]
    fn resolver_config_defaults() {
        let config = ResolverConfig::default();
        assert_eq!(config.build_settings_version, BuildSettingsVersion::V2);
        assert_eq!(config.include_order_version, IncludeOrderVersion::Unreal5_1);
    }

    #[test]
    fn resolver_config_fills_missing_keys() {
        let config: ResolverConfig = toml::from_str("build_settings_version = \"V4\"").unwrap();
        assert_eq!(config.build_settings_version, BuildSettingsVersion::V4);
        assert_eq!(config.include_order_version, IncludeOrderVersion::Unreal5_1);
    }
}
