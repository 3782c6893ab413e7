//! Error types for target resolution and rule-file operations.

use std::path::PathBuf;

/// Errors that can occur while loading rules or resolving a target.
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    /// A required field of the target request is missing or malformed.
    #[error("invalid target info: {field}: {detail}")]
    InvalidTargetInfo {
        /// Name of the offending request field.
        field: &'static str,
        /// Description of what was wrong with it.
        detail: String,
    },

    /// TOML deserialization error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// I/O error reading/writing rule files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rule file not found.
    #[error("target rule file not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// No rules are registered under the requested target name.
    #[error("unknown target: '{name}'")]
    UnknownTarget {
        /// The requested target name.
        name: String,
    },

    /// Validation error in a rule definition.
    #[error("validation error: {detail}")]
    Validation {
        /// Description of the validation failure.
        detail: String,
    },
}

/// Result type for target operations.
pub type Result<T> = std::result::Result<T, TargetError>;
