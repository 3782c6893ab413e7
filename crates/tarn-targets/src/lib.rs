//! Build-target rules, descriptors, and resolution for the Tarn build tool.
//!
//! Resolution turns a target request into a fully-resolved descriptor:
//! - **Request:** platform, build configuration, target name ([`TargetInfo`])
//! - **Rules:** target type, version tags, linked modules ([`TargetRules`])
//! - **Result:** an immutable [`TargetDescriptor`]
//!
//! Rules come from built-ins or from `.target.toml` files gathered in a
//! [`TargetCatalog`].

pub mod catalog;
pub mod descriptor;
pub mod error;
pub mod kind;
pub mod parse;
pub mod resolver;
pub mod rules;

pub use catalog::{CatalogEntry, RulesOrigin, TargetCatalog};
pub use descriptor::{ModuleList, TargetDescriptor, TargetInfo};
pub use error::{Result, TargetError};
pub use kind::{BuildSettingsVersion, Configuration, IncludeOrderVersion, ResolverConfig, TargetType};
pub use resolver::TargetConfigResolver;
pub use rules::TargetRules;
