//! Build statistics input schema
//!
//! The statistics are produced by an external bundler and handed to the
//! analysis already parsed. Only the shape needed to reconstruct package
//! resolutions is modeled; unknown fields are ignored.
//!
//! ```text
//! BuildStats
//!   ├── root: name@version of the application
//!   └── bundles[]
//!         ├── name
//!         └── modules[]
//!               ├── id, file
//!               ├── package?  (absent for application code)
//!               └── reasons[] (issuer module ids)
//! ```

pub mod source;
mod validation;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::PackageId;
use crate::error::{Result, stats_parse_failed};

pub use source::{StatsFile, StatsSource};

/// Module identifier as emitted by the bundler (numeric or named)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModuleId {
    Number(u64),
    Name(String),
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleId::Number(n) => write!(f, "{n}"),
            ModuleId::Name(name) => f.write_str(name),
        }
    }
}

impl From<u64> for ModuleId {
    fn from(n: u64) -> Self {
        ModuleId::Number(n)
    }
}

impl From<&str> for ModuleId {
    fn from(name: &str) -> Self {
        ModuleId::Name(name.to_string())
    }
}

/// Statistics for a whole build
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildStats {
    /// Application package every dependency chain starts from
    pub root: PackageId,

    /// Output bundles of the build
    pub bundles: Vec<BundleStats>,
}

/// Statistics for one output bundle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleStats {
    /// Bundle name (asset or chunk name)
    pub name: String,

    /// Modules contained in the bundle
    pub modules: Vec<ModuleStats>,
}

/// A single resolved source file inside a bundle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleStats {
    pub id: ModuleId,

    /// Resolved file path
    pub file: String,

    /// Owning third-party package; `None` for application code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<ModulePackage>,

    /// Incoming edges: the modules that required this one
    #[serde(default)]
    pub reasons: Vec<Reason>,
}

/// Package attribution of a module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModulePackage {
    pub name: String,
    pub version: String,

    /// Install location, e.g. `node_modules/uses-foo/node_modules/foo`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_path: Option<String>,
}

/// One incoming dependency edge
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reason {
    /// Module that issued the require
    pub module_id: ModuleId,
}

impl BuildStats {
    /// Parse statistics from JSON and validate their shape
    ///
    /// `origin` names the input (file path or `"input"`) in error messages.
    ///
    /// # Errors
    ///
    /// Returns `StatsParseFailed` when the JSON does not match the schema
    /// and `StatsMalformed` when validation rejects it.
    pub fn from_json(json: &str, origin: &str) -> Result<Self> {
        let stats: Self =
            serde_json::from_str(json).map_err(|e| stats_parse_failed(origin, e.to_string()))?;
        stats.validate()?;
        Ok(stats)
    }

    /// Names of all bundles in input order
    pub fn bundle_names(&self) -> Vec<&str> {
        self.bundles.iter().map(|b| b.name.as_str()).collect()
    }
}

impl ModuleStats {
    /// Application module without package attribution
    pub fn app(id: impl Into<ModuleId>, file: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            file: file.into(),
            package: None,
            reasons: Vec::new(),
        }
    }

    /// Third-party module owned by `name@version`
    pub fn package(
        id: impl Into<ModuleId>,
        file: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            file: file.into(),
            package: Some(ModulePackage {
                name: name.into(),
                version: version.into(),
                install_path: None,
            }),
            reasons: Vec::new(),
        }
    }

    /// Set the install path of the owning package
    #[must_use]
    pub fn installed_at(mut self, install_path: impl Into<String>) -> Self {
        if let Some(package) = self.package.as_mut() {
            package.install_path = Some(install_path.into());
        }
        self
    }

    /// Add an incoming edge from `issuer`
    #[must_use]
    pub fn required_by(mut self, issuer: impl Into<ModuleId>) -> Self {
        self.reasons.push(Reason {
            module_id: issuer.into(),
        });
        self
    }
}
