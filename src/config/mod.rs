//! Check configuration
//!
//! Configuration is passed programmatically to the library. The binary
//! additionally loads it from a `skewcheck.yaml` / `skewcheck.json` file:
//!
//! ```yaml
//! allowedVersions:
//!   foo: ^1.2.0
//!   react: "*"
//! verbose: false
//! emitErrors: true
//! dependencyCount: edges
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, config_invalid, config_not_found, config_parse_failed};
use crate::policy::AllowedVersions;

/// Default configuration file names, looked up in order
pub const CONFIG_FILE_NAMES: [&str; 3] = ["skewcheck.yaml", "skewcheck.yml", "skewcheck.json"];

/// How the dependency count of an installation is computed
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DependencyCount {
    /// Distinct require edges entering the installation
    #[default]
    Edges,
    /// Distinct packages (or the application) requiring the installation
    Parents,
}

/// Configuration of one analysis; immutable for its duration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckConfig {
    /// Package name → allowed semver range
    pub allowed_versions: AllowedVersions,

    /// Include single and duplicate version listings in the report
    pub verbose: bool,

    /// Report violations as errors; `false` downgrades them to warnings
    pub emit_errors: bool,

    pub dependency_count: DependencyCount,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            allowed_versions: AllowedVersions::default(),
            verbose: false,
            emit_errors: true,
            dependency_count: DependencyCount::default(),
        }
    }
}

impl CheckConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_allowed_versions(mut self, allowed_versions: AllowedVersions) -> Self {
        self.allowed_versions = allowed_versions;
        self
    }

    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub fn emit_errors(mut self, emit_errors: bool) -> Self {
        self.emit_errors = emit_errors;
        self
    }

    #[must_use]
    pub fn dependency_count(mut self, dependency_count: DependencyCount) -> Self {
        self.dependency_count = dependency_count;
        self
    }

    /// Parse configuration from a YAML string
    ///
    /// # Errors
    ///
    /// Returns `ConfigParseFailed` naming `input` when the YAML is not a
    /// valid configuration (including invalid ranges).
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| config_parse_failed("input", e.to_string()))
    }

    /// Parse configuration from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `ConfigParseFailed` naming `input` when the JSON is not a
    /// valid configuration (including invalid ranges).
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| config_parse_failed("input", e.to_string()))
    }

    /// Load configuration from a `.json`, `.yaml` or `.yml` file
    ///
    /// Files without an extension are read as YAML.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` when the file is missing, `ConfigInvalid`
    /// for other extensions and `ConfigParseFailed` when it cannot be
    /// parsed (including invalid ranges).
    pub fn load(path: &Path) -> Result<Self> {
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => config_not_found(&display),
            _ => config_parse_failed(&display, e.to_string()),
        })?;

        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase());
        let parsed: std::result::Result<Self, String> = match extension.as_deref() {
            Some("json") => serde_json::from_str(&content).map_err(|e| e.to_string()),
            Some("yaml" | "yml") | None => {
                serde_yaml::from_str(&content).map_err(|e| e.to_string())
            }
            Some(other) => {
                return Err(config_invalid(format!(
                    "unsupported configuration format '.{other}' in {display}"
                )));
            }
        };
        parsed.map_err(|reason| config_parse_failed(&display, reason))
    }

    /// Find a default configuration file in `dir`
    pub fn discover(dir: &Path) -> Option<std::path::PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }
}
