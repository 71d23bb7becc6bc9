//! Shape validation for parsed build statistics
//!
//! Serde already rejects missing required fields. These checks cover the
//! shape serde cannot express: empty identifiers and duplicate module ids.

use std::collections::HashSet;

use super::{BuildStats, BundleStats};
use crate::error::{Result, stats_malformed};

const ROOT: &str = "<root>";

impl BuildStats {
    /// Validate the statistics, failing on the first malformed field
    ///
    /// # Errors
    ///
    /// Returns `StatsMalformed` naming the bundle and field at fault.
    pub fn validate(&self) -> Result<()> {
        if self.root.name.trim().is_empty() {
            return Err(stats_malformed(ROOT, "root.name", "must not be empty"));
        }
        if self.root.version.trim().is_empty() {
            return Err(stats_malformed(ROOT, "root.version", "must not be empty"));
        }

        let mut seen_bundles = HashSet::new();
        for (index, bundle) in self.bundles.iter().enumerate() {
            if bundle.name.trim().is_empty() {
                return Err(stats_malformed(
                    format!("#{index}"),
                    "name",
                    "must not be empty",
                ));
            }
            if !seen_bundles.insert(bundle.name.as_str()) {
                return Err(stats_malformed(
                    &bundle.name,
                    "name",
                    "is used by more than one bundle",
                ));
            }
            validate_bundle(bundle)?;
        }
        Ok(())
    }
}

fn validate_bundle(bundle: &BundleStats) -> Result<()> {
    let mut ids = HashSet::new();
    for module in &bundle.modules {
        if !ids.insert(&module.id) {
            return Err(stats_malformed(
                &bundle.name,
                format!("modules[{}].id", module.id),
                "is not unique within the bundle",
            ));
        }
        if let Some(package) = &module.package {
            if package.name.trim().is_empty() {
                return Err(stats_malformed(
                    &bundle.name,
                    format!("modules[{}].package.name", module.id),
                    "must not be empty",
                ));
            }
            if package.version.trim().is_empty() {
                return Err(stats_malformed(
                    &bundle.name,
                    format!("modules[{}].package.version", module.id),
                    "must not be empty",
                ));
            }
        }
    }
    Ok(())
}
