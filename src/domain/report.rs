//! Aggregated analysis results

use std::collections::BTreeMap;

use serde::Serialize;

use super::{PackageVersionSet, Resolution};

/// Per-bundle package versions split by duplication
///
/// A package name appears in at most one of the two maps for a given
/// bundle. Bundles without packages in a category are absent from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedReport {
    /// Bundle name → packages resolved at exactly one version
    pub single_version_packages: BTreeMap<String, PackageVersionSet>,

    /// Bundle name → packages resolved at more than one version
    pub duplicate_packages: BTreeMap<String, PackageVersionSet>,
}

impl AggregatedReport {
    /// All (bundle, package set) pairs from both categories
    pub fn sets(&self) -> impl Iterator<Item = (&str, &PackageVersionSet)> {
        self.single_version_packages
            .iter()
            .chain(self.duplicate_packages.iter())
            .map(|(bundle, set)| (bundle.as_str(), set))
    }

    /// Resolutions of `package` in `bundle`, whichever category holds them
    pub fn resolutions(&self, bundle: &str, package: &str) -> Option<&[Resolution]> {
        self.single_version_packages
            .get(bundle)
            .and_then(|set| set.get(package))
            .or_else(|| {
                self.duplicate_packages
                    .get(bundle)
                    .and_then(|set| set.get(package))
            })
    }

    pub fn is_empty(&self) -> bool {
        self.single_version_packages.is_empty() && self.duplicate_packages.is_empty()
    }
}

/// Offending resolutions of a violated package within one bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Offender {
    pub bundle: String,
    pub resolutions: Vec<Resolution>,
}

/// A package whose observed versions fail its allowed range
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub package: String,

    /// Allowed range as configured
    pub allowed: Option<String>,

    /// Offending resolutions per bundle
    pub offenders: Vec<Offender>,
}

impl Violation {
    /// Distinct offending versions across bundles, unordered
    pub fn versions(&self) -> Vec<&str> {
        let mut versions: Vec<&str> = Vec::new();
        for resolution in self.offenders.iter().flat_map(|o| o.resolutions.iter()) {
            if !versions.contains(&resolution.version.as_str()) {
                versions.push(&resolution.version);
            }
        }
        versions
    }
}
