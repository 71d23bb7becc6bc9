//! Per-bundle package resolutions
//!
//! ```text
//! PackageVersionSet
//!   package name → [Resolution]          (versions in discovery order)
//!                    ├── version
//!                    └── [Installation]  (one per install path)
//!                          ├── dependencies, files
//!                          └── [Chain]
//! ```

use std::collections::BTreeMap;

use serde::Serialize;

use super::Chain;

/// One install location of a package version inside a bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Installation {
    /// Install path as attributed by the bundler; `None` when not reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Number of dependency references into this installation
    pub dependencies: usize,

    /// Number of distinct files bundled from this installation
    pub files: usize,

    /// Distinct chains explaining the installation, in discovery order
    pub chains: Vec<Chain>,
}

/// A package at one version within one bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub version: String,
    pub installations: Vec<Installation>,
}

impl Resolution {
    /// Dependency references across all installations
    pub fn dependency_count(&self) -> usize {
        self.installations.iter().map(|i| i.dependencies).sum()
    }

    /// Distinct files across all installations
    pub fn file_count(&self) -> usize {
        self.installations.iter().map(|i| i.files).sum()
    }

    /// Every chain of every installation
    pub fn chains(&self) -> impl Iterator<Item = &Chain> {
        self.installations.iter().flat_map(|i| i.chains.iter())
    }
}

/// Package name → resolved versions, scoped to one bundle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PackageVersionSet {
    packages: BTreeMap<String, Vec<Resolution>>,
}

impl PackageVersionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a resolution, replacing an existing one for the same version
    pub fn insert(&mut self, name: impl Into<String>, resolution: Resolution) {
        let versions = self.packages.entry(name.into()).or_default();
        match versions.iter_mut().find(|r| r.version == resolution.version) {
            Some(existing) => *existing = resolution,
            None => versions.push(resolution),
        }
    }

    /// Resolutions of `name`, in discovery order
    pub fn get(&self, name: &str) -> Option<&[Resolution]> {
        self.packages.get(name).map(Vec::as_slice)
    }

    /// Resolution of `name` at `version`
    pub fn resolution(&self, name: &str, version: &str) -> Option<&Resolution> {
        self.get(name)?.iter().find(|r| r.version == version)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Resolution])> {
        self.packages
            .iter()
            .map(|(name, versions)| (name.as_str(), versions.as_slice()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Split into (single version packages, duplicate version packages)
    pub fn partition(self) -> (Self, Self) {
        let (single, duplicates): (BTreeMap<_, _>, BTreeMap<_, _>) = self
            .packages
            .into_iter()
            .partition(|(_, versions)| versions.len() == 1);
        (Self { packages: single }, Self { packages: duplicates })
    }
}

impl FromIterator<(String, Resolution)> for PackageVersionSet {
    fn from_iter<T: IntoIterator<Item = (String, Resolution)>>(iter: T) -> Self {
        let mut set = Self::new();
        for (name, resolution) in iter {
            set.insert(name, resolution);
        }
        set
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::domain::PackageId;

    fn resolution(version: &str, installs: &[(usize, usize)]) -> Resolution {
        Resolution {
            version: version.to_string(),
            installations: installs
                .iter()
                .map(|&(dependencies, files)| Installation {
                    path: None,
                    dependencies,
                    files,
                    chains: vec![Chain::root(&PackageId::new("app", "1.0.0"))],
                })
                .collect(),
        }
    }

    #[test]
    fn test_resolution_totals() {
        let r = resolution("1.0.0", &[(1, 2), (3, 1)]);
        assert_eq!(r.dependency_count(), 4);
        assert_eq!(r.file_count(), 3);
        assert_eq!(r.chains().count(), 2);
    }

    #[test]
    fn test_insert_keeps_one_resolution_per_version() {
        let mut set = PackageVersionSet::new();
        set.insert("foo", resolution("2.0.0", &[(1, 1)]));
        set.insert("foo", resolution("1.0.0", &[(1, 1)]));
        set.insert("foo", resolution("2.0.0", &[(5, 5)]));

        let versions = set.get("foo").expect("foo should be present");
        assert_eq!(versions.len(), 2);
        assert_eq!(versions[0].version, "2.0.0");
        assert_eq!(versions[0].dependency_count(), 5);
        assert_eq!(versions[1].version, "1.0.0");
    }

    #[test]
    fn test_partition_is_mutually_exclusive() {
        let set: PackageVersionSet = vec![
            ("foo".to_string(), resolution("1.0.0", &[(1, 1)])),
            ("bar".to_string(), resolution("1.0.0", &[(1, 1)])),
            ("bar".to_string(), resolution("2.0.0", &[(1, 1)])),
        ]
        .into_iter()
        .collect();

        let (single, duplicates) = set.partition();
        assert_eq!(single.names().collect::<Vec<_>>(), vec!["foo"]);
        assert_eq!(duplicates.names().collect::<Vec<_>>(), vec!["bar"]);
        assert!(single.get("bar").is_none());
        assert!(duplicates.get("foo").is_none());
    }
}
