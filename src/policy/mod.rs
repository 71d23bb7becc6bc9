//! Allowed-version policy
//!
//! Callers map package names to npm semver ranges. A package without an
//! entry has no policy and is never violated. The literal `*` allows any
//! version, prereleases included.

pub mod range;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SkewcheckError, invalid_range};

pub use range::{NpmRange, parse_version};

/// Wildcard that allows every version unconditionally
pub const ANY_VERSION: &str = "*";

/// Policy for a single package
#[derive(Debug, Clone)]
pub enum VersionPolicy {
    /// `*`: any version, including prereleases
    Any,
    /// Versions must satisfy the range
    Range(NpmRange),
}

impl VersionPolicy {
    /// Parse a policy for `package` from its range specifier
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` when the specifier is not a valid npm range.
    pub fn parse(package: &str, specifier: &str) -> Result<Self> {
        if specifier.trim() == ANY_VERSION {
            return Ok(VersionPolicy::Any);
        }
        NpmRange::parse(specifier)
            .map(VersionPolicy::Range)
            .map_err(|reason| invalid_range(package, specifier, reason))
    }

    /// Range specifier as configured
    pub fn as_str(&self) -> &str {
        match self {
            VersionPolicy::Any => ANY_VERSION,
            VersionPolicy::Range(range) => range.as_str(),
        }
    }

    pub fn allows(&self, version: &str) -> bool {
        match self {
            VersionPolicy::Any => true,
            VersionPolicy::Range(range) => range.satisfied_by(version),
        }
    }
}

/// Package name → allowed range, parsed up front
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, String>",
    into = "BTreeMap<String, String>"
)]
pub struct AllowedVersions {
    entries: BTreeMap<String, VersionPolicy>,
}

impl AllowedVersions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(package, range)` pairs, validating every range
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` for the first range that cannot be parsed.
    pub fn parse<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut allowed = Self::new();
        for (package, specifier) in entries {
            allowed.insert(package, specifier.as_ref())?;
        }
        Ok(allowed)
    }

    /// Add or replace the policy of one package
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` when the specifier cannot be parsed.
    pub fn insert(&mut self, package: impl Into<String>, specifier: &str) -> Result<()> {
        let package = package.into();
        let policy = VersionPolicy::parse(&package, specifier)?;
        self.entries.insert(package, policy);
        Ok(())
    }

    pub fn get(&self, package: &str) -> Option<&VersionPolicy> {
        self.entries.get(package)
    }

    /// Entries in package name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VersionPolicy)> {
        self.entries.iter().map(|(name, policy)| (name.as_str(), policy))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overlay `other` on top of these entries
    pub fn merge(&mut self, other: AllowedVersions) {
        self.entries.extend(other.entries);
    }
}

impl TryFrom<BTreeMap<String, String>> for AllowedVersions {
    type Error = SkewcheckError;

    fn try_from(entries: BTreeMap<String, String>) -> Result<Self> {
        Self::parse(entries)
    }
}

impl From<AllowedVersions> for BTreeMap<String, String> {
    fn from(allowed: AllowedVersions) -> Self {
        allowed
            .entries
            .into_iter()
            .map(|(name, policy)| (name, policy.as_str().to_string()))
            .collect()
    }
}

/// Whether any observed version of `package` violates its allowed range
///
/// Packages without an entry are never violated; `*` is never violated.
pub fn is_violated<'a, I>(allowed: &AllowedVersions, package: &str, versions: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    match allowed.get(package) {
        None | Some(VersionPolicy::Any) => false,
        Some(policy) => versions.into_iter().any(|version| !policy.allows(version)),
    }
}
