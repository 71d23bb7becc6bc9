//! Package identities and dependency chains

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// A package at one concrete version, rendered as `name@version`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PackageId {
    pub name: String,
    pub version: String,
}

impl PackageId {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}

/// Path of packages from the application root down to one occurrence
///
/// The first element is always the root package; the last is the package
/// the chain explains.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chain(Vec<PackageId>);

impl Chain {
    /// Chain consisting of the root package only
    pub fn root(root: &PackageId) -> Self {
        Self(vec![root.clone()])
    }

    pub fn packages(&self) -> &[PackageId] {
        &self.0
    }

    pub fn last(&self) -> Option<&PackageId> {
        self.0.last()
    }

    /// Extend the chain with `package` unless it already ends with it
    ///
    /// Requires between files of the same package do not add a hop.
    #[must_use]
    pub fn extended(mut self, package: &PackageId) -> Self {
        if self.last() != Some(package) {
            self.0.push(package.clone());
        }
        self
    }
}

impl From<Vec<PackageId>> for Chain {
    fn from(packages: Vec<PackageId>) -> Self {
        Self(packages)
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, package) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{package}")?;
        }
        Ok(())
    }
}

impl Serialize for Chain {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
