//! Fold a bundle's modules into package resolutions

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::config::DependencyCount;
use crate::domain::{Chain, Installation, PackageId, PackageVersionSet, Resolution};
use crate::stats::{BundleStats, ModuleId, ModulePackage};

use super::ChainBuilder;

/// A reference into an installation, counted once per distinct key
#[derive(Debug, PartialEq, Eq, Hash)]
enum Reference<'a> {
    /// Require edge from issuer module to required module
    Edge(&'a ModuleId, &'a ModuleId),
    /// Issuing package; `None` is application code
    Parent(Option<(&'a str, &'a str)>),
}

struct InstallationAcc<'a> {
    path: Option<&'a str>,
    references: HashSet<Reference<'a>>,
    files: HashSet<&'a str>,
    /// Shared by every module of the installation, filled on first sight
    chains: Option<Vec<Chain>>,
}

impl<'a> InstallationAcc<'a> {
    fn new(path: Option<&'a str>) -> Self {
        Self {
            path,
            references: HashSet::new(),
            files: HashSet::new(),
            chains: None,
        }
    }

    fn finish(self) -> Installation {
        Installation {
            path: self.path.map(str::to_string),
            dependencies: self.references.len(),
            files: self.files.len(),
            chains: self.chains.unwrap_or_default(),
        }
    }
}

struct VersionAcc<'a> {
    version: &'a str,
    installations: Vec<InstallationAcc<'a>>,
}

impl<'a> VersionAcc<'a> {
    fn installation(&mut self, path: Option<&'a str>) -> &mut InstallationAcc<'a> {
        let position = match self.installations.iter().position(|i| i.path == path) {
            Some(position) => position,
            None => {
                self.installations.push(InstallationAcc::new(path));
                self.installations.len() - 1
            }
        };
        &mut self.installations[position]
    }
}

fn version_acc<'v, 'a>(
    versions: &'v mut Vec<VersionAcc<'a>>,
    version: &'a str,
) -> &'v mut VersionAcc<'a> {
    let position = match versions.iter().position(|v| v.version == version) {
        Some(position) => position,
        None => {
            versions.push(VersionAcc {
                version,
                installations: Vec::new(),
            });
            versions.len() - 1
        }
    };
    &mut versions[position]
}

fn same_installation(issuer: Option<&ModulePackage>, package: &ModulePackage) -> bool {
    issuer.is_some_and(|issuer| {
        issuer.name == package.name
            && issuer.version == package.version
            && issuer.install_path == package.install_path
    })
}

/// Reconstruct the package versions resolved inside one bundle
///
/// Modules without package attribution belong to the application and are
/// not tracked. Each `(name, version)` accumulates exactly one
/// [`Resolution`]; versions keep discovery order.
pub fn walk(root: &PackageId, bundle: &BundleStats, mode: DependencyCount) -> PackageVersionSet {
    let modules = bundle.modules.as_slice();
    let index: HashMap<&ModuleId, usize> = modules
        .iter()
        .enumerate()
        .map(|(position, module)| (&module.id, position))
        .collect();
    let mut builder = ChainBuilder::new(root, modules, &index);

    let mut packages: BTreeMap<&str, Vec<VersionAcc>> = BTreeMap::new();

    for (position, module) in modules.iter().enumerate() {
        let Some(package) = &module.package else {
            continue;
        };

        let versions = packages.entry(package.name.as_str()).or_default();
        let installation =
            version_acc(versions, &package.version).installation(package.install_path.as_deref());

        installation.files.insert(module.file.as_str());

        for reason in &module.reasons {
            let Some(&issuer_position) = index.get(&reason.module_id) else {
                continue;
            };
            let issuer = &modules[issuer_position];
            if same_installation(issuer.package.as_ref(), package) {
                continue;
            }
            let reference = match mode {
                DependencyCount::Edges => Reference::Edge(&issuer.id, &module.id),
                DependencyCount::Parents => Reference::Parent(
                    issuer
                        .package
                        .as_ref()
                        .map(|p| (p.name.as_str(), p.version.as_str())),
                ),
            };
            installation.references.insert(reference);
        }

        installation.chains.get_or_insert_with(|| builder.chains(position));
    }

    let set: PackageVersionSet = packages
        .into_iter()
        .flat_map(|(name, versions)| {
            versions.into_iter().map(move |version| {
                let resolution = Resolution {
                    version: version.version.to_string(),
                    installations: version
                        .installations
                        .into_iter()
                        .map(InstallationAcc::finish)
                        .collect(),
                };
                (name.to_string(), resolution)
            })
        })
        .collect();

    tracing::debug!(bundle = %bundle.name, packages = set.len(), "walked bundle");
    set
}
