//! Chain reconstruction over the reason graph
//!
//! Reasons point from a module to the modules that required it. Modules are
//! first folded into installations (package name, version and install path);
//! requires between files of one installation never add a hop, so they are
//! dropped and chains are built over the much smaller installation graph:
//! the chains of each issuing installation, extended with the installation's
//! own package. Application modules (no package attribution) are the root of
//! every chain.
//!
//! The graph may contain cycles. Each traversal path carries its own set of
//! visited installations; revisiting one on the current path ends that
//! branch. The set is path-local because the same installation legitimately
//! appears in several independent chains.
//!
//! An installation outside every cycle cannot reach the current path, so its
//! chains do not depend on it and are computed once. Only installations of a
//! strongly connected component are re-walked per path.

use std::collections::{HashMap, HashSet};

use crate::domain::{Chain, PackageId};
use crate::stats::{ModuleId, ModuleStats};

/// Where an installation was required from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Issuer {
    /// Application code, or no reasons at all
    Root,
    Installation(usize),
}

/// Builds package chains for modules of one bundle
pub struct ChainBuilder<'a> {
    root: &'a PackageId,
    /// Installation of each module position; `None` for application modules
    membership: Vec<Option<usize>>,
    packages: Vec<PackageId>,
    issuers: Vec<Vec<Issuer>>,
    cyclic: Vec<bool>,
    resolved: HashMap<usize, Vec<Chain>>,
}

impl<'a> ChainBuilder<'a> {
    /// `index` maps module ids to positions in `modules`
    ///
    /// Reasons referencing unknown modules are skipped here, so a module
    /// whose reasons all dangle contributes no chain.
    pub fn new(
        root: &'a PackageId,
        modules: &[ModuleStats],
        index: &HashMap<&ModuleId, usize>,
    ) -> Self {
        let mut keys: HashMap<(&str, &str, Option<&str>), usize> = HashMap::new();
        let mut packages = Vec::new();
        let membership: Vec<Option<usize>> = modules
            .iter()
            .map(|module| {
                module.package.as_ref().map(|package| {
                    let key = (
                        package.name.as_str(),
                        package.version.as_str(),
                        package.install_path.as_deref(),
                    );
                    *keys.entry(key).or_insert_with(|| {
                        packages.push(PackageId::new(&package.name, &package.version));
                        packages.len() - 1
                    })
                })
            })
            .collect();

        let mut issuers: Vec<Vec<Issuer>> = vec![Vec::new(); packages.len()];
        for (position, module) in modules.iter().enumerate() {
            let Some(node) = membership[position] else {
                continue;
            };
            if module.reasons.is_empty() {
                push_unique(&mut issuers[node], Issuer::Root);
            }
            for reason in &module.reasons {
                let Some(&issuer) = index.get(&reason.module_id) else {
                    tracing::debug!(
                        module = %module.id,
                        issuer = %reason.module_id,
                        "dropping chain through unknown module"
                    );
                    continue;
                };
                let issuer = match membership[issuer] {
                    None => Issuer::Root,
                    Some(other) if other == node => continue,
                    Some(other) => Issuer::Installation(other),
                };
                push_unique(&mut issuers[node], issuer);
            }
        }

        let cyclic = Components::cyclic(&issuers);
        Self {
            root,
            membership,
            packages,
            issuers,
            cyclic,
            resolved: HashMap::new(),
        }
    }

    /// Distinct chains ending at the package of module `position`
    ///
    /// All modules of one installation share its chains. If no reason can be
    /// resolved the result is empty.
    pub fn chains(&mut self, position: usize) -> Vec<Chain> {
        let Some(node) = self.membership[position] else {
            return vec![Chain::root(self.root)];
        };
        let mut path = HashSet::new();
        self.visit(node, &mut path)
    }

    fn visit(&mut self, node: usize, path: &mut HashSet<usize>) -> Vec<Chain> {
        let reusable = path.is_empty() || !self.cyclic[node];
        if reusable {
            if let Some(chains) = self.resolved.get(&node) {
                return chains.clone();
            }
        }

        path.insert(node);
        let mut chains: Vec<Chain> = Vec::new();
        let mut seen: HashSet<Chain> = HashSet::new();
        for entry in self.issuers[node].clone() {
            let found = match entry {
                Issuer::Root => vec![Chain::root(self.root)],
                Issuer::Installation(issuer) if path.contains(&issuer) => {
                    tracing::trace!(package = %self.packages[node], "cycle in reasons");
                    continue;
                }
                Issuer::Installation(issuer) => self.visit(issuer, path),
            };
            for chain in found {
                let chain = chain.extended(&self.packages[node]);
                if seen.insert(chain.clone()) {
                    chains.push(chain);
                }
            }
        }
        path.remove(&node);

        if reusable {
            self.resolved.insert(node, chains.clone());
        }
        chains
    }
}

fn push_unique(issuers: &mut Vec<Issuer>, issuer: Issuer) {
    if !issuers.contains(&issuer) {
        issuers.push(issuer);
    }
}

/// Tarjan's strongly connected components over the issuer graph
struct Components<'g> {
    graph: &'g [Vec<Issuer>],
    next: usize,
    order: Vec<Option<usize>>,
    low: Vec<usize>,
    stack: Vec<usize>,
    on_stack: Vec<bool>,
    cyclic: Vec<bool>,
}

impl<'g> Components<'g> {
    /// Whether each node sits on a cycle
    fn cyclic(graph: &'g [Vec<Issuer>]) -> Vec<bool> {
        let mut components = Self {
            graph,
            next: 0,
            order: vec![None; graph.len()],
            low: vec![0; graph.len()],
            stack: Vec::new(),
            on_stack: vec![false; graph.len()],
            cyclic: vec![false; graph.len()],
        };
        for node in 0..graph.len() {
            if components.order[node].is_none() {
                components.connect(node);
            }
        }
        components.cyclic
    }

    fn connect(&mut self, node: usize) {
        self.order[node] = Some(self.next);
        self.low[node] = self.next;
        self.next += 1;
        self.stack.push(node);
        self.on_stack[node] = true;

        let graph = self.graph;
        for &issuer in &graph[node] {
            let Issuer::Installation(next) = issuer else {
                continue;
            };
            match self.order[next] {
                None => {
                    self.connect(next);
                    self.low[node] = self.low[node].min(self.low[next]);
                }
                Some(order) if self.on_stack[next] => {
                    self.low[node] = self.low[node].min(order);
                }
                Some(_) => {}
            }
        }

        if self.order[node] == Some(self.low[node]) {
            let mut component = Vec::new();
            while let Some(member) = self.stack.pop() {
                self.on_stack[member] = false;
                component.push(member);
                if member == node {
                    break;
                }
            }
            if component.len() > 1 {
                for member in component {
                    self.cyclic[member] = true;
                }
            }
        }
    }
}
