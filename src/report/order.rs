//! Total orders used by the report
//!
//! The report text is diffed by consumers, so every listing is sorted with
//! one of these comparators rather than relying on container order.

use std::cmp::Ordering;

use crate::domain::{Installation, Resolution};
use crate::policy::parse_version;

/// Bundle and package names: byte-wise
pub fn names(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

/// Versions: semver precedence, unparsable versions last and lexical
pub fn versions(a: &str, b: &str) -> Ordering {
    match (parse_version(a), parse_version(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Installations: by install path, unattributed first
pub fn installations(a: &Installation, b: &Installation) -> Ordering {
    a.path.cmp(&b.path)
}

/// Resolutions sorted by version
pub fn sorted_resolutions(resolutions: &[Resolution]) -> Vec<&Resolution> {
    let mut sorted: Vec<&Resolution> = resolutions.iter().collect();
    sorted.sort_by(|a, b| versions(&a.version, &b.version));
    sorted
}

/// Installations sorted by install path
pub fn sorted_installations(resolution: &Resolution) -> Vec<&Installation> {
    let mut sorted: Vec<&Installation> = resolution.installations.iter().collect();
    sorted.sort_by(|a, b| installations(a, b));
    sorted
}
