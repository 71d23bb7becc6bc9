//! Allowed-version classification of aggregated packages

use std::collections::BTreeSet;

use crate::domain::{AggregatedReport, Offender, Violation};
use crate::policy::{AllowedVersions, is_violated};

/// Packages whose versions, across all bundles, fail their allowed range
///
/// Each violation keeps, per bundle, only the resolutions that fail the
/// range. The result is unordered; an empty policy never yields violations.
pub fn classify(report: &AggregatedReport, allowed: &AllowedVersions) -> Vec<Violation> {
    if allowed.is_empty() {
        return Vec::new();
    }

    let bundles: BTreeSet<&str> = report.sets().map(|(bundle, _)| bundle).collect();
    let mut violations = Vec::new();

    for (package, policy) in allowed.iter() {
        let versions: BTreeSet<&str> = report
            .sets()
            .filter_map(|(_, set)| set.get(package))
            .flatten()
            .map(|resolution| resolution.version.as_str())
            .collect();

        if !is_violated(allowed, package, versions.iter().copied()) {
            continue;
        }

        let offenders: Vec<Offender> = bundles
            .iter()
            .filter_map(|bundle| {
                let resolutions: Vec<_> = report
                    .resolutions(bundle, package)?
                    .iter()
                    .filter(|resolution| !policy.allows(&resolution.version))
                    .cloned()
                    .collect();
                (!resolutions.is_empty()).then(|| Offender {
                    bundle: (*bundle).to_string(),
                    resolutions,
                })
            })
            .collect();

        tracing::debug!(
            package,
            allowed = policy.as_str(),
            bundles = offenders.len(),
            "allowed versions violated"
        );

        violations.push(Violation {
            package: package.to_string(),
            allowed: Some(policy.as_str().to_string()),
            offenders,
        });
    }

    violations
}
