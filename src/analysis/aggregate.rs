//! Cross-bundle aggregation

use crate::config::DependencyCount;
use crate::domain::{AggregatedReport, PackageId};
use crate::resolver::walk;
use crate::stats::BundleStats;

/// Walk every bundle independently and split its packages by version count
///
/// Resolutions are never merged across bundles: a package can be single
/// version in one bundle and duplicated in another.
pub fn aggregate(
    root: &PackageId,
    bundles: &[BundleStats],
    mode: DependencyCount,
) -> AggregatedReport {
    let mut report = AggregatedReport::default();

    for bundle in bundles {
        let (single, duplicates) = walk(root, bundle, mode).partition();

        if !single.is_empty() {
            report
                .single_version_packages
                .insert(bundle.name.clone(), single);
        }
        if !duplicates.is_empty() {
            report
                .duplicate_packages
                .insert(bundle.name.clone(), duplicates);
        }
    }

    report
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::stats::ModuleStats;

    fn bundle(name: &str, modules: Vec<ModuleStats>) -> BundleStats {
        BundleStats {
            name: name.to_string(),
            modules,
        }
    }

    #[test]
    fn test_classification_is_per_bundle() {
        let root = PackageId::new("app", "1.0.0");
        let bundles = vec![
            bundle(
                "a.js",
                vec![
                    ModuleStats::app(0, "./src/a.js"),
                    ModuleStats::package(1, "./node_modules/dup/index.js", "dup", "1.0.0")
                        .required_by(0),
                ],
            ),
            bundle(
                "b.js",
                vec![
                    ModuleStats::app(0, "./src/b.js"),
                    ModuleStats::package(1, "./node_modules/dup/index.js", "dup", "1.0.0")
                        .required_by(0),
                    ModuleStats::package(
                        2,
                        "./node_modules/x/node_modules/dup/index.js",
                        "dup",
                        "2.0.0",
                    )
                    .required_by(0),
                ],
            ),
        ];

        let report = aggregate(&root, &bundles, DependencyCount::Edges);

        let single = report
            .single_version_packages
            .get("a.js")
            .expect("a.js should have single version packages");
        assert!(single.get("dup").is_some());
        assert!(!report.duplicate_packages.contains_key("a.js"));

        let duplicates = report
            .duplicate_packages
            .get("b.js")
            .expect("b.js should have duplicates");
        assert_eq!(duplicates.get("dup").map(<[_]>::len), Some(2));
        assert!(!report.single_version_packages.contains_key("b.js"));
    }

    #[test]
    fn test_bundles_without_packages_are_absent() {
        let root = PackageId::new("app", "1.0.0");
        let bundles = vec![bundle("app.js", vec![ModuleStats::app(0, "./src/index.js")])];

        let report = aggregate(&root, &bundles, DependencyCount::Edges);
        assert!(report.is_empty());
    }

    #[test]
    fn test_no_package_in_both_categories() {
        let root = PackageId::new("app", "1.0.0");
        let bundles = vec![bundle(
            "main.js",
            vec![
                ModuleStats::app(0, "./src/index.js"),
                ModuleStats::package(1, "./node_modules/a/index.js", "a", "1.0.0").required_by(0),
                ModuleStats::package(2, "./node_modules/b/index.js", "b", "1.0.0").required_by(1),
                ModuleStats::package(3, "./node_modules/a/node_modules/b/index.js", "b", "2.0.0")
                    .required_by(1),
            ],
        )];

        let report = aggregate(&root, &bundles, DependencyCount::Edges);
        let single = &report.single_version_packages["main.js"];
        let duplicates = &report.duplicate_packages["main.js"];
        for name in single.names() {
            assert!(duplicates.get(name).is_none(), "{name} in both categories");
        }
        assert_eq!(single.names().collect::<Vec<_>>(), vec!["a"]);
        assert_eq!(duplicates.names().collect::<Vec<_>>(), vec!["b"]);
    }
}
