//! Text rendering of version info and violations
//!
//! Every non-empty line carries a four space base indent; list nesting adds
//! two spaces per level (bundle > package > version > installation > chain).

use std::collections::BTreeSet;

use serde::Serialize;

use super::order;
use crate::config::CheckConfig;
use crate::domain::{AggregatedReport, Installation, PackageVersionSet, Violation};

const BASE_INDENT: &str = "    ";

pub const INFO_HEADER: &str = "Versions info";
pub const SINGLE_HEADER: &str = "Single version packages";
pub const DUPLICATE_HEADER: &str = "Duplicate version packages";
pub const VIOLATIONS_HEADER: &str = "Versions violations";
pub const VIOLATIONS_INTRO: &str =
    "skewcheck found the following packages violating the allowed versions specified:";

/// Rendered report text and whether it describes a policy violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedReport {
    pub text: String,
    pub is_violation: bool,
}

impl RenderedReport {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Render the report selected by `config.verbose` and the violations
///
/// | verbose | violations | text                       |
/// |---------|------------|----------------------------|
/// | no      | no         | empty                      |
/// | no      | yes        | violations                 |
/// | yes     | no         | info                       |
/// | yes     | yes        | info, blank line, violations |
pub fn render(
    report: &AggregatedReport,
    violations: &[Violation],
    config: &CheckConfig,
) -> RenderedReport {
    let is_violation = !violations.is_empty();
    let text = match (config.verbose, is_violation) {
        (false, false) => String::new(),
        (false, true) => render_violations(violations),
        (true, false) => render_info(report),
        (true, true) => format!(
            "{}\n{}",
            render_info(report),
            render_violations(violations)
        ),
    };
    RenderedReport { text, is_violation }
}

/// Single and duplicate version listings for every bundle
pub fn render_info(report: &AggregatedReport) -> String {
    let mut out = String::new();
    line(&mut out, 0, INFO_HEADER);
    line(&mut out, 0, SINGLE_HEADER);
    out.push_str(&render_bundles(report.single_version_packages.iter()));
    out.push('\n');
    line(&mut out, 0, DUPLICATE_HEADER);
    out.push_str(&render_bundles(report.duplicate_packages.iter()));
    out
}

/// Violated packages with their offending versions and chains
pub fn render_violations(violations: &[Violation]) -> String {
    let mut sorted: Vec<&Violation> = violations.iter().collect();
    sorted.sort_by(|a, b| order::names(&a.package, &b.package));

    let blocks: Vec<String> = sorted.into_iter().map(render_violation).collect();

    let mut out = String::new();
    line(&mut out, 0, VIOLATIONS_HEADER);
    line(&mut out, 0, VIOLATIONS_INTRO);
    out.push('\n');
    out.push_str(&blocks.join("\n"));
    if out.ends_with('\n') {
        out.pop();
    }
    out
}

fn render_bundles<'a>(
    bundles: impl Iterator<Item = (&'a String, &'a PackageVersionSet)>,
) -> String {
    let mut sorted: Vec<(&String, &PackageVersionSet)> = bundles.collect();
    sorted.sort_by(|a, b| order::names(a.0, b.0));

    sorted
        .into_iter()
        .map(|(bundle, set)| render_bundle(bundle, set))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_bundle(bundle: &str, set: &PackageVersionSet) -> String {
    let mut out = String::new();
    line(&mut out, 0, &format!("## `{bundle}`"));

    let mut packages: Vec<_> = set.iter().collect();
    packages.sort_by(|a, b| order::names(a.0, b.0));

    for (name, resolutions) in packages {
        bullet(&mut out, 0, name);
        for resolution in order::sorted_resolutions(resolutions) {
            bullet(&mut out, 1, &resolution.version);
            for installation in order::sorted_installations(resolution) {
                render_installation(&mut out, installation);
            }
        }
    }
    out
}

fn render_violation(violation: &Violation) -> String {
    let mut out = String::new();
    let allowed = violation.allowed.as_deref().unwrap_or("unspecified");
    line(
        &mut out,
        0,
        &format!("{} - allowed semver: {allowed}", violation.package),
    );

    let mut offenders: Vec<_> = violation.offenders.iter().collect();
    offenders.sort_by(|a, b| order::names(&a.bundle, &b.bundle));

    let mut versions: Vec<&str> = violation
        .versions()
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    versions.sort_by(|a, b| order::versions(a, b));

    for version in versions {
        bullet(&mut out, 1, version);
        for offender in &offenders {
            let Some(resolution) = offender.resolutions.iter().find(|r| r.version == version)
            else {
                continue;
            };
            for installation in order::sorted_installations(resolution) {
                render_installation(&mut out, installation);
            }
        }
    }
    out
}

fn render_installation(out: &mut String, installation: &Installation) {
    bullet(
        out,
        2,
        &format!(
            "Num deps: {}, files: {}",
            installation.dependencies, installation.files
        ),
    );
    for chain in &installation.chains {
        bullet(out, 3, &chain.to_string());
    }
}

fn line(out: &mut String, depth: usize, text: &str) {
    out.push_str(BASE_INDENT);
    out.push_str(&"  ".repeat(depth));
    out.push_str(text);
    out.push('\n');
}

fn bullet(out: &mut String, depth: usize, text: &str) {
    line(out, depth, &format!("* {text}"));
}
