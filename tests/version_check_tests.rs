//! Version check reports for the multiple-resolved-no-duplicates build

mod common;

use common::{MULTI_SCENARIO, fixture, fixture_path};
use skewcheck::analysis::{Diagnostics, Outcome, VersionCheck, analyze};
use skewcheck::config::CheckConfig;
use skewcheck::policy::AllowedVersions;
use skewcheck::stats::{BuildStats, StatsFile};

const FAILURE_REPORT: &str = "    Versions violations
    skewcheck found the following packages violating the allowed versions specified:

    foo - allowed semver: ^1.2.0
      * 1.1.1
        * Num deps: 1, files: 1
          * multiple-resolved-no-duplicates@1.2.3 -> foo@1.1.1
        * Num deps: 1, files: 1
          * multiple-resolved-no-duplicates@1.2.3 -> uses-foo@1.1.1 -> foo@1.1.1";

const VERBOSE_REPORT: &str = "    Versions info
    Single version packages
    ## `bundle-no-duplicates.js`
    * more-no-duplicates
      * 1.1.1
        * Num deps: 1, files: 1
          * multiple-resolved-no-duplicates@1.2.3 -> more-no-duplicates@1.1.1
    * uses-no-duplicates
      * 1.1.1
        * Num deps: 1, files: 1
          * multiple-resolved-no-duplicates@1.2.3 -> uses-no-duplicates@1.1.1

    ## `bundle.js`
    * foo
      * 1.1.1
        * Num deps: 1, files: 1
          * multiple-resolved-no-duplicates@1.2.3 -> foo@1.1.1
        * Num deps: 1, files: 1
          * multiple-resolved-no-duplicates@1.2.3 -> uses-foo@1.1.1 -> foo@1.1.1
    * more-no-duplicates
      * 1.1.1
        * Num deps: 1, files: 1
          * multiple-resolved-no-duplicates@1.2.3 -> more-no-duplicates@1.1.1
    * uses-foo
      * 1.1.1
        * Num deps: 1, files: 1
          * multiple-resolved-no-duplicates@1.2.3 -> uses-foo@1.1.1
    * uses-no-duplicates
      * 1.1.1
        * Num deps: 1, files: 1
          * multiple-resolved-no-duplicates@1.2.3 -> uses-no-duplicates@1.1.1

    Duplicate version packages
    ## `bundle-no-duplicates.js`
    * no-duplicates
      * 1.1.1
        * Num deps: 1, files: 1
          * multiple-resolved-no-duplicates@1.2.3 -> no-duplicates@1.1.1
      * 2.1.1
        * Num deps: 1, files: 1
          * multiple-resolved-no-duplicates@1.2.3 -> uses-no-duplicates@1.1.1 -> no-duplicates@2.1.1
      * 3.1.1
        * Num deps: 1, files: 1
          * multiple-resolved-no-duplicates@1.2.3 -> more-no-duplicates@1.1.1 -> no-duplicates@3.1.1

    ## `bundle.js`
    * no-duplicates
      * 1.1.1
        * Num deps: 1, files: 1
          * multiple-resolved-no-duplicates@1.2.3 -> no-duplicates@1.1.1
      * 2.1.1
        * Num deps: 1, files: 1
          * multiple-resolved-no-duplicates@1.2.3 -> uses-no-duplicates@1.1.1 -> no-duplicates@2.1.1
      * 3.1.1
        * Num deps: 1, files: 1
          * multiple-resolved-no-duplicates@1.2.3 -> more-no-duplicates@1.1.1 -> no-duplicates@3.1.1
";

fn stats() -> BuildStats {
    BuildStats::from_json(&fixture(MULTI_SCENARIO), MULTI_SCENARIO).expect("fixture should parse")
}

fn foo_policy() -> AllowedVersions {
    AllowedVersions::parse([("foo", "^1.2.0")]).expect("valid policy")
}

async fn run(config: CheckConfig) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    VersionCheck::new(config)
        .run(&stats(), &mut diagnostics)
        .await
        .expect("analysis should succeed");
    diagnostics
}

#[tokio::test]
async fn test_produces_a_default_report() {
    let diagnostics = run(CheckConfig::new().with_allowed_versions(foo_policy())).await;

    assert!(diagnostics.warnings.is_empty());
    assert_eq!(diagnostics.errors, vec![FAILURE_REPORT.to_string()]);
}

#[tokio::test]
async fn test_produces_a_verbose_report() {
    let diagnostics = run(CheckConfig::new()
        .with_allowed_versions(foo_policy())
        .verbose(true))
    .await;

    assert!(diagnostics.warnings.is_empty());
    assert_eq!(
        diagnostics.errors,
        vec![format!("{VERBOSE_REPORT}\n{FAILURE_REPORT}")]
    );
}

#[tokio::test]
async fn test_produces_a_verbose_report_when_no_violations() {
    let diagnostics = run(CheckConfig::new().verbose(true)).await;

    assert!(diagnostics.errors.is_empty());
    assert_eq!(diagnostics.warnings, vec![VERBOSE_REPORT.to_string()]);
}

#[tokio::test]
async fn test_produces_no_report_when_no_violations() {
    let diagnostics = run(CheckConfig::new()).await;
    assert!(diagnostics.is_empty());
}

#[tokio::test]
async fn test_emit_errors_false_reports_warning() {
    let diagnostics = run(CheckConfig::new()
        .with_allowed_versions(foo_policy())
        .verbose(true)
        .emit_errors(false))
    .await;

    assert!(diagnostics.errors.is_empty());
    assert_eq!(
        diagnostics.warnings,
        vec![format!("{VERBOSE_REPORT}\n{FAILURE_REPORT}")]
    );
}

#[tokio::test]
async fn test_stats_file_source_matches_in_memory_stats() {
    let config = CheckConfig::new()
        .with_allowed_versions(foo_policy())
        .verbose(true);

    let from_file = analyze(&StatsFile::new(fixture_path(MULTI_SCENARIO)), &config)
        .await
        .expect("fixture file should load");
    let in_memory = analyze(&stats(), &config)
        .await
        .expect("fixture should analyze");

    assert_eq!(from_file.outcome, in_memory.outcome);
    assert_eq!(from_file.report, in_memory.report);
}

#[tokio::test]
async fn test_satisfied_policies_report_nothing() {
    let allowed = AllowedVersions::parse([
        ("foo", "^1.0.0"),
        ("no-duplicates", "*"),
        ("uses-foo", "1.1.1"),
    ])
    .expect("valid policy");

    let diagnostics = run(CheckConfig::new().with_allowed_versions(allowed)).await;
    assert!(diagnostics.is_empty());
}

#[tokio::test]
async fn test_violation_lists_offending_versions_only() {
    let allowed = AllowedVersions::parse([("no-duplicates", "^2.0.0 || ^3.0.0")])
        .expect("valid policy");
    let result = analyze(&stats(), &CheckConfig::new().with_allowed_versions(allowed))
        .await
        .expect("fixture should analyze");

    let Outcome::Error(text) = result.outcome else {
        panic!("expected an error outcome");
    };
    assert!(text.contains("no-duplicates - allowed semver: ^2.0.0 || ^3.0.0\n      * 1.1.1\n"));
    assert!(!text.contains("* 2.1.1"));
    assert!(!text.contains("* 3.1.1"));

    let bundles: Vec<&str> = result.violations[0]
        .offenders
        .iter()
        .map(|o| o.bundle.as_str())
        .collect();
    assert_eq!(bundles, vec!["bundle-no-duplicates.js", "bundle.js"]);
}
