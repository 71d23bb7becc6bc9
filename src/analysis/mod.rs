//! Version check analysis
//!
//! Wires the stages together for one invocation:
//!
//! ```text
//! StatsSource ──load──▶ BuildStats
//!   └─ aggregate (walk each bundle, split single / duplicate)
//!        └─ classify (allowed versions)
//!             └─ render (verbose, violations)
//!                  └─ Outcome ──emit──▶ BuildHost
//! ```
//!
//! Only loading the statistics is asynchronous. Everything after runs to
//! completion synchronously over data local to the call, so independent
//! analyses can run concurrently.

pub mod aggregate;
pub mod classify;
pub mod host;

pub use aggregate::aggregate;
pub use classify::classify;
pub use host::{BuildHost, Diagnostics};

use serde::Serialize;

use crate::config::CheckConfig;
use crate::domain::{AggregatedReport, Violation};
use crate::error::Result;
use crate::report::{RenderedReport, render};
use crate::stats::{BuildStats, StatsSource};

/// What the host should do with the rendered report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "level", content = "message", rename_all = "lowercase")]
pub enum Outcome {
    /// Nothing to report
    Silent,
    /// Informational report (verbose listing, or violations with errors disabled)
    Warning(String),
    /// Allowed versions were violated
    Error(String),
}

impl Outcome {
    fn from_rendered(rendered: RenderedReport, emit_errors: bool) -> Self {
        if rendered.is_empty() {
            Outcome::Silent
        } else if rendered.is_violation && emit_errors {
            Outcome::Error(rendered.text)
        } else {
            Outcome::Warning(rendered.text)
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Silent => None,
            Outcome::Warning(message) | Outcome::Error(message) => Some(message),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }

    /// Hand the report to the host; `Silent` appends nothing
    pub fn emit(self, host: &mut impl BuildHost) {
        match self {
            Outcome::Silent => {}
            Outcome::Warning(message) => host.append_warning(message),
            Outcome::Error(message) => host.append_error(message),
        }
    }
}

/// Everything one analysis produced
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub outcome: Outcome,

    /// Violations sorted by package name
    pub violations: Vec<Violation>,

    pub report: AggregatedReport,
}

/// Analyze statistics that are already in hand and validated
pub fn analyze_stats(stats: &BuildStats, config: &CheckConfig) -> AnalysisResult {
    let report = aggregate(&stats.root, &stats.bundles, config.dependency_count);
    let mut violations = classify(&report, &config.allowed_versions);
    violations.sort_by(|a, b| a.package.cmp(&b.package));

    let rendered = render(&report, &violations, config);
    let outcome = Outcome::from_rendered(rendered, config.emit_errors);

    tracing::info!(
        bundles = stats.bundles.len(),
        duplicated_bundles = report.duplicate_packages.len(),
        violations = violations.len(),
        error = outcome.is_error(),
        "version check finished"
    );

    AnalysisResult {
        outcome,
        violations,
        report,
    }
}

/// Await the statistics, then analyze them
///
/// # Errors
///
/// Fails when the source cannot produce well-formed statistics. Policy
/// violations are not errors; they are reported through the outcome.
pub async fn analyze<S: StatsSource>(source: &S, config: &CheckConfig) -> Result<AnalysisResult> {
    let stats = source.load().await?;
    Ok(analyze_stats(&stats, config))
}

/// A configured version check, reusable across builds
#[derive(Debug, Clone, Default)]
pub struct VersionCheck {
    config: CheckConfig,
}

impl VersionCheck {
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Analyze the statistics of one build
    ///
    /// # Errors
    ///
    /// See [`analyze`].
    pub async fn analyze<S: StatsSource>(&self, source: &S) -> Result<AnalysisResult> {
        analyze(source, &self.config).await
    }

    /// Analyze one build and attach the report to its host
    ///
    /// # Errors
    ///
    /// See [`analyze`]. Nothing is appended to the host on error.
    pub async fn run<S: StatsSource>(
        &self,
        source: &S,
        host: &mut impl BuildHost,
    ) -> Result<Outcome> {
        let result = self.analyze(source).await?;
        result.outcome.clone().emit(host);
        Ok(result.outcome)
    }
}
