//! Check command implementation
//!
//! Loads the configuration, analyzes the statistics file and hands the
//! report to a console host. Configuration comes from `--config`, else a
//! `skewcheck.yaml` / `.yml` / `.json` in the current directory; command
//! line flags override file values.

use std::io::Write;
use std::path::Path;

use console::Style;

use skewcheck::analysis::{AnalysisResult, BuildHost, VersionCheck};
use skewcheck::config::CheckConfig;
use skewcheck::error::{Result, io_error};
use skewcheck::policy::AllowedVersions;
use skewcheck::stats::StatsFile;

use crate::cli::{CheckArgs, OutputFormat};

/// Run check command
///
/// Returns whether the outcome should fail the build.
pub async fn run(args: CheckArgs) -> Result<bool> {
    let config = resolve_config(&args)?;
    tracing::debug!(
        allowed = config.allowed_versions.len(),
        verbose = config.verbose,
        emit_errors = config.emit_errors,
        "resolved configuration"
    );

    let check = VersionCheck::new(config);
    let source = StatsFile::new(&args.stats);

    match args.format {
        OutputFormat::Text => {
            let mut host = ConsoleHost::new();
            let outcome = check.run(&source, &mut host).await?;
            Ok(outcome.is_error())
        }
        OutputFormat::Json => {
            let result = check.analyze(&source).await?;
            print_json(&result)?;
            Ok(result.outcome.is_error())
        }
    }
}

fn resolve_config(args: &CheckArgs) -> Result<CheckConfig> {
    let mut config = match &args.config {
        Some(path) => CheckConfig::load(path)?,
        None => discover_config(&std::env::current_dir()?)?,
    };

    if !args.allow.is_empty() {
        let overrides = AllowedVersions::parse(
            args.allow
                .iter()
                .map(|(name, range)| (name.as_str(), range.as_str())),
        )?;
        config.allowed_versions.merge(overrides);
    }
    if args.verbose {
        config.verbose = true;
    }
    if args.no_emit_errors {
        config.emit_errors = false;
    }
    if let Some(mode) = args.dependency_count {
        config.dependency_count = mode;
    }
    Ok(config)
}

fn discover_config(dir: &Path) -> Result<CheckConfig> {
    match CheckConfig::discover(dir) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "using configuration file");
            CheckConfig::load(&path)
        }
        None => Ok(CheckConfig::default()),
    }
}

fn print_json(result: &AnalysisResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)
        .map_err(|e| io_error(format!("Failed to serialize result: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Writes reports to stdout with a status line on stderr
struct ConsoleHost {
    out: std::io::Stdout,
}

impl ConsoleHost {
    fn new() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }

    fn write(&mut self, status: String, message: &str) {
        eprintln!("{status}");
        let mut out = self.out.lock();
        if let Err(e) = writeln!(out, "{message}") {
            tracing::warn!(error = %e, "failed to write report");
        }
    }
}

impl BuildHost for ConsoleHost {
    fn append_error(&mut self, message: String) {
        let status = Style::new()
            .bold()
            .red()
            .apply_to("error: allowed versions violated")
            .to_string();
        self.write(status, &message);
    }

    fn append_warning(&mut self, message: String) {
        let status = Style::new()
            .bold()
            .yellow()
            .apply_to("warning: package versions report")
            .to_string();
        self.write(status, &message);
    }
}
