//! CLI definitions using clap derive API
//!
//! One submodule per command's argument types:
//! - check: Check command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

use crate::logging::LogLevel;

pub mod check;
pub mod completions;

pub use check::{CheckArgs, OutputFormat};
pub use completions::CompletionsArgs;

/// Skewcheck - package version checks for bundler builds
///
/// Report packages bundled at more than one version and enforce allowed semver ranges.
#[derive(Parser, Debug)]
#[command(
    name = "skewcheck",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Package version duplication and semver policy checks for bundler builds",
    long_about = "Skewcheck reads the statistics of a bundler build, lists the package versions \
                  resolved in every output bundle, and fails when a package falls outside the \
                  semver range allowed for it.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  skewcheck check dist/stats.json                    \x1b[90m# Check with skewcheck.yaml\x1b[0m\n   \
                  skewcheck check dist/stats.json --allow foo=^1.2.0 \x1b[90m# Allow a range inline\x1b[0m\n   \
                  skewcheck check dist/stats.json --verbose          \x1b[90m# Also list all versions\x1b[0m\n   \
                  skewcheck check dist/stats.json --format json      \x1b[90m# Machine-readable output\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Log level; SKEWCHECK_LOG overrides it with a full filter directive
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check bundled package versions of a build
    Check(CheckArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use skewcheck::config::DependencyCount;

    #[test]
    fn test_cli_parsing_check() {
        let cli = Cli::try_parse_from(["skewcheck", "check", "stats.json"]).expect("valid args");
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.stats, PathBuf::from("stats.json"));
                assert!(args.allow.is_empty());
                assert!(!args.verbose);
                assert!(!args.no_emit_errors);
                assert_eq!(args.format, OutputFormat::Text);
                assert_eq!(args.dependency_count, None);
            }
            other => panic!("Expected Check command, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_parsing_check_options() {
        let cli = Cli::try_parse_from([
            "skewcheck",
            "check",
            "stats.json",
            "--allow",
            "foo=^1.2.0",
            "--allow",
            "bar=*",
            "--verbose",
            "--no-emit-errors",
            "--format",
            "json",
            "--dependency-count",
            "parents",
            "--config",
            "ci.yaml",
        ])
        .expect("valid args");
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(
                    args.allow,
                    vec![
                        ("foo".to_string(), "^1.2.0".to_string()),
                        ("bar".to_string(), "*".to_string())
                    ]
                );
                assert!(args.verbose);
                assert!(args.no_emit_errors);
                assert_eq!(args.format, OutputFormat::Json);
                assert_eq!(args.dependency_count, Some(DependencyCount::Parents));
                assert_eq!(args.config, Some(PathBuf::from("ci.yaml")));
            }
            other => panic!("Expected Check command, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_allow_without_range() {
        assert!(
            Cli::try_parse_from(["skewcheck", "check", "stats.json", "--allow", "foo"]).is_err()
        );
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["skewcheck", "version"]).expect("valid args");
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_log_level() {
        let cli = Cli::try_parse_from(["skewcheck", "check", "stats.json", "--log-level", "debug"])
            .expect("valid args");
        assert_eq!(cli.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["skewcheck", "completions", "--shell", "bash"])
            .expect("valid args");
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, clap_complete::Shell::Bash);
            }
            other => panic!("Expected Completions command, got {other:?}"),
        }
    }
}
