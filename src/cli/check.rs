use std::path::PathBuf;

use clap::Parser;
use skewcheck::config::DependencyCount;

/// Output format of the check command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Report text as emitted to the build
    #[default]
    Text,
    /// Outcome, violations and version listing as JSON
    Json,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Check with skewcheck.yaml from the current directory:\n    skewcheck check dist/stats.json\n\n\
                   Allow ranges inline (overrides the file):\n    skewcheck check dist/stats.json --allow foo=^1.2.0 --allow react=*\n\n\
                   Report violations without failing:\n    skewcheck check dist/stats.json --no-emit-errors\n\n\
                   Count distinct parent packages instead of require edges:\n    skewcheck check dist/stats.json --verbose --dependency-count parents")]
pub struct CheckArgs {
    /// Build statistics JSON file
    pub stats: PathBuf,

    /// Configuration file (defaults to skewcheck.yaml, .yml or .json in the current directory)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Allowed semver range for a package
    #[arg(long, value_name = "NAME=RANGE", value_parser = parse_allow)]
    pub allow: Vec<(String, String)>,

    /// Include single and duplicate version listings
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Report violations as warnings instead of failing
    #[arg(long)]
    pub no_emit_errors: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// How dependency counts are computed
    #[arg(long, value_enum)]
    pub dependency_count: Option<DependencyCount>,
}

fn parse_allow(value: &str) -> Result<(String, String), String> {
    let (name, range) = value
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=RANGE, got '{value}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing package name in '{value}'"));
    }
    Ok((name.to_string(), range.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_allow() {
        assert_eq!(
            parse_allow("foo=^1.2.0"),
            Ok(("foo".to_string(), "^1.2.0".to_string()))
        );
        assert_eq!(
            parse_allow("@scope/pkg = >=1.0.0 <2.0.0"),
            Ok(("@scope/pkg".to_string(), ">=1.0.0 <2.0.0".to_string()))
        );
    }

    #[test]
    fn test_parse_allow_rejects_malformed() {
        assert!(parse_allow("foo").is_err());
        assert!(parse_allow("=^1.0.0").is_err());
    }
}
