//! Error types and handling for skewcheck
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`stats`]: Build statistics parsing and validation errors
//! - [`config`]: Configuration and allowed-version policy errors
//! - [`fs`]: File system errors
//!
//! Version policy violations are not errors. They are the product of an
//! analysis and travel as data in [`crate::analysis::Outcome`].

pub mod config;
pub mod fs;
pub mod stats;

pub use config::{
    invalid as config_invalid, invalid_range, not_found as config_not_found,
    parse_failed as config_parse_failed,
};
pub use fs::{io_error, not_found as file_not_found, read_failed as file_read_failed};
pub use stats::{malformed as stats_malformed, parse_failed as stats_parse_failed};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for skewcheck operations
#[derive(Error, Diagnostic, Debug)]
pub enum SkewcheckError {
    // Statistics errors
    #[error("Failed to parse build statistics from {origin}: {reason}")]
    #[diagnostic(
        code(skewcheck::stats::parse_failed),
        help("The statistics must be a JSON object with `root` and `bundles` fields")
    )]
    StatsParseFailed { origin: String, reason: String },

    #[error("Malformed build statistics in bundle '{bundle}': field `{field}` {message}")]
    #[diagnostic(
        code(skewcheck::stats::malformed),
        help("Regenerate the statistics with package attribution enabled")
    )]
    StatsMalformed {
        bundle: String,
        field: String,
        message: String,
    },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(skewcheck::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(skewcheck::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(skewcheck::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Invalid semver range '{range}' for package '{package}': {reason}")]
    #[diagnostic(
        code(skewcheck::config::invalid_range),
        help("Use npm range syntax such as ^1.2.0, ~1.2, >=1.0.0 <2.0.0, 1.x || 2.x or *")
    )]
    InvalidRange {
        package: String,
        range: String,
        reason: String,
    },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(skewcheck::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(skewcheck::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(skewcheck::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for SkewcheckError {
    fn from(err: std::io::Error) -> Self {
        SkewcheckError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SkewcheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_error_contains {
        ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
            #[test]
            fn $test_name() {
                let err = $err;
                let error_string = err.to_string();
                $(
                    assert!(error_string.contains($contains),
                        "Error message should contain '{}', got: {}",
                        $contains,
                        error_string
                    );
                )+
            }
        };
    }

    #[test]
    fn test_error_code() {
        let err = stats_malformed("bundle.js", "modules", "is missing");
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("skewcheck::stats::malformed".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SkewcheckError = io_err.into();
        assert!(matches!(err, SkewcheckError::IoError { .. }));
    }

    test_error_contains!(
        test_stats_malformed_names_field,
        stats_malformed("bundle.js", "modules", "is missing"),
        "bundle.js",
        "`modules`"
    );

    test_error_contains!(
        test_stats_parse_failed,
        stats_parse_failed("stats.json", "missing field `root`"),
        "stats.json",
        "missing field `root`"
    );

    test_error_contains!(
        test_invalid_range,
        invalid_range("foo", "^^1", "unexpected character"),
        "Invalid semver range",
        "'^^1'",
        "'foo'"
    );

    test_error_contains!(
        test_config_not_found,
        config_not_found("/path/to/skewcheck.yaml"),
        "Configuration file not found"
    );

    test_error_contains!(
        test_config_parse_failed,
        config_parse_failed("/path/to/skewcheck.yaml", "invalid YAML"),
        "Failed to parse configuration file"
    );

    test_error_contains!(
        test_config_invalid,
        config_invalid("unknown dependency count mode"),
        "Invalid configuration"
    );

    test_error_contains!(
        test_file_not_found,
        file_not_found("/path/to/stats.json"),
        "File not found"
    );

    test_error_contains!(
        test_file_read_failed,
        file_read_failed("/path/to/stats.json", "permission denied"),
        "Failed to read file",
        "permission denied"
    );

    test_error_contains!(test_io_error, io_error("some error"), "IO error");
}
