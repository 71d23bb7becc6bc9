//! Configuration and allowed-version policy errors

use super::SkewcheckError;

/// The configuration file named on the command line does not exist
pub fn not_found(path: impl Into<String>) -> SkewcheckError {
    SkewcheckError::ConfigNotFound { path: path.into() }
}

/// The configuration file exists but is not valid YAML / JSON for [`crate::config::CheckConfig`]
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> SkewcheckError {
    SkewcheckError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

pub fn invalid(message: impl Into<String>) -> SkewcheckError {
    SkewcheckError::ConfigInvalid {
        message: message.into(),
    }
}

/// An allowed-versions entry whose range is not npm semver syntax
pub fn invalid_range(
    package: impl Into<String>,
    range: impl Into<String>,
    reason: impl Into<String>,
) -> SkewcheckError {
    SkewcheckError::InvalidRange {
        package: package.into(),
        range: range.into(),
        reason: reason.into(),
    }
}
