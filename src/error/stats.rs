//! Build statistics errors

use super::SkewcheckError;

/// Creates a statistics parse failed error
pub fn parse_failed(origin: impl Into<String>, reason: impl Into<String>) -> SkewcheckError {
    SkewcheckError::StatsParseFailed {
        origin: origin.into(),
        reason: reason.into(),
    }
}

/// Creates a malformed statistics error naming the bundle and field
pub fn malformed(
    bundle: impl Into<String>,
    field: impl Into<String>,
    message: impl Into<String>,
) -> SkewcheckError {
    SkewcheckError::StatsMalformed {
        bundle: bundle.into(),
        field: field.into(),
        message: message.into(),
    }
}
