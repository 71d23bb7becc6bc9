//! Host build system integration
//!
//! The analysis hands its outcome to the build that requested it. All the
//! core needs from the host is a place to append errors and warnings, so
//! that is all this trait exposes.

use serde::Serialize;

/// Error and warning collection of a host build
pub trait BuildHost {
    /// Attach a build-breaking message
    fn append_error(&mut self, message: String);

    /// Attach an informational message
    fn append_warning(&mut self, message: String);
}

/// Collects messages in memory
///
/// Used by embedders that inspect results after the fact and by tests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

impl BuildHost for Diagnostics {
    fn append_error(&mut self, message: String) {
        self.errors.push(message);
    }

    fn append_warning(&mut self, message: String) {
        self.warnings.push(message);
    }
}
