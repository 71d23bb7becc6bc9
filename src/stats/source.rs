//! Asynchronous providers of build statistics
//!
//! The statistics may still be in flight when an analysis starts (written by
//! a running build step, read from disk). Analysis awaits the source once
//! and is synchronous from then on.

use std::future::Future;
use std::path::{Path, PathBuf};

use super::BuildStats;
use crate::error::{Result, file_not_found, file_read_failed};

/// Something that can produce the statistics of one build
pub trait StatsSource {
    /// Load and validate the statistics
    fn load(&self) -> impl Future<Output = Result<BuildStats>> + Send;
}

impl StatsSource for BuildStats {
    fn load(&self) -> impl Future<Output = Result<BuildStats>> + Send {
        let stats = self.clone();
        async move {
            stats.validate()?;
            Ok(stats)
        }
    }
}

/// Statistics stored as a JSON file
#[derive(Debug, Clone)]
pub struct StatsFile {
    path: PathBuf,
}

impl StatsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatsSource for StatsFile {
    fn load(&self) -> impl Future<Output = Result<BuildStats>> + Send {
        let path = self.path.clone();
        async move {
            let origin = path.display().to_string();
            let content = tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| match e.kind() {
                    std::io::ErrorKind::NotFound => file_not_found(&origin),
                    _ => file_read_failed(&origin, e.to_string()),
                })?;
            tracing::debug!(path = %origin, bytes = content.len(), "read build statistics");
            BuildStats::from_json(&content, &origin)
        }
    }
}
