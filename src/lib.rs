//! Skewcheck - package version checks for bundler builds
//!
//! Reconstructs which versions of each third-party package ended up in each
//! output bundle of a build, reports packages bundled at more than one
//! version, and flags packages whose versions fall outside caller-supplied
//! semver ranges.
//!
//! ```no_run
//! use skewcheck::analysis::{Diagnostics, VersionCheck};
//! use skewcheck::config::CheckConfig;
//! use skewcheck::policy::AllowedVersions;
//! use skewcheck::stats::StatsFile;
//!
//! # async fn example() -> skewcheck::error::Result<()> {
//! let allowed = AllowedVersions::parse([("react", "^18.0.0")])?;
//! let check = VersionCheck::new(CheckConfig::new().with_allowed_versions(allowed));
//!
//! let mut diagnostics = Diagnostics::new();
//! check.run(&StatsFile::new("dist/stats.json"), &mut diagnostics).await?;
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod config;
pub mod domain;
pub mod error;
pub mod policy;
pub mod report;
pub mod resolver;
pub mod stats;

pub use analysis::{AnalysisResult, BuildHost, Diagnostics, Outcome, VersionCheck, analyze};
pub use config::CheckConfig;
pub use error::{Result, SkewcheckError};
