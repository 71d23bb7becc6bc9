//! Domain models for skewcheck
//!
//! This module contains pure domain objects produced by an analysis.
//! They are immutable once built and serialize to JSON for machine output.

pub mod package;
pub mod report;
pub mod resolution;

pub use package::{Chain, PackageId};
pub use report::{AggregatedReport, Offender, Violation};
pub use resolution::{Installation, PackageVersionSet, Resolution};
