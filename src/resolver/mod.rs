//! Dependency graph walking for one bundle
//!
//! Turns a bundle's module list into a [`PackageVersionSet`]: every
//! attributed module is folded into the resolution of its package version,
//! together with the chains that explain why it is bundled.
//!
//! [`PackageVersionSet`]: crate::domain::PackageVersionSet

pub mod chain;
pub mod walk;

pub use chain::ChainBuilder;
pub use walk::walk;
