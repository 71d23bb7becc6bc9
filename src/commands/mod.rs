//! Command implementations for Skewcheck CLI

pub mod check;
pub mod completions;
pub mod version;
