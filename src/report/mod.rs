//! Human-readable reports
//!
//! The text format is line oriented and stable: consumers diff it, so all
//! listings go through the comparators in [`order`].

pub mod order;
pub mod render;

pub use render::{RenderedReport, render, render_info, render_violations};
