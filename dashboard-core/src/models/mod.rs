//! Domain models for the launch dashboard.
//!
//! # Core Concepts
//!
//! - [`LaunchRecord`]: one row of the launch table, immutable after load.
//! - [`SiteSelection`]: the site selector's value, either every site or one named site.
//! - [`PayloadRange`]: the payload slider's validated inclusive interval.
//! - [`ChartDescription`]: what a chart placeholder should draw, independent of
//!   the rendering library.

mod chart;
mod launch;
mod selection;

pub use chart::*;
pub use launch::*;
pub use selection::*;
