//! Core library for the launch records dashboard.
//!
//! - [`table`]: loads the launch records CSV into an immutable [`table::LaunchTable`].
//! - [`engine`]: pure aggregation functions producing chart descriptions.
//! - [`models`]: records, control selections and chart value objects.

pub mod engine;
pub mod error;
pub mod models;
pub mod table;

pub use error::{LoadError, SelectionError};
