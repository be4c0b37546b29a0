pub mod api;
pub mod bridge;
pub mod config;

pub use dashboard_core::{engine, models, table, LoadError, SelectionError};
