use thiserror::Error;

/// Failure to build a [`LaunchTable`](crate::table::LaunchTable) at startup.
///
/// All variants are fatal: the dashboard is not served without a table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read launch data: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV at row {row}: {source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("CSV header missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: class must be 0 or 1, got {value}")]
    InvalidOutcome { row: usize, value: i64 },

    #[error("row {row}: payload mass must be a non-negative number, got {value}")]
    InvalidPayload { row: usize, value: f64 },

    #[error("launch data contains no rows")]
    Empty,
}

/// A control value outside its declared domain.
///
/// These are recovered by rendering an empty chart, never surfaced to the page.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectionError {
    #[error("unknown launch site '{0}'")]
    UnknownSite(String),

    #[error("payload range is inverted: {low} > {high}")]
    InvertedRange { low: f64, high: f64 },

    #[error("payload range bounds must be finite")]
    NonFiniteRange,
}
