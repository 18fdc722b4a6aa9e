//! Error types for loading, aggregating and rendering the dashboard.

use std::path::PathBuf;

/// Result type for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Error type for dashboard operations.
///
/// Every variant is fatal for the operation that raised it: a load error
/// aborts startup, a render error aborts the request being served.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// The dataset file could not be opened or read.
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV record could not be decoded into a usage record.
    /// `row` is the 1-based data row (header excluded) when known.
    #[error("CSV error in {path} ({}): {message}", describe_row(.row))]
    Csv {
        path: PathBuf,
        row: Option<u64>,
        message: String,
    },

    /// The date column held a value that is not a calendar date.
    #[error("Invalid date '{value}' at row {row}")]
    InvalidDate { row: u64, value: String },

    /// Summing a count column does not fit in `u64`.
    #[error("Sum of '{column}' counts overflows u64")]
    CountOverflow { column: &'static str },

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Chart or page rendering failed.
    #[error("Render error: {0}")]
    Render(String),
}

fn describe_row(row: &Option<u64>) -> String {
    match row {
        Some(row) => format!("row {}", row),
        None => "unknown row".to_string(),
    }
}

impl DashboardError {
    /// Create a render error from any displayable backend error.
    pub fn render(err: impl std::fmt::Display) -> Self {
        Self::Render(err.to_string())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether this error originates from the input dataset.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Self::Io { .. } | Self::Csv { .. } | Self::InvalidDate { .. } | Self::CountOverflow { .. }
        )
    }
}

/// Add `value` to a running count sum, failing instead of wrapping.
pub fn add_count(acc: u64, value: u64, column: &'static str) -> DashboardResult<u64> {
    acc.checked_add(value)
        .ok_or(DashboardError::CountOverflow { column })
}
