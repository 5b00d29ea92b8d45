//! Error types for the forecast_eval crate

use polars::prelude::PolarsError;
use thiserror::Error;

/// Custom error types for the forecast_eval crate
#[derive(Debug, Error)]
pub enum EvalError {
    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// Violated input contract (lengths, shapes, insufficient history)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Statistic undefined for the given series
    #[error("Degenerate series: {0}")]
    DegenerateSeries(String),

    /// Failure reported by an external model
    #[error("Model error: {0}")]
    ModelError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from CSV output
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Error from Polars operations
    #[error("Polars error: {0}")]
    PolarsError(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, EvalError>;

impl From<PolarsError> for EvalError {
    fn from(err: PolarsError) -> Self {
        EvalError::PolarsError(err.to_string())
    }
}
