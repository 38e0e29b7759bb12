//! Error types for the retail-forecast library.

use thiserror::Error;

/// Result type alias for forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur while aggregating or forecasting sales data.
///
/// Per-product modeling failures (`InsufficientData`) are recoverable: the
/// sweep translates them into exclusion from the forecast table. Ingestion
/// errors (`MissingColumn`, `Dataset`, `Io`) are fatal and abort the whole
/// load.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Insufficient observations for the operation.
    #[error("insufficient data: need at least {needed} months, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Model has not been fitted yet.
    #[error("model must be fitted before forecasting")]
    FitRequired,

    /// A required column is absent from the input dataset.
    #[error("missing required column `{0}`")]
    MissingColumn(String),

    /// A row of the input dataset could not be parsed.
    #[error("dataset error at line {line}: {message}")]
    Dataset { line: usize, message: String },

    /// Underlying I/O failure while reading a dataset.
    #[error("io error: {0}")]
    Io(String),
}
