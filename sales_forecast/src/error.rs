//! Error types for the sales_forecast crate

use thiserror::Error;

/// Custom error types for the sales_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// No recognized timestamp or value column in the input
    #[error("Schema error: {0}")]
    SchemaError(String),

    /// Input could not be parsed as CSV
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Insufficient or degenerate data for fitting a model
    #[error("Fit error: {0}")]
    FitError(String),

    /// Error from invalid request parameters
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error serializing or deserializing the model artifact
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<csv::Error> for ForecastError {
    fn from(err: csv::Error) -> Self {
        ForecastError::ParseError(err.to_string())
    }
}

impl From<serde_json::Error> for ForecastError {
    fn from(err: serde_json::Error) -> Self {
        ForecastError::SerializationError(err.to_string())
    }
}
