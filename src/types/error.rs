//! Error types for the rating-prep library.

use thiserror::Error;

/// All errors that can occur while preparing a ratings dataset.
#[derive(Error, Debug)]
pub enum PrepError {
    /// A row is missing a required field, or carries it with the wrong type.
    #[error("Row {row}: missing or invalid field `{field}`")]
    Schema { row: usize, field: &'static str },

    /// A caller passed an argument outside its contract.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Input rows are not a JSON array of objects.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration text could not be parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for rating-prep operations.
pub type PrepResult<T> = Result<T, PrepError>;
