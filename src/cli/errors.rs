use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid delimiter: {delimiter:?}. Must be a single ASCII character")]
    InvalidDelimiter { delimiter: char },

    #[error("Radius must be a positive number of meters, got: {value}")]
    InvalidRadius { value: f64 },

    #[error("Fill opacity must be within [0, 1], got: {value}")]
    OpacityOutOfRange { value: f64 },
}
