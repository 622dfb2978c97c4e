//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and dataset reader errors, and provides semantic
//! variants for canvas construction and rendering failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dataset reader error: {0}")]
    Dataset(#[from] crate::io::DatasetError),

    #[error("Dataset is empty: no first record to center the map on")]
    EmptyDataset,

    #[error("Invalid coordinate pair at record {index}: ({lat}, {lng})")]
    InvalidCoordinate { index: usize, lat: f64, lng: f64 },

    #[error("Render error: {0}")]
    Render(String),

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }
}
