//! I/O layer for reading delimited point tables and writing map documents.
//! Provides the `dataset` table reader and `writers` for the standalone
//! HTML output.
pub mod dataset;
pub use dataset::{Dataset, DatasetError, DatasetReader, PointRecord};

pub mod writers;
