use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Errors encountered when reading delimited point tables
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Table parse error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Missing column `{0}` in header")]
    MissingColumn(&'static str),
}

/// Columns every input table must declare in its header row.
/// Column order is irrelevant; extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = ["lat", "lng", "color", "location"];

/// One geographic point parsed from the input table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub lat: f64,
    pub lng: f64,
    pub color: String,
    pub location: String,
}

/// Ordered collection of all records from one input file.
///
/// Record order equals file line order. The first record is meaningful:
/// it determines the initial map viewport.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<PointRecord>,
}

impl Dataset {
    pub fn from_records(records: Vec<PointRecord>) -> Self {
        Dataset { records }
    }

    /// The record that defines the map's initial viewport, if any.
    pub fn first(&self) -> Option<&PointRecord> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PointRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[PointRecord] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a PointRecord;
    type IntoIter = std::slice::Iter<'a, PointRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Reader for delimited point tables
#[derive(Debug)]
pub struct DatasetReader {
    pub source_path: PathBuf,
    dataset: Dataset,
}

impl DatasetReader {
    /// Open and parse a delimited table with a header row.
    ///
    /// Fail-fast: a missing file, a header lacking one of
    /// [`REQUIRED_COLUMNS`], or a record whose `lat`/`lng` does not parse as
    /// a number aborts the whole load. There is no row-level recovery.
    pub fn open<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .from_path(path)?;

        let headers = reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DatasetError::MissingColumn(column));
            }
        }

        let mut records = Vec::new();
        for result in reader.deserialize::<PointRecord>() {
            records.push(result?);
        }

        info!("Loaded {} records from {:?}", records.len(), path);

        Ok(DatasetReader {
            source_path: path.to_path_buf(),
            dataset: Dataset::from_records(records),
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn into_dataset(self) -> Dataset {
        self.dataset
    }
}
