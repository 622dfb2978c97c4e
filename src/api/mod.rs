//! High-level, ergonomic library API: load a point table, build a marker
//! canvas, and render it to a standalone HTML document on disk or in memory.
//! Prefer these entrypoints over the low-level modules when embedding PINMAP.
use std::path::Path;

use tracing::info;

use crate::core::canvas::MapCanvas;
use crate::core::params::RenderParams;
use crate::error::Result;
use crate::io::dataset::{Dataset, DatasetReader};
use crate::io::writers::html::{render_html_document, write_html_document};

/// Default field delimiter of the input table
pub const DEFAULT_DELIMITER: u8 = b'|';

/// Summary of one completed render
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderReport {
    /// Markers written to the document, one per input record
    pub markers: usize,
    /// Viewport center, the first record's coordinates
    pub center: (f64, f64),
}

/// Load a delimited point table into an ordered dataset.
pub fn load_dataset<P: AsRef<Path>>(input: P, delimiter: u8) -> Result<Dataset> {
    Ok(DatasetReader::open(input, delimiter)?.into_dataset())
}

/// Build a marker canvas from a dataset: viewport centered on the first
/// record, one circle marker per record in file order.
pub fn build_canvas(dataset: &Dataset, params: &RenderParams) -> Result<MapCanvas> {
    MapCanvas::from_dataset(dataset, params)
}

/// Render a dataset to an HTML document in memory (no disk I/O).
pub fn render_dataset_to_string(dataset: &Dataset, params: &RenderParams) -> Result<String> {
    let canvas = build_canvas(dataset, params)?;
    render_html_document(&canvas)
}

/// Full pipeline: load the table at `input`, build the canvas, and write the
/// document to `output`, overwriting any existing file there.
pub fn render_dataset_to_path<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    delimiter: u8,
    params: &RenderParams,
) -> Result<RenderReport> {
    let dataset = load_dataset(input, delimiter)?;
    let canvas = build_canvas(&dataset, params)?;
    write_html_document(&canvas, output.as_ref())?;

    let report = RenderReport {
        markers: canvas.markers().len(),
        center: canvas.center,
    };
    info!(
        "Rendered {} markers centered on ({}, {})",
        report.markers, report.center.0, report.center.1
    );
    Ok(report)
}
