#![doc = r#"
PINMAP — a delimited geographic point table to interactive web map converter.

This crate turns a pipe-delimited table of points (latitude, longitude, color,
label) into a standalone Leaflet HTML document with one translucent circular
marker per row, centered on the first row's coordinates. It powers the PINMAP
CLI and can be embedded in your own Rust applications.

Input format
------------
Plain text, one record per line, header row required. The header must name at
least the columns `lat`, `lng`, `color`, `location`; column order is
irrelevant and extra columns are ignored.

```text
lat|lng|color|location
40.7|-74.0|red|Park
51.5|-0.1|blue|Thames
```

Loading is fail-fast: a missing file, a malformed header, or a record whose
coordinates do not parse aborts the whole load. There is no row-level
recovery.

Add dependency
--------------
```toml
[dependencies]
pinmap = "0.1"
```

Quick start: render a table to a file
-------------------------------------
```rust,no_run
use std::path::Path;
use pinmap::{render_dataset_to_path, RenderParams, DEFAULT_DELIMITER};

fn main() -> pinmap::Result<()> {
    let report = render_dataset_to_path(
        Path::new("./datafiles/data.txt"),
        Path::new("index.html"),
        DEFAULT_DELIMITER,
        &RenderParams::default(),
    )?;

    println!("markers={} center={:?}", report.markers, report.center);
    Ok(())
}
```

Render in-memory to a `String`
------------------------------
```rust,no_run
use pinmap::{load_dataset, render_dataset_to_string, RenderParams, DEFAULT_DELIMITER};

fn main() -> pinmap::Result<()> {
    let dataset = load_dataset("./datafiles/data.txt", DEFAULT_DELIMITER)?;
    let html = render_dataset_to_string(&dataset, &RenderParams::default())?;

    // Serve `html`, write it yourself, or inspect the embedded marker set.
    Ok(())
}
```

Custom rendering parameters
---------------------------
```rust
use pinmap::{RenderParams, TileLayer};

let params = RenderParams {
    tile_layer: TileLayer::CartodbDarkMatter,
    zoom_start: 10,
    radius_m: 250.0,
    stroke_weight: 2.0,
    fill_opacity: 0.35,
};
```

Error handling
--------------
All public functions return `pinmap::Result<T>`; match on `pinmap::Error` to
handle specific cases, e.g. dataset reader errors or an empty table.

```rust,no_run
use std::path::Path;
use pinmap::{render_dataset_to_path, Error, RenderParams, DEFAULT_DELIMITER};

fn main() {
    let params = RenderParams::default();
    match render_dataset_to_path(Path::new("missing.txt"), Path::new("index.html"), DEFAULT_DELIMITER, &params) {
        Ok(report) => println!("wrote {} markers", report.markers),
        Err(Error::Dataset(e)) => eprintln!("Dataset error: {e}"),
        Err(Error::EmptyDataset) => eprintln!("Nothing to draw"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — the `TileLayer` basemap styles.
- [`io`] — table reader and HTML document writers.
- [`core`] — the marker canvas and rendering parameters.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::canvas::{CircleMarker, MapCanvas};
pub use core::params::RenderParams;
pub use error::{Error, Result};
pub use types::TileLayer;

// Readers
pub use io::dataset::{Dataset, DatasetError, DatasetReader, PointRecord};

// Writers
pub use io::writers::html::{render_html_document, write_html_document};

// High-level API re-exports
pub use api::{
    DEFAULT_DELIMITER, RenderReport, build_canvas, load_dataset, render_dataset_to_path,
    render_dataset_to_string,
};
