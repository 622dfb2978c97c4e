//! End-to-end pipeline tests: point table in, standalone map document out.

use std::fs;
use std::path::{Path, PathBuf};

use pinmap::{
    DEFAULT_DELIMITER, Error, RenderParams, load_dataset, render_dataset_to_path,
    render_dataset_to_string,
};

fn write_table(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("data.txt");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn single_row_renders_a_centered_single_marker_map() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_table(dir.path(), "lat|lng|color|location\n40.7|-74.0|red|Park\n");
    let output = dir.path().join("index.html");

    let report = render_dataset_to_path(&input, &output, DEFAULT_DELIMITER, &RenderParams::default())
        .unwrap();

    assert_eq!(report.markers, 1);
    assert_eq!(report.center, (40.7, -74.0));

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("setView([40.7,-74.0], 12)"));
    assert!(html.contains("\"color\":\"red\""));
    assert!(html.contains("\"popup\":\"Park\""));
}

#[test]
fn overlapping_rows_keep_their_own_color_and_draw_order() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_table(
        dir.path(),
        "lat|lng|color|location\n40.7|-74.0|red|Park\n40.7|-74.0|green|Park\n",
    );
    let output = dir.path().join("index.html");

    let report = render_dataset_to_path(&input, &output, DEFAULT_DELIMITER, &RenderParams::default())
        .unwrap();
    assert_eq!(report.markers, 2);

    let html = fs::read_to_string(&output).unwrap();
    assert_eq!(html.matches("\"lat\":").count(), 2);
    let red = html.find("\"color\":\"red\"").unwrap();
    let green = html.find("\"color\":\"green\"").unwrap();
    assert!(red < green);
}

#[test]
fn malformed_latitude_aborts_before_any_output_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_table(
        dir.path(),
        "lat|lng|color|location\nnorth|-74.0|red|Park\n",
    );
    let output = dir.path().join("index.html");

    let err = render_dataset_to_path(&input, &output, DEFAULT_DELIMITER, &RenderParams::default())
        .unwrap_err();
    assert!(matches!(err, Error::Dataset(_)));
    assert!(!output.exists());
}

#[test]
fn failed_run_leaves_prior_output_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_table(dir.path(), "lat|lng|color|location\n");
    let output = dir.path().join("index.html");
    fs::write(&output, "previous contents").unwrap();

    let err = render_dataset_to_path(&input, &output, DEFAULT_DELIMITER, &RenderParams::default())
        .unwrap_err();
    assert!(matches!(err, Error::EmptyDataset));
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous contents");
}

#[test]
fn rerun_with_identical_input_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_table(
        dir.path(),
        "lat|lng|color|location\n40.7|-74.0|red|Park\n51.5|-0.1|blue|Thames\n",
    );

    let dataset = load_dataset(&input, DEFAULT_DELIMITER).unwrap();
    let first = render_dataset_to_string(&dataset, &RenderParams::default()).unwrap();

    let reloaded = load_dataset(&input, DEFAULT_DELIMITER).unwrap();
    let second = render_dataset_to_string(&reloaded, &RenderParams::default()).unwrap();

    assert_eq!(dataset, reloaded);
    assert_eq!(first, second);
}

#[test]
fn output_overwrites_an_existing_document() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_table(dir.path(), "lat|lng|color|location\n40.7|-74.0|red|Park\n");
    let output = dir.path().join("index.html");
    fs::write(&output, "stale document").unwrap();

    render_dataset_to_path(&input, &output, DEFAULT_DELIMITER, &RenderParams::default()).unwrap();

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(!html.contains("stale document"));
}
