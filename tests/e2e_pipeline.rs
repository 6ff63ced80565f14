// tailplot - tests/e2e_pipeline.rs
//
// End-to-end tests for the aggregation pipeline and the chart renderer.
//
// These tests exercise the real filesystem, real glob evaluation, real
// modification times, and real chrono timestamp parsing -- no mocks, no
// stubs. This exercises the full path from rotated log files on disk to the
// plottable time series (and, for the smoke test, to an encoded image file).

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::time::{Duration, SystemTime};

use tailplot::chart::{self, ChartConfig};
use tailplot::core::{normalize, reader, select, series, trend};

// =============================================================================
// Helpers
// =============================================================================

/// Write a fixture file and pin its mtime to the epoch plus `secs` seconds so
/// newest-first ordering does not depend on write timing.
fn write_fixture(path: &Path, content: &str, secs: u64) {
    fs::write(path, content).expect("write fixture");
    let file = OpenOptions::new().write(true).open(path).expect("reopen");
    file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
        .expect("set mtime");
}

/// Run select -> read -> normalize -> series on a glob pattern.
fn run_pipeline(pattern: &str, budget: usize, scale: f64) -> series::SeriesOutput {
    let files = select::select_files(pattern).expect("select");
    let rows = reader::read_recent_rows(&files, budget, |_, _| {}).expect("read");
    series::build(&normalize::normalize(rows), scale)
}

// =============================================================================
// Multi-file aggregation E2E
// =============================================================================

/// Two rotated files with uneven column counts: the merged matrix is
/// rectangular, chronological, and padded with the default field.
#[test]
fn e2e_two_file_merge_pads_and_orders() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(
        &dir.path().join("a.log"),
        "2024-01-01 00:00:00,10\n2024-01-01 00:01:00,20,30\n",
        1_000,
    );
    write_fixture(&dir.path().join("b.log"), "2024-01-01 00:02:00,5\n", 2_000);

    let pattern = dir.path().join("*.log");
    let out = run_pipeline(pattern.to_str().unwrap(), 10, 1.0);

    assert_eq!(out.summary.rows_total, 3);
    assert_eq!(out.summary.max_columns, 3);
    assert_eq!(out.summary.valid_rows, 3);
    assert_eq!(out.summary.first_raw.as_deref(), Some("2024-01-01 00:00:00"));
    assert_eq!(out.summary.last_raw.as_deref(), Some("2024-01-01 00:02:00"));

    assert!(
        out.series.timestamps.windows(2).all(|w| w[0] < w[1]),
        "timestamps should be strictly increasing: {:?}",
        out.series.timestamps
    );
    assert_eq!(out.series.columns[0].raw, vec![10.0, 20.0, 5.0]);
    assert_eq!(
        out.series.columns[1].raw,
        vec![0.0, 30.0, 0.0],
        "short rows are padded with the default field"
    );
    assert!(out.diagnostics.is_empty());
}

/// Budget pruning: with the newest file already satisfying the budget, older
/// files contribute nothing (and are never opened).
#[test]
fn e2e_budget_met_by_newest_file_prunes_older() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(&dir.path().join("a.log"), "2024-01-01 00:00:00,1\n", 1_000);
    write_fixture(
        &dir.path().join("b.log"),
        "2024-01-01 00:01:00,2\n2024-01-01 00:02:00,3\n2024-01-01 00:03:00,4\n",
        2_000,
    );

    let pattern = dir.path().join("*.log");
    let files = select::select_files(pattern.to_str().unwrap()).unwrap();

    let mut opened = Vec::new();
    let rows = reader::read_recent_rows(&files, 2, |path, _| {
        opened.push(path.file_name().unwrap().to_str().unwrap().to_string());
    })
    .unwrap();

    assert_eq!(opened, vec!["b.log"], "a.log must not be opened");
    let stamps: Vec<_> = rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(stamps, vec!["2024-01-01 00:02:00", "2024-01-01 00:03:00"]);
}

/// Budget 0 reads every line of every file, oldest file's lines first.
#[test]
fn e2e_zero_budget_reads_all_files() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(
        &dir.path().join("a.log"),
        "2024-01-01 00:00:00,1\n2024-01-01 00:01:00,2\n",
        1_000,
    );
    write_fixture(&dir.path().join("b.log"), "2024-01-01 00:02:00,3\n", 2_000);

    let pattern = dir.path().join("*.log");
    let out = run_pipeline(pattern.to_str().unwrap(), 0, 1.0);

    assert_eq!(out.summary.rows_total, 3);
    assert_eq!(out.series.columns[0].raw, vec![1.0, 2.0, 3.0]);
}

// =============================================================================
// Malformed data E2E
// =============================================================================

/// A malformed timestamp row among valid rows is excluded from every vector,
/// produces one diagnostic, and the run completes.
#[test]
fn e2e_malformed_timestamp_row_is_skipped_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(
        &dir.path().join("a.log"),
        "2024-01-01 00:00:00,1\nnot-a-date,5\n2024-01-01 00:02:00,3\n",
        1_000,
    );

    let pattern = dir.path().join("*.log");
    let out = run_pipeline(pattern.to_str().unwrap(), 10, 1.0);

    assert_eq!(out.summary.rows_total, 3);
    assert_eq!(out.summary.valid_rows, 2);
    assert_eq!(out.series.timestamps.len(), 2);
    assert_eq!(out.series.columns[0].raw, vec![1.0, 3.0]);
    assert_eq!(out.diagnostics.len(), 1);
    assert!(
        out.diagnostics[0].to_string().contains("not-a-date"),
        "diagnostic should identify the row: {}",
        out.diagnostics[0]
    );
}

/// The scale divisor is applied to every stored value.
#[test]
fn e2e_scale_divisor_applied() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(
        &dir.path().join("a.log"),
        "2024-01-01 00:00:00,10\n2024-01-01 00:01:00,20\n",
        1_000,
    );

    let pattern = dir.path().join("*.log");
    let out = run_pipeline(pattern.to_str().unwrap(), 0, 2.0);
    assert_eq!(out.series.columns[0].raw, vec![5.0, 10.0]);
}

// =============================================================================
// Determinism E2E
// =============================================================================

/// Running the pipeline twice on identical inputs and configuration yields
/// identical summaries and diagnostics.
#[test]
fn e2e_pipeline_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(
        &dir.path().join("a.log"),
        "2024-01-01 00:00:00,1\nbroken,2\n2024-01-01 00:02:00,x\n",
        1_000,
    );
    write_fixture(&dir.path().join("b.log"), "2024-01-01 00:03:00,4\n", 2_000);

    let pattern = dir.path().join("*.log");
    let first = run_pipeline(pattern.to_str().unwrap(), 50, 1.0);
    let second = run_pipeline(pattern.to_str().unwrap(), 50, 1.0);

    assert_eq!(first.summary, second.summary);
    assert_eq!(first.diagnostics, second.diagnostics);
    assert_eq!(first.series, second.series);
}

// =============================================================================
// Render smoke test
// =============================================================================

/// The full path down to an encoded image: pipeline output plus trends is
/// rendered to a PNG that exists and is non-empty.
#[test]
fn e2e_render_writes_image_file() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(
        &dir.path().join("a.log"),
        "2024-01-01 00:00:00,10,1\n2024-01-01 00:01:00,20,2\n2024-01-01 00:02:00,5,3\n",
        1_000,
    );

    let pattern = dir.path().join("*.log");
    let out = run_pipeline(pattern.to_str().unwrap(), 0, 1.0);

    let mut plotted = out.series;
    trend::attach_trends(&mut plotted);

    let config = ChartConfig {
        title: "Render smoke".to_string(),
        x_label: "Time".to_string(),
        y_label: "Speed (Bps)".to_string(),
        series_label: "data-".to_string(),
        width_cm: 20,
        height_cm: 10,
        with_trend: true,
    };
    let image_path = dir.path().join("chart.png");

    chart::render(&plotted, &config, &image_path).expect("render");

    let metadata = fs::metadata(&image_path).expect("output image exists");
    assert!(metadata.len() > 0, "output image should be non-empty");
}
