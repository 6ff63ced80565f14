// tailplot - core/model.rs
//
// Core data model types. Pure data definitions with no I/O.
//
// These types are the shared vocabulary between the pipeline stages and the
// chart renderer. Everything here lives for a single run: constructed once,
// handed forward by reference, discarded on exit.

use chrono::{DateTime, Utc};
use std::fmt;
use std::path::PathBuf;

// =============================================================================
// Candidate file (output of selection)
// =============================================================================

/// A file matched by the input glob pattern, together with its modification
/// time. Built once per run, immutable, discarded after ordering.
#[derive(Debug, Clone)]
pub struct CandidateFile {
    /// Full path to the file.
    pub path: PathBuf,

    /// Last-modified timestamp in UTC, used to order candidates newest first.
    pub modified: DateTime<Utc>,
}

// =============================================================================
// Row matrix (output of normalization)
// =============================================================================

/// The merged data rows after normalization: every row padded to the run's
/// maximum observed field count.
///
/// Rows are in ascending chronological order by construction (oldest line
/// overall first); the order comes from how files were merged, not from the
/// parsed timestamp values, and is never re-sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowMatrix {
    /// Field rows, each of length `width`.
    pub rows: Vec<Vec<String>>,

    /// Maximum field count observed across all rows before padding.
    /// 0 when the input is empty.
    pub width: usize,
}

impl RowMatrix {
    /// Number of data columns (everything after the timestamp field).
    pub fn data_columns(&self) -> usize {
        self.width.saturating_sub(1)
    }
}

// =============================================================================
// Time series (output of the series builder + trend computer)
// =============================================================================

/// One data column of the chart: the raw values and their running mean.
///
/// Invariant: `raw.len() == trend.len()` once the trend computer has run;
/// both match the owning `TimeSeries`' timestamp count.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesColumn {
    /// Scaled values, one per valid row.
    pub raw: Vec<f64>,

    /// Running (cumulative) mean of `raw`, filled in by `core::trend`.
    pub trend: Vec<f64>,
}

/// The plottable result of a run: a shared timestamp vector plus one column
/// per data field. Produced once, consumed once by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    /// Numeric instants (seconds since the Unix epoch), ascending.
    pub timestamps: Vec<f64>,

    /// One entry per data column, index 0 being the field after the timestamp.
    pub columns: Vec<SeriesColumn>,
}

impl TimeSeries {
    /// True when no row survived timestamp parsing; nothing to plot.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

// =============================================================================
// Run summary
// =============================================================================

/// User-facing counters for one run, printed after the series is built.
/// Deterministic: identical inputs and configuration produce an identical
/// summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesSummary {
    /// Total rows in the normalized matrix, valid or not.
    pub rows_total: usize,

    /// Maximum field count observed across all rows.
    pub max_columns: usize,

    /// Rows whose timestamp field parsed; only these reach the chart.
    pub valid_rows: usize,

    /// Raw timestamp field of the first matrix row (not necessarily valid).
    pub first_raw: Option<String>,

    /// Raw timestamp field of the last matrix row.
    pub last_raw: Option<String>,

    /// Total recoverable parse conditions encountered, including any beyond
    /// the stored-diagnostics cap.
    pub diagnostics_total: usize,
}

// =============================================================================
// Diagnostics (recoverable parse conditions)
// =============================================================================

/// What went wrong with a row or cell. Recoverable by definition: a bad
/// timestamp drops the row, a bad numeric cell defaults to 0, and in both
/// cases the run continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Field 0 did not parse with the fixed timestamp format; the whole row
    /// was skipped.
    BadTimestamp,

    /// A data field did not parse as a number; 0 was substituted.
    BadNumber,
}

/// A recoverable per-row or per-cell parse condition, carrying the offending
/// row content and the parser's reason. Collected into a side-channel list
/// rather than raised as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,

    /// The offending row, re-joined with the field delimiter for display.
    pub row: String,

    /// Human-readable parse failure reason.
    pub reason: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::BadTimestamp => {
                write!(f, "[{}], bad timestamp: {}", self.row, self.reason)
            }
            DiagnosticKind::BadNumber => {
                write!(f, "[{}], bad value: {}", self.row, self.reason)
            }
        }
    }
}
