// tailplot - core/series.rs
//
// Series builder: converts the normalized row matrix into a timestamp vector
// plus one scaled numeric vector per data column.
//
// Malformed data is expected and frequent in rotated logs, so parse failures
// here are diagnostics, never errors:
//   - an unparseable timestamp skips the entire row;
//   - an unparseable numeric cell contributes 0 without dropping the row.
// Both are recorded (up to MAX_DIAGNOSTICS) and counted, and the run carries
// on. Every successfully-timestamped row contributes exactly one value to
// every column, which keeps all vectors the same length.
//
// The scale divisor is validated non-zero by the caller before any I/O
// happens; by the time a matrix exists the invariant holds.

use crate::core::model::{
    Diagnostic, DiagnosticKind, RowMatrix, SeriesColumn, SeriesSummary, TimeSeries,
};
use crate::util::constants::{FIELD_DELIMITER, MAX_DIAGNOSTICS, TIMESTAMP_FORMAT};
use chrono::NaiveDateTime;

/// Everything the series builder produces for one run: the plottable series,
/// the side-channel diagnostics list, and the user-facing summary.
#[derive(Debug)]
pub struct SeriesOutput {
    pub series: TimeSeries,
    pub diagnostics: Vec<Diagnostic>,
    pub summary: SeriesSummary,
}

/// Build the time series from `matrix`, dividing every numeric value by
/// `scale` before storing it. Timestamps become seconds since the Unix epoch.
pub fn build(matrix: &RowMatrix, scale: f64) -> SeriesOutput {
    let mut timestamps: Vec<f64> = Vec::new();
    let mut columns: Vec<SeriesColumn> = (0..matrix.data_columns())
        .map(|_| SeriesColumn {
            raw: Vec::new(),
            trend: Vec::new(),
        })
        .collect();

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let mut diagnostics_total = 0usize;

    for row in &matrix.rows {
        let instant = match NaiveDateTime::parse_from_str(&row[0], TIMESTAMP_FORMAT) {
            Ok(ndt) => ndt.and_utc().timestamp() as f64,
            Err(e) => {
                diagnostics_total += 1;
                push_capped(
                    &mut diagnostics,
                    Diagnostic {
                        kind: DiagnosticKind::BadTimestamp,
                        row: display_row(row),
                        reason: e.to_string(),
                    },
                );
                tracing::warn!(row = %display_row(row), error = %e, "Row skipped: bad timestamp");
                continue;
            }
        };

        timestamps.push(instant);

        for (column, field) in columns.iter_mut().zip(&row[1..]) {
            let value = match field.parse::<f64>() {
                Ok(v) => v,
                Err(e) => {
                    diagnostics_total += 1;
                    push_capped(
                        &mut diagnostics,
                        Diagnostic {
                            kind: DiagnosticKind::BadNumber,
                            row: display_row(row),
                            reason: format!("'{field}': {e}"),
                        },
                    );
                    tracing::warn!(row = %display_row(row), field = %field, error = %e, "Value defaulted to 0");
                    0.0
                }
            };
            column.raw.push(value / scale);
        }
    }

    let summary = SeriesSummary {
        rows_total: matrix.rows.len(),
        max_columns: matrix.width,
        valid_rows: timestamps.len(),
        first_raw: matrix.rows.first().map(|r| r[0].clone()),
        last_raw: matrix.rows.last().map(|r| r[0].clone()),
        diagnostics_total,
    };

    tracing::debug!(
        rows = summary.rows_total,
        valid = summary.valid_rows,
        columns = columns.len(),
        diagnostics = diagnostics_total,
        "Series built"
    );

    SeriesOutput {
        series: TimeSeries {
            timestamps,
            columns,
        },
        diagnostics,
        summary,
    }
}

/// Store a diagnostic unless the retention cap is reached; the caller keeps
/// the total count either way.
fn push_capped(diagnostics: &mut Vec<Diagnostic>, diagnostic: Diagnostic) {
    if diagnostics.len() < MAX_DIAGNOSTICS {
        diagnostics.push(diagnostic);
    }
}

/// Re-join a field row for diagnostic display.
fn display_row(row: &[String]) -> String {
    row.join(&FIELD_DELIMITER.to_string())
}

// =============================================================================
// Tests
// =============================================================================
