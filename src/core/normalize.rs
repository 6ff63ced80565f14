// tailplot - core/normalize.rs
//
// Row normalization: pad every row to the run's maximum observed field count
// so the merged rows form a rectangular matrix.
//
// This is necessarily two-pass over the fully collected rows -- the width is
// computed first, then applied -- because an older file visited late in the
// merge may carry wider rows than anything seen before it.

use crate::core::model::RowMatrix;
use crate::util::constants::PAD_FIELD;

/// Pad `rows` with the fixed default field until every row has the maximum
/// observed length. Original field values keep their positions; padding only
/// appends. An empty input yields an empty, zero-width matrix.
pub fn normalize(mut rows: Vec<Vec<String>>) -> RowMatrix {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);

    for row in &mut rows {
        while row.len() < width {
            row.push(PAD_FIELD.to_string());
        }
    }

    RowMatrix { rows, width }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_pads_to_widest_row() {
        let matrix = normalize(vec![
            row(&["2024-01-01 00:00:00", "10"]),
            row(&["2024-01-01 00:01:00", "20", "30"]),
            row(&["2024-01-01 00:02:00", "5"]),
        ]);

        assert_eq!(matrix.width, 3);
        assert_eq!(matrix.rows[0], row(&["2024-01-01 00:00:00", "10", "0"]));
        assert_eq!(matrix.rows[1], row(&["2024-01-01 00:01:00", "20", "30"]));
        assert_eq!(matrix.rows[2], row(&["2024-01-01 00:02:00", "5", "0"]));
    }

    #[test]
    fn test_values_keep_their_positions() {
        let input = vec![row(&["a", "b", "c"]), row(&["d"])];
        let matrix = normalize(input);

        assert_eq!(matrix.rows[0], row(&["a", "b", "c"]), "untouched row");
        assert_eq!(
            &matrix.rows[1][..1],
            &row(&["d"])[..],
            "original fields precede any padding"
        );
        assert_eq!(&matrix.rows[1][1..], &row(&["0", "0"])[..]);
    }

    #[test]
    fn test_empty_input_yields_zero_width_matrix() {
        let matrix = normalize(Vec::new());
        assert_eq!(matrix.width, 0);
        assert!(matrix.rows.is_empty());
        assert_eq!(matrix.data_columns(), 0);
    }

    #[test]
    fn test_already_rectangular_input_is_unchanged() {
        let input = vec![row(&["x", "1"]), row(&["y", "2"])];
        let matrix = normalize(input.clone());
        assert_eq!(matrix.rows, input);
        assert_eq!(matrix.width, 2);
        assert_eq!(matrix.data_columns(), 1);
    }
}
