// tailplot - core/trend.rs
//
// Trend computation: the running (cumulative) arithmetic mean of each data
// column, rendered as a dashed companion line when the user opts in.
//
// The mean at position j divides by j+1, so the first trend point equals the
// first raw value. Trends are always computed (the pass is a single cheap
// fold per column); whether they reach the chart is the renderer's concern.

use crate::core::model::TimeSeries;

/// Running mean of `values`: `out[j] = (values[0] + .. + values[j]) / (j+1)`.
pub fn running_mean(values: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    let mut sum = 0.0;
    for (i, value) in values.iter().enumerate() {
        sum += value;
        out.push(sum / (i as f64 + 1.0));
    }
    out
}

/// Fill every column's trend vector from its raw values.
pub fn attach_trends(series: &mut TimeSeries) {
    for column in &mut series.columns {
        column.trend = running_mean(&column.raw);
    }
}

// =============================================================================
// Tests
// =============================================================================
