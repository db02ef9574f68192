//! IQR (Tukey fence) outlier detection for numeric columns.

use serde::Serialize;

/// Default Tukey fence multiplier.
const FENCE_MULTIPLIER: f64 = 1.5;

/// Fraction of values that must be flagged before a column is worth
/// reporting as an insight.
const REPORT_FRACTION: f64 = 0.05;

/// Minimum value count for the detector to be meaningful. Columns at or
/// below this size are not examined; the gate is the caller's to apply.
pub const MIN_VALUES: usize = 10;

/// Result of the fence test on one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutlierSummary {
    /// Number of values outside the fences.
    pub outlier_count: usize,
    /// Flagged values as a percentage of all values.
    pub outlier_rate: f64,
}

/// Run the Tukey fence test over a numeric column's values.
///
/// Quartiles are plain order statistics: `Q1` is the sorted element at
/// `floor(0.25·n)` and `Q3` at `floor(0.75·n)`, with no interpolation. A value
/// is an outlier iff it falls strictly outside `Q1 - 1.5·IQR` /
/// `Q3 + 1.5·IQR`.
///
/// Only meaningful for `n > 10`; callers are expected to check
/// [`MIN_VALUES`] before invoking.
pub fn iqr_outliers(values: &[f64]) -> OutlierSummary {
    iqr_outliers_with_multiplier(values, FENCE_MULTIPLIER)
}

/// Whether a summary clears the reporting threshold (strictly more than 5%
/// of values flagged).
pub fn exceeds_report_threshold(summary: OutlierSummary, n: usize) -> bool {
    summary.outlier_count as f64 > n as f64 * REPORT_FRACTION
}

/// Fence test with an explicit multiplier. Kept separate so the
/// monotonicity property (wider fences never flag more values) can be
/// exercised directly.
pub(crate) fn iqr_outliers_with_multiplier(values: &[f64], k: f64) -> OutlierSummary {
    let n = values.len();
    if n == 0 {
        return OutlierSummary {
            outlier_count: 0,
            outlier_rate: 0.0,
        };
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let q1 = sorted[(n as f64 * 0.25).floor() as usize];
    let q3 = sorted[(n as f64 * 0.75).floor() as usize];
    let iqr = q3 - q1;
    let lower = q1 - k * iqr;
    let upper = q3 + k * iqr;

    let outlier_count = values.iter().filter(|&&v| v < lower || v > upper).count();
    OutlierSummary {
        outlier_count,
        outlier_rate: outlier_count as f64 / n as f64 * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        exceeds_report_threshold, iqr_outliers, iqr_outliers_with_multiplier, MIN_VALUES,
    };

    #[test]
    fn flags_obvious_outlier() {
        let values: Vec<f64> = (1..=10).map(f64::from).chain([100.0]).collect();
        let summary = iqr_outliers(&values);
        assert_eq!(summary.outlier_count, 1);
        assert!((summary.outlier_rate - 100.0 / 11.0).abs() < 1e-9);
    }

    #[test]
    fn clean_data_has_no_outliers() {
        let values: Vec<f64> = (1..=20).map(f64::from).collect();
        let summary = iqr_outliers(&values);
        assert_eq!(summary.outlier_count, 0);
        assert_eq!(summary.outlier_rate, 0.0);
    }

    #[test]
    fn quartiles_are_floor_order_statistics() {
        // n = 11: Q1 = sorted[floor(2.75)] = sorted[2], Q3 = sorted[floor(8.25)] = sorted[8]
        let values: Vec<f64> = (0..11).map(f64::from).collect();
        // Q1 = 2, Q3 = 8, IQR = 6, fences at -7 and 17: nothing flagged.
        assert_eq!(iqr_outliers(&values).outlier_count, 0);
    }

    #[test]
    fn report_threshold_is_strictly_above_five_percent() {
        let summary = super::OutlierSummary {
            outlier_count: 1,
            outlier_rate: 5.0,
        };
        // 1 of 20 is exactly 5% -> not reported.
        assert!(!exceeds_report_threshold(summary, 20));
        // 1 of 19 is above 5% -> reported.
        assert!(exceeds_report_threshold(summary, 19));
    }

    #[test]
    fn widening_the_fence_never_flags_more() {
        let values: Vec<f64> = (1..=30)
            .map(f64::from)
            .chain([200.0, 300.0, -50.0])
            .collect();
        let mut prev = usize::MAX;
        for k in [0.5, 1.0, 1.5, 2.0, 3.0] {
            let count = iqr_outliers_with_multiplier(&values, k).outlier_count;
            assert!(count <= prev, "k={k} flagged {count} > {prev}");
            prev = count;
        }
    }

    #[test]
    fn empty_input_is_safe() {
        let summary = iqr_outliers(&[]);
        assert_eq!(summary.outlier_count, 0);
        assert_eq!(summary.outlier_rate, 0.0);
    }

    #[test]
    fn gate_constant_matches_contract() {
        // Callers skip columns with 10 or fewer values.
        assert_eq!(MIN_VALUES, 10);
    }
}
