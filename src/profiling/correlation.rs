//! Correlation sampling: paired points for two numeric columns.

use serde::Serialize;

use crate::profiling::classify::classify;
use crate::types::{ColumnType, Dataset};

/// Cap on the number of sampled points.
///
/// Points beyond the cap are dropped, keeping the earliest rows. The
/// truncation is deliberately non-random (a display-performance policy), so
/// the sample is biased toward the head of the dataset. This is a known
/// property, not a bug.
const MAX_POINTS: usize = 1000;

/// One (x, y) sample for a scatter plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CorrelationPoint {
    pub x: f64,
    pub y: f64,
}

/// Pair two numeric columns into a point set.
///
/// Returns an empty vector (never an error) when either column does not
/// exist or is not classified numeric. Rows where either cell is missing or
/// non-numeric are skipped; the survivors are truncated to the first 1000 in
/// row order.
pub fn correlate(dataset: &Dataset, x_column: &str, y_column: &str) -> Vec<CorrelationPoint> {
    let (Some(x_idx), Some(y_idx)) = (dataset.index_of(x_column), dataset.index_of(y_column))
    else {
        return Vec::new();
    };

    let x_numeric = dataset
        .column(x_column)
        .is_some_and(|cells| classify(cells) == ColumnType::Numeric);
    let y_numeric = dataset
        .column(y_column)
        .is_some_and(|cells| classify(cells) == ColumnType::Numeric);
    if !x_numeric || !y_numeric {
        return Vec::new();
    }

    dataset
        .rows
        .iter()
        .filter_map(|row| {
            let x = row[x_idx].as_number()?;
            let y = row[y_idx].as_number()?;
            Some(CorrelationPoint { x, y })
        })
        .take(MAX_POINTS)
        .collect()
}
