//! Per-column descriptive statistics.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::types::Cell;

/// Fraction of present values that must be numeric for a column to get the
/// numeric treatment. Strictly greater-than.
const NUMERIC_FRACTION: f64 = 0.8;

/// Statistics for a numeric column.
///
/// `mean`, `median`, and `std_dev` are rounded to 2 decimals; `min`/`max` are
/// exact. `median` is the element at index `floor(n/2)` of the ascending sort
/// (no midpoint averaging for even `n`), and `std_dev` is the population
/// standard deviation (divide by `n`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericStats {
    /// Number of present (non-missing) values, numeric or not.
    pub count: usize,
    /// Number of missing values.
    pub null_count: usize,
    /// Missing percentage of total rows, rounded to 1 decimal.
    pub null_percentage: f64,
    /// Minimum numeric value.
    pub min: f64,
    /// Maximum numeric value.
    pub max: f64,
    /// Arithmetic mean, rounded to 2 decimals.
    pub mean: f64,
    /// Floor-index median, rounded to 2 decimals.
    pub median: f64,
    /// Population standard deviation, rounded to 2 decimals.
    pub std_dev: f64,
    /// Number of distinct numeric values.
    pub unique_count: usize,
}

/// Statistics for a categorical column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoricalStats {
    /// Number of present (non-missing) values.
    pub count: usize,
    /// Number of missing values.
    pub null_count: usize,
    /// Missing percentage of total rows, rounded to 1 decimal.
    pub null_percentage: f64,
    /// Number of distinct labels.
    pub unique_count: usize,
    /// Most frequent labels with their counts, descending by count, ties in
    /// first-encountered order, truncated to the caller's length.
    pub top_values: Vec<(String, usize)>,
}

/// Derived, read-only summary for one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ColumnStatistics {
    Numeric(NumericStats),
    Categorical(CategoricalStats),
}

impl ColumnStatistics {
    /// Number of present (non-missing) values.
    pub fn count(&self) -> usize {
        match self {
            Self::Numeric(s) => s.count,
            Self::Categorical(s) => s.count,
        }
    }

    /// Number of missing values.
    pub fn null_count(&self) -> usize {
        match self {
            Self::Numeric(s) => s.null_count,
            Self::Categorical(s) => s.null_count,
        }
    }
}

/// Compute statistics for one column.
///
/// `total_rows` is the dataset row count (so that `count + null_count ==
/// total_rows` even for columns that are entirely missing). `top_n` is the
/// truncation length for the categorical frequency table; call sites pick it
/// (5 for the general stats panel, 3 for the compact insights panel).
///
/// A column is treated as numeric when strictly more than 80% of its present
/// values are numeric AND at least one numeric value exists. This test is
/// independent of the single-sample classifier and the two can disagree on
/// the same column; both behaviors are intentional.
pub fn statistics<'a, I>(values: I, total_rows: usize, top_n: usize) -> ColumnStatistics
where
    I: IntoIterator<Item = &'a Cell>,
{
    let present: Vec<&Cell> = values.into_iter().filter(|c| !c.is_missing()).collect();
    let null_count = total_rows.saturating_sub(present.len());
    let null_percentage = if total_rows > 0 {
        round1(null_count as f64 / total_rows as f64 * 100.0)
    } else {
        0.0
    };

    let numeric: Vec<f64> = present.iter().filter_map(|c| c.as_number()).collect();
    let is_numeric =
        !numeric.is_empty() && numeric.len() as f64 > present.len() as f64 * NUMERIC_FRACTION;

    if is_numeric {
        ColumnStatistics::Numeric(numeric_stats(
            &numeric,
            present.len(),
            null_count,
            null_percentage,
        ))
    } else {
        ColumnStatistics::Categorical(categorical_stats(
            &present,
            null_count,
            null_percentage,
            top_n,
        ))
    }
}

fn numeric_stats(
    numeric: &[f64],
    count: usize,
    null_count: usize,
    null_percentage: f64,
) -> NumericStats {
    let n = numeric.len();
    if n == 0 {
        // Unreachable through `statistics` (eligibility requires a numeric
        // value), but the division below must never see n == 0.
        return NumericStats {
            count,
            null_count,
            null_percentage,
            min: 0.0,
            max: 0.0,
            mean: 0.0,
            median: 0.0,
            std_dev: 0.0,
            unique_count: 0,
        };
    }

    let min = numeric.iter().copied().fold(f64::INFINITY, f64::min);
    let max = numeric.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = numeric.iter().sum::<f64>() / n as f64;

    let mut sorted = numeric.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let median = sorted[n / 2];

    let variance = numeric.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;
    let std_dev = variance.sqrt();

    let unique_count = numeric
        .iter()
        .map(|v| v.to_bits())
        .collect::<HashSet<u64>>()
        .len();

    NumericStats {
        count,
        null_count,
        null_percentage,
        min,
        max,
        mean: round2(mean),
        median: round2(median),
        std_dev: round2(std_dev),
        unique_count,
    }
}

fn categorical_stats(
    present: &[&Cell],
    null_count: usize,
    null_percentage: f64,
    top_n: usize,
) -> CategoricalStats {
    let table = frequency_table(present.iter().copied());
    let unique_count = table.len();

    let mut top_values = table;
    // Stable sort keeps first-encountered order for equal counts.
    top_values.sort_by(|a, b| b.1.cmp(&a.1));
    top_values.truncate(top_n);

    CategoricalStats {
        count: present.len(),
        null_count,
        null_percentage,
        unique_count,
        top_values,
    }
}

/// Frequency table over present-cell labels, in first-encountered order.
pub(crate) fn frequency_table<'a, I>(present: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a Cell>,
{
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for cell in present {
        let Some(label) = cell.label() else { continue };
        match index.get(&label) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(label.clone(), order.len());
                order.push((label, 1));
            }
        }
    }
    order
}

pub(crate) fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::{statistics, ColumnStatistics};
    use crate::types::Cell;

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    fn num(v: f64) -> Cell {
        Cell::Number(v)
    }

    #[test]
    fn numeric_column_with_one_missing() {
        let cells = vec![num(25.0), num(35.0), num(45.0), Cell::Missing];
        let stats = statistics(&cells, 4, 5);

        let ColumnStatistics::Numeric(s) = stats else {
            panic!("expected numeric stats");
        };
        assert_eq!(s.count, 3);
        assert_eq!(s.null_count, 1);
        assert_eq!(s.null_percentage, 25.0);
        assert_eq!(s.min, 25.0);
        assert_eq!(s.max, 45.0);
        assert_eq!(s.mean, 35.0);
        assert_eq!(s.median, 35.0);
        assert_eq!(s.unique_count, 3);
    }

    #[test]
    fn median_uses_floor_index_for_even_n() {
        // sorted = [1, 2, 3, 4]; index floor(4/2) = 2 -> 3, not 2.5
        let cells = vec![num(4.0), num(1.0), num(3.0), num(2.0)];
        let ColumnStatistics::Numeric(s) = statistics(&cells, 4, 5) else {
            panic!("expected numeric stats");
        };
        assert_eq!(s.median, 3.0);
    }

    #[test]
    fn std_dev_is_population_not_sample() {
        // [2, 4, 4, 4, 5, 5, 7, 9]: population std = 2, sample std ≈ 2.14
        let cells: Vec<Cell> = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]
            .iter()
            .map(|&v| num(v))
            .collect();
        let ColumnStatistics::Numeric(s) = statistics(&cells, 8, 5) else {
            panic!("expected numeric stats");
        };
        assert_eq!(s.std_dev, 2.0);
        assert_eq!(s.mean, 5.0);
    }

    #[test]
    fn eligibility_is_strictly_above_eighty_percent() {
        // 4 of 5 present values numeric = exactly 0.8 -> categorical.
        let cells = vec![num(1.0), num(2.0), num(3.0), num(4.0), text("x")];
        assert!(matches!(
            statistics(&cells, 5, 5),
            ColumnStatistics::Categorical(_)
        ));

        // 5 of 6 numeric ≈ 0.83 -> numeric.
        let cells = vec![num(1.0), num(2.0), num(3.0), num(4.0), num(5.0), text("x")];
        let ColumnStatistics::Numeric(s) = statistics(&cells, 6, 5) else {
            panic!("expected numeric stats");
        };
        // `count` covers all present values, not just the numeric subset.
        assert_eq!(s.count, 6);
    }

    #[test]
    fn categorical_ties_keep_first_seen_order() {
        let cells = vec![text("CA"), text("CA"), text("NY"), text("CA"), text("TX")];
        let ColumnStatistics::Categorical(s) = statistics(&cells, 5, 5) else {
            panic!("expected categorical stats");
        };
        assert_eq!(
            s.top_values,
            vec![
                ("CA".to_string(), 3),
                ("NY".to_string(), 1),
                ("TX".to_string(), 1),
            ]
        );
        assert_eq!(s.unique_count, 3);
    }

    #[test]
    fn top_values_truncation_is_a_call_site_choice() {
        let cells = vec![
            text("a"),
            text("b"),
            text("c"),
            text("d"),
            text("a"),
            text("b"),
        ];
        let ColumnStatistics::Categorical(s) = statistics(&cells, 6, 3) else {
            panic!("expected categorical stats");
        };
        assert_eq!(s.top_values.len(), 3);
        assert_eq!(s.top_values[0], ("a".to_string(), 2));
    }

    #[test]
    fn labels_are_raw_text_identity() {
        // No case normalization: "ca" and "CA" are distinct categories.
        let cells = vec![text("CA"), text("ca"), text("CA")];
        let ColumnStatistics::Categorical(s) = statistics(&cells, 3, 5) else {
            panic!("expected categorical stats");
        };
        assert_eq!(s.unique_count, 2);
        assert_eq!(s.top_values[0], ("CA".to_string(), 2));
    }

    #[test]
    fn all_missing_column() {
        let cells = vec![Cell::Missing, Cell::Missing, Cell::Missing];
        let ColumnStatistics::Categorical(s) = statistics(&cells, 3, 5) else {
            panic!("expected categorical stats");
        };
        assert_eq!(s.count, 0);
        assert_eq!(s.null_count, 3);
        assert_eq!(s.null_percentage, 100.0);
        assert!(s.top_values.is_empty());
    }

    #[test]
    fn empty_dataset_divides_safely() {
        let stats = statistics([], 0, 5);
        assert_eq!(stats.count(), 0);
        assert_eq!(stats.null_count(), 0);
        let ColumnStatistics::Categorical(s) = stats else {
            panic!("expected categorical stats");
        };
        assert_eq!(s.null_percentage, 0.0);
    }

    #[test]
    fn count_invariant_holds() {
        let cells = vec![num(1.0), Cell::Missing, text("x"), Cell::Missing, num(2.0)];
        let total = cells.len();
        let stats = statistics(&cells, total, 5);
        assert_eq!(stats.count() + stats.null_count(), total);
    }
}
