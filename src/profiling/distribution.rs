//! Chart-ready distributions: histogram bins and frequency buckets.

use serde::Serialize;

use crate::profiling::stats::frequency_table;
use crate::types::{Cell, ColumnType};

/// Maximum number of histogram bins for a numeric column.
const MAX_BINS: usize = 20;

/// Maximum number of frequency buckets for a categorical column.
const MAX_CATEGORIES: usize = 15;

/// One histogram bin of a numeric distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericBin {
    /// Half-open range label formatted to 1 decimal, e.g. `"20.0-25.0"`.
    pub range: String,
    /// Bin midpoint, for sorting/plotting.
    pub center: f64,
    /// Number of values in the bin.
    pub count: usize,
}

/// One frequency bucket of a categorical distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    /// Category label.
    pub category: String,
    /// Number of occurrences.
    pub count: usize,
}

/// A column's distribution, shaped by its [`ColumnType`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "buckets", rename_all = "lowercase")]
pub enum Distribution {
    Numeric(Vec<NumericBin>),
    Categorical(Vec<CategoryCount>),
}

impl Distribution {
    /// Total count across all buckets.
    pub fn total_count(&self) -> usize {
        match self {
            Self::Numeric(bins) => bins.iter().map(|b| b.count).sum(),
            Self::Categorical(buckets) => buckets.iter().map(|b| b.count).sum(),
        }
    }
}

/// Bucket a column's values for charting.
///
/// Numeric columns get `min(20, ceil(sqrt(n)))` equal-width histogram bins
/// over the valid (non-missing, numeric) values; every other column type gets
/// the top-15 frequency buckets, descending by count with ties in
/// first-encountered order. Fully deterministic.
pub fn distribution<'a, I>(values: I, column_type: ColumnType) -> Distribution
where
    I: IntoIterator<Item = &'a Cell>,
{
    match column_type {
        ColumnType::Numeric => {
            let numeric: Vec<f64> = values.into_iter().filter_map(Cell::as_number).collect();
            Distribution::Numeric(histogram(&numeric))
        }
        ColumnType::Date | ColumnType::Categorical => {
            let present = values.into_iter().filter(|c| !c.is_missing());
            let mut buckets: Vec<CategoryCount> = frequency_table(present)
                .into_iter()
                .map(|(category, count)| CategoryCount { category, count })
                .collect();
            buckets.sort_by(|a, b| b.count.cmp(&a.count));
            buckets.truncate(MAX_CATEGORIES);
            Distribution::Categorical(buckets)
        }
    }
}

fn histogram(numeric: &[f64]) -> Vec<NumericBin> {
    let n = numeric.len();
    if n == 0 {
        return Vec::new();
    }

    let min = numeric.iter().copied().fold(f64::INFINITY, f64::min);
    let max = numeric.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let bin_count = MAX_BINS.min((n as f64).sqrt().ceil() as usize);
    let width = if bin_count > 0 {
        (max - min) / bin_count as f64
    } else {
        1.0
    };

    let mut bins: Vec<NumericBin> = (0..bin_count)
        .map(|i| {
            let lo = min + i as f64 * width;
            NumericBin {
                range: format!("{:.1}-{:.1}", lo, lo + width),
                center: lo + width / 2.0,
                count: 0,
            }
        })
        .collect();

    for &v in numeric {
        // The min() clamp keeps the max value out of a nonexistent bin; a
        // zero-width histogram (constant column) degenerates to bin 0.
        let idx = if width > 0.0 {
            (((v - min) / width).floor() as usize).min(bin_count - 1)
        } else {
            0
        };
        bins[idx].count += 1;
    }

    bins
}

#[cfg(test)]
mod tests {
    use super::{distribution, Distribution};
    use crate::types::{Cell, ColumnType};

    fn nums(values: &[f64]) -> Vec<Cell> {
        values.iter().map(|&v| Cell::Number(v)).collect()
    }

    #[test]
    fn bin_count_follows_sqrt_rule() {
        // n = 9 -> ceil(sqrt(9)) = 3 bins
        let cells = nums(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let Distribution::Numeric(bins) = distribution(&cells, ColumnType::Numeric) else {
            panic!("expected numeric bins");
        };
        assert_eq!(bins.len(), 3);
    }

    #[test]
    fn bin_count_caps_at_twenty() {
        let cells = nums(&(0..1000).map(f64::from).collect::<Vec<_>>());
        let Distribution::Numeric(bins) = distribution(&cells, ColumnType::Numeric) else {
            panic!("expected numeric bins");
        };
        assert_eq!(bins.len(), 20);
    }

    #[test]
    fn bucket_counts_cover_every_valid_value() {
        let mut cells = nums(&[3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0]);
        cells.push(Cell::Missing);
        cells.push(Cell::Text("oops".to_string()));

        let dist = distribution(&cells, ColumnType::Numeric);
        // 8 valid values; missing and text cells are dropped before binning.
        assert_eq!(dist.total_count(), 8);
    }

    #[test]
    fn max_value_lands_in_last_bin() {
        let cells = nums(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0]);
        let Distribution::Numeric(bins) = distribution(&cells, ColumnType::Numeric) else {
            panic!("expected numeric bins");
        };
        assert!(bins.last().unwrap().count >= 1);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 10);
    }

    #[test]
    fn constant_column_degenerates_to_single_bin() {
        let cells = nums(&[5.0, 5.0, 5.0, 5.0]);
        let Distribution::Numeric(bins) = distribution(&cells, ColumnType::Numeric) else {
            panic!("expected numeric bins");
        };
        assert_eq!(bins.len(), 2); // ceil(sqrt(4)) = 2, zero width
        assert_eq!(bins[0].count, 4);
        assert_eq!(bins[1].count, 0);
    }

    #[test]
    fn empty_column_yields_no_bins() {
        let cells = vec![Cell::Missing, Cell::Missing];
        let Distribution::Numeric(bins) = distribution(&cells, ColumnType::Numeric) else {
            panic!("expected numeric bins");
        };
        assert!(bins.is_empty());
    }

    #[test]
    fn range_labels_and_centers() {
        let cells = nums(&[0.0, 10.0]); // 2 values -> ceil(sqrt(2)) = 2 bins of width 5
        let Distribution::Numeric(bins) = distribution(&cells, ColumnType::Numeric) else {
            panic!("expected numeric bins");
        };
        assert_eq!(bins[0].range, "0.0-5.0");
        assert_eq!(bins[0].center, 2.5);
        assert_eq!(bins[1].range, "5.0-10.0");
        assert_eq!(bins[1].center, 7.5);
    }

    #[test]
    fn categorical_keeps_top_fifteen() {
        let cells: Vec<Cell> = (0..30usize)
            .flat_map(|i| {
                let label = format!("c{i}");
                std::iter::repeat_n(Cell::Text(label), 30 - i)
            })
            .collect();
        let Distribution::Categorical(buckets) = distribution(&cells, ColumnType::Categorical)
        else {
            panic!("expected categorical buckets");
        };
        assert_eq!(buckets.len(), 15);
        assert_eq!(buckets[0].category, "c0");
        assert_eq!(buckets[0].count, 30);
    }

    #[test]
    fn determinism_on_repeat_calls() {
        let cells = nums(&[1.0, 2.0, 2.0, 3.0, 7.0, 8.0, 9.0]);
        let a = distribution(&cells, ColumnType::Numeric);
        let b = distribution(&cells, ColumnType::Numeric);
        assert_eq!(a, b);
    }
}
