//! Column-level profiling over an in-memory [`crate::types::Dataset`].
//!
//! Every function here is a pure transform of (cells, parameters): nothing
//! mutates the dataset, nothing caches, and calling twice on the same input
//! returns identical output.
//!
//! Components:
//!
//! - [`classify()`]: semantic column type from a single sample value
//! - [`statistics()`]: descriptive statistics or a frequency table
//! - [`distribution()`]: chart-ready histogram bins / frequency buckets
//! - [`correlate()`]: capped (x, y) point sampling for two numeric columns
//! - [`iqr_outliers()`]: Tukey fence violation counts
//!
//! ## Example
//!
//! ```rust
//! use rust_data_profiling::profiling::{classify, statistics, ColumnStatistics};
//! use rust_data_profiling::types::{Cell, ColumnType, Dataset};
//!
//! let ds = Dataset::new(
//!     vec!["age".to_string()],
//!     vec![
//!         vec![Cell::Number(25.0)],
//!         vec![Cell::Number(35.0)],
//!         vec![Cell::Number(45.0)],
//!         vec![Cell::Missing],
//!     ],
//! );
//!
//! let cells = ds.column("age").unwrap();
//! assert_eq!(classify(cells), ColumnType::Numeric);
//!
//! let stats = statistics(ds.column("age").unwrap(), ds.row_count(), 5);
//! let ColumnStatistics::Numeric(s) = stats else { unreachable!() };
//! assert_eq!(s.count, 3);
//! assert_eq!(s.null_count, 1);
//! assert_eq!(s.mean, 35.0);
//! ```

pub mod classify;
pub mod correlation;
pub mod distribution;
pub mod outliers;
pub mod stats;

pub use classify::classify;
pub use correlation::{correlate, CorrelationPoint};
pub use distribution::{distribution, CategoryCount, Distribution, NumericBin};
pub use outliers::{exceeds_report_threshold, iqr_outliers, OutlierSummary, MIN_VALUES};
pub use stats::{statistics, CategoricalStats, ColumnStatistics, NumericStats};
