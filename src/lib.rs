//! `rust-data-profiling` is a small library for profiling tabular data: it
//! ingests a header-driven CSV into an in-memory [`types::Dataset`], derives
//! per-column statistics and chart-ready distributions, detects outliers, and
//! generates ranked, human-readable business insights with a markdown report.
//!
//! The engine is a set of pure functions: nothing mutates the dataset, nothing
//! caches, and calling any function twice on the same input yields identical
//! output. Malformed values degrade silently (missing/unparseable cells are
//! skipped, empty inputs produce empty/sentinel results); only the ingestion
//! boundary returns errors.
//!
//! ## Quick example: profile a dataset
//!
//! ```rust
//! use rust_data_profiling::insights::generate_insights;
//! use rust_data_profiling::profiling::{classify, statistics, ColumnStatistics};
//! use rust_data_profiling::types::{Cell, ColumnType, Dataset};
//!
//! let ds = Dataset::new(
//!     vec!["age".to_string(), "region".to_string()],
//!     vec![
//!         vec![Cell::Number(25.0), Cell::Text("CA".to_string())],
//!         vec![Cell::Number(35.0), Cell::Text("NY".to_string())],
//!         vec![Cell::Number(45.0), Cell::Text("CA".to_string())],
//!         vec![Cell::Number(30.0), Cell::Text("TX".to_string())],
//!     ],
//! );
//!
//! // Column types come from a single sample value.
//! assert_eq!(classify(ds.column("age").unwrap()), ColumnType::Numeric);
//! assert_eq!(classify(ds.column("region").unwrap()), ColumnType::Categorical);
//!
//! // Statistics per column; the frequency-table length is a call-site choice.
//! let stats = statistics(ds.column("region").unwrap(), ds.row_count(), 5);
//! let ColumnStatistics::Categorical(region) = stats else { unreachable!() };
//! assert_eq!(region.top_values[0], ("CA".to_string(), 2));
//!
//! // Insights: data quality first, then domain findings.
//! let insights = generate_insights(&ds);
//! assert_eq!(insights[0].title, "High Data Quality");
//! ```
//!
//! ## Quick example: ingest a CSV file
//!
//! ```no_run
//! use rust_data_profiling::ingestion::{ingest_from_path, IngestOptions};
//!
//! # fn main() -> Result<(), rust_data_profiling::IngestError> {
//! let ds = ingest_from_path("policies.csv", &IngestOptions::default())?;
//! println!("rows={}", ds.row_count());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`types`]: normalized cell + in-memory dataset types
//! - [`ingestion`]: CSV ingestion with observer-based outcome reporting
//! - [`profiling`]: classification, statistics, distributions, correlation
//!   sampling, and outlier detection
//! - [`insights`]: heuristic findings and the markdown report
//! - [`error`]: error types used by ingestion

pub mod error;
pub mod ingestion;
pub mod insights;
pub mod profiling;
pub mod types;

pub use error::{IngestError, IngestResult};
