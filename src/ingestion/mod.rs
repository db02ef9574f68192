//! Ingestion entrypoints and implementations.
//!
//! Most callers should use [`ingest_from_path`], which:
//!
//! - decodes a header-driven CSV file into an in-memory [`crate::types::Dataset`]
//! - normalizes every field into a [`crate::types::Cell`] at the boundary
//! - optionally reports success/failure to an [`IngestObserver`]
//!
//! The format-specific function is also available under [`csv`].

pub mod csv;
pub mod observability;

use std::path::Path;

use crate::error::IngestResult;
use crate::types::Dataset;

pub use observability::{
    IngestContext, IngestObserver, IngestOptions, IngestSeverity, IngestStats, StdErrObserver,
};

/// Ingest a CSV file into a [`Dataset`], reporting the outcome to the
/// configured observer.
///
/// ```no_run
/// use std::sync::Arc;
///
/// use rust_data_profiling::ingestion::{ingest_from_path, IngestOptions, StdErrObserver};
///
/// # fn main() -> Result<(), rust_data_profiling::IngestError> {
/// let opts = IngestOptions {
///     observer: Some(Arc::new(StdErrObserver)),
/// };
/// let ds = ingest_from_path("policies.csv", &opts)?;
/// println!("rows={}", ds.row_count());
/// # Ok(())
/// # }
/// ```
pub fn ingest_from_path(path: impl AsRef<Path>, options: &IngestOptions) -> IngestResult<Dataset> {
    let path = path.as_ref();
    let ctx = IngestContext::new(path);

    let result = csv::ingest_csv_from_path(path);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(ds) => obs.on_success(
                &ctx,
                IngestStats {
                    rows: ds.row_count(),
                    columns: ds.column_count(),
                },
            ),
            Err(e) => obs.on_failure(&ctx, observability::severity_for_error(e), e),
        }
    }

    result
}
