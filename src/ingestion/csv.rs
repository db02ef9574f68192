//! CSV ingestion implementation.

use std::path::Path;

use crate::error::{IngestError, IngestResult};
use crate::types::{Cell, Dataset};

/// Ingest a CSV file into an in-memory [`Dataset`].
///
/// Rules:
///
/// - CSV must have a header row; header names must be unique.
/// - Blank lines are skipped.
/// - Every field is normalized into a [`Cell`] at this boundary: trimmed,
///   empty → missing, finite number → numeric, anything else → text.
pub fn ingest_csv_from_path(path: impl AsRef<Path>) -> IngestResult<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    ingest_csv_from_reader(&mut rdr)
}

/// Ingest CSV data from an existing CSV reader.
pub fn ingest_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> IngestResult<Dataset> {
    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_owned).collect();
    if headers.is_empty() {
        return Err(IngestError::EmptyInput);
    }
    for (i, name) in headers.iter().enumerate() {
        if headers[..i].iter().any(|earlier| earlier == name) {
            return Err(IngestError::DuplicateHeader { name: name.clone() });
        }
    }

    let mut rows: Vec<Vec<Cell>> = Vec::new();
    for result in rdr.records() {
        let record = result?;

        // Short records pad with missing cells; long records drop the tail.
        let mut row: Vec<Cell> = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            row.push(Cell::from_raw(record.get(idx).unwrap_or("")));
        }
        rows.push(row);
    }

    Ok(Dataset::new(headers, rows))
}
