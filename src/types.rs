//! Core data model types for profiling.
//!
//! This crate ingests tabular data into an in-memory [`Dataset`] whose cells are
//! normalized [`Cell`]s, then derives statistics, distributions, and insights
//! from it. All derived values are pure functions of the dataset; nothing here
//! is mutated after construction.

use serde::Serialize;

/// A single normalized value in a [`Dataset`].
///
/// Normalization happens once, at the ingestion boundary: a raw field is
/// trimmed; an empty field becomes [`Cell::Missing`]; a field that parses as a
/// finite `f64` becomes [`Cell::Number`]; everything else is [`Cell::Text`].
/// Downstream code never re-derives "is this missing" from raw strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    /// Missing/empty value.
    Missing,
    /// Finite 64-bit float.
    Number(f64),
    /// Non-numeric text.
    Text(String),
}

impl Cell {
    /// Normalize a raw string field into a cell.
    ///
    /// Leading/trailing whitespace is trimmed first. Only finite numbers are
    /// kept as [`Cell::Number`]; `inf`/`NaN` spellings stay text.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => Self::Number(v),
            _ => Self::Text(trimmed.to_owned()),
        }
    }

    /// Whether this cell is missing.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// The numeric value, if this cell holds one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// The text content, if this cell holds text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Display label for frequency tables and category buckets.
    ///
    /// Integral numbers are labeled without a decimal point ("25", not
    /// "25.0"), matching how the values read in the source data.
    pub fn label(&self) -> Option<String> {
        match self {
            Self::Missing => None,
            Self::Number(v) => Some(format_number(*v)),
            Self::Text(s) => Some(s.clone()),
        }
    }
}

/// Formats a finite number the way it reads in source data: integral values
/// without a trailing `.0`.
pub(crate) fn format_number(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

/// Semantic type of a column, derived on demand from a sample value.
///
/// Never stored on the dataset; reclassification is idempotent and
/// side-effect-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// First sample value is numeric.
    Numeric,
    /// First sample value parses as a calendar date.
    Date,
    /// Everything else, including all-missing columns.
    Categorical,
}

/// In-memory tabular dataset.
///
/// Rows are stored as `Vec<Vec<Cell>>` in the same order as `headers`.
/// Header names are assumed unique; the shipped CSV ingester enforces this,
/// and callers constructing datasets directly must guarantee it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    /// Ordered column names. Insertion order is display order.
    pub headers: Vec<String>,
    /// Row-major cell storage.
    pub rows: Vec<Vec<Cell>>,
}

impl Dataset {
    /// Create a dataset from headers and rows.
    ///
    /// # Panics
    ///
    /// Panics if any row's length differs from the header count.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        for (i, row) in rows.iter().enumerate() {
            assert!(
                row.len() == headers.len(),
                "row {} has {} cells but there are {} headers",
                i,
                row.len(),
                headers.len()
            );
        }
        Self { headers, rows }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Total cell count (rows × columns).
    pub fn total_cells(&self) -> usize {
        self.row_count() * self.column_count()
    }

    /// Returns the index of a column by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Iterate a column's cells in row order.
    ///
    /// Returns `None` if the column does not exist.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &Cell>> {
        let idx = self.index_of(name)?;
        Some(self.rows.iter().map(move |row| &row[idx]))
    }

    /// A column's numeric values in row order, skipping missing and
    /// non-numeric cells.
    pub fn numeric_values(&self, name: &str) -> Vec<f64> {
        self.column(name)
            .map(|cells| cells.filter_map(Cell::as_number).collect())
            .unwrap_or_default()
    }
}
