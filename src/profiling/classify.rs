//! Column type classification from a single sample value.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::types::{Cell, ColumnType};

/// Date formats accepted by the classifier, tried in order.
///
/// A deliberately small list; locale-aware parsing is out of scope.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Classify a column from its cells in row order.
///
/// The decision uses only the FIRST non-missing cell (the sample): a numeric
/// sample makes the whole column [`ColumnType::Numeric`], a date-parseable
/// text sample makes it [`ColumnType::Date`], anything else (including an
/// all-missing column) is [`ColumnType::Categorical`].
///
/// The single-sample heuristic is intentional: a column whose first valid
/// value happens to be numeric is labeled numeric even if later values are
/// not. The statistics engine re-derives numeric validity per value with an
/// 80% fraction test and can disagree with this label on the same column;
/// both code paths are kept independent.
pub fn classify<'a, I>(values: I) -> ColumnType
where
    I: IntoIterator<Item = &'a Cell>,
{
    let sample = values.into_iter().find(|cell| !cell.is_missing());
    match sample {
        None => ColumnType::Categorical,
        Some(Cell::Number(_)) => ColumnType::Numeric,
        Some(Cell::Text(s)) => {
            if parses_as_date(s) {
                ColumnType::Date
            } else {
                ColumnType::Categorical
            }
        }
        Some(Cell::Missing) => unreachable!("missing cells are filtered above"),
    }
}

/// Whether a string parses as a calendar date/time under the fixed formats.
pub fn parses_as_date(s: &str) -> bool {
    if DateTime::parse_from_rfc3339(s).is_ok() {
        return true;
    }
    if DATE_FORMATS
        .iter()
        .any(|fmt| NaiveDate::parse_from_str(s, fmt).is_ok())
    {
        return true;
    }
    DATETIME_FORMATS
        .iter()
        .any(|fmt| NaiveDateTime::parse_from_str(s, fmt).is_ok())
}

#[cfg(test)]
mod tests {
    use super::{classify, parses_as_date};
    use crate::types::{Cell, ColumnType};

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    #[test]
    fn numeric_sample_classifies_numeric() {
        let cells = vec![Cell::Missing, Cell::Number(25.0), text("oops")];
        assert_eq!(classify(&cells), ColumnType::Numeric);
    }

    #[test]
    fn date_sample_classifies_date() {
        let cells = vec![text("2024-03-05"), text("2024-03-06")];
        assert_eq!(classify(&cells), ColumnType::Date);
    }

    #[test]
    fn text_sample_classifies_categorical() {
        let cells = vec![text("CA"), text("NY")];
        assert_eq!(classify(&cells), ColumnType::Categorical);
    }

    #[test]
    fn all_missing_column_defaults_to_categorical() {
        let cells = vec![Cell::Missing, Cell::Missing];
        assert_eq!(classify(&cells), ColumnType::Categorical);
        assert_eq!(classify([]), ColumnType::Categorical);
    }

    #[test]
    fn only_the_first_sample_decides() {
        // Later non-numeric values do not change the label.
        let cells = vec![Cell::Number(1.0), text("a"), text("b"), text("c")];
        assert_eq!(classify(&cells), ColumnType::Numeric);

        // And vice versa: a leading text value wins over later numbers.
        let cells = vec![text("n/a"), Cell::Number(2.0), Cell::Number(3.0)];
        assert_eq!(classify(&cells), ColumnType::Categorical);
    }

    #[test]
    fn date_formats() {
        assert!(parses_as_date("2024-03-05"));
        assert!(parses_as_date("2024/03/05"));
        assert!(parses_as_date("03/05/2024"));
        assert!(parses_as_date("March 5, 2024"));
        assert!(parses_as_date("2024-03-05 13:45:00"));
        assert!(parses_as_date("2024-03-05T13:45:00+00:00"));
        assert!(!parses_as_date("not a date"));
        assert!(!parses_as_date("CA"));
    }
}
