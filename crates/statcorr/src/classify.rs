//! Column classification: raw rows to a strictly-typed numeric table.

use log::{debug, warn};

use crate::config::{MissingPolicy, TableLimits};
use crate::error::{Result, StatCorrError};
use crate::input::{RawCell, RawTable};
use crate::table::NumericTable;

/// Classification outcome: the numeric table plus the column bookkeeping
/// the report surfaces.
#[derive(Debug, Clone)]
pub struct Classified {
    /// The numeric table, truncated to the configured ceilings.
    pub table: NumericTable,
    /// Original columns not present in the numeric table.
    pub non_numeric_columns: Vec<String>,
    /// Rows surviving cleanup and truncation.
    pub total_rows: usize,
    /// Columns in the raw input.
    pub total_columns: usize,
}

/// Classify a raw table's columns and build the numeric table.
///
/// Rows empty across every column are dropped first. A column qualifies as
/// numeric when at least one surviving row holds a finite number; within a
/// qualifying column, any cell that is not a number is filled according to
/// `missing`. Truncation is deterministic: first `max_rows` surviving rows,
/// first `max_columns` qualifying columns, in original order.
pub fn classify(
    raw: &RawTable,
    limits: &TableLimits,
    missing: MissingPolicy,
) -> Result<Classified> {
    let mut rows: Vec<&Vec<RawCell>> = raw
        .rows
        .iter()
        .filter(|row| !row.iter().all(RawCell::is_missing))
        .collect();

    if rows.is_empty() {
        return Err(StatCorrError::EmptyInput(
            "no rows left after dropping empty rows".to_string(),
        ));
    }

    if rows.len() > limits.max_rows {
        warn!(
            "truncating {} rows to the first {}",
            rows.len(),
            limits.max_rows
        );
        rows.truncate(limits.max_rows);
    }

    let mut numeric_indices: Vec<usize> = (0..raw.headers.len())
        .filter(|&idx| {
            rows.iter()
                .any(|row| matches!(row.get(idx), Some(RawCell::Number(_))))
        })
        .collect();

    if numeric_indices.is_empty() {
        return Err(StatCorrError::NoNumericColumns {
            available: raw.headers.clone(),
        });
    }

    if numeric_indices.len() > limits.max_columns {
        warn!(
            "truncating {} numeric columns to the first {}",
            numeric_indices.len(),
            limits.max_columns
        );
        numeric_indices.truncate(limits.max_columns);
    }

    let fill = match missing {
        MissingPolicy::FillZero => 0.0,
        MissingPolicy::PairwiseExclude => f64::NAN,
    };

    let mut names = Vec::with_capacity(numeric_indices.len());
    let mut columns = Vec::with_capacity(numeric_indices.len());
    for &idx in &numeric_indices {
        let values: Vec<f64> = rows
            .iter()
            .map(|row| row.get(idx).and_then(RawCell::as_number).unwrap_or(fill))
            .collect();
        names.push(raw.headers[idx].clone());
        columns.push(values);
    }

    let non_numeric_columns: Vec<String> = raw
        .headers
        .iter()
        .filter(|h| !names.contains(h))
        .cloned()
        .collect();

    debug!(
        "classified {} numeric columns over {} rows ({} non-numeric)",
        names.len(),
        rows.len(),
        non_numeric_columns.len()
    );

    Ok(Classified {
        total_rows: rows.len(),
        total_columns: raw.headers.len(),
        table: NumericTable::new(names, columns),
        non_numeric_columns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_raw(headers: Vec<&str>, rows: Vec<Vec<&str>>) -> RawTable {
        RawTable::new(
            headers.into_iter().map(String::from).collect(),
            rows.into_iter()
                .map(|r| r.into_iter().map(RawCell::resolve).collect())
                .collect(),
        )
    }

    #[test]
    fn test_qualifies_with_one_numeric_cell() {
        let raw = make_raw(
            vec!["mixed", "text"],
            vec![vec!["a", "x"], vec!["3", "y"], vec!["b", "z"]],
        );
        let classified = classify(&raw, &TableLimits::default(), MissingPolicy::FillZero).unwrap();
        assert_eq!(classified.table.column_names(), ["mixed"]);
        assert_eq!(classified.non_numeric_columns, vec!["text"]);
        // Unparseable cells in a qualifying column fill with zero.
        assert_eq!(classified.table.column(0), &[0.0, 3.0, 0.0]);
    }

    #[test]
    fn test_pairwise_exclude_marks_nan() {
        let raw = make_raw(vec!["v"], vec![vec!["a"], vec!["3"]]);
        let classified = classify(
            &raw,
            &TableLimits::default(),
            MissingPolicy::PairwiseExclude,
        )
        .unwrap();
        assert!(classified.table.column(0)[0].is_nan());
        assert_eq!(classified.table.column(0)[1], 3.0);
    }

    #[test]
    fn test_empty_rows_dropped_before_classification() {
        let raw = make_raw(
            vec!["a", "b"],
            vec![
                vec!["", ""],
                vec!["1", "x"],
                vec!["NA", "-"],
                vec!["2", "y"],
            ],
        );
        let classified = classify(&raw, &TableLimits::default(), MissingPolicy::FillZero).unwrap();
        assert_eq!(classified.total_rows, 2);
        assert_eq!(classified.table.column(0), &[1.0, 2.0]);
    }

    #[test]
    fn test_all_empty_rows_is_empty_input() {
        let raw = make_raw(vec!["a"], vec![vec![""], vec!["NA"]]);
        let err = classify(&raw, &TableLimits::default(), MissingPolicy::FillZero).unwrap_err();
        assert!(matches!(err, StatCorrError::EmptyInput(_)));
    }

    #[test]
    fn test_no_numeric_columns() {
        let raw = make_raw(vec!["name", "city"], vec![vec!["Alice", "NYC"]]);
        let err = classify(&raw, &TableLimits::default(), MissingPolicy::FillZero).unwrap_err();
        match err {
            StatCorrError::NoNumericColumns { available } => {
                assert_eq!(available, vec!["name", "city"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_row_truncation_keeps_first_rows() {
        let rows: Vec<Vec<String>> = (0..30).map(|i| vec![i.to_string()]).collect();
        let raw = RawTable::new(
            vec!["n".into()],
            rows.iter()
                .map(|r| r.iter().map(|s| RawCell::resolve(s)).collect())
                .collect(),
        );
        let limits = TableLimits {
            max_rows: 10,
            ..TableLimits::default()
        };
        let classified = classify(&raw, &limits, MissingPolicy::FillZero).unwrap();
        assert_eq!(classified.total_rows, 10);
        assert_eq!(classified.table.column(0)[9], 9.0);
    }

    #[test]
    fn test_column_truncation_keeps_original_order() {
        let headers: Vec<String> = (0..25).map(|i| format!("c{i}")).collect();
        let row: Vec<RawCell> = (0..25).map(|i| RawCell::Number(i as f64)).collect();
        let raw = RawTable::new(headers, vec![row.clone(), row]);
        let limits = TableLimits {
            max_columns: 20,
            ..TableLimits::default()
        };
        let classified = classify(&raw, &limits, MissingPolicy::FillZero).unwrap();
        assert_eq!(classified.table.column_count(), 20);
        assert_eq!(classified.table.column_names()[0], "c0");
        assert_eq!(classified.table.column_names()[19], "c19");
        // Numeric columns cut by the cap are reported as non-numeric.
        assert!(classified.non_numeric_columns.contains(&"c20".to_string()));
        assert_eq!(classified.non_numeric_columns.len(), 5);
    }
}
