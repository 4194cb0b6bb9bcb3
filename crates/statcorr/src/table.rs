//! Strictly-typed numeric table.

/// The numeric columns of a classified table, column-major, in original
/// column order.
///
/// Built once by the column classifier and never mutated. Under the
/// fill-with-zero policy every cell is finite; under pairwise exclusion an
/// unparseable cell holds NaN and is skipped per column pair downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericTable {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
    row_count: usize,
}

impl NumericTable {
    pub(crate) fn new(names: Vec<String>, columns: Vec<Vec<f64>>) -> Self {
        let row_count = columns.first().map_or(0, |c| c.len());
        debug_assert!(columns.iter().all(|c| c.len() == row_count));
        Self {
            names,
            columns,
            row_count,
        }
    }

    /// Column names, in original order.
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Get a column's values by index.
    pub fn column(&self, index: usize) -> &[f64] {
        &self.columns[index]
    }

    /// Get a column's values by name.
    pub fn column_by_name(&self, name: &str) -> Option<&[f64]> {
        let index = self.names.iter().position(|n| n == name)?;
        Some(&self.columns[index])
    }
}
