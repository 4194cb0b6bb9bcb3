//! Raw table model and source metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single inbound cell, resolved into a tagged variant exactly once at
/// read time. Downstream stages never re-check cell types.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    /// A finite numeric value.
    Number(f64),
    /// Non-empty text that does not parse as a finite number.
    Text(String),
    /// Blank or a recognized null token.
    Missing,
}

impl RawCell {
    /// Resolve a raw string into a tagged cell.
    ///
    /// Accepts integers, decimals, and scientific notation; values parsing
    /// to an infinity or NaN stay text.
    pub fn resolve(value: &str) -> Self {
        let trimmed = value.trim();
        if is_null_token(trimmed) {
            return RawCell::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => RawCell::Number(v),
            _ => RawCell::Text(trimmed.to_string()),
        }
    }

    /// The numeric value, if this cell holds one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawCell::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Whether this cell is blank or a null token.
    pub fn is_missing(&self) -> bool {
        matches!(self, RawCell::Missing)
    }
}

/// Check if a value represents a missing/null value.
fn is_null_token(trimmed: &str) -> bool {
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("na")
        || trimmed.eq_ignore_ascii_case("n/a")
        || trimmed.eq_ignore_ascii_case("null")
        || trimmed.eq_ignore_ascii_case("none")
        || trimmed.eq_ignore_ascii_case("nil")
        || trimmed == "."
        || trimmed == "-"
}

/// Tabular data as yielded by a table reader: named columns over rows of
/// resolved cells. All rows share the header width.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    /// Column headers, in original order.
    pub headers: Vec<String>,
    /// Row data (row-major order).
    pub rows: Vec<Vec<RawCell>>,
}

impl RawTable {
    /// Create a new raw table.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<RawCell>>) -> Self {
        Self { headers, rows }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get a specific cell.
    pub fn get(&self, row: usize, col: usize) -> Option<&RawCell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }
}

/// Metadata about the analyzed payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name, when the caller supplied one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Format tag the payload arrived under.
    pub format: String,
    /// Payload size in bytes; absent for pre-decoded rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<usize>,
    /// SHA-256 hash of the payload; absent for pre-decoded rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// Rows decoded from the payload, before cleanup.
    pub decoded_rows: usize,
    /// Columns decoded from the payload.
    pub decoded_columns: usize,
    /// When the analysis was performed.
    pub analyzed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_numbers() {
        assert_eq!(RawCell::resolve("42"), RawCell::Number(42.0));
        assert_eq!(RawCell::resolve("-3.5"), RawCell::Number(-3.5));
        assert_eq!(RawCell::resolve("1.2e3"), RawCell::Number(1200.0));
        assert_eq!(RawCell::resolve("  7 "), RawCell::Number(7.0));
    }

    #[test]
    fn test_resolve_non_finite_stays_text() {
        assert_eq!(RawCell::resolve("inf"), RawCell::Text("inf".into()));
        assert_eq!(RawCell::resolve("NaN"), RawCell::Text("NaN".into()));
    }

    #[test]
    fn test_resolve_null_tokens() {
        for token in ["", "  ", "NA", "n/a", "NULL", "none", ".", "-"] {
            assert!(RawCell::resolve(token).is_missing(), "token: {token:?}");
        }
    }

    #[test]
    fn test_resolve_text() {
        assert_eq!(RawCell::resolve("Alice"), RawCell::Text("Alice".into()));
        assert_eq!(RawCell::resolve("12b"), RawCell::Text("12b".into()));
    }
}
