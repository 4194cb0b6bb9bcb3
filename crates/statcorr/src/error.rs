//! Error types for the statcorr library.

use thiserror::Error;

/// Main error type for statcorr operations.
///
/// Every variant except [`Internal`](StatCorrError::Internal) is a
/// user-facing input fault; the pipeline fails with one of these before the
/// pairwise stage runs.
#[derive(Debug, Error)]
pub enum StatCorrError {
    /// File type or format tag not recognized.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Payload exceeds the configured size ceiling.
    #[error("Payload too large: {size_bytes} bytes (limit: {limit_bytes})")]
    PayloadTooLarge {
        size_bytes: usize,
        limit_bytes: usize,
    },

    /// Zero bytes, or zero rows after cleanup.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Table decoding failed; carries the reader diagnostic.
    #[error("Table decode error: {message}")]
    TableDecode { message: String },

    /// No column classified as numeric.
    #[error("No numeric columns found. Available columns: {}", available.join(", "))]
    NoNumericColumns { available: Vec<String> },

    /// Unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl StatCorrError {
    /// Whether this error is a user-facing input fault (4xx-equivalent),
    /// as opposed to an internal failure (5xx-equivalent).
    pub fn is_input_fault(&self) -> bool {
        !matches!(self, StatCorrError::Internal(_))
    }
}

impl From<csv::Error> for StatCorrError {
    fn from(e: csv::Error) -> Self {
        StatCorrError::TableDecode {
            message: e.to_string(),
        }
    }
}

/// Result type alias for statcorr operations.
pub type Result<T> = std::result::Result<T, StatCorrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_faults_vs_internal() {
        assert!(StatCorrError::EmptyInput("zero bytes".into()).is_input_fault());
        assert!(
            StatCorrError::NoNumericColumns {
                available: vec!["name".into()]
            }
            .is_input_fault()
        );
        assert!(!StatCorrError::Internal("bad state".into()).is_input_fault());
    }

    #[test]
    fn test_no_numeric_columns_lists_available() {
        let err = StatCorrError::NoNumericColumns {
            available: vec!["name".into(), "city".into()],
        };
        assert_eq!(
            err.to_string(),
            "No numeric columns found. Available columns: name, city"
        );
    }
}
