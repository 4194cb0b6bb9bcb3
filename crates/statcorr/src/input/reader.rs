//! Table readers: payload bytes in, raw rows out.
//!
//! The engine never touches container bytes itself. A [`TableReader`] sits
//! between the payload and the pipeline; the bundled [`DelimitedReader`]
//! handles CSV/TSV-style text, while spreadsheet containers are decoded by
//! an external collaborator that hands its rows to
//! [`Analyzer::analyze_rows`](crate::Analyzer::analyze_rows).

use std::io::{BufRead, BufReader};

use sha2::{Digest, Sha256};

use super::table::{RawCell, RawTable};
use crate::config::TableLimits;
use crate::error::{Result, StatCorrError};

/// Declared container format for an inbound payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Delimited text (CSV, TSV, and friends).
    Delimited,
    /// Spreadsheet container (xlsx/xls), decoded externally.
    Spreadsheet,
}

impl TableFormat {
    /// Map a file name to a format tag by extension.
    pub fn from_file_name(name: &str) -> Result<Self> {
        let lower = name.to_lowercase();
        if [".csv", ".tsv", ".txt", ".psv"]
            .iter()
            .any(|ext| lower.ends_with(ext))
        {
            Ok(TableFormat::Delimited)
        } else if lower.ends_with(".xlsx") || lower.ends_with(".xls") {
            Ok(TableFormat::Spreadsheet)
        } else {
            Err(StatCorrError::UnsupportedFormat(format!(
                "{name}: expected .csv, .tsv, .txt, .psv, .xlsx or .xls"
            )))
        }
    }

    /// Label used in source metadata.
    pub fn label(&self) -> &'static str {
        match self {
            TableFormat::Delimited => "delimited",
            TableFormat::Spreadsheet => "spreadsheet",
        }
    }
}

/// Yields raw rows of named cells from an inbound payload.
pub trait TableReader {
    /// Decode a payload into a raw table.
    fn read(&self, bytes: &[u8]) -> Result<RawTable>;
}

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Bundled reader for delimited text.
///
/// Enforces the payload size ceiling before decoding, auto-detects the
/// delimiter, and resolves every cell into a [`RawCell`].
pub struct DelimitedReader {
    limits: TableLimits,
}

impl DelimitedReader {
    /// Create a reader with the given size ceilings.
    pub fn new(limits: TableLimits) -> Self {
        Self { limits }
    }
}

impl TableReader for DelimitedReader {
    fn read(&self, bytes: &[u8]) -> Result<RawTable> {
        if bytes.len() > self.limits.max_payload_bytes {
            return Err(StatCorrError::PayloadTooLarge {
                size_bytes: bytes.len(),
                limit_bytes: self.limits.max_payload_bytes,
            });
        }
        if bytes.is_empty() {
            return Err(StatCorrError::EmptyInput("zero bytes".to_string()));
        }

        let delimiter = detect_delimiter(bytes)?;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();
        if headers.is_empty() {
            return Err(StatCorrError::EmptyInput("no columns found".to_string()));
        }

        let expected_cols = headers.len();
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row: Vec<RawCell> = record.iter().map(RawCell::resolve).collect();

            // Pad short rows, truncate long ones, to the header width.
            while row.len() < expected_cols {
                row.push(RawCell::Missing);
            }
            row.truncate(expected_cols);

            rows.push(row);
        }

        if rows.is_empty() {
            return Err(StatCorrError::EmptyInput("no data rows found".to_string()));
        }

        Ok(RawTable::new(headers, rows))
    }
}

/// Compute the SHA-256 content hash of a payload.
pub fn content_hash(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("sha256:{:x}", hasher.finalize())
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(10)
        .filter_map(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(StatCorrError::EmptyInput("no lines to analyze".to_string()));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        // Consistent per-line counts beat raw frequency; tabs get a slight
        // bonus since they rarely appear inside actual data values.
        let consistent = counts.iter().all(|&c| c == first_count);
        let score = if consistent {
            first_count * 1000 + (if delim == b'\t' { 100 } else { 0 })
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}
