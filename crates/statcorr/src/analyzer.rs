//! Main Analyzer struct and public API.

use chrono::Utc;
use log::debug;

use crate::classify::classify;
use crate::config::AnalyzerConfig;
use crate::error::{Result, StatCorrError};
use crate::input::{
    content_hash, DelimitedReader, RawTable, SourceMetadata, TableFormat, TableReader,
};
use crate::relationships::extract;
use crate::report::{build, AnalysisReport};
use crate::stats::{correlate, describe, estimate};

/// The correlation analysis engine.
///
/// Stateless: every call recomputes from scratch, nothing is cached between
/// invocations, and input validation fails fast before the pairwise stage.
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Create an analyzer with default configuration.
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }

    /// Create an analyzer with custom configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// The configuration this analyzer runs with.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Decode a payload with the bundled reader and analyze it.
    ///
    /// Only delimited text is decoded in-process; spreadsheet containers
    /// are decoded by an external table reader whose rows go through
    /// [`analyze_rows`](Self::analyze_rows).
    pub fn analyze_bytes(
        &self,
        bytes: &[u8],
        format: TableFormat,
        file_name: Option<&str>,
    ) -> Result<AnalysisReport> {
        let raw = match format {
            TableFormat::Delimited => {
                DelimitedReader::new(self.config.limits.clone()).read(bytes)?
            }
            TableFormat::Spreadsheet => {
                return Err(StatCorrError::UnsupportedFormat(
                    "spreadsheet containers are decoded by an external table reader; \
                     pass its rows to analyze_rows"
                        .to_string(),
                ));
            }
        };

        let source = SourceMetadata {
            file: file_name.map(String::from),
            format: format.label().to_string(),
            size_bytes: Some(bytes.len()),
            hash: Some(content_hash(bytes)),
            decoded_rows: raw.row_count(),
            decoded_columns: raw.column_count(),
            analyzed_at: Utc::now(),
        };

        self.run(&raw, source)
    }

    /// Analyze rows already decoded by a table-reader collaborator.
    pub fn analyze_rows(&self, raw: &RawTable, file_name: Option<&str>) -> Result<AnalysisReport> {
        let source = SourceMetadata {
            file: file_name.map(String::from),
            format: "rows".to_string(),
            size_bytes: None,
            hash: None,
            decoded_rows: raw.row_count(),
            decoded_columns: raw.column_count(),
            analyzed_at: Utc::now(),
        };

        self.run(raw, source)
    }

    fn run(&self, raw: &RawTable, source: SourceMetadata) -> Result<AnalysisReport> {
        let classified = classify(raw, &self.config.limits, self.config.missing)?;
        debug!(
            "pairwise stage over {} columns x {} rows",
            classified.table.column_count(),
            classified.table.row_count()
        );

        let summaries = describe(&classified.table);
        let correlation = correlate(&classified.table);
        let significance = estimate(&correlation, self.config.precision);
        let records = extract(
            classified.table.column_names(),
            &significance.pairs,
            self.config.magnitude_threshold,
            self.config.significance_level,
        );

        Ok(build(
            source,
            &classified,
            &correlation.matrix,
            &significance.matrix,
            records,
            &summaries,
            self.config.precision,
        ))
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}
