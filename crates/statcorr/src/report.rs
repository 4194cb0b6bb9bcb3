//! Outbound result object.
//!
//! All rounding happens here, exactly once: 4 decimals for correlation
//! coefficients, 6 for p-values, 2 for summary statistics. Internal
//! computation stays full-precision, and strength/direction labels were
//! already derived upstream from the unrounded values.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::classify::Classified;
use crate::config::PrecisionMode;
use crate::input::SourceMetadata;
use crate::relationships::StrongCorrelation;
use crate::stats::{ColumnSummary, CorrelationMatrix, PValueMatrix};

/// Kind label a column received during classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Numeric,
    Text,
}

/// Per-column summary statistics as emitted (2 decimals).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStats {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    #[serde(rename = "25%")]
    pub q25: f64,
    #[serde(rename = "50%")]
    pub median: f64,
    #[serde(rename = "75%")]
    pub q75: f64,
    pub max: f64,
}

/// Complete result of one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Metadata about the analyzed payload.
    pub source: SourceMetadata,
    /// Rows surviving cleanup and truncation.
    pub total_rows: usize,
    /// Columns in the raw input.
    pub total_columns: usize,
    /// Columns in the numeric table, original order.
    pub numeric_columns: Vec<String>,
    /// Every other original column.
    pub non_numeric_columns: Vec<String>,
    /// Kind each original column classified as.
    pub column_types: IndexMap<String, ColumnKind>,
    /// Correlation matrix, column -> column -> coefficient | null.
    pub pearson_correlation: IndexMap<String, IndexMap<String, Option<f64>>>,
    /// P-value matrix, same shape.
    pub p_values: IndexMap<String, IndexMap<String, Option<f64>>>,
    /// Which strategy produced the p-values.
    pub p_value_mode: PrecisionMode,
    /// Qualifying pairs, ranked by descending |coefficient|.
    pub strong_correlations: Vec<StrongCorrelation>,
    /// Per-column descriptive statistics.
    pub summary_stats: IndexMap<String, SummaryStats>,
}

/// Round to `decimals` places, half away from zero.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub(crate) fn build(
    source: SourceMetadata,
    classified: &Classified,
    correlation: &CorrelationMatrix,
    p_values: &PValueMatrix,
    records: Vec<StrongCorrelation>,
    summaries: &[ColumnSummary],
    mode: PrecisionMode,
) -> AnalysisReport {
    let numeric_columns = classified.table.column_names().to_vec();

    let column_types = numeric_columns
        .iter()
        .map(|n| (n.clone(), ColumnKind::Numeric))
        .chain(
            classified
                .non_numeric_columns
                .iter()
                .map(|n| (n.clone(), ColumnKind::Text)),
        )
        .collect();

    let strong_correlations = records
        .into_iter()
        .map(|mut r| {
            r.correlation = round_to(r.correlation, 4);
            r.p_value = round_to(r.p_value, 6);
            r
        })
        .collect();

    let summary_stats = numeric_columns
        .iter()
        .zip(summaries.iter())
        .map(|(name, s)| {
            (
                name.clone(),
                SummaryStats {
                    count: s.count,
                    mean: round_to(s.mean, 2),
                    std: round_to(s.std, 2),
                    min: round_to(s.min, 2),
                    q25: round_to(s.q25, 2),
                    median: round_to(s.median, 2),
                    q75: round_to(s.q75, 2),
                    max: round_to(s.max, 2),
                },
            )
        })
        .collect();

    AnalysisReport {
        source,
        total_rows: classified.total_rows,
        total_columns: classified.total_columns,
        pearson_correlation: matrix_to_map(&numeric_columns, |i, j| correlation.get(i, j), 4),
        p_values: matrix_to_map(&numeric_columns, |i, j| p_values.get(i, j), 6),
        numeric_columns,
        non_numeric_columns: classified.non_numeric_columns.clone(),
        column_types,
        p_value_mode: mode,
        strong_correlations,
        summary_stats,
    }
}

fn matrix_to_map(
    names: &[String],
    cell: impl Fn(usize, usize) -> Option<f64>,
    decimals: i32,
) -> IndexMap<String, IndexMap<String, Option<f64>>> {
    names
        .iter()
        .enumerate()
        .map(|(i, row_name)| {
            let row = names
                .iter()
                .enumerate()
                .map(|(j, col_name)| (col_name.clone(), cell(i, j).map(|v| round_to(v, decimals))))
                .collect();
            (row_name.clone(), row)
        })
        .collect()
}
