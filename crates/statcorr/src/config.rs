//! Analysis configuration.
//!
//! All ambient thresholds and ceilings live here and are passed explicitly
//! into each entry point; nothing in the engine reads module-level state.

use serde::{Deserialize, Serialize};

/// Size ceilings enforced before the pairwise stage runs.
#[derive(Debug, Clone)]
pub struct TableLimits {
    /// Maximum accepted payload size in bytes.
    pub max_payload_bytes: usize,
    /// Maximum rows kept after cleanup; the first rows win.
    pub max_rows: usize,
    /// Maximum numeric columns kept, in original column order.
    pub max_columns: usize,
}

impl Default for TableLimits {
    fn default() -> Self {
        Self {
            max_payload_bytes: 5 * 1024 * 1024,
            max_rows: 1000,
            max_columns: 20,
        }
    }
}

/// Strategy for p-value computation.
///
/// The two strategies are not interchangeable: `Exact` is a true two-sided
/// significance, `Approximate` is a monotonic proxy. One mode applies to the
/// whole run and the report labels which one produced its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrecisionMode {
    /// Two-sided Student-t tail probability.
    Exact,
    /// `1/(1+|t|)`, clamped to [0, 1]. Monotonic in |t| but not a
    /// calibrated probability.
    Approximate,
}

impl PrecisionMode {
    /// Label used in reports and human-readable output.
    pub fn label(&self) -> &'static str {
        match self {
            PrecisionMode::Exact => "exact",
            PrecisionMode::Approximate => "approximate",
        }
    }
}

/// Treatment of unparseable cells in a column classified numeric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPolicy {
    /// Fill with 0.0. Robust against ragged input; the default.
    FillZero,
    /// Mark missing and exclude per column pair.
    PairwiseExclude,
}

/// Configuration for a single analysis run.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Input size ceilings.
    pub limits: TableLimits,
    /// Minimum |coefficient| for a strong relationship.
    pub magnitude_threshold: f64,
    /// Maximum p-value for a strong relationship.
    pub significance_level: f64,
    /// P-value strategy.
    pub precision: PrecisionMode,
    /// Unparseable-cell treatment.
    pub missing: MissingPolicy,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            limits: TableLimits::default(),
            magnitude_threshold: 0.7,
            significance_level: 0.05,
            precision: PrecisionMode::Exact,
            missing: MissingPolicy::FillZero,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ceilings() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.limits.max_payload_bytes, 5 * 1024 * 1024);
        assert_eq!(config.limits.max_rows, 1000);
        assert_eq!(config.limits.max_columns, 20);
        assert_eq!(config.magnitude_threshold, 0.7);
        assert_eq!(config.significance_level, 0.05);
        assert_eq!(config.precision, PrecisionMode::Exact);
        assert_eq!(config.missing, MissingPolicy::FillZero);
    }

    #[test]
    fn test_precision_mode_labels() {
        assert_eq!(
            serde_json::to_string(&PrecisionMode::Exact).unwrap(),
            "\"exact\""
        );
        assert_eq!(
            serde_json::to_string(&PrecisionMode::Approximate).unwrap(),
            "\"approximate\""
        );
    }
}
