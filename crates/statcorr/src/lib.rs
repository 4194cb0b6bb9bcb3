//! Statcorr: pairwise correlation and significance for tabular datasets.
//!
//! Statcorr takes an uploaded table, classifies its numeric columns, and
//! computes the Pearson correlation matrix, per-pair significance, ranked
//! strong relationships, and descriptive summary statistics — bounded for
//! fast, single-shot, stateless execution.
//!
//! # Core Principles
//!
//! - **Single-shot**: everything is recomputed per call; no caching, no
//!   shared state between invocations
//! - **Fail fast**: input faults surface before the pairwise stage runs
//! - **Undefined means null**: a constant column or an under-observed pair
//!   yields an undefined cell, never a fabricated 0.0
//!
//! # Example
//!
//! ```
//! use statcorr::{Analyzer, TableFormat};
//!
//! let data = b"x,y,label\n1,4,a\n2,3,b\n3,2,c\n4,1,d\n";
//! let report = Analyzer::new()
//!     .analyze_bytes(data, TableFormat::Delimited, Some("data.csv"))
//!     .unwrap();
//!
//! assert_eq!(report.pearson_correlation["x"]["y"], Some(-1.0));
//! assert_eq!(report.strong_correlations.len(), 1);
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod input;
pub mod relationships;
pub mod report;
pub mod stats;
pub mod table;

mod analyzer;

pub use crate::analyzer::Analyzer;
pub use classify::Classified;
pub use config::{AnalyzerConfig, MissingPolicy, PrecisionMode, TableLimits};
pub use error::{Result, StatCorrError};
pub use input::{RawCell, RawTable, SourceMetadata, TableFormat, TableReader};
pub use relationships::{Direction, Strength, StrongCorrelation};
pub use report::{AnalysisReport, ColumnKind, SummaryStats};
pub use stats::{ColumnSummary, CorrelationMatrix, PValueMatrix};
pub use table::NumericTable;
