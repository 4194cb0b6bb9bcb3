//! Extraction and ranking of strong relationships.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::stats::PairSignificance;

/// Strength label for a qualifying pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strength {
    #[serde(rename = "strong")]
    Strong,
    #[serde(rename = "very strong")]
    VeryStrong,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strength::Strong => write!(f, "strong"),
            Strength::VeryStrong => write!(f, "very strong"),
        }
    }
}

/// Sign of a qualifying pair's coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Positive,
    Negative,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Positive => write!(f, "positive"),
            Direction::Negative => write!(f, "negative"),
        }
    }
}

/// A qualifying unordered pair. Read-only once created; values stay at full
/// precision until report emission, and the labels are always derived from
/// the unrounded coefficient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrongCorrelation {
    pub column_1: String,
    pub column_2: String,
    pub correlation: f64,
    pub p_value: f64,
    pub strength: Strength,
    pub direction: Direction,
}

/// Extract every pair with `|r|` above the magnitude threshold and p-value
/// below the significance level, ranked by descending `|r|`.
///
/// Candidates arrive in original pair order (i < j) and the sort is stable,
/// so ties keep that order deterministically.
pub fn extract(
    names: &[String],
    pairs: &[PairSignificance],
    magnitude_threshold: f64,
    significance_level: f64,
) -> Vec<StrongCorrelation> {
    let mut records: Vec<StrongCorrelation> = pairs
        .iter()
        .filter(|p| p.r.abs() > magnitude_threshold && p.p < significance_level)
        .map(|p| StrongCorrelation {
            column_1: names[p.a].clone(),
            column_2: names[p.b].clone(),
            correlation: p.r,
            p_value: p.p,
            strength: if p.r.abs() > 0.9 {
                Strength::VeryStrong
            } else {
                Strength::Strong
            },
            direction: if p.r > 0.0 {
                Direction::Positive
            } else {
                Direction::Negative
            },
        })
        .collect();

    records.sort_by(|a, b| {
        b.correlation
            .abs()
            .partial_cmp(&a.correlation.abs())
            .unwrap_or(Ordering::Equal)
    });
    records
}
