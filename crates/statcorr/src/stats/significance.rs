//! Two-sided significance estimation for correlation coefficients.

use statrs::distribution::{ContinuousCDF, StudentsT};

use super::correlation::CorrelationAnalysis;
use crate::config::PrecisionMode;

/// Square p-value matrix mirroring the correlation matrix's indexing.
///
/// The diagonal is fixed at 0.0; a cell is `None` exactly where the
/// corresponding correlation is undefined.
#[derive(Debug, Clone, PartialEq)]
pub struct PValueMatrix {
    names: Vec<String>,
    cells: Vec<Vec<Option<f64>>>,
}

impl PValueMatrix {
    /// Column names on both axes, in original order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Matrix dimension.
    pub fn size(&self) -> usize {
        self.names.len()
    }

    /// Cell value by index pair.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.cells[row][col]
    }

    /// Cell value by name pair.
    pub fn get_by_name(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.names.iter().position(|n| n == a)?;
        let j = self.names.iter().position(|n| n == b)?;
        self.cells[i][j]
    }
}

/// One unordered pair with a defined coefficient and its p-value, at full
/// precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairSignificance {
    /// First column index (a < b).
    pub a: usize,
    /// Second column index.
    pub b: usize,
    pub r: f64,
    pub p: f64,
}

/// P-value matrix plus the defined pairs, in original pair order.
#[derive(Debug, Clone)]
pub struct SignificanceAnalysis {
    pub matrix: PValueMatrix,
    pub pairs: Vec<PairSignificance>,
}

/// Estimate a p-value for every defined pair of the correlation analysis.
pub fn estimate(corr: &CorrelationAnalysis, mode: PrecisionMode) -> SignificanceAnalysis {
    let k = corr.matrix.size();
    let mut cells = vec![vec![None; k]; k];
    for (i, row) in cells.iter_mut().enumerate() {
        row[i] = Some(0.0);
    }

    let mut pairs = Vec::with_capacity(corr.pairs.len());
    for pair in &corr.pairs {
        if let Some(r) = pair.r {
            let p = p_value(r, pair.n, mode);
            cells[pair.a][pair.b] = Some(p);
            cells[pair.b][pair.a] = Some(p);
            pairs.push(PairSignificance {
                a: pair.a,
                b: pair.b,
                r,
                p,
            });
        }
    }

    SignificanceAnalysis {
        matrix: PValueMatrix {
            names: corr.matrix.names().to_vec(),
            cells,
        },
        pairs,
    }
}

/// Two-sided p-value for a coefficient over `n` paired observations.
///
/// `n < 3` carries insufficient evidence and yields 1.0; a saturated
/// coefficient (r² >= 1) yields 0.0. Otherwise
/// `t = r * sqrt((n-2) / (1-r²))` feeds either the Student-t tail
/// probability (`Exact`) or the `1/(1+|t|)` proxy (`Approximate`).
pub fn p_value(r: f64, n: usize, mode: PrecisionMode) -> f64 {
    if n < 3 {
        return 1.0;
    }
    let r2 = r * r;
    if r2 >= 1.0 {
        return 0.0;
    }

    let df = (n - 2) as f64;
    let t_abs = (r * (df / (1.0 - r2)).sqrt()).abs();

    let p = match mode {
        PrecisionMode::Exact => student_t_two_sided(t_abs, df),
        PrecisionMode::Approximate => 1.0 / (1.0 + t_abs),
    };
    p.clamp(0.0, 1.0)
}

/// Two-sided tail probability of Student-t with `df` degrees of freedom.
fn student_t_two_sided(t_abs: f64, df: f64) -> f64 {
    match StudentsT::new(0.0, 1.0, df) {
        Ok(dist) => 2.0 * dist.sf(t_abs),
        // df >= 1 always holds here; n >= 3 is checked by the caller.
        Err(_) => 1.0,
    }
}
