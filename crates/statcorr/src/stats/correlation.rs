//! Pearson correlation matrix over pairwise-complete observations.

use crate::table::NumericTable;

/// Square matrix indexed by numeric column on both axes; `None` marks an
/// undefined cell (constant column or fewer than two complete observations).
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    names: Vec<String>,
    cells: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub(crate) fn new(names: Vec<String>, cells: Vec<Vec<Option<f64>>>) -> Self {
        Self { names, cells }
    }

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

/// One unordered column pair's coefficient and observation count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairCorrelation {
    /// First column index (a < b).
    pub a: usize,
    /// Second column index.
    pub b: usize,
    /// Pairwise-complete observation count.
    pub n: usize,
    /// Coefficient; `None` when undefined.
    pub r: Option<f64>,
}

/// Correlation matrix together with the per-pair statistics the
/// significance stage consumes.
#[derive(Debug, Clone)]
pub struct CorrelationAnalysis {
    pub matrix: CorrelationMatrix,
    /// Upper-triangle pairs (a < b) in original column order.
    pub pairs: Vec<PairCorrelation>,
}

/// Compute the correlation matrix for the table.
///
/// Each unordered pair is computed once and mirrored into both cells, so
/// symmetry is bit-identical by construction. The diagonal is fixed at 1.0.
pub fn correlate(table: &NumericTable) -> CorrelationAnalysis {
    let k = table.column_count();
    let mut cells = vec![vec![None; k]; k];
    for (i, row) in cells.iter_mut().enumerate() {
        row[i] = Some(1.0);
    }

    let mut pairs = Vec::with_capacity(k * k.saturating_sub(1) / 2);
    for i in 0..k {
        for j in (i + 1)..k {
            let (n, r) = pearson_pairwise(table.column(i), table.column(j));
            cells[i][j] = r;
            cells[j][i] = r;
            pairs.push(PairCorrelation { a: i, b: j, n, r });
        }
    }

    CorrelationAnalysis {
        matrix: CorrelationMatrix::new(table.column_names().to_vec(), cells),
        pairs,
    }
}

/// Pairwise-complete Pearson coefficient.
///
/// Rows where either value is non-finite are excluded from this pair only.
/// Returns the observation count and `None` when n < 2 or either column is
/// constant over the complete rows — never 0.0.
fn pearson_pairwise(x: &[f64], y: &[f64]) -> (usize, Option<f64>) {
    let obs: Vec<(f64, f64)> = x
        .iter()
        .zip(y.iter())
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .map(|(a, b)| (*a, *b))
        .collect();

    let n = obs.len();
    if n < 2 {
        return (n, None);
    }

    let nf = n as f64;
    let mean_x = obs.iter().map(|(a, _)| a).sum::<f64>() / nf;
    let mean_y = obs.iter().map(|(_, b)| b).sum::<f64>() / nf;

    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_yy = 0.0;
    for (a, b) in &obs {
        let dx = a - mean_x;
        let dy = b - mean_y;
        sum_xy += dx * dy;
        sum_xx += dx * dx;
        sum_yy += dy * dy;
    }

    let denom = nf - 1.0;
    let std_x = (sum_xx / denom).sqrt();
    let std_y = (sum_yy / denom).sqrt();
    if std_x == 0.0 || std_y == 0.0 {
        return (n, None);
    }

    let covariance = sum_xy / denom;
    // Clamp against float drift; a defined cell always lies in [-1, 1].
    (n, Some((covariance / (std_x * std_y)).clamp(-1.0, 1.0)))
}
