//! Descriptive summary statistics.

use crate::table::NumericTable;

/// Per-column summary at full precision. Rounding happens once, at report
/// emission.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    /// Finite observations in the column.
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (divisor n-1); 0.0 when n <= 1.
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Summarize every column of the table, index-aligned with its column names.
pub fn describe(table: &NumericTable) -> Vec<ColumnSummary> {
    (0..table.column_count())
        .map(|idx| summarize(table.column(idx)))
        .collect()
}

fn summarize(values: &[f64]) -> ColumnSummary {
    let mut finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let n = finite.len();
    if n == 0 {
        return ColumnSummary {
            count: 0,
            mean: 0.0,
            std: 0.0,
            min: 0.0,
            q25: 0.0,
            median: 0.0,
            q75: 0.0,
            max: 0.0,
        };
    }

    let nf = n as f64;
    let mean = finite.iter().sum::<f64>() / nf;
    let std = if n <= 1 {
        0.0
    } else {
        let ss: f64 = finite.iter().map(|v| (v - mean) * (v - mean)).sum();
        (ss / (nf - 1.0)).sqrt()
    };

    finite.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    ColumnSummary {
        count: n,
        mean,
        std,
        min: finite[0],
        q25: nearest_rank(&finite, 0.25),
        median: nearest_rank(&finite, 0.5),
        q75: nearest_rank(&finite, 0.75),
        max: finite[n - 1],
    }
}

/// Nearest-rank percentile: `sorted[floor(n * q)]`, clamped to the last
/// index, no interpolation. Downstream fixtures depend on exactly this rule.
fn nearest_rank(sorted: &[f64], q: f64) -> f64 {
    let idx = ((sorted.len() as f64 * q).floor() as usize).min(sorted.len() - 1);
    sorted[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_column(values: Vec<f64>) -> NumericTable {
        NumericTable::new(vec!["v".into()], vec![values])
    }

    #[test]
    fn test_one_to_five() {
        let summary = &describe(&single_column(vec![1.0, 2.0, 3.0, 4.0, 5.0]))[0];
        assert_eq!(summary.count, 5);
        assert_eq!(summary.mean, 3.0);
        assert!((summary.std - 1.5811388300841898).abs() < 1e-12);
        assert_eq!(summary.min, 1.0);
        // floor(5 * 0.25) = 1 -> sorted[1]
        assert_eq!(summary.q25, 2.0);
        assert_eq!(summary.median, 3.0);
        assert_eq!(summary.q75, 4.0);
        assert_eq!(summary.max, 5.0);
    }

    #[test]
    fn test_single_observation_has_zero_std() {
        let summary = &describe(&single_column(vec![7.0]))[0];
        assert_eq!(summary.count, 1);
        assert_eq!(summary.std, 0.0);
        assert_eq!(summary.min, 7.0);
        assert_eq!(summary.median, 7.0);
        assert_eq!(summary.max, 7.0);
    }

    #[test]
    fn test_percentiles_ignore_insertion_order() {
        let summary = &describe(&single_column(vec![5.0, 1.0, 4.0, 2.0, 3.0]))[0];
        assert_eq!(summary.q25, 2.0);
        assert_eq!(summary.median, 3.0);
        assert_eq!(summary.q75, 4.0);
    }

    #[test]
    fn test_nan_cells_excluded_from_count() {
        let summary = &describe(&single_column(vec![1.0, f64::NAN, 3.0]))[0];
        assert_eq!(summary.count, 2);
        assert_eq!(summary.mean, 2.0);
        assert_eq!(summary.max, 3.0);
    }

    #[test]
    fn test_even_count_median_is_upper_of_middle_pair() {
        // floor(4 * 0.5) = 2 -> sorted[2], not an interpolated midpoint.
        let summary = &describe(&single_column(vec![1.0, 2.0, 3.0, 4.0]))[0];
        assert_eq!(summary.median, 3.0);
    }
}
