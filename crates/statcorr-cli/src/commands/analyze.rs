//! Analyze command - run the correlation pipeline on a data file.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use statcorr::{Analyzer, AnalyzerConfig, MissingPolicy, PrecisionMode, TableFormat};

#[allow(clippy::too_many_arguments)]
pub fn run(
    file: PathBuf,
    json: bool,
    output: Option<PathBuf>,
    threshold: f64,
    alpha: f64,
    approximate: bool,
    pairwise_exclude: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let file_name = file
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let format = TableFormat::from_file_name(&file_name)?;
    let bytes = fs::read(&file)?;

    let config = AnalyzerConfig {
        magnitude_threshold: threshold,
        significance_level: alpha,
        precision: if approximate {
            PrecisionMode::Approximate
        } else {
            PrecisionMode::Exact
        },
        missing: if pairwise_exclude {
            MissingPolicy::PairwiseExclude
        } else {
            MissingPolicy::FillZero
        },
        ..AnalyzerConfig::default()
    };

    let report = Analyzer::with_config(config).analyze_bytes(&bytes, format, Some(&file_name))?;

    if let Some(ref path) = output {
        fs::write(path, serde_json::to_string_pretty(&report)?)?;
        println!(
            "{} {}",
            "Saved to".green().bold(),
            path.display().to_string().white()
        );
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Analyzed".cyan().bold(),
        file.display().to_string().white()
    );
    println!(
        "{} rows, {} columns ({} numeric, {} non-numeric)",
        report.total_rows.to_string().white().bold(),
        report.total_columns,
        report.numeric_columns.len().to_string().green(),
        report.non_numeric_columns.len()
    );

    if verbose {
        println!();
        println!("{}", "Summary statistics:".yellow().bold());
        for (name, stats) in &report.summary_stats {
            println!(
                "  {:20} n={:<5} mean={:<10} std={:<10} min={:<10} max={}",
                name, stats.count, stats.mean, stats.std, stats.min, stats.max
            );
        }
    }

    println!();
    if report.strong_correlations.is_empty() {
        println!(
            "{}",
            format!("No relationships with |r| > {threshold} and p < {alpha}").dimmed()
        );
    } else {
        println!(
            "{} (|r| > {}, p < {}, p-values {}):",
            "Strong relationships".yellow().bold(),
            threshold,
            alpha,
            report.p_value_mode.label()
        );
        for record in &report.strong_correlations {
            let r = if record.correlation > 0.0 {
                format!("{:+.4}", record.correlation).green()
            } else {
                format!("{:+.4}", record.correlation).red()
            };
            println!(
                "  {:20} ~ {:20} r={} p={:<10} {} {}",
                record.column_1,
                record.column_2,
                r,
                record.p_value,
                record.strength.to_string().bold(),
                record.direction
            );
        }
    }

    Ok(())
}
