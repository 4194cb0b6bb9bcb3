//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// StatCorr: pairwise correlation and significance for tabular data
#[derive(Parser)]
#[command(name = "statcorr")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a delimited data file
    Analyze {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the full JSON report instead of the summary
        #[arg(long)]
        json: bool,

        /// Write the JSON report to a file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Minimum |coefficient| for a strong relationship
        #[arg(long, default_value_t = 0.7)]
        threshold: f64,

        /// Maximum p-value for a strong relationship
        #[arg(long, default_value_t = 0.05)]
        alpha: f64,

        /// Use the 1/(1+|t|) proxy instead of the Student-t p-value
        #[arg(long)]
        approximate: bool,

        /// Exclude unparseable cells per pair instead of filling with zero
        #[arg(long)]
        pairwise_exclude: bool,
    },

    /// Print the correlation interpretation guide
    Info,
}
