//! StatCorr CLI - correlation analysis for tabular data files.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use statcorr::StatCorrError;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            file,
            json,
            output,
            threshold,
            alpha,
            approximate,
            pairwise_exclude,
        } => commands::analyze::run(
            file,
            json,
            output,
            threshold,
            alpha,
            approximate,
            pairwise_exclude,
            cli.verbose,
        ),

        Commands::Info => commands::info::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        // Input faults exit 2; anything else is an internal failure.
        let code = match e.downcast_ref::<StatCorrError>() {
            Some(err) if err.is_input_fault() => 2,
            _ => {
                log::error!("analysis failed: {e}");
                1
            }
        };
        std::process::exit(code);
    }
}
