//! acctest - step-based acceptance testing harness
//!
//! Runs the bundled calculator sample and prints its report. The exit code
//! is 0 when everything passed, 1 on failures and 2 when a required step
//! failure omitted later steps.

use std::path::PathBuf;
use std::process::ExitCode;

use acctest::common::config::Config;
use acctest::common::logging;
use acctest::runner::EXIT_FAILED;
use acctest::{cli, commands::Commands};
use clap::Parser;

#[derive(Parser)]
#[command(name = "acctest", about = "Step-based acceptance testing harness")]
#[command(version, long_about = None)]
struct Cli {
    /// Configuration file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(EXIT_FAILED);
        }
    };

    logging::init_cli(&config.logging.filter);

    match cli::dispatch(cli.command, config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(EXIT_FAILED)
        }
    }
}
