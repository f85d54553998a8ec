//! CLI command handling
//!
//! Runs the selected sample and writes its report to stdout.

use std::process::ExitCode;

use crate::commands::{Commands, ReportArgs, SampleScenario};
use crate::common::config::Config;
use crate::common::{paths, Result};
use crate::engine::RunScenario;
use crate::runner::Runner;
use crate::sample;

/// Dispatch a CLI command
pub fn dispatch(command: Commands, config: Config) -> Result<ExitCode> {
    match command {
        Commands::Suite { broken, report } => {
            let runner = runner_for(&config, &report);
            let mut suite = if broken {
                sample::broken_suite()
            } else {
                sample::sample_suite()
            };

            let stdout = std::io::stdout();
            let outcome = runner.run_suite(&mut suite, &mut stdout.lock())?;
            Ok(outcome.exit_code())
        }

        Commands::Scenario { name, report } => {
            let runner = runner_for(&config, &report);
            let mut scenario: Box<dyn RunScenario> = match name {
                SampleScenario::Calculator => Box::new(sample::calculator_scenario()),
                SampleScenario::Shutdown => Box::new(sample::shutdown_scenario()),
                SampleScenario::Miscounted => Box::new(sample::miscounted_scenario()),
                SampleScenario::Unstarted => Box::new(sample::unstarted_scenario()),
            };

            let stdout = std::io::stdout();
            let outcome = runner.run_scenario(scenario.as_mut(), &mut stdout.lock())?;
            Ok(outcome.exit_code())
        }

        Commands::Config => {
            match paths::config_path() {
                Some(path) if path.exists() => println!("Config file: {}", path.display()),
                Some(path) => println!("Config file: {} (not found, using defaults)", path.display()),
                None => println!("Config file: unavailable on this platform"),
            }
            println!("{config:#?}");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn runner_for(config: &Config, args: &ReportArgs) -> Runner {
    let mut report = config.report.clone();
    args.apply(&mut report);
    Runner::from_config(&report)
}
