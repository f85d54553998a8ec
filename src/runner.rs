//! Entry-point helper
//!
//! Runs a suite or a single scenario, renders its report and maps the
//! outcome to a process exit code:
//!
//! - `0`: every step of every scenario passed
//! - `1`: at least one failure, none of which omitted steps
//! - `2`: a required step failed somewhere and later steps were omitted

use std::io::Write;
use std::process::ExitCode;

use tracing::info;

use crate::common::config::{Config, OutputFormat, ReportConfig};
use crate::common::{logging, Result};
use crate::engine::{RunScenario, ScenarioClass, ScenarioReport, Suite, SuiteReport};
use crate::report::{FormatterOptions, ReportFormatter};

pub const EXIT_PASSED: u8 = 0;
pub const EXIT_FAILED: u8 = 1;
pub const EXIT_TERMINATED: u8 = 2;

/// Overall outcome of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Passed,
    Failed,
    Terminated,
}

impl RunOutcome {
    /// A procedural fault turns an otherwise passing scenario into a failure
    pub fn of_scenario(report: &ScenarioReport) -> Self {
        match report.class() {
            ScenarioClass::Passed if report.exception_in_procedure => Self::Failed,
            ScenarioClass::Passed => Self::Passed,
            ScenarioClass::Failed => Self::Failed,
            ScenarioClass::Terminated => Self::Terminated,
        }
    }

    pub fn of_suite(report: &SuiteReport) -> Self {
        let faulted = report.scenarios().any(|s| s.exception_in_procedure);
        if report.all_passed && !faulted {
            Self::Passed
        } else if report.terminated > 0 {
            Self::Terminated
        } else {
            Self::Failed
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Passed => EXIT_PASSED,
            Self::Failed => EXIT_FAILED,
            Self::Terminated => EXIT_TERMINATED,
        }
    }

    pub fn exit_code(self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

/// Runs scenarios and writes their reports
#[derive(Debug, Clone, Default)]
pub struct Runner {
    formatter: ReportFormatter,
    format: OutputFormat,
}

impl Runner {
    pub fn new(options: FormatterOptions, format: OutputFormat) -> Self {
        Self {
            formatter: ReportFormatter::new(options),
            format,
        }
    }

    pub fn from_config(config: &ReportConfig) -> Self {
        Self::new(FormatterOptions::from(config), config.format)
    }

    /// Run every scenario of `suite` and write the suite report
    pub fn run_suite(&self, suite: &mut Suite, out: &mut dyn Write) -> Result<RunOutcome> {
        let report = suite.run();
        match self.format {
            OutputFormat::Text => self.formatter.generate_suite_report(&report, out)?,
            OutputFormat::Json => write_json(&report, out)?,
        }
        let outcome = RunOutcome::of_suite(&report);
        info!(?outcome, "Suite run complete");
        Ok(outcome)
    }

    /// Run one scenario and write its report
    pub fn run_scenario(
        &self,
        scenario: &mut dyn RunScenario,
        out: &mut dyn Write,
    ) -> Result<RunOutcome> {
        let report = scenario.run();
        match self.format {
            OutputFormat::Text => self.formatter.generate_scenario_report(report, out)?,
            OutputFormat::Json => write_json(report, out)?,
        }
        let outcome = RunOutcome::of_scenario(report);
        info!(scenario = scenario.name(), ?outcome, "Scenario run complete");
        Ok(outcome)
    }
}

fn write_json<T: serde::Serialize>(report: &T, out: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

/// Default `main` for a test binary
///
/// Loads the user configuration, initializes logging, runs `suite`,
/// prints the report to stdout and returns the matching exit code.
///
/// ```no_run
/// use std::process::ExitCode;
///
/// fn main() -> ExitCode {
///     acctest::runner::default_main(acctest::sample::sample_suite())
/// }
/// ```
pub fn default_main(mut suite: Suite) -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(EXIT_FAILED);
        }
    };
    logging::init_cli(&config.logging.filter);

    let runner = Runner::new(
        FormatterOptions {
            detail_terminated_scenarios: true,
            ..FormatterOptions::from(&config.report)
        },
        config.report.format,
    );

    let stdout = std::io::stdout();
    match runner.run_suite(&mut suite, &mut stdout.lock()) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(EXIT_FAILED)
        }
    }
}
