//! CLI command definitions
//!
//! Defines the clap commands for the acctest CLI.

use clap::{Args, Subcommand, ValueEnum};

use crate::common::config::{OutputFormat, ReportConfig};

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bundled calculator sample suite
    Suite {
        /// Also run scenarios that fail on purpose
        #[arg(long)]
        broken: bool,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Run a single sample scenario
    Scenario {
        /// Which sample scenario to run
        #[arg(value_enum, default_value_t = SampleScenario::Calculator)]
        name: SampleScenario,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Show the configuration file location and effective settings
    Config,
}

/// Sample scenarios selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SampleScenario {
    /// Arithmetic through the UI followed by a clean exit
    Calculator,
    /// Exit handling with an action that must fail
    Shutdown,
    /// A wrong expectation in a non-required step
    Miscounted,
    /// A required step failure that omits the rest
    Unstarted,
}

/// Report rendering flags; each one overrides the config file
#[derive(Args, Debug, Default, Clone)]
pub struct ReportArgs {
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Detail scenarios that passed
    #[arg(long)]
    pub detail_passed: bool,

    /// Detail scenarios terminated by a required step failure
    #[arg(long)]
    pub detail_terminated: bool,

    /// Detail steps that passed
    #[arg(long)]
    pub detail_passed_steps: bool,

    /// Detail steps omitted after a required step failure
    #[arg(long)]
    pub detail_omitted_steps: bool,

    /// Do not detail failed scenarios and steps
    #[arg(long)]
    pub quiet_failures: bool,
}

impl ReportArgs {
    /// Apply the flags on top of the configured report settings
    pub fn apply(&self, config: &mut ReportConfig) {
        if self.json {
            config.format = OutputFormat::Json;
        }
        if self.no_color {
            config.color = false;
        }
        config.detail_passed_scenarios |= self.detail_passed;
        config.detail_terminated_scenarios |= self.detail_terminated;
        config.detail_passed_steps |= self.detail_passed_steps;
        config.detail_omitted_steps |= self.detail_omitted_steps;
        if self.quiet_failures {
            config.detail_failed_scenarios = false;
            config.detail_failed_steps = false;
        }
    }
}
