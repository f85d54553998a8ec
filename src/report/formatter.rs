//! Text rendering of scenario and suite reports

use std::io::Write;

use colored::{Color, Colorize};

use crate::common::config::ReportConfig;
use crate::common::Result;
use crate::engine::{ScenarioReport, StepReport, SuiteReport};

const RULE: &str = "**********************************************************";

/// Which parts of a report are rendered in detail
///
/// The default details only failed scenarios and their failed steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterOptions {
    pub detail_failed_scenarios: bool,
    pub detail_passed_scenarios: bool,
    pub detail_terminated_scenarios: bool,
    pub detail_failed_steps: bool,
    pub detail_passed_steps: bool,
    pub detail_omitted_steps: bool,
    /// Emit ANSI colors for banners and section titles
    pub color: bool,
}

impl Default for FormatterOptions {
    fn default() -> Self {
        Self {
            detail_failed_scenarios: true,
            detail_passed_scenarios: false,
            detail_terminated_scenarios: false,
            detail_failed_steps: true,
            detail_passed_steps: false,
            detail_omitted_steps: false,
            color: false,
        }
    }
}

impl From<&ReportConfig> for FormatterOptions {
    fn from(config: &ReportConfig) -> Self {
        Self {
            detail_failed_scenarios: config.detail_failed_scenarios,
            detail_passed_scenarios: config.detail_passed_scenarios,
            detail_terminated_scenarios: config.detail_terminated_scenarios,
            detail_failed_steps: config.detail_failed_steps,
            detail_passed_steps: config.detail_passed_steps,
            detail_omitted_steps: config.detail_omitted_steps,
            color: config.color,
        }
    }
}

/// Renders reports as text; never modifies them
#[derive(Debug, Clone, Default)]
pub struct ReportFormatter {
    options: FormatterOptions,
}

impl ReportFormatter {
    pub fn new(options: FormatterOptions) -> Self {
        Self { options }
    }

    /// Write a suite report, including the scenarios selected for detail
    pub fn generate_suite_report(&self, rep: &SuiteReport, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Total number of tests: {}", rep.total_scenarios)?;
        if rep.all_passed {
            writeln!(out, "{}", self.paint("*** ALL TESTS PASSED ***", Color::Green))?;
            if !self.options.detail_passed_scenarios {
                return Ok(());
            }
        } else {
            writeln!(out, "{}", self.paint("*** ONE OR MORE TESTS FAILED ***", Color::Red))?;
        }

        writeln!(out, "Number of failed tests: {}", rep.failed)?;
        writeln!(out, "Number of passed tests: {}", rep.passed)?;
        if rep.terminated > 0 {
            writeln!(out, "Number of terminated tests: {}", rep.terminated)?;
        }

        if self.options.detail_failed_scenarios {
            self.detail_scenarios(out, &rep.failed_scenarios, "FAILED TESTS")?;
        }
        if self.options.detail_passed_scenarios {
            self.detail_scenarios(out, &rep.passed_scenarios, "PASSED TESTS")?;
        }
        if self.options.detail_terminated_scenarios {
            self.detail_scenarios(out, &rep.terminated_scenarios, "TERMINATED TESTS")?;
        }
        Ok(())
    }

    /// Write a scenario report, including the steps selected for detail
    pub fn generate_scenario_report(&self, rep: &ScenarioReport, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Scenario name: {}", rep.name)?;
        writeln!(out, "Description: {}", rep.description)?;
        writeln!(out, "Total number of steps: {}", rep.total_steps)?;
        if rep.all_passed {
            writeln!(out, "{}", self.paint("*** ALL STEPS PASSED ***", Color::Green))?;
            if let Some(error) = &rep.procedure_error {
                writeln!(out, "** Test procedure aborted: {error} **")?;
            }
            if !self.options.detail_passed_steps {
                return Ok(());
            }
        } else {
            writeln!(
                out,
                "{}",
                self.paint("*** ONE OR MORE TEST STEPS FAILED ***", Color::Red)
            )?;
        }

        if rep.acted != rep.total_steps {
            writeln!(out, "Number of steps taken: {}", rep.acted)?;
        }
        writeln!(out, "Number of steps successfully passed: {}", rep.passed)?;
        writeln!(out, "Number of steps failed: {}", rep.failed)?;
        if rep.omitted > 0 {
            writeln!(out, "Number of steps omitted: {}", rep.omitted)?;
        }

        if let (false, Some(error)) = (rep.all_passed, &rep.procedure_error) {
            writeln!(out, "** Test procedure aborted: {error} **")?;
        } else if rep.required_step_failure {
            writeln!(
                out,
                "** Trailing test steps were omitted because a required step failed. **"
            )?;
        }

        if self.options.detail_failed_steps {
            self.detail_steps(out, &rep.failed_steps, "FAILED STEPS")?;
        }
        if self.options.detail_passed_steps {
            self.detail_steps(out, &rep.passed_steps, "PASSED STEPS")?;
        }
        if self.options.detail_omitted_steps {
            self.detail_steps(out, &rep.omitted_steps, "OMITTED STEPS")?;
        }
        Ok(())
    }

    /// Render a suite report to a string
    pub fn render_suite(&self, rep: &SuiteReport) -> Result<String> {
        let mut buf = Vec::new();
        self.generate_suite_report(rep, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Render a scenario report to a string
    pub fn render_scenario(&self, rep: &ScenarioReport) -> Result<String> {
        let mut buf = Vec::new();
        self.generate_scenario_report(rep, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn detail_scenarios(
        &self,
        out: &mut dyn Write,
        reps: &[ScenarioReport],
        title: &str,
    ) -> Result<()> {
        if reps.is_empty() {
            return Ok(());
        }

        writeln!(out)?;
        writeln!(out, "{RULE}")?;
        writeln!(out, "{}", self.paint(&banner(title), Color::Cyan))?;
        writeln!(out)?;
        for rep in reps {
            self.generate_scenario_report(rep, out)?;
        }
        Ok(())
    }

    fn detail_steps(&self, out: &mut dyn Write, reps: &[StepReport], title: &str) -> Result<()> {
        if reps.is_empty() {
            return Ok(());
        }

        writeln!(out)?;
        writeln!(out, "{}", self.paint(&banner(title), Color::Cyan))?;
        for step in reps {
            writeln!(out, "\tName: {}", step.name)?;
            writeln!(out, "\tDescription: {}", step.description)?;
            if let Some(fault) = &step.fault {
                writeln!(out, "\t\tFault => {fault}")?;
            }
            if let Some(mismatch) = &step.throw_mismatch {
                writeln!(out, "\t\tThrow => {mismatch}")?;
            }
            for (index, message) in &step.check_outputs {
                writeln!(out, "\t\tCheck #{index} => {message}")?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.options.color {
            text.color(color).bold().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Center a title inside a rule of asterisks
fn banner(title: &str) -> String {
    let padded = format!(" {title} ");
    let width = RULE.len().max(padded.len());
    format!("{padded:*^width$}")
}
