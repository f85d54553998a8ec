//! Report data model
//!
//! Reports are plain snapshots. The scenario owns the report it is building;
//! callers only ever see shared references or clones.

use std::collections::BTreeMap;

use serde::Serialize;

use super::step::{StepInfo, StepState};

/// Identity of one step and, for failed steps, what went wrong
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub name: String,
    pub description: String,
    /// Check diagnostics keyed by check index (failed steps only)
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub check_outputs: BTreeMap<usize, String>,
    /// Why the throw expectation was not met (failed steps only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throw_mismatch: Option<String>,
    /// Error raised by one of the step's own hooks before it was filed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fault: Option<String>,
}

impl StepReport {
    /// Report carrying identity only, used for passed and omitted steps
    pub(crate) fn new(info: &StepInfo) -> Self {
        Self {
            name: info.name().to_string(),
            description: info.description().to_string(),
            check_outputs: BTreeMap::new(),
            throw_mismatch: None,
            fault: None,
        }
    }

    /// Report of a failed step, including its diagnostics
    pub(crate) fn failed(info: &StepInfo, state: &StepState) -> Self {
        let throw_mismatch = match (info.is_must_throw(), state.did_throw()) {
            (true, false) => Some("action was expected to raise an error but completed".to_string()),
            (false, true) => Some(format!(
                "action raised an unexpected error: {}",
                state.action_error().unwrap_or("unknown error")
            )),
            _ => None,
        };

        Self {
            check_outputs: state.checks().outputs().clone(),
            throw_mismatch,
            ..Self::new(info)
        }
    }

    /// Report of a step whose lifecycle was cut short by a hook fault
    pub(crate) fn faulted(info: &StepInfo, state: &StepState, fault: &str) -> Self {
        Self {
            fault: Some(fault.to_string()),
            ..Self::failed(info, state)
        }
    }
}

/// How a finished scenario is classified within a suite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioClass {
    Passed,
    Failed,
    /// A required step failed and later steps were omitted
    Terminated,
}

/// Outcome of one scenario run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScenarioReport {
    pub all_passed: bool,
    pub required_step_failure: bool,
    pub exception_in_procedure: bool,
    pub total_steps: usize,
    pub acted: usize,
    pub passed: usize,
    pub failed: usize,
    pub omitted: usize,
    pub name: String,
    pub description: String,
    /// Message of the procedural fault, when one occurred
    #[serde(skip_serializing_if = "Option::is_none")]
    pub procedure_error: Option<String>,
    pub passed_steps: Vec<StepReport>,
    pub failed_steps: Vec<StepReport>,
    pub omitted_steps: Vec<StepReport>,
}

impl ScenarioReport {
    /// Fresh report for a run that is about to start
    pub(crate) fn begin(name: &str, description: &str, total_steps: usize) -> Self {
        let mut report = Self {
            name: name.to_string(),
            description: description.to_string(),
            total_steps,
            ..Self::default()
        };
        report.finalize();
        report
    }

    /// Recompute counts and flags from the step lists
    pub(crate) fn finalize(&mut self) {
        self.passed = self.passed_steps.len();
        self.failed = self.failed_steps.len();
        self.omitted = self.omitted_steps.len();
        self.acted = self.passed + self.failed;
        self.required_step_failure = !self.omitted_steps.is_empty();
        self.all_passed = self.passed == self.total_steps;
    }

    /// Number of steps with a recorded outcome
    pub(crate) fn recorded(&self) -> usize {
        self.passed_steps.len() + self.failed_steps.len() + self.omitted_steps.len()
    }

    /// Suite classification of this report
    pub fn class(&self) -> ScenarioClass {
        if self.all_passed {
            ScenarioClass::Passed
        } else if self.omitted > 0 {
            ScenarioClass::Terminated
        } else {
            ScenarioClass::Failed
        }
    }
}

/// Outcome of one suite run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuiteReport {
    pub all_passed: bool,
    pub total_scenarios: usize,
    pub passed: usize,
    pub failed: usize,
    pub terminated: usize,
    pub passed_scenarios: Vec<ScenarioReport>,
    pub failed_scenarios: Vec<ScenarioReport>,
    pub terminated_scenarios: Vec<ScenarioReport>,
}

impl Default for SuiteReport {
    fn default() -> Self {
        Self {
            all_passed: true,
            total_scenarios: 0,
            passed: 0,
            failed: 0,
            terminated: 0,
            passed_scenarios: Vec::new(),
            failed_scenarios: Vec::new(),
            terminated_scenarios: Vec::new(),
        }
    }
}

impl SuiteReport {
    /// File a scenario report under exactly one classification
    pub(crate) fn push(&mut self, report: ScenarioReport) -> ScenarioClass {
        let class = report.class();
        match class {
            ScenarioClass::Passed => self.passed_scenarios.push(report),
            ScenarioClass::Failed => self.failed_scenarios.push(report),
            ScenarioClass::Terminated => self.terminated_scenarios.push(report),
        }
        self.finalize();
        class
    }

    fn finalize(&mut self) {
        self.passed = self.passed_scenarios.len();
        self.failed = self.failed_scenarios.len();
        self.terminated = self.terminated_scenarios.len();
        self.total_scenarios = self.passed + self.failed + self.terminated;
        self.all_passed = self.passed == self.total_scenarios;
    }

    /// Iterate over every scenario report regardless of classification
    pub fn scenarios(&self) -> impl Iterator<Item = &ScenarioReport> {
        self.passed_scenarios
            .iter()
            .chain(&self.failed_scenarios)
            .chain(&self.terminated_scenarios)
    }
}
