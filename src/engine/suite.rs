//! Suite aggregation
//!
//! A suite runs unrelated scenarios one after another in insertion order and
//! files each report as passed, failed or terminated.

use tracing::{info, warn};

use super::guard;
use super::report::{ScenarioReport, StepReport, SuiteReport};
use super::scenario::RunScenario;
use super::step::{StepInfo, StepState};

/// An ordered collection of independent scenarios
#[derive(Default)]
pub struct Suite {
    scenarios: Vec<Box<dyn RunScenario>>,
}

impl Suite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a scenario; scenarios run in the order they were added
    pub fn add_scenario(&mut self, scenario: impl RunScenario + 'static) -> &mut Self {
        self.scenarios.push(Box::new(scenario));
        self
    }

    /// Builder form of [`Suite::add_scenario`]
    pub fn scenario(mut self, scenario: impl RunScenario + 'static) -> Self {
        self.add_scenario(scenario);
        self
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Run every scenario and aggregate their reports
    pub fn run(&mut self) -> SuiteReport {
        info!(scenarios = self.scenarios.len(), "Running suite");
        let mut report = SuiteReport::default();

        for scenario in &mut self.scenarios {
            let scenario_report = run_isolated(scenario.as_mut());
            let class = report.push(scenario_report);
            info!(scenario = scenario.name(), ?class, "Scenario classified");
        }

        info!(
            passed = report.passed,
            failed = report.failed,
            terminated = report.terminated,
            "Suite finished"
        );
        report
    }
}

/// Run one scenario so that nothing it does can abort the suite
///
/// `Scenario::run` never panics, but other `RunScenario` implementations
/// might; such a panic is filed as a procedural fault of that scenario.
fn run_isolated(scenario: &mut dyn RunScenario) -> ScenarioReport {
    match guard::catch(|| Ok(scenario.run().clone())) {
        Ok(report) => report,
        Err(e) => {
            warn!(scenario = scenario.name(), error = %e, "Scenario escaped its own fault boundary");
            // The whole scenario is filed as a single faulted step
            let info = StepInfo::new(scenario.name(), scenario.description());
            let mut report = ScenarioReport::begin(scenario.name(), scenario.description(), 1);
            report.exception_in_procedure = true;
            report.procedure_error = Some(e.to_string());
            report
                .failed_steps
                .push(StepReport::faulted(&info, &StepState::default(), &e.to_string()));
            report.finalize();
            report
        }
    }
}
