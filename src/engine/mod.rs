//! Step and scenario execution engine
//!
//! Steps run against a shared context inside a scenario; scenarios can be
//! grouped into a suite. Every run produces a report.

mod guard;
mod report;
mod scenario;
mod step;
mod suite;

pub use report::{ScenarioClass, ScenarioReport, StepReport, SuiteReport};
pub use scenario::{NoHooks, RunScenario, Scenario, ScenarioHooks};
pub use step::{Checks, Diagnostic, Step, StepInfo, StepState};
pub use suite::Suite;
