//! acctest - a lightweight acceptance testing harness
//!
//! A test is a [`Scenario`]: an ordered list of [`Step`]s sharing one
//! context. Each step runs `setup`, `expect`, `act`, `verify` and
//! `teardown`; the scenario records which steps passed, failed or were
//! omitted after a required step failed. Scenarios can be grouped into a
//! [`Suite`], and any report can be rendered with a [`ReportFormatter`].

pub mod cli;
pub mod commands;
pub mod common;
pub mod engine;
pub mod report;
pub mod runner;
pub mod sample;

pub use common::{Error, Result};
pub use engine::{
    Checks, Diagnostic, NoHooks, RunScenario, Scenario, ScenarioClass, ScenarioHooks,
    ScenarioReport, Step, StepInfo, StepReport, StepState, Suite, SuiteReport,
};
pub use report::{FormatterOptions, ReportFormatter};
pub use runner::{RunOutcome, Runner};
