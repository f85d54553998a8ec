//! Sample calculator acceptance tests
//!
//! A small calculator application, a fake user interface standing in for
//! the real one, and scenarios exercising it. Shipped as a demo for the
//! `acctest` binary and as a worked example of writing steps.

mod app;
mod steps;
mod ui;

pub use app::{Button, CalcApplication};
pub use steps::{CalcContext, CalcHooks, ExitClosesUi, ExitTwiceMustFail, InitApp, PressButton};
pub use ui::{CalcUserInterface, FakeCalcUi};

use crate::engine::{Scenario, Suite};

/// Eleven steps of arithmetic ending with a clean exit
pub fn calculator_scenario() -> Scenario<CalcContext> {
    use Button::{Add, Subtract};

    Scenario::new(
        "CalculatorArithmetic",
        "Adds and subtracts through the UI, rejects non-numeric input, then exits.",
    )
    .with_hooks(CalcHooks)
    .step(InitApp::new())
    .step(PressButton::new("Add10ToResult", "10", Add, "Ready", "10"))
    .step(PressButton::new("Add20ToResult", "20", Add, "Ready", "30"))
    .step(PressButton::new("Subtract15MustYield15", "15", Subtract, "Ready", "15"))
    .step(PressButton::new("Subtract7MustYield8", "7", Subtract, "Ready", "8"))
    .step(PressButton::new("Add52MustYield60", "52", Add, "Ready", "60"))
    .step(PressButton::new("AddNonNumericMustGetError", "sn3wfsf", Add, "Error", "60"))
    .step(PressButton::new("Subtract23MustShow37", "23", Subtract, "Ready", "37"))
    .step(PressButton::new("SubtractNonNumericMustGetError", "3wfsf", Subtract, "Error", "37"))
    .step(PressButton::new("Add32MustShow69", "32", Add, "Ready", "69"))
    .step(ExitClosesUi::new())
}

/// Exit handling, including an action that must fail
pub fn shutdown_scenario() -> Scenario<CalcContext> {
    Scenario::new(
        "CalculatorShutdown",
        "Exiting closes the UI once; a second exit is rejected.",
    )
    .with_hooks(CalcHooks)
    .step(InitApp::new().required())
    .step(ExitClosesUi::new())
    .step(ExitTwiceMustFail::new())
}

/// A scenario with a wrong expectation in a non-required step
pub fn miscounted_scenario() -> Scenario<CalcContext> {
    Scenario::new(
        "CalculatorMiscounted",
        "Expects the wrong total after an addition; later steps still run.",
    )
    .with_hooks(CalcHooks)
    .step(InitApp::new())
    .step(PressButton::new("Add5MustShow6", "5", Button::Add, "Ready", "6"))
    .step(PressButton::new("Add1MustShow6", "1", Button::Add, "Ready", "6"))
}

/// A scenario whose required first step fails, omitting the rest
pub fn unstarted_scenario() -> Scenario<CalcContext> {
    Scenario::new(
        "CalculatorNeverStarted",
        "Presses a button before the application was started.",
    )
    .with_hooks(CalcHooks)
    .step(PressButton::new("EmptyInputMustShowZero", "", Button::Add, "Ready", "0").required())
    .step(PressButton::new("Add3MustShow3", "3", Button::Add, "Ready", "3"))
    .step(ExitClosesUi::new())
}

/// The passing sample suite
pub fn sample_suite() -> Suite {
    Suite::new()
        .scenario(calculator_scenario())
        .scenario(shutdown_scenario())
}

/// The sample suite plus scenarios that fail on purpose
pub fn broken_suite() -> Suite {
    sample_suite()
        .scenario(miscounted_scenario())
        .scenario(unstarted_scenario())
}
