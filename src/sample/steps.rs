//! Steps and hooks driving the calculator through its fake UI

use super::app::{Button, CalcApplication};
use super::ui::FakeCalcUi;
use crate::check_eq;
use crate::common::{Error, Result};
use crate::engine::{Checks, ScenarioHooks, Step, StepInfo};

/// State shared by the calculator steps
#[derive(Default)]
pub struct CalcContext {
    pub app: Option<CalcApplication<FakeCalcUi>>,
}

impl CalcContext {
    pub fn app(&mut self) -> Result<&mut CalcApplication<FakeCalcUi>> {
        self.app
            .as_mut()
            .ok_or_else(|| Error::Internal("calculator application not created".into()))
    }

    pub fn ui(&mut self) -> Result<&mut FakeCalcUi> {
        Ok(self.app()?.ui_mut())
    }
}

/// Creates the application before the first step and drops it after the last
pub struct CalcHooks;

impl ScenarioHooks<CalcContext> for CalcHooks {
    fn setup(&mut self, ctx: &mut CalcContext) -> Result<()> {
        ctx.app = Some(CalcApplication::new(FakeCalcUi::default()));
        Ok(())
    }

    fn teardown(&mut self, ctx: &mut CalcContext) -> Result<()> {
        ctx.app = None;
        Ok(())
    }
}

/// Start the application and check the initial UI
pub struct InitApp {
    info: StepInfo,
}

impl InitApp {
    pub fn new() -> Self {
        Self {
            info: StepInfo::new(
                "InitApp",
                "When the app is initialized title bar, status bar, and contents must be set correctly.",
            ),
        }
    }

    /// Same step, but a failure terminates the scenario
    pub fn required(mut self) -> Self {
        self.info = self.info.required();
        self
    }
}

impl Default for InitApp {
    fn default() -> Self {
        Self::new()
    }
}

impl Step<CalcContext> for InitApp {
    fn info(&self) -> &StepInfo {
        &self.info
    }

    fn act(&mut self, ctx: &mut CalcContext) -> Result<()> {
        ctx.app()?.start_up();
        Ok(())
    }

    fn verify(&mut self, ctx: &mut CalcContext, checks: &mut Checks) -> Result<()> {
        let ui = ctx.ui()?;
        check_eq!(checks, ui.title_bar, "My Calculator");
        check_eq!(checks, ui.status_bar, "Ready");
        check_eq!(checks, ui.result_contents, "0");
        Ok(())
    }
}

/// Type into the text box, press a button and check both bars
pub struct PressButton {
    info: StepInfo,
    input: String,
    button: Button,
    status: String,
    result: String,
}

impl PressButton {
    pub fn new(name: &str, input: &str, button: Button, status: &str, result: &str) -> Self {
        let verb = match button {
            Button::Add => "Add",
            Button::Subtract => "Subtract",
        };
        let description = format!(
            "When '{input}' is put in and {verb} button pressed, status bar must show {status}, and result must show {result}."
        );
        Self {
            info: StepInfo::new(name, description),
            input: input.to_string(),
            button,
            status: status.to_string(),
            result: result.to_string(),
        }
    }

    /// Same step, but a failure terminates the scenario
    pub fn required(mut self) -> Self {
        self.info = self.info.required();
        self
    }
}

impl Step<CalcContext> for PressButton {
    fn info(&self) -> &StepInfo {
        &self.info
    }

    fn act(&mut self, ctx: &mut CalcContext) -> Result<()> {
        let app = ctx.app()?;
        app.ui_mut().text_box_contents = self.input.clone();
        app.press(self.button);
        Ok(())
    }

    fn verify(&mut self, ctx: &mut CalcContext, checks: &mut Checks) -> Result<()> {
        let ui = ctx.ui()?;
        check_eq!(checks, ui.status_bar, self.status);
        check_eq!(checks, ui.result_contents, self.result);
        Ok(())
    }
}

/// Exiting the app must close the UI exactly once
pub struct ExitClosesUi {
    info: StepInfo,
}

impl ExitClosesUi {
    pub fn new() -> Self {
        Self {
            info: StepInfo::new(
                "WhenExitingAppTheUIMustBeClosed",
                "When close request is sent to the app, the close() from user interface must be called once.",
            ),
        }
    }
}

impl Default for ExitClosesUi {
    fn default() -> Self {
        Self::new()
    }
}

impl Step<CalcContext> for ExitClosesUi {
    fn info(&self) -> &StepInfo {
        &self.info
    }

    fn expect(&mut self, ctx: &mut CalcContext) -> Result<()> {
        ctx.ui()?.expect_close(1);
        Ok(())
    }

    fn act(&mut self, ctx: &mut CalcContext) -> Result<()> {
        ctx.app()?.exit()
    }

    fn verify(&mut self, ctx: &mut CalcContext, checks: &mut Checks) -> Result<()> {
        let closed = ctx.ui()?.verify_expected_close();
        checks
            .check(closed)
            .note("close() was not called the expected number of times");
        Ok(())
    }
}

/// A second exit, with no close expected, must be rejected by the UI
pub struct ExitTwiceMustFail {
    info: StepInfo,
}

impl ExitTwiceMustFail {
    pub fn new() -> Self {
        Self {
            info: StepInfo::new(
                "ExitingTwiceMustFail",
                "When the app is exited a second time, the user interface must reject the unexpected close().",
            )
            .must_throw(),
        }
    }
}

impl Default for ExitTwiceMustFail {
    fn default() -> Self {
        Self::new()
    }
}

impl Step<CalcContext> for ExitTwiceMustFail {
    fn info(&self) -> &StepInfo {
        &self.info
    }

    fn act(&mut self, ctx: &mut CalcContext) -> Result<()> {
        ctx.app()?.exit()
    }

    fn verify(&mut self, ctx: &mut CalcContext, checks: &mut Checks) -> Result<()> {
        // The rejected call must not consume an expectation
        let ui = ctx.ui()?;
        checks
            .check(ui.verify_expected_close())
            .note("close() expectations were left unmet");
        Ok(())
    }
}
