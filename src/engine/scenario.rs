//! Scenario execution
//!
//! A scenario owns an ordered list of steps and a report. `run` creates a
//! fresh context, runs the scenario setup, every step in insertion order and
//! the scenario teardown, then finalizes the report. It never fails and
//! never panics: faults end up in the report.
//!
//! Per step, `verify` is invoked at most once. The normal path calls it
//! right after the action; if the step aborts before that point (an
//! `expect` fault, say), the release path calls it instead, before
//! `teardown`.

use tracing::{debug, info, warn};

use super::guard;
use super::report::{ScenarioReport, StepReport};
use super::step::{Step, StepInfo, StepState};
use crate::common::{Error, Result};

/// Scenario-level setup and teardown around all steps
pub trait ScenarioHooks<C> {
    /// Prepare the context before the first step
    fn setup(&mut self, _ctx: &mut C) -> Result<()> {
        Ok(())
    }

    /// Clean up after the last step; runs whenever `setup` succeeded
    fn teardown(&mut self, _ctx: &mut C) -> Result<()> {
        Ok(())
    }
}

/// Hooks that do nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHooks;

impl<C> ScenarioHooks<C> for NoHooks {}

/// Object-safe view of a scenario, independent of its context type
pub trait RunScenario {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Run the scenario and return its report
    fn run(&mut self) -> &ScenarioReport;

    /// Report of the most recent run
    fn report(&self) -> &ScenarioReport;
}

struct StepSlot<C> {
    step: Box<dyn Step<C>>,
    state: StepState,
}

/// An ordered list of steps sharing one context of type `C`
pub struct Scenario<C> {
    name: String,
    description: String,
    steps: Vec<StepSlot<C>>,
    hooks: Box<dyn ScenarioHooks<C>>,
    report: ScenarioReport,
}

impl<C: Default + 'static> Scenario<C> {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        let description = description.into();
        let report = ScenarioReport::begin(&name, &description, 0);
        Self {
            name,
            description,
            steps: Vec::new(),
            hooks: Box::new(NoHooks),
            report,
        }
    }

    /// Replace the scenario-level setup and teardown
    pub fn with_hooks(mut self, hooks: impl ScenarioHooks<C> + 'static) -> Self {
        self.hooks = Box::new(hooks);
        self
    }

    /// Append a step; steps run in the order they were added
    pub fn add_step(&mut self, step: impl Step<C> + 'static) -> &mut Self {
        self.steps.push(StepSlot {
            step: Box::new(step),
            state: StepState::default(),
        });
        self
    }

    /// Builder form of [`Scenario::add_step`]
    pub fn step(mut self, step: impl Step<C> + 'static) -> Self {
        self.add_step(step);
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Steps with their state from the most recent run
    pub fn steps(&self) -> impl Iterator<Item = (&StepInfo, &StepState)> {
        self.steps.iter().map(|slot| (slot.step.info(), &slot.state))
    }

    /// Run every step and return the finalized report
    pub fn run(&mut self) -> &ScenarioReport {
        info!(scenario = %self.name, steps = self.steps.len(), "Running scenario");

        self.report = ScenarioReport::begin(&self.name, &self.description, self.steps.len());
        let mut context = C::default();

        if let Err(e) = guard::catch(|| self.run_procedure(&mut context)) {
            warn!(scenario = %self.name, error = %e, "Fault in test procedure");
            self.report.exception_in_procedure = true;
            self.report.procedure_error = Some(e.to_string());

            // Steps the run never reached; a faulting step was filed as failed
            let recorded = self.report.recorded();
            for slot in self.steps.iter().skip(recorded) {
                self.report.omitted_steps.push(StepReport::new(slot.step.info()));
            }
        }
        drop(context);

        self.report.finalize();
        info!(
            scenario = %self.name,
            passed = self.report.passed,
            failed = self.report.failed,
            omitted = self.report.omitted,
            "Scenario finished"
        );
        &self.report
    }

    pub fn report(&self) -> &ScenarioReport {
        &self.report
    }

    fn run_procedure(&mut self, ctx: &mut C) -> Result<()> {
        let Self {
            name,
            steps,
            hooks,
            report,
            ..
        } = self;

        let mut scope = ScenarioScope {
            name: name.as_str(),
            hooks: hooks.as_mut(),
            ctx,
        };

        guard::scoped(
            &mut scope,
            |s| {
                s.hooks
                    .setup(s.ctx)
                    .map_err(|e| Error::hook("setup", s.name, e.to_string()))
            },
            |s| run_steps(steps, s.ctx, report),
            |s| {
                s.hooks
                    .teardown(s.ctx)
                    .map_err(|e| Error::hook("teardown", s.name, e.to_string()))
            },
        )
    }
}

impl<C: Default + 'static> RunScenario for Scenario<C> {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn run(&mut self) -> &ScenarioReport {
        Scenario::run(self)
    }

    fn report(&self) -> &ScenarioReport {
        &self.report
    }
}

struct ScenarioScope<'a, C> {
    name: &'a str,
    hooks: &'a mut dyn ScenarioHooks<C>,
    ctx: &'a mut C,
}

fn run_steps<C>(steps: &mut [StepSlot<C>], ctx: &mut C, report: &mut ScenarioReport) -> Result<()> {
    let mut halted = false;
    for slot in steps.iter_mut() {
        if halted {
            debug!(step = slot.step.info().name(), "Omitting step after required failure");
            report.omitted_steps.push(StepReport::new(slot.step.info()));
            continue;
        }
        halted = execute_step(slot, ctx, report)?;
    }
    Ok(())
}

/// Execute one step; returns true when a required step failed
fn execute_step<C>(slot: &mut StepSlot<C>, ctx: &mut C, report: &mut ScenarioReport) -> Result<bool> {
    let StepSlot { step, state } = slot;
    state.reset();
    debug!(step = step.info().name(), "Executing step");

    let mut scope = StepScope {
        step: step.as_mut(),
        state,
        ctx,
    };

    let filed = report.recorded();
    let result = guard::scoped(
        &mut scope,
        |s| s.step.setup(s.ctx).map_err(|e| s.fault("setup", e)),
        |s| {
            s.step.expect(s.ctx).map_err(|e| s.fault("expect", e))?;
            s.act();
            s.verify()?;
            Ok(s.record(report))
        },
        |s| s.release(),
    );

    // A step that faulted before it was filed still ran part of its lifecycle
    if let Err(e) = &result {
        if report.recorded() == filed {
            let info = scope.step.info();
            warn!(step = info.name(), error = %e, "Step faulted");
            report
                .failed_steps
                .push(StepReport::faulted(info, &*scope.state, &e.to_string()));
        }
    }
    result
}

struct StepScope<'a, C> {
    step: &'a mut dyn Step<C>,
    state: &'a mut StepState,
    ctx: &'a mut C,
}

impl<C> StepScope<'_, C> {
    /// Run the action, turning any error or panic into the throw signal
    fn act(&mut self) {
        let step = &mut *self.step;
        let ctx = &mut *self.ctx;
        match guard::catch(|| step.act(ctx)) {
            Ok(()) => self.state.acted = true,
            Err(e) => {
                debug!(step = self.step.info().name(), error = %e, "Action raised");
                self.state.did_throw = true;
                self.state.action_error = Some(e.to_string());
            }
        }
    }

    fn verify(&mut self) -> Result<()> {
        self.state.verify_invoked = true;
        self.step
            .verify(self.ctx, &mut self.state.checks)
            .map_err(|e| Error::hook("verify", self.step.info().name(), e.to_string()))
    }

    /// Fallback verify if the normal path never reached it, then teardown
    fn release(&mut self) -> Result<()> {
        let fallback = if self.state.verify_invoked {
            Ok(())
        } else {
            guard::catch(|| self.verify())
        };
        let teardown = guard::catch(|| self.step.teardown(self.ctx))
            .map_err(|e| self.fault("teardown", e));
        fallback.and(teardown)
    }

    fn fault(&self, hook: &'static str, err: Error) -> Error {
        Error::hook(hook, self.step.info().name(), err.to_string())
    }

    /// File the step as passed or failed; returns true on a required failure
    fn record(&self, report: &mut ScenarioReport) -> bool {
        let info = self.step.info();
        let passed_throw_req = self.state.did_throw == info.is_must_throw();

        if passed_throw_req && self.state.passed() {
            debug!(step = info.name(), "Step passed");
            report.passed_steps.push(StepReport::new(info));
            false
        } else {
            warn!(
                step = info.name(),
                required = info.is_required(),
                did_throw = self.state.did_throw,
                "Step failed"
            );
            report.failed_steps.push(StepReport::failed(info, &*self.state));
            info.is_required()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::step::Checks;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Trace = Rc<RefCell<Vec<String>>>;

    #[derive(Default)]
    struct Counter {
        value: i32,
    }

    /// Configurable step that logs every hook it runs
    struct TracedStep {
        info: StepInfo,
        trace: Trace,
        act: ActBehavior,
        verdict: Option<bool>,
        fail_expect: bool,
        fail_verify: bool,
        fail_teardown: bool,
    }

    #[derive(Clone, Copy)]
    enum ActBehavior {
        Increment,
        Fail,
        Panic,
    }

    impl TracedStep {
        fn new(name: &str, trace: &Trace) -> Self {
            Self {
                info: StepInfo::new(name, format!("{name} step")),
                trace: trace.clone(),
                act: ActBehavior::Increment,
                verdict: Some(true),
                fail_expect: false,
                fail_verify: false,
                fail_teardown: false,
            }
        }

        fn configure(mut self, f: impl FnOnce(StepInfo) -> StepInfo) -> Self {
            self.info = f(self.info);
            self
        }

        fn with_act(mut self, act: ActBehavior) -> Self {
            self.act = act;
            self
        }

        fn with_verdict(mut self, verdict: Option<bool>) -> Self {
            self.verdict = verdict;
            self
        }

        fn log(&self, hook: &str) {
            self.trace
                .borrow_mut()
                .push(format!("{}:{hook}", self.info.name()));
        }
    }

    impl Step<Counter> for TracedStep {
        fn info(&self) -> &StepInfo {
            &self.info
        }

        fn setup(&mut self, _ctx: &mut Counter) -> Result<()> {
            self.log("setup");
            Ok(())
        }

        fn expect(&mut self, _ctx: &mut Counter) -> Result<()> {
            self.log("expect");
            if self.fail_expect {
                return Err(Error::Internal("stub rejected expectation".into()));
            }
            Ok(())
        }

        fn act(&mut self, ctx: &mut Counter) -> Result<()> {
            self.log("act");
            match self.act {
                ActBehavior::Increment => {
                    ctx.value += 1;
                    Ok(())
                }
                ActBehavior::Fail => Err(Error::action("refused")),
                ActBehavior::Panic => panic!("action panicked"),
            }
        }

        fn verify(&mut self, _ctx: &mut Counter, checks: &mut Checks) -> Result<()> {
            self.log("verify");
            if let Some(verdict) = self.verdict {
                checks.check(verdict).note(format!("verdict was {verdict}"));
            }
            if self.fail_verify {
                return Err(Error::Internal("inspection failed".into()));
            }
            Ok(())
        }

        fn teardown(&mut self, _ctx: &mut Counter) -> Result<()> {
            self.log("teardown");
            if self.fail_teardown {
                return Err(Error::Internal("handle leaked".into()));
            }
            Ok(())
        }
    }

    /// Scenario hooks that log and optionally fail
    struct Hooks {
        trace: Trace,
        fail_setup: bool,
        fail_teardown: bool,
    }

    impl Hooks {
        fn new(trace: &Trace) -> Self {
            Self {
                trace: trace.clone(),
                fail_setup: false,
                fail_teardown: false,
            }
        }
    }

    impl ScenarioHooks<Counter> for Hooks {
        fn setup(&mut self, _ctx: &mut Counter) -> Result<()> {
            self.trace.borrow_mut().push("scenario:setup".into());
            if self.fail_setup {
                return Err(Error::Internal("no database".into()));
            }
            Ok(())
        }

        fn teardown(&mut self, ctx: &mut Counter) -> Result<()> {
            self.trace
                .borrow_mut()
                .push(format!("scenario:teardown value={}", ctx.value));
            if self.fail_teardown {
                return Err(Error::Internal("cleanup failed".into()));
            }
            Ok(())
        }
    }

    fn trace() -> Trace {
        Rc::new(RefCell::new(Vec::new()))
    }

    fn names(steps: &[StepReport]) -> Vec<&str> {
        steps.iter().map(|s| s.name.as_str()).collect()
    }

    fn assert_count_invariants(report: &ScenarioReport) {
        assert_eq!(report.total_steps, report.passed + report.failed + report.omitted);
        assert_eq!(report.acted, report.passed + report.failed);
        assert_eq!(report.required_step_failure, !report.omitted_steps.is_empty());
    }

    #[test]
    fn test_empty_scenario() {
        let mut scenario = Scenario::<Counter>::new("empty", "nothing to do");
        let report = scenario.run();

        assert!(report.all_passed);
        assert_eq!(report.total_steps, 0);
        assert_eq!(report.acted, 0);
        assert_eq!(report.passed + report.failed + report.omitted, 0);
        assert!(!report.exception_in_procedure);
    }

    #[test]
    fn test_hook_order_for_passing_steps() {
        let t = trace();
        let mut scenario = Scenario::new("order", "hook order")
            .with_hooks(Hooks::new(&t))
            .step(TracedStep::new("a", &t))
            .step(TracedStep::new("b", &t));

        let report = scenario.run().clone();
        assert!(report.all_passed);
        assert_eq!(report.passed, 2);
        assert_count_invariants(&report);

        assert_eq!(
            *t.borrow(),
            vec![
                "scenario:setup",
                "a:setup",
                "a:expect",
                "a:act",
                "a:verify",
                "a:teardown",
                "b:setup",
                "b:expect",
                "b:act",
                "b:verify",
                "b:teardown",
                "scenario:teardown value=2",
            ]
        );
    }

    #[test]
    fn test_required_failure_omits_rest_without_touching_context() {
        let t = trace();
        let mut scenario = Scenario::new("cascade", "required failure")
            .with_hooks(Hooks::new(&t))
            .step(TracedStep::new("a", &t).configure(StepInfo::required).with_verdict(Some(false)))
            .step(TracedStep::new("b", &t))
            .step(TracedStep::new("c", &t));

        let report = scenario.run().clone();
        assert_eq!(names(&report.failed_steps), vec!["a"]);
        assert_eq!(names(&report.omitted_steps), vec!["b", "c"]);
        assert!(report.required_step_failure);
        assert!(!report.all_passed);
        assert_count_invariants(&report);

        let trace = t.borrow();
        assert!(!trace.iter().any(|line| line.starts_with("b:") || line.starts_with("c:")));
        // Only step a incremented the counter
        assert_eq!(trace.last().unwrap(), "scenario:teardown value=1");
    }

    #[test]
    fn test_non_required_failure_continues() {
        let t = trace();
        let mut scenario = Scenario::new("continue", "")
            .step(TracedStep::new("a", &t).with_verdict(Some(false)))
            .step(TracedStep::new("b", &t));

        let report = scenario.run();
        assert_eq!(report.failed, 1);
        assert_eq!(report.passed, 1);
        assert_eq!(report.omitted, 0);
        assert!(!report.required_step_failure);
        assert_eq!(report.failed_steps[0].check_outputs[&0], "verdict was false");
    }

    #[test]
    fn test_required_last_step_failure_omits_nothing() {
        let t = trace();
        let mut scenario = Scenario::new("last", "")
            .step(TracedStep::new("a", &t))
            .step(TracedStep::new("b", &t).configure(StepInfo::required).with_verdict(Some(false)));

        let report = scenario.run();
        assert_eq!(report.failed, 1);
        assert!(!report.required_step_failure);
        assert_eq!(report.class(), crate::engine::ScenarioClass::Failed);
    }

    #[test]
    fn test_must_throw_satisfied() {
        let t = trace();
        let mut scenario = Scenario::new("throw", "")
            .step(TracedStep::new("a", &t).configure(StepInfo::must_throw).with_act(ActBehavior::Fail));

        let report = scenario.run();
        assert!(report.all_passed);
        assert_eq!(report.passed, 1);
    }

    #[test]
    fn test_must_throw_without_throw_fails_despite_verdict() {
        let t = trace();
        let mut scenario =
            Scenario::new("no throw", "").step(TracedStep::new("a", &t).configure(StepInfo::must_throw));

        let report = scenario.run();
        assert_eq!(report.failed, 1);
        assert_eq!(
            report.failed_steps[0].throw_mismatch.as_deref(),
            Some("action was expected to raise an error but completed")
        );
    }

    #[test]
    fn test_unexpected_throw_fails_despite_verdict() {
        let t = trace();
        let mut scenario =
            Scenario::new("throw", "").step(TracedStep::new("a", &t).with_act(ActBehavior::Fail));

        let report = scenario.run();
        assert_eq!(report.failed, 1);
        assert!(!report.exception_in_procedure);
        assert_eq!(
            report.failed_steps[0].throw_mismatch.as_deref(),
            Some("action raised an unexpected error: Action failed: refused")
        );
        // Verify still ran, once
        assert_eq!(t.borrow().iter().filter(|l| *l == "a:verify").count(), 1);
    }

    #[test]
    fn test_panicking_action_counts_as_throw() {
        let t = trace();
        let mut scenario = Scenario::new("panic", "")
            .step(TracedStep::new("a", &t).configure(StepInfo::must_throw).with_act(ActBehavior::Panic))
            .step(TracedStep::new("b", &t).with_act(ActBehavior::Panic));

        let report = scenario.run();
        assert_eq!(names(&report.passed_steps), vec!["a"]);
        assert_eq!(names(&report.failed_steps), vec!["b"]);
        assert!(!report.exception_in_procedure);

        let states: Vec<(bool, bool)> = scenario
            .steps()
            .map(|(_, state)| (state.did_throw(), state.has_acted()))
            .collect();
        assert_eq!(states, vec![(true, false), (true, false)]);
    }

    #[test]
    fn test_step_without_checks_fails() {
        let t = trace();
        let mut scenario = Scenario::new("unverified", "").step(TracedStep::new("a", &t).with_verdict(None));

        let report = scenario.run();
        assert_eq!(report.failed, 1);
        let (_, state) = scenario.steps().next().unwrap();
        assert!(!state.is_verified());
        assert!(state.has_acted());
    }

    #[test]
    fn test_expect_fault_runs_fallback_verify_and_teardown() {
        let t = trace();
        let mut step = TracedStep::new("a", &t);
        step.fail_expect = true;
        let mut scenario = Scenario::new("expect fault", "")
            .with_hooks(Hooks::new(&t))
            .step(step)
            .step(TracedStep::new("b", &t));

        let report = scenario.run().clone();
        assert!(report.exception_in_procedure);
        assert!(!report.all_passed);
        assert_eq!(names(&report.failed_steps), vec!["a"]);
        assert_eq!(names(&report.omitted_steps), vec!["b"]);
        assert_count_invariants(&report);
        assert_eq!(
            report.failed_steps[0].fault.as_deref(),
            Some("expect of 'a' failed: Internal error: stub rejected expectation")
        );
        assert_eq!(
            report.procedure_error.as_deref(),
            Some("expect of 'a' failed: Internal error: stub rejected expectation")
        );

        assert_eq!(
            *t.borrow(),
            vec![
                "scenario:setup",
                "a:setup",
                "a:expect",
                "a:verify",
                "a:teardown",
                "scenario:teardown value=0",
            ]
        );
    }

    #[test]
    fn test_scenario_setup_fault() {
        let t = trace();
        let mut hooks = Hooks::new(&t);
        hooks.fail_setup = true;
        let mut scenario = Scenario::new("setup fault", "")
            .with_hooks(hooks)
            .step(TracedStep::new("a", &t));

        let report = scenario.run().clone();
        assert!(report.exception_in_procedure);
        assert_eq!(report.passed + report.failed, 0);
        assert_eq!(names(&report.omitted_steps), vec!["a"]);
        assert_count_invariants(&report);
        // Teardown is paired with a successful setup only
        assert_eq!(*t.borrow(), vec!["scenario:setup"]);
    }

    #[test]
    fn test_scenario_teardown_fault_keeps_step_outcomes() {
        let t = trace();
        let mut hooks = Hooks::new(&t);
        hooks.fail_teardown = true;
        let mut scenario = Scenario::new("teardown fault", "")
            .with_hooks(hooks)
            .step(TracedStep::new("a", &t));

        let report = scenario.run();
        assert!(report.exception_in_procedure);
        assert_eq!(
            report.procedure_error.as_deref(),
            Some("teardown of 'teardown fault' failed: Internal error: cleanup failed")
        );
        assert_eq!(report.passed, 1);
        assert_eq!(report.omitted, 0);
        assert!(report.all_passed);
        assert_eq!(report.class(), crate::engine::ScenarioClass::Passed);
    }

    #[test]
    fn test_lone_step_fault_is_failed_not_omitted() {
        let t = trace();
        let mut step = TracedStep::new("a", &t);
        step.fail_expect = true;
        let mut scenario = Scenario::new("lone fault", "").step(step);

        let report = scenario.run().clone();
        assert!(report.exception_in_procedure);
        assert_eq!(names(&report.failed_steps), vec!["a"]);
        assert!(report.omitted_steps.is_empty());
        assert!(!report.required_step_failure);
        assert_eq!(report.class(), crate::engine::ScenarioClass::Failed);
        assert_count_invariants(&report);
    }

    #[test]
    fn test_step_setup_fault_skips_step_teardown() {
        let t = trace();
        struct FailingSetup(TracedStep);

        impl Step<Counter> for FailingSetup {
            fn info(&self) -> &StepInfo {
                self.0.info()
            }

            fn setup(&mut self, _ctx: &mut Counter) -> Result<()> {
                self.0.log("setup");
                Err(Error::Internal("no fixture".into()))
            }

            fn teardown(&mut self, ctx: &mut Counter) -> Result<()> {
                self.0.teardown(ctx)
            }
        }

        let mut scenario = Scenario::new("setup fault", "").step(FailingSetup(TracedStep::new("a", &t)));
        let report = scenario.run().clone();

        assert_eq!(names(&report.failed_steps), vec!["a"]);
        assert_eq!(
            report.failed_steps[0].fault.as_deref(),
            Some("setup of 'a' failed: Internal error: no fixture")
        );
        assert_eq!(*t.borrow(), vec!["a:setup"]);
    }

    #[test]
    fn test_step_teardown_fault_keeps_recorded_outcome() {
        let t = trace();
        let mut step = TracedStep::new("a", &t);
        step.fail_teardown = true;
        let mut scenario = Scenario::new("step teardown", "")
            .with_hooks(Hooks::new(&t))
            .step(step)
            .step(TracedStep::new("b", &t));

        let report = scenario.run().clone();
        assert_eq!(names(&report.passed_steps), vec!["a"]);
        assert!(report.failed_steps.is_empty());
        assert_eq!(names(&report.omitted_steps), vec!["b"]);
        assert!(report.exception_in_procedure);
        assert_eq!(
            report.procedure_error.as_deref(),
            Some("teardown of 'a' failed: Internal error: handle leaked")
        );
        assert_count_invariants(&report);

        assert_eq!(
            *t.borrow(),
            vec![
                "scenario:setup",
                "a:setup",
                "a:expect",
                "a:act",
                "a:verify",
                "a:teardown",
                "scenario:teardown value=1",
            ]
        );
    }

    #[test]
    fn test_verify_error_is_not_retried() {
        let t = trace();
        let mut step = TracedStep::new("a", &t);
        step.fail_verify = true;
        let mut scenario = Scenario::new("verify fault", "").step(step);

        let report = scenario.run().clone();
        assert!(report.exception_in_procedure);
        assert_eq!(names(&report.failed_steps), vec!["a"]);
        assert_eq!(
            report.failed_steps[0].fault.as_deref(),
            Some("verify of 'a' failed: Internal error: inspection failed")
        );
        assert_eq!(
            *t.borrow(),
            vec!["a:setup", "a:expect", "a:act", "a:verify", "a:teardown"]
        );

        let (_, state) = scenario.steps().next().unwrap();
        assert!(state.has_acted());
        assert!(state.is_verified());
    }

    #[test]
    fn test_rerun_produces_identical_report() {
        let t = trace();
        let mut scenario = Scenario::new("rerun", "")
            .step(TracedStep::new("a", &t).with_verdict(Some(false)))
            .step(TracedStep::new("b", &t).configure(StepInfo::must_throw).with_act(ActBehavior::Fail));

        let first = scenario.run().clone();
        let second = scenario.run().clone();
        assert_eq!(first, second);
        assert_eq!(second.failed_steps[0].check_outputs.len(), 1);
    }
}
