//! Step contract
//!
//! A step is one unit of test behavior. The scenario drives its hooks in a
//! fixed order: `setup`, `expect`, `act`, `verify`, `teardown`. Every hook
//! borrows the scenario context only for the duration of the call.

use std::collections::BTreeMap;
use std::fmt::{self, Display, Write as _};

use serde::Serialize;

use crate::common::Result;

/// Identity and configuration of a step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepInfo {
    name: String,
    description: String,
    required: bool,
    must_throw: bool,
}

impl StepInfo {
    /// A step that is neither required nor expected to throw
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required: false,
            must_throw: false,
        }
    }

    /// Mark the step as required: if it fails, the rest of the scenario is omitted
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark the step's action as expected to fail
    pub fn must_throw(mut self) -> Self {
        self.must_throw = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_must_throw(&self) -> bool {
        self.must_throw
    }
}

/// A single step of a scenario operating on context `C`
///
/// Only `info` is mandatory. The defaults make a step that does nothing and
/// passes with a single "All Good" check.
pub trait Step<C> {
    /// Name, description and flags of this step
    fn info(&self) -> &StepInfo;

    /// Prepare step-local preconditions
    fn setup(&mut self, _ctx: &mut C) -> Result<()> {
        Ok(())
    }

    /// Record expectations against collaborators reachable through the context
    fn expect(&mut self, _ctx: &mut C) -> Result<()> {
        Ok(())
    }

    /// Perform the action under test
    ///
    /// Returning `Err` (or panicking) means the action raised. Whether that
    /// passes or fails the step depends on [`StepInfo::is_must_throw`].
    fn act(&mut self, _ctx: &mut C) -> Result<()> {
        Ok(())
    }

    /// Inspect the context and record the verdict through `checks`
    fn verify(&mut self, _ctx: &mut C, checks: &mut Checks) -> Result<()> {
        checks.check(true).note("All Good");
        Ok(())
    }

    /// Release step-local resources
    fn teardown(&mut self, _ctx: &mut C) -> Result<()> {
        Ok(())
    }
}

/// Accumulated verdict of one `verify` call
///
/// The first check establishes the verdict and every later check is ANDed
/// into it. A step with no checks is unverified and counts as failed.
#[derive(Debug, Default, Clone)]
pub struct Checks {
    passed: bool,
    verified: bool,
    outputs: BTreeMap<usize, String>,
    counter: usize,
}

impl Checks {
    /// Record one predicate and return the sink for its diagnostic message
    pub fn check(&mut self, predicate: bool) -> Diagnostic<'_> {
        self.passed = if self.counter > 0 {
            self.passed && predicate
        } else {
            predicate
        };
        self.verified = true;

        let index = self.counter;
        self.counter += 1;
        tracing::trace!(index, predicate, "check");

        Diagnostic {
            sink: self.outputs.entry(index).or_default(),
        }
    }

    /// Whether every check so far held (false when nothing was checked)
    pub fn passed(&self) -> bool {
        self.verified && self.passed
    }

    /// Whether at least one check was recorded
    pub fn is_verified(&self) -> bool {
        self.verified
    }

    /// Number of checks recorded
    pub fn len(&self) -> usize {
        self.counter
    }

    pub fn is_empty(&self) -> bool {
        self.counter == 0
    }

    /// Diagnostic messages keyed by check index
    pub fn outputs(&self) -> &BTreeMap<usize, String> {
        &self.outputs
    }
}

/// Writable diagnostic message attached to one check
pub struct Diagnostic<'a> {
    sink: &'a mut String,
}

impl Diagnostic<'_> {
    /// Append a message to this check's diagnostic
    pub fn note(self, message: impl Display) {
        // Writing into a String cannot fail
        let _ = write!(self.sink, "{message}");
    }
}

impl fmt::Write for Diagnostic<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.sink.push_str(s);
        Ok(())
    }
}

/// Run-time state of a step for one execution
///
/// Reset by the scenario before each execution of the step.
#[derive(Debug, Default, Clone)]
pub struct StepState {
    pub(crate) acted: bool,
    pub(crate) did_throw: bool,
    pub(crate) verify_invoked: bool,
    pub(crate) action_error: Option<String>,
    pub(crate) checks: Checks,
}

impl StepState {
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    /// The action completed without raising
    pub fn has_acted(&self) -> bool {
        self.acted
    }

    /// The action raised an error or panicked
    pub fn did_throw(&self) -> bool {
        self.did_throw
    }

    /// At least one check was recorded
    pub fn is_verified(&self) -> bool {
        self.checks.is_verified()
    }

    /// Verdict of the checks alone, ignoring the throw expectation
    pub fn passed(&self) -> bool {
        self.checks.passed()
    }

    /// Message of the error the action raised, if any
    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    pub fn checks(&self) -> &Checks {
        &self.checks
    }
}

/// Check two values for equality, recording both sides on mismatch
///
/// ```
/// use acctest::{check_eq, Checks};
///
/// let mut checks = Checks::default();
/// let total = 2 + 2;
/// check_eq!(checks, total, 4);
/// assert!(checks.passed());
/// ```
#[macro_export]
macro_rules! check_eq {
    ($checks:expr, $left:expr, $right:expr $(,)?) => {{
        let left = &$left;
        let right = &$right;
        let equal = *left == *right;
        let diagnostic = $checks.check(equal);
        if !equal {
            diagnostic.note(format_args!(
                "NOT EQUAL: {} = {:?}, {} = {:?}",
                stringify!($left),
                left,
                stringify!($right),
                right
            ));
        }
    }};
}
