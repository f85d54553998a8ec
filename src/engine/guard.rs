//! Fault boundaries
//!
//! `catch` turns a panic into an [`Error::Panicked`] so callers see every
//! fault as a plain `Err`. `scoped` pairs an acquire hook with a release hook
//! that runs on every exit path once the acquire succeeded.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::warn;

use crate::common::{Error, Result};

/// Run `f`, converting a panic into `Error::Panicked`
pub(crate) fn catch<T>(f: impl FnOnce() -> Result<T>) -> Result<T> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(payload) => Err(Error::Panicked(panic_message(payload.as_ref()))),
    }
}

/// Extract the message from a panic payload
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Run `body` between `acquire` and `release`
///
/// `release` runs exactly once if `acquire` returned `Ok`, whether `body`
/// returned, failed or panicked. If `acquire` fails neither `body` nor
/// `release` runs. The first error wins; a release error after a body error
/// is logged and dropped.
pub(crate) fn scoped<S, T>(
    state: &mut S,
    acquire: impl FnOnce(&mut S) -> Result<()>,
    body: impl FnOnce(&mut S) -> Result<T>,
    release: impl FnOnce(&mut S) -> Result<()>,
) -> Result<T> {
    catch(|| acquire(state))?;
    let outcome = catch(|| body(state));
    let released = catch(|| release(state));

    match (outcome, released) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(e)) => Err(e),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(release_err)) => {
            warn!(error = %release_err, "release failed while unwinding from an earlier fault");
            Err(e)
        }
    }
}
