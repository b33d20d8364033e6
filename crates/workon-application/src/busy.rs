//! Double-submit prevention.
//!
//! The UI disables the trigger control while a request is in flight; the
//! use cases enforce the same rule here so a second submission is refused
//! instead of racing the first.

use std::sync::atomic::{AtomicBool, Ordering};
use workon_core::{Result, WorkonError};

/// Clears the in-flight flag when the request finishes, on every exit path.
#[derive(Debug)]
pub(crate) struct FlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// Marks the operation as in flight, refusing with [`WorkonError::Busy`] if
/// another one already is.
pub(crate) fn acquire<'a>(flag: &'a AtomicBool, operation: &str) -> Result<FlightGuard<'a>> {
    if flag.swap(true, Ordering::SeqCst) {
        return Err(WorkonError::busy(operation));
    }
    Ok(FlightGuard { flag })
}
