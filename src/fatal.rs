//! The panics raised when a value is asserted to hold the variant it doesn't
//! hold.
//!
//! Library assertions always carry a [String] message. The one exception is
//! [crate::Outcome::unwrap], which re-raises the caller's own
//! [FailureReason] as the payload, see [FailureReason::from_panic].

use std::any::Any;
use std::fmt::Debug;

use crate::reason::FailureReason;

/// Message of the panic raised by unwrapping an absent optional value, in
/// both the [crate::Optional] and the [crate::nullable] interface
pub const UNWRAP_ABSENT: &str = "called `unwrap` on an absent value";

/// The message of a panic raised by one of the assertions in this crate, or
/// any other panic with a string payload.
#[must_use]
pub fn panic_message(payload: &(dyn Any + Send)) -> Option<&str> {
  payload
    .downcast_ref::<String>()
    .map(String::as_str)
    .or_else(|| payload.downcast_ref::<&'static str>().copied())
}

/// A precondition about the variant was violated
#[cold]
#[track_caller]
pub(crate) fn assertion_failed(message: &str) -> ! { panic!("{message}") }

/// Asked for a failure reason but found a success value
#[cold]
#[track_caller]
pub(crate) fn unexpected_success(value: &impl Debug) -> ! {
  panic!("{value:?}")
}

/// Make a stored failure fatal using the failure itself as the payload
#[cold]
#[track_caller]
pub(crate) fn reraise(reason: FailureReason) -> ! {
  std::panic::panic_any(reason)
}

/// Run the callback and capture any panic it raises
#[cfg(test)]
pub(crate) fn catch<T>(
  f: impl FnOnce() -> T,
) -> Result<T, Box<dyn Any + Send>> {
  std::panic::catch_unwind(std::panic::AssertUnwindSafe(f))
}
