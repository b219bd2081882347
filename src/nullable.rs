//! The optional value operations of [crate::Optional] as free functions over
//! the native [Option], where `None` stands for absence.
//!
//! ```
//! use explicit::{nullable, Outcome};
//!
//! let name: Option<&str> = None;
//! assert_eq!(nullable::unwrap_or(name, "anonymous"), "anonymous");
//! assert_eq!(nullable::xor(Some(1), None), Some(1));
//! let found = nullable::ok_or(Some("v"), std::fmt::Error);
//! assert_eq!(found, Outcome::Success("v"));
//! ```
//!
//! Every function behaves exactly like the method of the same name on
//! [crate::Optional]. The two conversions to [Outcome] are also available as
//! methods through [NullableExt].

use crate::fatal::{assertion_failed, UNWRAP_ABSENT};
use crate::outcome::Outcome;
use crate::reason::FailureReason;

/// Returns true if the option holds a value
#[must_use]
pub fn is_present<T>(option: &Option<T>) -> bool { option.is_some() }

/// Returns true if the option is empty
#[must_use]
pub fn is_absent<T>(option: &Option<T>) -> bool { option.is_none() }

/// Returns the contained value.
///
/// # Panics
///
/// if the option is `None`, with the provided message
#[track_caller]
pub fn expect<T>(option: Option<T>, message: &str) -> T {
  match option {
    Some(t) => t,
    None => assertion_failed(message),
  }
}

/// Returns the contained value.
///
/// # Panics
///
/// if the option is `None`, with [UNWRAP_ABSENT]
#[track_caller]
pub fn unwrap<T>(option: Option<T>) -> T {
  match option {
    Some(t) => t,
    None => assertion_failed(UNWRAP_ABSENT),
  }
}

/// Returns the contained value or the provided default
pub fn unwrap_or<T>(option: Option<T>, default: T) -> T {
  match option {
    Some(t) => t,
    None => default,
  }
}

/// Returns the contained value or computes one
pub fn unwrap_or_else<T>(option: Option<T>, default: impl FnOnce() -> T) -> T {
  match option {
    Some(t) => t,
    None => default(),
  }
}

/// Map `Some` to [Outcome::Success] and `None` to a failure with the provided
/// reason
pub fn ok_or<T>(
  option: Option<T>,
  reason: impl Into<FailureReason>,
) -> Outcome<T> {
  match option {
    Some(t) => Outcome::Success(t),
    None => Outcome::Failure(reason.into()),
  }
}

/// Map `Some` to [Outcome::Success] and `None` to a failure with a computed
/// reason
pub fn ok_or_else<T, R: Into<FailureReason>>(
  option: Option<T>,
  reason: impl FnOnce() -> R,
) -> Outcome<T> {
  match option {
    Some(t) => Outcome::Success(t),
    None => Outcome::Failure(reason().into()),
  }
}

/// `None` if the option is `None`, otherwise the other option
pub fn and<T, U>(option: Option<T>, other: Option<U>) -> Option<U> {
  match option {
    Some(_) => other,
    None => None,
  }
}

/// `None` if the option is `None`, otherwise the result of calling the
/// callback with the value
pub fn and_then<T, U>(
  option: Option<T>,
  f: impl FnOnce(T) -> Option<U>,
) -> Option<U> {
  match option {
    Some(t) => f(t),
    None => None,
  }
}

/// The option if it holds a value, otherwise the other option
pub fn or<T>(option: Option<T>, other: Option<T>) -> Option<T> {
  match option {
    Some(t) => Some(t),
    None => other,
  }
}

/// The option if it holds a value, otherwise the result of the callback
pub fn or_else<T>(
  option: Option<T>,
  f: impl FnOnce() -> Option<T>,
) -> Option<T> {
  match option {
    Some(t) => Some(t),
    None => f(),
  }
}

/// `Some` if exactly one of the options is `Some`, otherwise `None`
pub fn xor<T>(option: Option<T>, other: Option<T>) -> Option<T> {
  match option {
    None => other,
    Some(t) => match other {
      None => Some(t),
      Some(_) => None,
    },
  }
}

/// Method syntax for the conversions from [Option] to [Outcome]. The rest of
/// the [crate::nullable] operations share their names with inherent methods
/// of [Option], so they are only available as free functions.
pub trait NullableExt<T> {
  /// See [ok_or]
  fn to_outcome_or(self, reason: impl Into<FailureReason>) -> Outcome<T>;
  /// See [ok_or_else]
  fn to_outcome_or_else<R: Into<FailureReason>>(
    self,
    reason: impl FnOnce() -> R,
  ) -> Outcome<T>;
}

impl<T> NullableExt<T> for Option<T> {
  fn to_outcome_or(self, reason: impl Into<FailureReason>) -> Outcome<T> {
    ok_or(self, reason)
  }
  fn to_outcome_or_else<R: Into<FailureReason>>(
    self,
    reason: impl FnOnce() -> R,
  ) -> Outcome<T> {
    ok_or_else(self, reason)
  }
}
