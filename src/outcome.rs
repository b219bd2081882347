//! The result of an operation that may fail with a caller-supplied reason

use std::fmt::{Debug, Display};

use never::Never;

use crate::fatal::{assertion_failed, reraise, unexpected_success};
use crate::optional::Optional;
use crate::reason::{FailureReason, ReasonError};

/// Either the value an operation produced or the reason it failed.
///
/// ```
/// use explicit::Outcome;
///
/// let parsed: Outcome<u8> = "12".parse::<u8>().into();
/// match parsed {
///   Outcome::Success(n) => assert_eq!(n, 12),
///   Outcome::Failure(reason) => panic!("{reason}"),
/// }
/// ```
///
/// Two failures are equal if their reasons are of the same type and have the
/// same message, see [FailureReason].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome<T> {
  /// The operation succeeded
  Success(T),
  /// The operation failed
  Failure(FailureReason),
}

impl<T> Outcome<T> {
  /// Wrap a value
  pub fn success(value: T) -> Self { Self::Success(value) }
  /// Wrap an error
  pub fn failure(reason: impl Into<FailureReason>) -> Self {
    Self::Failure(reason.into())
  }

  /// Returns true if the operation succeeded
  #[must_use]
  pub fn is_ok(&self) -> bool { matches!(self, Self::Success(_)) }
  /// Returns true if the operation failed
  #[must_use]
  pub fn is_error(&self) -> bool { matches!(self, Self::Failure(_)) }

  /// Returns the success value.
  ///
  /// # Panics
  ///
  /// if the operation failed, with the provided message. The reason is not
  /// part of the panic.
  #[track_caller]
  pub fn expect(self, message: &str) -> T {
    match self {
      Self::Success(t) => t,
      Self::Failure(_) => assertion_failed(message),
    }
  }

  /// Returns the failure reason.
  ///
  /// # Panics
  ///
  /// if the operation succeeded, with the provided message
  #[track_caller]
  pub fn expect_error(self, message: &str) -> FailureReason {
    match self {
      Self::Success(_) => assertion_failed(message),
      Self::Failure(reason) => reason,
    }
  }

  /// Returns the success value. Prefer matching, [Outcome::unwrap_or] or
  /// [Outcome::unwrap_or_else] to handle failure explicitly.
  ///
  /// # Panics
  ///
  /// if the operation failed. Unlike the other assertions, the payload of the
  /// panic is the [FailureReason] itself rather than a message, so the
  /// caller's error passes through unchanged; recover it with
  /// [FailureReason::from_panic].
  #[track_caller]
  pub fn unwrap(self) -> T {
    match self {
      Self::Success(t) => t,
      Self::Failure(reason) => reraise(reason),
    }
  }

  /// Returns the failure reason.
  ///
  /// # Panics
  ///
  /// if the operation succeeded, with the [Debug] form of the value as
  /// message
  #[track_caller]
  pub fn unwrap_error(self) -> FailureReason
  where T: Debug {
    match self {
      Self::Success(t) => unexpected_success(&t),
      Self::Failure(reason) => reason,
    }
  }

  /// Returns the success value or the provided default
  pub fn unwrap_or(self, default: T) -> T {
    match self {
      Self::Success(t) => t,
      Self::Failure(_) => default,
    }
  }

  /// Returns the success value or computes one
  pub fn unwrap_or_else(self, default: impl FnOnce() -> T) -> T {
    match self {
      Self::Success(t) => t,
      Self::Failure(_) => default(),
    }
  }

  /// The failure reason if there is one
  pub fn error_or_none(self) -> Optional<FailureReason> {
    match self {
      Self::Success(_) => Optional::Absent,
      Self::Failure(reason) => Optional::Present(reason),
    }
  }

  /// The success value if there is one
  pub fn ok(self) -> Optional<T> {
    match self {
      Self::Success(t) => Optional::Present(t),
      Self::Failure(_) => Optional::Absent,
    }
  }

  /// Transform the success value
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
    match self {
      Self::Success(t) => Outcome::Success(f(t)),
      Self::Failure(reason) => Outcome::Failure(reason),
    }
  }

  /// Borrow the success value. The reason is cloned, which only clones the
  /// handle.
  pub fn as_ref(&self) -> Outcome<&T> {
    match self {
      Self::Success(t) => Outcome::Success(t),
      Self::Failure(reason) => Outcome::Failure(reason.clone()),
    }
  }

  /// Convert to a native [Result] to propagate the reason with `?`
  pub fn into_result(self) -> Result<T, FailureReason> {
    match self {
      Self::Success(t) => Ok(t),
      Self::Failure(reason) => Err(reason),
    }
  }
}

impl Outcome<Never> {
  /// The reason of an outcome that cannot succeed
  pub fn into_reason(self) -> FailureReason {
    match self {
      Self::Success(never) => match never {},
      Self::Failure(reason) => reason,
    }
  }
}

impl<T, E: ReasonError> From<Result<T, E>> for Outcome<T> {
  fn from(value: Result<T, E>) -> Self {
    match value {
      Ok(t) => Self::Success(t),
      Err(e) => Self::Failure(e.into()),
    }
  }
}

impl<T: Display> Display for Outcome<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Success(t) => write!(f, "Ok: {t}"),
      Self::Failure(reason) => write!(f, "Error: {}", reason.message()),
    }
  }
}
