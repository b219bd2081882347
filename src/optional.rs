//! The tagged union interface for optional values. See [crate::nullable] for
//! the same operations on the native [Option].

use std::fmt::Display;

use crate::fatal::{assertion_failed, UNWRAP_ABSENT};
use crate::outcome::Outcome;
use crate::reason::FailureReason;

/// Either a value or nothing. Every combinator consumes the optional and
/// produces a new one.
///
/// Methods come in eager and lazy pairs such as [Optional::unwrap_or] and
/// [Optional::unwrap_or_else]. Arguments of the eager variant are evaluated
/// even on the branch that discards them; callbacks of the lazy variant are
/// called at most once, and only on the branch that needs them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Optional<T> {
  /// A value is present
  Present(T),
  /// No value is present
  Absent,
}

impl<T> Optional<T> {
  /// Wrap a value
  pub fn present(value: T) -> Self { Self::Present(value) }
  /// The empty optional
  pub fn absent() -> Self { Self::Absent }

  /// Returns true if a value is present
  #[must_use]
  pub fn is_present(&self) -> bool { matches!(self, Self::Present(_)) }
  /// Returns true if no value is present
  #[must_use]
  pub fn is_absent(&self) -> bool { matches!(self, Self::Absent) }

  /// Returns the contained value.
  ///
  /// # Panics
  ///
  /// if the optional is absent, with the provided message
  #[track_caller]
  pub fn expect(self, message: &str) -> T {
    match self {
      Self::Present(t) => t,
      Self::Absent => assertion_failed(message),
    }
  }

  /// Returns the contained value. Prefer matching, [Optional::unwrap_or] or
  /// [Optional::unwrap_or_else] to handle absence explicitly.
  ///
  /// # Panics
  ///
  /// if the optional is absent, with [UNWRAP_ABSENT]
  #[track_caller]
  pub fn unwrap(self) -> T {
    match self {
      Self::Present(t) => t,
      Self::Absent => assertion_failed(UNWRAP_ABSENT),
    }
  }

  /// Returns the contained value or the provided default.
  pub fn unwrap_or(self, default: T) -> T {
    match self {
      Self::Present(t) => t,
      Self::Absent => default,
    }
  }

  /// Returns the contained value or computes one
  pub fn unwrap_or_else(self, default: impl FnOnce() -> T) -> T {
    match self {
      Self::Present(t) => t,
      Self::Absent => default(),
    }
  }

  /// Convert to an [Outcome] that fails with the provided reason if no value
  /// is present
  pub fn to_outcome_or(self, reason: impl Into<FailureReason>) -> Outcome<T> {
    match self {
      Self::Present(t) => Outcome::Success(t),
      Self::Absent => Outcome::Failure(reason.into()),
    }
  }

  /// Convert to an [Outcome] that fails with a computed reason if no value is
  /// present
  pub fn to_outcome_or_else<R: Into<FailureReason>>(
    self,
    reason: impl FnOnce() -> R,
  ) -> Outcome<T> {
    match self {
      Self::Present(t) => Outcome::Success(t),
      Self::Absent => Outcome::Failure(reason().into()),
    }
  }

  /// Absent if this is absent, otherwise the other optional
  pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
    match self {
      Self::Present(_) => other,
      Self::Absent => Optional::Absent,
    }
  }

  /// Absent if this is absent, otherwise the result of calling the callback
  /// with the value
  pub fn and_then<U>(self, f: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
    match self {
      Self::Present(t) => f(t),
      Self::Absent => Optional::Absent,
    }
  }

  /// This if a value is present, otherwise the other optional
  pub fn or(self, other: Self) -> Self {
    match self {
      Self::Present(t) => Self::Present(t),
      Self::Absent => other,
    }
  }

  /// This if a value is present, otherwise the result of the callback
  pub fn or_else(self, f: impl FnOnce() -> Self) -> Self {
    match self {
      Self::Present(t) => Self::Present(t),
      Self::Absent => f(),
    }
  }

  /// The value of whichever side holds one if exactly one does, otherwise
  /// absent. Two present values are never merged.
  pub fn xor(self, other: Self) -> Self {
    match (self, other) {
      (Self::Present(t), Self::Absent) | (Self::Absent, Self::Present(t)) =>
        Self::Present(t),
      (Self::Present(_), Self::Present(_)) | (Self::Absent, Self::Absent) =>
        Self::Absent,
    }
  }

  /// Transform the value if one is present
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Optional<U> {
    match self {
      Self::Present(t) => Optional::Present(f(t)),
      Self::Absent => Optional::Absent,
    }
  }

  /// Borrow the contained value
  pub fn as_ref(&self) -> Optional<&T> {
    match self {
      Self::Present(t) => Optional::Present(t),
      Self::Absent => Optional::Absent,
    }
  }

  /// Convert to the native representation
  pub fn into_option(self) -> Option<T> {
    match self {
      Self::Present(t) => Some(t),
      Self::Absent => None,
    }
  }
}

impl<T> Default for Optional<T> {
  fn default() -> Self { Self::Absent }
}

impl<T> From<Option<T>> for Optional<T> {
  fn from(value: Option<T>) -> Self {
    match value {
      Some(t) => Self::Present(t),
      None => Self::Absent,
    }
  }
}

impl<T> From<Optional<T>> for Option<T> {
  fn from(value: Optional<T>) -> Self { value.into_option() }
}

impl<T> IntoIterator for Optional<T> {
  type Item = T;
  type IntoIter = std::option::IntoIter<T>;
  fn into_iter(self) -> Self::IntoIter { self.into_option().into_iter() }
}

impl<T: Display> Display for Optional<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Present(t) => write!(f, "Some: {t}"),
      Self::Absent => write!(f, "None"),
    }
  }
}
