//! Type-erased, shared handles to caller errors stored by a failed
//! [crate::Outcome]

use std::any::{Any, TypeId};
use std::error::Error;
use std::fmt::{Debug, Display};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use trait_set::trait_set;

trait_set! {
  /// Any error that can be stored as the reason of a failed
  /// [crate::Outcome]
  pub trait ReasonError = Error + Send + Sync + 'static;
}

/// Object-safe view of a [ReasonError] that remembers its concrete type
trait Reason: Send + Sync {
  fn error(&self) -> &(dyn Error + Send + Sync + 'static);
  fn as_any(&self) -> &dyn Any;
  fn kind_name(&self) -> &'static str;
}

impl<E: ReasonError> Reason for E {
  fn error(&self) -> &(dyn Error + Send + Sync + 'static) { self }
  fn as_any(&self) -> &dyn Any { self }
  fn kind_name(&self) -> &'static str { std::any::type_name::<E>() }
}

/// The reason an operation failed. This is a cheaply clonable handle to an
/// error supplied by the caller; clones share the same error object.
///
/// Two reasons are equal if the wrapped errors are of the same type and
/// produce the same message, regardless of whether they are the same object.
/// Use [FailureReason::same_object] to test identity.
#[derive(Clone)]
pub struct FailureReason(Arc<dyn Reason>);

impl FailureReason {
  /// Wrap an error
  #[must_use]
  pub fn new(err: impl ReasonError) -> Self { Self(Arc::new(err)) }

  /// The message of the wrapped error, as rendered by its [Display] impl
  #[must_use]
  pub fn message(&self) -> String { self.0.error().to_string() }

  /// The concrete type of the wrapped error
  #[must_use]
  pub fn kind(&self) -> TypeId { self.0.as_any().type_id() }

  /// Name of the concrete type of the wrapped error. Only meant for
  /// diagnostics, the format isn't stable.
  #[must_use]
  pub fn kind_name(&self) -> &'static str { self.0.kind_name() }

  /// Check whether the wrapped error is of the given type
  #[must_use]
  pub fn is<E: ReasonError>(&self) -> bool { self.0.as_any().is::<E>() }

  /// Borrow the wrapped error as its concrete type if it is of that type
  #[must_use]
  pub fn downcast_ref<E: ReasonError>(&self) -> Option<&E> {
    self.0.as_any().downcast_ref()
  }

  /// Borrow the wrapped error as a trait object
  #[must_use]
  pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
    self.0.error()
  }

  /// Whether the two handles point to the same error object. This is
  /// stricter than `==`, which only compares type and message.
  #[must_use]
  pub fn same_object(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.0, &other.0)
  }

  /// Recover the reason from the payload of a panic raised by
  /// [crate::Outcome::unwrap]. Payloads of any other panic are returned
  /// unchanged.
  pub fn from_panic(
    payload: Box<dyn Any + Send>,
  ) -> Result<Self, Box<dyn Any + Send>> {
    payload.downcast::<Self>().map(|b| *b)
  }
}

impl<E: ReasonError> From<E> for FailureReason {
  fn from(err: E) -> Self { Self::new(err) }
}

impl PartialEq for FailureReason {
  fn eq(&self, other: &Self) -> bool {
    self.kind() == other.kind() && self.message() == other.message()
  }
}

impl Eq for FailureReason {}

impl Hash for FailureReason {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.kind().hash(state);
    self.message().hash(state);
  }
}

impl Display for FailureReason {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0.error())
  }
}

impl Debug for FailureReason {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}({:?})", self.kind_name(), self.message())
  }
}
