#![warn(missing_docs)]
//! Optional and fallible values as explicit data rather than null
//! references and unchecked panics.
//!
//! - [Optional] is either [Optional::Present] with a value or
//!   [Optional::Absent]. The same operations are available on the
//!   native [Option] as free functions in [nullable].
//! - [Outcome] is either [Outcome::Success] with a value or
//!   [Outcome::Failure] with a [FailureReason], a shared handle to an error
//!   supplied by the caller.
//!
//! Assertions such as `expect` panic with a message when the value holds the
//! other variant, see [fatal]. [Outcome::unwrap] is the exception: it
//! re-raises the stored reason itself.
pub mod fatal;
pub mod nullable;
mod optional;
mod outcome;
mod reason;
mod unwrap_or;

#[cfg(test)]
mod parity;

pub use nullable::NullableExt;
pub use optional::Optional;
pub use outcome::Outcome;
pub use reason::{FailureReason, ReasonError};
