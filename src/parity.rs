//! One table of properties checked against both optional interfaces,
//! [crate::Optional] and [crate::nullable]

use std::cell::Cell;
use std::fmt::Display;

use itertools::Itertools;

use crate::fatal::{catch, panic_message, UNWRAP_ABSENT};
use crate::{nullable, FailureReason, Optional, Outcome};

#[derive(Debug)]
struct Boom(&'static str);
impl Display for Boom {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}
impl std::error::Error for Boom {}

/// Adapter over one of the interfaces. Results are compared in the native
/// representation.
trait Interface {
  type Opt<T>;
  fn some<T>(t: T) -> Self::Opt<T>;
  fn none<T>() -> Self::Opt<T>;
  fn native<T>(o: Self::Opt<T>) -> Option<T>;
  fn is_present<T>(o: &Self::Opt<T>) -> bool;
  fn is_absent<T>(o: &Self::Opt<T>) -> bool;
  fn expect<T>(o: Self::Opt<T>, message: &str) -> T;
  fn unwrap<T>(o: Self::Opt<T>) -> T;
  fn unwrap_or<T>(o: Self::Opt<T>, default: T) -> T;
  fn unwrap_or_else<T>(o: Self::Opt<T>, f: impl FnOnce() -> T) -> T;
  fn to_outcome_or<T>(o: Self::Opt<T>, r: FailureReason) -> Outcome<T>;
  fn to_outcome_or_else<T>(
    o: Self::Opt<T>,
    f: impl FnOnce() -> FailureReason,
  ) -> Outcome<T>;
  fn and<T, U>(o: Self::Opt<T>, other: Self::Opt<U>) -> Self::Opt<U>;
  fn and_then<T, U>(
    o: Self::Opt<T>,
    f: impl FnOnce(T) -> Self::Opt<U>,
  ) -> Self::Opt<U>;
  fn or<T>(o: Self::Opt<T>, other: Self::Opt<T>) -> Self::Opt<T>;
  fn or_else<T>(
    o: Self::Opt<T>,
    f: impl FnOnce() -> Self::Opt<T>,
  ) -> Self::Opt<T>;
  fn xor<T>(o: Self::Opt<T>, other: Self::Opt<T>) -> Self::Opt<T>;
}

struct Tagged;
impl Interface for Tagged {
  type Opt<T> = Optional<T>;
  fn some<T>(t: T) -> Optional<T> { Optional::Present(t) }
  fn none<T>() -> Optional<T> { Optional::Absent }
  fn native<T>(o: Optional<T>) -> Option<T> { o.into_option() }
  fn is_present<T>(o: &Optional<T>) -> bool { o.is_present() }
  fn is_absent<T>(o: &Optional<T>) -> bool { o.is_absent() }
  fn expect<T>(o: Optional<T>, message: &str) -> T { o.expect(message) }
  fn unwrap<T>(o: Optional<T>) -> T { o.unwrap() }
  fn unwrap_or<T>(o: Optional<T>, default: T) -> T { o.unwrap_or(default) }
  fn unwrap_or_else<T>(o: Optional<T>, f: impl FnOnce() -> T) -> T {
    o.unwrap_or_else(f)
  }
  fn to_outcome_or<T>(o: Optional<T>, r: FailureReason) -> Outcome<T> {
    o.to_outcome_or(r)
  }
  fn to_outcome_or_else<T>(
    o: Optional<T>,
    f: impl FnOnce() -> FailureReason,
  ) -> Outcome<T> {
    o.to_outcome_or_else(f)
  }
  fn and<T, U>(o: Optional<T>, other: Optional<U>) -> Optional<U> {
    o.and(other)
  }
  fn and_then<T, U>(
    o: Optional<T>,
    f: impl FnOnce(T) -> Optional<U>,
  ) -> Optional<U> {
    o.and_then(f)
  }
  fn or<T>(o: Optional<T>, other: Optional<T>) -> Optional<T> { o.or(other) }
  fn or_else<T>(
    o: Optional<T>,
    f: impl FnOnce() -> Optional<T>,
  ) -> Optional<T> {
    o.or_else(f)
  }
  fn xor<T>(o: Optional<T>, other: Optional<T>) -> Optional<T> { o.xor(other) }
}

struct Nullable;
impl Interface for Nullable {
  type Opt<T> = Option<T>;
  fn some<T>(t: T) -> Option<T> { Some(t) }
  fn none<T>() -> Option<T> { None }
  fn native<T>(o: Option<T>) -> Option<T> { o }
  fn is_present<T>(o: &Option<T>) -> bool { nullable::is_present(o) }
  fn is_absent<T>(o: &Option<T>) -> bool { nullable::is_absent(o) }
  fn expect<T>(o: Option<T>, message: &str) -> T {
    nullable::expect(o, message)
  }
  fn unwrap<T>(o: Option<T>) -> T { nullable::unwrap(o) }
  fn unwrap_or<T>(o: Option<T>, default: T) -> T {
    nullable::unwrap_or(o, default)
  }
  fn unwrap_or_else<T>(o: Option<T>, f: impl FnOnce() -> T) -> T {
    nullable::unwrap_or_else(o, f)
  }
  fn to_outcome_or<T>(o: Option<T>, r: FailureReason) -> Outcome<T> {
    nullable::ok_or(o, r)
  }
  fn to_outcome_or_else<T>(
    o: Option<T>,
    f: impl FnOnce() -> FailureReason,
  ) -> Outcome<T> {
    nullable::ok_or_else(o, f)
  }
  fn and<T, U>(o: Option<T>, other: Option<U>) -> Option<U> {
    nullable::and(o, other)
  }
  fn and_then<T, U>(o: Option<T>, f: impl FnOnce(T) -> Option<U>) -> Option<U> {
    nullable::and_then(o, f)
  }
  fn or<T>(o: Option<T>, other: Option<T>) -> Option<T> {
    nullable::or(o, other)
  }
  fn or_else<T>(o: Option<T>, f: impl FnOnce() -> Option<T>) -> Option<T> {
    nullable::or_else(o, f)
  }
  fn xor<T>(o: Option<T>, other: Option<T>) -> Option<T> {
    nullable::xor(o, other)
  }
}

/// Counts the calls to the callbacks it hands out
#[derive(Default)]
struct Calls(Cell<usize>);
impl Calls {
  fn tick(&self) { self.0.set(self.0.get() + 1) }
  fn count(&self) -> usize { self.0.get() }
}

fn variant_checks<I: Interface>() {
  let some = I::some("Hello World");
  assert!(I::is_present(&some) && !I::is_absent(&some));
  let none = I::none::<&str>();
  assert!(I::is_absent(&none) && !I::is_present(&none));
}

fn expect<I: Interface>() {
  assert_eq!(I::expect(I::some("Message"), "Unneeded message"), "Message");
  let payload = catch(|| I::expect(I::none::<&str>(), "Error Message"))
    .unwrap_err();
  assert_eq!(panic_message(payload.as_ref()), Some("Error Message"));
}

fn unwrap<I: Interface>() {
  for v in [0, 1, -7, i64::MAX] {
    assert_eq!(I::unwrap(I::some(v)), v);
  }
  let payload = catch(|| I::unwrap(I::none::<i64>())).unwrap_err();
  assert_eq!(panic_message(payload.as_ref()), Some(UNWRAP_ABSENT));
}

fn unwrap_or<I: Interface>() {
  for (v, d) in [1, 2, 3].into_iter().cartesian_product([10, 20]) {
    assert_eq!(I::unwrap_or(I::some(v), d), v);
    assert_eq!(I::unwrap_or(I::none(), d), d);
  }
}

fn unwrap_or_else_is_lazy<I: Interface>() {
  let calls = Calls::default();
  let fallback = || {
    calls.tick();
    "Not This"
  };
  assert_eq!(I::unwrap_or_else(I::some("Message"), fallback), "Message");
  assert_eq!(calls.count(), 0, "present values never call the supplier");
  assert_eq!(I::unwrap_or_else(I::none(), fallback), "Not This");
  assert_eq!(calls.count(), 1, "absent values call it exactly once");
}

fn to_outcome<I: Interface>() {
  let r = FailureReason::new(Boom("unused"));
  assert_eq!(
    I::to_outcome_or(I::some("v"), r.clone()).unwrap_or("v2"),
    "v",
    "present values survive the round trip"
  );
  let failed = I::to_outcome_or(I::none::<&str>(), r.clone());
  assert!(failed.unwrap_error().same_object(&r));

  let calls = Calls::default();
  let reason = || {
    calls.tick();
    FailureReason::new(Boom("late"))
  };
  assert_eq!(I::to_outcome_or_else(I::some(3), reason), Outcome::Success(3));
  assert_eq!(calls.count(), 0);
  let failed = I::to_outcome_or_else(I::none::<i32>(), reason);
  assert_eq!(failed, Outcome::failure(Boom("late")));
  assert_eq!(calls.count(), 1);
}

fn and<I: Interface>() {
  assert_eq!(I::native(I::and(I::some(1), I::some("b"))), Some("b"));
  assert_eq!(I::native(I::and(I::some(1), I::none::<&str>())), None);
  assert_eq!(I::native(I::and(I::none::<i32>(), I::some("b"))), None);
  assert_eq!(I::native(I::and(I::none::<i32>(), I::none::<&str>())), None);
}

fn and_then_is_lazy<I: Interface>() {
  let calls = Calls::default();
  let half = |i: i32| {
    calls.tick();
    if i % 2 == 0 { I::some(i / 2) } else { I::none() }
  };
  assert_eq!(I::native(I::and_then(I::some(8), half)), Some(4));
  assert_eq!(I::native(I::and_then(I::some(3), half)), None);
  assert_eq!(calls.count(), 2);
  assert_eq!(I::native(I::and_then(I::none(), half)), None);
  assert_eq!(calls.count(), 2, "absent values never call the function");
}

fn or<I: Interface>() {
  assert_eq!(I::native(I::or(I::some(1), I::some(2))), Some(1));
  assert_eq!(I::native(I::or(I::some(1), I::none())), Some(1));
  assert_eq!(I::native(I::or(I::none(), I::some(2))), Some(2));
  assert_eq!(I::native(I::or(I::none::<i32>(), I::none())), None);
}

fn or_else_is_lazy<I: Interface>() {
  let calls = Calls::default();
  let other = || {
    calls.tick();
    I::some(2)
  };
  assert_eq!(I::native(I::or_else(I::some(1), other)), Some(1));
  assert_eq!(calls.count(), 0);
  assert_eq!(I::native(I::or_else(I::none(), other)), Some(2));
  assert_eq!(calls.count(), 1);
}

fn xor_truth_table<I: Interface>() {
  let cases = [
    (Some("a"), Some("b"), None),
    (Some("a"), None, Some("a")),
    (None, Some("b"), Some("b")),
    (None, None, None),
  ];
  let wrap = |o: Option<&'static str>| o.map_or_else(I::none, I::some);
  for (a, b, expected) in cases {
    assert_eq!(I::native(I::xor(wrap(a), wrap(b))), expected, "{a:?} ^ {b:?}");
  }
}

macro_rules! for_both_interfaces {
  ($($property:ident),* $(,)?) => {paste::paste!{
    $(
      #[test]
      fn [<$property _tagged>]() { $property::<Tagged>() }
      #[test]
      fn [<$property _nullable>]() { $property::<Nullable>() }
    )*
  }};
}

for_both_interfaces!(
  variant_checks,
  expect,
  unwrap,
  unwrap_or,
  unwrap_or_else_is_lazy,
  to_outcome,
  and,
  and_then_is_lazy,
  or,
  or_else_is_lazy,
  xor_truth_table,
);
