/// A macro version of [crate::Optional::unwrap_or_else] which supports flow
/// control statements such as `return` and `break` in the fallback branch.
///
/// ```
/// use explicit::{present_or, Optional};
///
/// fn first_even(items: &[i32]) -> i32 {
///   let mut found = Optional::Absent;
///   for i in items {
///     let even = present_or!(Optional::present(*i).and_then(|i| {
///       if i % 2 == 0 { Optional::Present(i) } else { Optional::Absent }
///     }); continue);
///     found = found.or(Optional::Present(even));
///   }
///   present_or!(found; return -1)
/// }
///
/// assert_eq!(first_even(&[1, 4, 6]), 4);
/// assert_eq!(first_even(&[1, 3]), -1);
/// ```
///
/// Note: this macro influences the control flow of the surrounding code
/// without an `if`, which can be misleading. It should only be used for small,
/// straightforward jumps.
#[macro_export]
macro_rules! present_or {
  ($m:expr; $fail:expr) => {{
    if let $crate::Optional::Present(res) = ($m) { res } else { $fail }
  }};
}

/// A macro version of [crate::Outcome::unwrap_or_else] which supports flow
/// control statements in the fallback branch. The reason can be bound by
/// naming it before an arrow.
///
/// ```
/// use explicit::{success_or, Outcome};
///
/// fn total(parts: &[&str]) -> Result<u32, String> {
///   let mut sum = 0;
///   for part in parts {
///     let outcome: Outcome<u32> = part.parse::<u32>().into();
///     sum += success_or!(outcome; reason => return Err(reason.message()));
///   }
///   Ok(sum)
/// }
///
/// assert_eq!(total(&["1", "2"]), Ok(3));
/// assert!(total(&["1", "x"]).is_err());
/// ```
#[macro_export]
macro_rules! success_or {
  ($m:expr; $reason:ident => $fail:expr) => {{
    match ($m) {
      $crate::Outcome::Success(res) => res,
      $crate::Outcome::Failure($reason) => $fail,
    }
  }};
  ($m:expr; $fail:expr) => {{
    if let $crate::Outcome::Success(res) = ($m) { res } else { $fail }
  }};
}
