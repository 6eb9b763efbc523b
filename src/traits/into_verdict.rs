//! Explicit conversion of common carrier types into classification verdicts.
//!
//! Implemented for `Option`, `Result`, and [`Outcome`], this trait lets a
//! classifier body end with whatever carrier it naturally produced:
//!
//! ```
//! use batch_rail::{all_or_failed_with, IntoVerdict};
//!
//! let outcome = all_or_failed_with(["1", "2"], |raw| {
//!     raw.parse::<i32>().into_verdict()
//! });
//! assert!(outcome.is_success());
//! ```

use crate::outcome::Outcome;
use crate::verdict::Verdict;

/// Conversion into a per-element [`Verdict`].
///
/// All implementations are exact and lossless where the source type has a
/// counterpart shape: a present option passes, an absent one is discarded
/// with no error; a `Result` maps `Ok`/`Err` to pass/fail; an [`Outcome`]
/// maps all three variants one-to-one.
pub trait IntoVerdict<T, E> {
    /// Converts `self` into a verdict.
    fn into_verdict(self) -> Verdict<T, E>;
}

impl<T, E> IntoVerdict<T, E> for Option<T> {
    #[inline]
    fn into_verdict(self) -> Verdict<T, E> {
        Verdict::pass_if_some(self)
    }
}

impl<T, E> IntoVerdict<T, E> for Result<T, E> {
    #[inline]
    fn into_verdict(self) -> Verdict<T, E> {
        match self {
            Ok(value) => Verdict::Pass(value),
            Err(error) => Verdict::Fail(error),
        }
    }
}

impl<T, E> IntoVerdict<T, E> for Outcome<T, E> {
    #[inline]
    fn into_verdict(self) -> Verdict<T, E> {
        Verdict::from_outcome(self)
    }
}
