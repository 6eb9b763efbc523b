//! Conversion helpers between `Outcome`, `Verdict`, `Result`, and `Option`.
//!
//! Conversions between the value-algebra types are deliberately free
//! functions with explicit names, so the direction and any loss (a flagged
//! success's diagnostic does not fit in a `Result`) stay visible at call
//! sites.
//!
//! # Examples
//!
//! ```
//! use batch_rail::convert::*;
//!
//! let outcome = result_to_outcome("7".parse::<i32>());
//! assert!(outcome.is_success());
//! assert_eq!(outcome_to_option(outcome), Some(7));
//! ```

use crate::outcome::Outcome;
use crate::verdict::Verdict;

/// Converts an `Outcome` to a `Result`.
///
/// A flagged success becomes `Ok` and its diagnostic is dropped.
///
/// # Examples
///
/// ```
/// use batch_rail::convert::outcome_to_result;
/// use batch_rail::Outcome;
///
/// assert_eq!(outcome_to_result(Outcome::<_, &str>::success(1)), Ok(1));
/// assert_eq!(outcome_to_result(Outcome::<i32, _>::failure("e")), Err("e"));
/// assert_eq!(outcome_to_result(Outcome::success_with(1, "e")), Ok(1));
/// ```
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> Result<T, E> {
    outcome.into_result()
}

/// Converts a `Result` to an `Outcome`.
///
/// # Examples
///
/// ```
/// use batch_rail::convert::result_to_outcome;
///
/// let outcome = result_to_outcome(Err::<i32, _>("failed"));
/// assert!(outcome.is_failure());
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    Outcome::from_result(result)
}

/// Converts an `Outcome` to an `Option`, discarding the error on failure.
///
/// # Examples
///
/// ```
/// use batch_rail::convert::outcome_to_option;
/// use batch_rail::Outcome;
///
/// assert_eq!(outcome_to_option(Outcome::<_, &str>::success(1)), Some(1));
/// assert_eq!(outcome_to_option(Outcome::<i32, _>::failure("e")), None);
/// ```
#[inline]
pub fn outcome_to_option<T, E>(outcome: Outcome<T, E>) -> Option<T> {
    outcome.into_value()
}

/// Converts an `Option` to an `Outcome`, supplying the error for the
/// `None` case.
///
/// # Examples
///
/// ```
/// use batch_rail::convert::option_to_outcome;
///
/// let outcome = option_to_outcome(None::<i32>, "absent");
/// assert_eq!(outcome.into_error(), Some("absent"));
/// ```
#[inline]
pub fn option_to_outcome<T, E>(option: Option<T>, error_for_none: E) -> Outcome<T, E> {
    Outcome::from_option(option, error_for_none)
}

/// Converts an `Outcome` to a `Verdict`, exactly on all three variants.
///
/// # Examples
///
/// ```
/// use batch_rail::convert::outcome_to_verdict;
/// use batch_rail::{Outcome, Verdict};
///
/// let verdict = outcome_to_verdict(Outcome::<_, &str>::success_with(1, "e"));
/// assert_eq!(verdict, Verdict::Flagged(1, "e"));
/// ```
#[inline]
pub fn outcome_to_verdict<T, E>(outcome: Outcome<T, E>) -> Verdict<T, E> {
    Verdict::from_outcome(outcome)
}

/// Converts a `Verdict` back to an `Outcome`.
///
/// A discard has no error payload to carry over and becomes a failure with
/// `E::default()`; the other variants map exactly.
///
/// # Examples
///
/// ```
/// use batch_rail::convert::verdict_to_outcome;
/// use batch_rail::{Outcome, Verdict};
///
/// let outcome = verdict_to_outcome(Verdict::<i32, String>::fail("e".to_string()));
/// assert_eq!(outcome, Outcome::Failure("e".to_string()));
/// ```
#[inline]
pub fn verdict_to_outcome<T, E>(verdict: Verdict<T, E>) -> Outcome<T, E>
where
    E: Default,
{
    verdict.into_outcome()
}
