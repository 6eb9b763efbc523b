use crate::outcome::Outcome;
use crate::types::alloc_type::Vec;
use crate::types::{All, Failed, FailedItem, FailureVec};
use crate::verdict::Verdict;

/// Success buffer pre-sized from the source's `size_hint`.
///
/// Countable sources (slices, `Vec`s, exact-size adapters) get an exact
/// allocation up front; lazy sources start empty and grow. Either way the
/// scan output is identical.
fn sized_for<U>((lower, upper): (usize, Option<usize>)) -> Vec<U> {
    Vec::with_capacity(upper.unwrap_or(lower))
}

/// Classifies every element of a sequence, returning either all transformed
/// values or every rejected element.
///
/// One linear pass. Each element is handed to `classify` by reference; a
/// passing element's transformed value goes into the success buffer, a
/// rejected element is recorded with its original zero-based index. The
/// index advances on every element, so recorded indices are positions in
/// the *source* sequence. The scan succeeds iff nothing was rejected; on
/// failure the partially built success buffer is discarded and never
/// surfaced.
///
/// An empty source succeeds with an empty [`All`]. Panics raised inside
/// `classify` propagate to the caller unchanged.
///
/// # Examples
///
/// ```
/// use batch_rail::{all_or_failed, Verdict};
///
/// let outcome = all_or_failed([2, 4, 6], |n| {
///     if n % 2 == 0 {
///         Verdict::pass(n / 2)
///     } else {
///         Verdict::discard()
///     }
/// });
/// assert_eq!(outcome.into_value().unwrap().as_slice(), [1, 2, 3]);
///
/// let outcome = all_or_failed([2, 3, 4, 5], |n| {
///     if n % 2 == 0 {
///         Verdict::pass(n / 2)
///     } else {
///         Verdict::discard()
///     }
/// });
/// let failed = outcome.into_error().unwrap();
/// assert_eq!(failed.indices().collect::<Vec<_>>(), [1, 3]);
/// ```
pub fn all_or_failed<I, U, F>(items: I, mut classify: F) -> Outcome<All<U>, Failed<I::Item>>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> Verdict<U>,
{
    let iter = items.into_iter();
    let mut values = sized_for(iter.size_hint());
    let mut failures = FailureVec::new();

    for (index, item) in iter.enumerate() {
        match classify(&item) {
            Verdict::Pass(value) | Verdict::Flagged(value, ()) => values.push(value),
            Verdict::Fail(()) | Verdict::Discard => {
                failures.push(FailedItem::new(index, item, None));
            }
        }
    }

    if failures.is_empty() {
        Outcome::Success(All::from_vec(values))
    } else {
        Outcome::Failure(Failed::from_vec(failures))
    }
}

/// Typed-error form of [`all_or_failed`]: classifiers attach error payloads
/// to rejections, and may flag an element as valid *and* erroneous at once.
///
/// The success condition here is not "no failure records" but "every
/// element classified as valid": a [`Verdict::Flagged`] element lands in
/// the success buffer and in the failure records simultaneously. A scan in
/// which every element passed but some were flagged returns
/// [`Outcome::Flagged`], exposing the full [`All`] alongside the diagnostic
/// [`Failed`]. A scan with any genuine rejection returns
/// [`Outcome::Failure`] with every failure record, flagged entries
/// included, and discards the transformed values.
///
/// # Examples
///
/// ```
/// use batch_rail::{all_or_failed_with, Outcome, Verdict};
///
/// let outcome = all_or_failed_with(["0", "4"], |raw| match raw.parse::<i32>() {
///     Ok(0) => Verdict::pass_with(0, "zero amount"),
///     Ok(n) => Verdict::pass(n),
///     Err(_) => Verdict::fail("unparseable"),
/// });
///
/// assert!(outcome.is_success());
/// match outcome {
///     Outcome::Flagged(all, failed) => {
///         assert_eq!(all.as_slice(), [0, 4]);
///         assert_eq!(failed.errors().collect::<Vec<_>>(), [&"zero amount"]);
///     }
///     _ => unreachable!(),
/// }
/// ```
pub fn all_or_failed_with<I, U, E, F>(
    items: I,
    mut classify: F,
) -> Outcome<All<U>, Failed<I::Item, E>>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> Verdict<U, E>,
{
    let iter = items.into_iter();
    let mut values = sized_for(iter.size_hint());
    let mut failures = FailureVec::new();
    let mut total = 0usize;
    let mut valid = 0usize;

    for (index, item) in iter.enumerate() {
        total += 1;
        match classify(&item) {
            Verdict::Pass(value) => {
                valid += 1;
                values.push(value);
            }
            Verdict::Flagged(value, error) => {
                valid += 1;
                values.push(value);
                failures.push(FailedItem::new(index, item, Some(error)));
            }
            Verdict::Fail(error) => failures.push(FailedItem::new(index, item, Some(error))),
            Verdict::Discard => failures.push(FailedItem::new(index, item, None)),
        }
    }

    if valid == total {
        let all = All::from_vec(values);
        if failures.is_empty() {
            Outcome::Success(all)
        } else {
            Outcome::Flagged(all, Failed::from_vec(failures))
        }
    } else {
        Outcome::Failure(Failed::from_vec(failures))
    }
}

/// Scans a sequence of options, keeping every present value.
///
/// `None` elements are rejected with no error payload, each tagged with its
/// source index.
///
/// # Examples
///
/// ```
/// use batch_rail::options_all_or_failed;
///
/// let outcome = options_all_or_failed([Some(1), Some(2), None, Some(4), None]);
/// let failed = outcome.into_error().unwrap();
/// assert_eq!(failed.indices().collect::<Vec<_>>(), [2, 4]);
/// ```
pub fn options_all_or_failed<I, T>(options: I) -> Outcome<All<T>, Failed<Option<T>>>
where
    I: IntoIterator<Item = Option<T>>,
{
    let iter = options.into_iter();
    let mut values = sized_for(iter.size_hint());
    let mut failures = FailureVec::new();

    for (index, option) in iter.enumerate() {
        match option {
            Some(value) => values.push(value),
            None => failures.push(FailedItem::new(index, None, None)),
        }
    }

    if failures.is_empty() {
        Outcome::Success(All::from_vec(values))
    } else {
        Outcome::Failure(Failed::from_vec(failures))
    }
}

/// Scans a sequence of outcomes, keeping every success value.
///
/// Failure records store the original outcome, so error reporting can show
/// exactly what was received. Flagged successes follow the typed-error
/// rules of [`all_or_failed_with`]: their value is kept and their
/// diagnostic is recorded, and an all-valid scan with flagged elements
/// returns [`Outcome::Flagged`].
///
/// # Examples
///
/// ```
/// use batch_rail::{outcomes_all_or_failed, Outcome};
///
/// let outcome = outcomes_all_or_failed([
///     Outcome::<_, &str>::success(1),
///     Outcome::failure("bad record"),
///     Outcome::success(3),
/// ]);
/// let failed = outcome.into_error().unwrap();
/// assert_eq!(failed.errors().collect::<Vec<_>>(), [&"bad record"]);
/// assert_eq!(failed.indices().collect::<Vec<_>>(), [1]);
/// ```
pub fn outcomes_all_or_failed<I, T, E>(
    outcomes: I,
) -> Outcome<All<T>, Failed<Outcome<T, E>, E>>
where
    I: IntoIterator<Item = Outcome<T, E>>,
    T: Clone,
    E: Clone,
{
    all_or_failed_with(outcomes, |outcome| outcome.clone().into_verdict())
}
