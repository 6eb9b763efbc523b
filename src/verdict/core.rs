use crate::outcome::Outcome;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-element verdict produced by a classifier during a batch scan.
///
/// A verdict says whether one source element should be kept (with its
/// transformed value) or rejected (optionally with an error explaining why).
/// Verdicts are ephemeral: a classifier callback produces one per element
/// and the scan consumes it immediately.
///
/// The error type defaults to `()` for classifiers that never attach error
/// detail; those use only [`pass`](Verdict::pass) and
/// [`discard`](Verdict::discard).
///
/// # Type Parameters
///
/// * `T` - The kept/transformed value type
/// * `E` - The classification error type
///
/// # Variants
///
/// * `Pass(T)` - Valid, no error
/// * `Flagged(T, E)` - Valid, but carrying a diagnostic error
/// * `Fail(E)` - Invalid, with a specific error
/// * `Discard` - Invalid, no error detail
///
/// # Examples
///
/// ```
/// use batch_rail::Verdict;
///
/// fn classify(raw: &str) -> Verdict<i32, String> {
///     match raw.parse::<i32>() {
///         Ok(n) => Verdict::pass(n),
///         Err(e) => Verdict::fail(e.to_string()),
///     }
/// }
///
/// assert!(classify("7").is_pass());
/// assert!(classify("x").is_fail());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Verdict<T, E = ()> {
    Pass(T),
    Flagged(T, E),
    Fail(E),
    Discard,
}

impl<T, E> Verdict<T, E> {
    /// Keeps the element with the given transformed value.
    #[must_use]
    #[inline]
    pub fn pass(value: T) -> Self {
        Self::Pass(value)
    }

    /// Keeps the element, attaching a diagnostic error.
    ///
    /// The element still counts as valid; in the typed-error scan it lands
    /// in the success container *and* in the failure records.
    #[must_use]
    #[inline]
    pub fn pass_with(value: T, error: E) -> Self {
        Self::Flagged(value, error)
    }

    /// Rejects the element with a specific error.
    #[must_use]
    #[inline]
    pub fn fail(error: E) -> Self {
        Self::Fail(error)
    }

    /// Rejects the element without error detail.
    #[must_use]
    #[inline]
    pub fn discard() -> Self {
        Self::Discard
    }

    /// Keeps the element iff the option holds a value; rejects with no
    /// error detail otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use batch_rail::Verdict;
    ///
    /// assert!(Verdict::<i32>::pass_if_some(Some(1)).is_pass());
    /// assert!(Verdict::<i32>::pass_if_some(None).is_fail());
    /// ```
    #[must_use]
    #[inline]
    pub fn pass_if_some(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Pass(value),
            None => Self::Discard,
        }
    }

    /// Mirrors an outcome's success or failure into a verdict.
    ///
    /// The mapping is exact: a flagged success becomes a flagged pass, so
    /// no diagnostic is lost on the way into a scan.
    ///
    /// # Examples
    ///
    /// ```
    /// use batch_rail::{Outcome, Verdict};
    ///
    /// let v = Verdict::from_outcome(Outcome::<_, &str>::success(1));
    /// assert_eq!(v, Verdict::Pass(1));
    /// ```
    #[must_use]
    #[inline]
    pub fn from_outcome(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Self::Pass(value),
            Outcome::Flagged(value, error) => Self::Flagged(value, error),
            Outcome::Failure(error) => Self::Fail(error),
        }
    }

    /// Returns `true` if the element was kept, flagged or not.
    #[must_use]
    #[inline]
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass(_) | Self::Flagged(_, _))
    }

    /// Returns `true` if the element was rejected.
    #[must_use]
    #[inline]
    pub fn is_fail(&self) -> bool {
        !self.is_pass()
    }

    /// Returns `true` if any error payload is present.
    #[must_use]
    #[inline]
    pub fn has_error(&self) -> bool {
        matches!(self, Self::Flagged(_, _) | Self::Fail(_))
    }

    /// Returns the kept value, if any.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Pass(value) | Self::Flagged(value, _) => Some(value),
            _ => None,
        }
    }

    /// Returns the error payload, if any.
    #[must_use]
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Flagged(_, error) | Self::Fail(error) => Some(error),
            _ => None,
        }
    }

    /// Extracts the kept value, if any.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Pass(value) | Self::Flagged(value, _) => Some(value),
            _ => None,
        }
    }

    /// Extracts the error payload, if any.
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Flagged(_, error) | Self::Fail(error) => Some(error),
            _ => None,
        }
    }

    /// Maps the kept value, preserving rejections and diagnostics.
    #[must_use]
    #[inline]
    pub fn map<U, F>(self, f: F) -> Verdict<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Pass(value) => Verdict::Pass(f(value)),
            Self::Flagged(value, error) => Verdict::Flagged(f(value), error),
            Self::Fail(error) => Verdict::Fail(error),
            Self::Discard => Verdict::Discard,
        }
    }

    /// Maps the error payload, preserving the pass/fail shape.
    #[must_use]
    #[inline]
    pub fn map_err<G, F>(self, f: F) -> Verdict<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Pass(value) => Verdict::Pass(value),
            Self::Flagged(value, error) => Verdict::Flagged(value, f(error)),
            Self::Fail(error) => Verdict::Fail(f(error)),
            Self::Discard => Verdict::Discard,
        }
    }

    /// Converts back into an [`Outcome`].
    ///
    /// [`Verdict::Discard`] has no error to carry over, so it becomes a
    /// failure with `E::default()`. The other three variants map exactly,
    /// which is what makes `Outcome::into_verdict` round-trip.
    ///
    /// # Examples
    ///
    /// ```
    /// use batch_rail::{Outcome, Verdict};
    ///
    /// let o = Verdict::<i32, String>::discard().into_outcome();
    /// assert_eq!(o, Outcome::Failure(String::new()));
    /// ```
    #[inline]
    pub fn into_outcome(self) -> Outcome<T, E>
    where
        E: Default,
    {
        match self {
            Self::Pass(value) => Outcome::Success(value),
            Self::Flagged(value, error) => Outcome::Flagged(value, error),
            Self::Fail(error) => Outcome::Failure(error),
            Self::Discard => Outcome::Failure(E::default()),
        }
    }
}
