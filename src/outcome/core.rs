use crate::verdict::Verdict;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Success-or-failure value with room for a diagnostic on the success side.
///
/// `Outcome<T, E>` represents a computation that either succeeded with a
/// value of type `T` or failed with an error of type `E`. Unlike `Result`,
/// it has a third shape: [`Outcome::Flagged`], a success that also carries
/// an error payload. Flagged values answer `true` to both
/// [`is_success`](Outcome::is_success) and [`has_error`](Outcome::has_error),
/// which is what lets the typed-error batch scan report "every element was
/// accepted, and here is what was worth flagging anyway"; see
/// [`all_or_failed_with`](crate::batch::all_or_failed_with).
///
/// # Serde Support
///
/// `Outcome` implements `Serialize` and `Deserialize` when `T` and `E` do.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The error type
///
/// # Variants
///
/// * `Success(T)` - Success, no error payload
/// * `Flagged(T, E)` - Success carrying a diagnostic error
/// * `Failure(E)` - Failure with an error payload
///
/// # Examples
///
/// ```
/// use batch_rail::Outcome;
///
/// let ok = Outcome::<i32, &str>::success(42);
/// assert!(ok.is_success());
/// assert!(!ok.has_error());
///
/// let flagged = Outcome::success_with(42, "deprecated input");
/// assert!(flagged.is_success());
/// assert!(flagged.has_error());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<T, E> {
    Success(T),
    Flagged(T, E),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Creates a success value.
    ///
    /// # Examples
    ///
    /// ```
    /// use batch_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(42);
    /// assert_eq!(o.into_value(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failure value.
    ///
    /// # Examples
    ///
    /// ```
    /// use batch_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("missing field");
    /// assert!(o.is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Creates a success that also carries a diagnostic error.
    ///
    /// The value still counts as a success everywhere; the error is extra
    /// information a caller may inspect via [`error`](Outcome::error).
    ///
    /// # Examples
    ///
    /// ```
    /// use batch_rail::Outcome;
    ///
    /// let o = Outcome::success_with(42, "value was clamped");
    /// assert!(o.is_success());
    /// assert_eq!(o.error(), Some(&"value was clamped"));
    /// ```
    #[must_use]
    #[inline]
    pub fn success_with(value: T, error: E) -> Self {
        Self::Flagged(value, error)
    }

    /// Assembles an outcome from a caller-supplied discriminant, value, and
    /// optional error.
    ///
    /// A success with a present error becomes [`Outcome::Flagged`]; a
    /// failure with no error falls back to `E::default()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use batch_rail::Outcome;
    ///
    /// let o = Outcome::from_parts(true, 7, Some("odd".to_string()));
    /// assert!(o.is_success());
    /// assert!(o.has_error());
    ///
    /// let o = Outcome::<i32, String>::from_parts(false, 0, None);
    /// assert_eq!(o.into_error(), Some(String::new()));
    /// ```
    #[must_use]
    pub fn from_parts(success: bool, value: T, error: Option<E>) -> Self
    where
        E: Default,
    {
        match (success, error) {
            (true, None) => Self::Success(value),
            (true, Some(error)) => Self::Flagged(value, error),
            (false, Some(error)) => Self::Failure(error),
            (false, None) => Self::Failure(E::default()),
        }
    }

    /// Returns `true` if the outcome holds a value, flagged or not.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_) | Self::Flagged(_, _))
    }

    /// Returns `true` if the outcome is a failure.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns `true` if any error payload is present, including the
    /// diagnostic on a flagged success.
    ///
    /// # Examples
    ///
    /// ```
    /// use batch_rail::Outcome;
    ///
    /// assert!(!Outcome::<i32, &str>::success(1).has_error());
    /// assert!(Outcome::success_with(1, "e").has_error());
    /// assert!(Outcome::<i32, &str>::failure("e").has_error());
    /// ```
    #[must_use]
    #[inline]
    pub fn has_error(&self) -> bool {
        matches!(self, Self::Flagged(_, _) | Self::Failure(_))
    }

    /// Returns the success value, if any.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) | Self::Flagged(value, _) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a mutable reference to the success value, if any.
    #[inline]
    pub fn value_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Success(value) | Self::Flagged(value, _) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the error payload, if any.
    #[must_use]
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Flagged(_, error) | Self::Failure(error) => Some(error),
        }
    }

    /// Extracts the success value, discarding any diagnostic.
    ///
    /// # Examples
    ///
    /// ```
    /// use batch_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(42);
    /// assert_eq!(o.into_value(), Some(42));
    ///
    /// let o = Outcome::<i32, &str>::failure("error");
    /// assert_eq!(o.into_value(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) | Self::Flagged(value, _) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Extracts the error payload, if any.
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Flagged(_, error) | Self::Failure(error) => Some(error),
        }
    }

    /// Maps the success value, preserving failures and diagnostics.
    ///
    /// # Examples
    ///
    /// ```
    /// use batch_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(21).map(|n| n * 2);
    /// assert_eq!(o.into_value(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Flagged(value, error) => Outcome::Flagged(f(value), error),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Maps the error payload, preserving the success branch.
    ///
    /// Applies to both a failure's error and a flagged success's diagnostic.
    ///
    /// # Examples
    ///
    /// ```
    /// use batch_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("nope").map_err(|e| e.len());
    /// assert_eq!(o.into_error(), Some(4));
    /// ```
    #[must_use]
    #[inline]
    pub fn map_err<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Flagged(value, error) => Outcome::Flagged(value, f(error)),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Chains a computation off the success value.
    ///
    /// A diagnostic attached to this value is kept unless `f` reports its
    /// own error.
    ///
    /// # Examples
    ///
    /// ```
    /// use batch_rail::Outcome;
    ///
    /// fn halve(n: i32) -> Outcome<i32, &'static str> {
    ///     if n % 2 == 0 {
    ///         Outcome::success(n / 2)
    ///     } else {
    ///         Outcome::failure("odd")
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::success(4).and_then(halve).into_value(), Some(2));
    /// assert!(Outcome::success(3).and_then(halve).is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Flagged(value, error) => match f(value) {
                Outcome::Success(next) => Outcome::Flagged(next, error),
                other => other,
            },
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Calls `op` if the outcome is a failure, otherwise returns `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use batch_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::failure("error").or_else(|_| Outcome::success(0));
    /// assert_eq!(o.into_value(), Some(0));
    /// ```
    #[must_use]
    #[inline]
    pub fn or_else<F>(self, op: F) -> Outcome<T, E>
    where
        F: FnOnce(E) -> Outcome<T, E>,
    {
        match self {
            Self::Failure(error) => op(error),
            other => other,
        }
    }

    /// Wraps a plain `Result` into an `Outcome`.
    ///
    /// # Examples
    ///
    /// ```
    /// use batch_rail::Outcome;
    ///
    /// let o = Outcome::from_result(Ok::<_, &str>(42));
    /// assert!(o.is_success());
    /// ```
    #[must_use]
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }

    /// Converts into a plain `Result`.
    ///
    /// A flagged success becomes `Ok`; its diagnostic is dropped, since
    /// `Result` has nowhere to put it.
    ///
    /// # Examples
    ///
    /// ```
    /// use batch_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<_, &str>::success_with(42, "e").into_result(), Ok(42));
    /// assert_eq!(Outcome::<i32, _>::failure("e").into_result(), Err("e"));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) | Self::Flagged(value, _) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Wraps an `Option` into an `Outcome`, supplying the error to use for
    /// the `None` case.
    ///
    /// # Examples
    ///
    /// ```
    /// use batch_rail::Outcome;
    ///
    /// let o = Outcome::from_option(None::<i32>, "absent");
    /// assert_eq!(o.into_error(), Some("absent"));
    /// ```
    #[must_use]
    #[inline]
    pub fn from_option(option: Option<T>, error_for_none: E) -> Self {
        match option {
            Some(value) => Self::Success(value),
            None => Self::Failure(error_for_none),
        }
    }

    /// Converts into a per-element classification verdict.
    ///
    /// The mapping is exact in both directions for all three variants, so
    /// `Verdict::into_outcome` restores the original outcome unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use batch_rail::{Outcome, Verdict};
    ///
    /// let v = Outcome::<_, &str>::success_with(1, "e").into_verdict();
    /// assert_eq!(v, Verdict::Flagged(1, "e"));
    /// ```
    #[inline]
    pub fn into_verdict(self) -> Verdict<T, E> {
        Verdict::from_outcome(self)
    }
}
