//! Extension methods for running the batch scan straight off a sequence.
//!
//! This is the method-call form of the entry points in [`crate::batch`],
//! for call sites that read better as a chain:
//!
//! ```
//! use batch_rail::{AllOrFailedExt, Verdict};
//!
//! let outcome = vec![1, 2, 3].all_or_failed(|n| Verdict::pass(n * 2));
//! assert_eq!(outcome.into_value().unwrap().as_slice(), [2, 4, 6]);
//! ```

use crate::batch;
use crate::outcome::Outcome;
use crate::types::{All, Failed};
use crate::verdict::Verdict;

/// Extension trait exposing the batch scan on anything iterable.
pub trait AllOrFailedExt: IntoIterator + Sized {
    /// Classifies every element; see [`batch::all_or_failed`].
    fn all_or_failed<U, F>(self, classify: F) -> Outcome<All<U>, Failed<Self::Item>>
    where
        F: FnMut(&Self::Item) -> Verdict<U>,
    {
        batch::all_or_failed(self, classify)
    }

    /// Classifies every element with typed errors; see
    /// [`batch::all_or_failed_with`].
    fn all_or_failed_with<U, E, F>(self, classify: F) -> Outcome<All<U>, Failed<Self::Item, E>>
    where
        F: FnMut(&Self::Item) -> Verdict<U, E>,
    {
        batch::all_or_failed_with(self, classify)
    }
}

impl<I: IntoIterator> AllOrFailedExt for I {}
