//! The all-or-failed batch scan.
//!
//! One pass over a source sequence decides whether *every* element
//! classifies as valid. If so, the transformed values come back as an
//! [`All`](crate::types::All) in source order; if not, *every* rejected
//! element comes back in a [`Failed`](crate::types::Failed), each tagged
//! with its original index. No partial mix is ever surfaced: a partially
//! filled success buffer is discarded the moment the scan fails.
//!
//! Four entry points cover the common source shapes:
//!
//! - [`all_or_failed`] - classifier without error payloads
//! - [`all_or_failed_with`] - classifier with typed errors (and the
//!   valid-with-error escape hatch)
//! - [`options_all_or_failed`] - a sequence of `Option`s
//! - [`outcomes_all_or_failed`] - a sequence of [`Outcome`](crate::Outcome)s
//!
//! # Examples
//!
//! ```
//! use batch_rail::{all_or_failed, Verdict};
//!
//! let outcome = all_or_failed(["1", "2", "3"], |raw| {
//!     Verdict::pass_if_some(raw.parse::<i32>().ok())
//! });
//! assert_eq!(outcome.into_value().unwrap().as_slice(), [1, 2, 3]);
//! ```
pub mod core;

pub use self::core::*;
