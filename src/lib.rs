//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `batch_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Classify a Whole Batch
//!
//! ```
//! use batch_rail::{all_or_failed_with, Verdict};
//!
//! let outcome = all_or_failed_with(["1", "x", "3"], |raw| match raw.parse::<i32>() {
//!     Ok(n) => Verdict::pass(n),
//!     Err(_) => Verdict::fail("not a number"),
//! });
//!
//! let failed = outcome.into_error().unwrap();
//! assert_eq!(failed.indices().collect::<Vec<_>>(), [1]);
//! assert_eq!(failed.items().collect::<Vec<_>>(), [&"x"]);
//! ```
//!
//! ## All-or-Nothing Success
//!
//! ```
//! use batch_rail::{AllOrFailedExt, Verdict};
//!
//! let outcome = vec![1, 2, 3].all_or_failed(|n| Verdict::pass(n * 10));
//! assert_eq!(outcome.into_value().unwrap().as_slice(), [10, 20, 30]);
//! ```
//!
//! ## Success That Still Carries Diagnostics
//!
//! ```
//! use batch_rail::{all_or_failed_with, Verdict};
//!
//! let outcome = all_or_failed_with([0u32, 5], |n| {
//!     if *n == 0 {
//!         Verdict::pass_with(*n, "zero amount")
//!     } else {
//!         Verdict::pass(*n)
//!     }
//! });
//!
//! assert!(outcome.is_success());
//! assert!(outcome.has_error());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// The all-or-failed batch scan and its entry points
pub mod batch;
/// Conversions between Outcome, Verdict, Result, and Option
pub mod convert;
/// The success-or-failure value type
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Traits at the seams of the value algebra
pub mod traits;
/// Container types produced by the batch scan
pub mod types;
/// Per-element classification verdicts
pub mod verdict;

// Re-export common items at root, but encourage using the prelude or the
// focused modules.
pub use batch::{all_or_failed, all_or_failed_with, options_all_or_failed, outcomes_all_or_failed};
pub use convert::*;
pub use outcome::Outcome;
pub use traits::{AllOrFailedExt, IntoVerdict};
pub use types::{All, Cardinality, Failed, FailedItem, FailureVec};
pub use verdict::Verdict;
