//! Traits at the seams of the value algebra.
//!
//! - [`IntoVerdict`]: explicit, lossless conversion of `Option`, `Result`,
//!   and [`Outcome`](crate::Outcome) into classification verdicts
//! - [`AllOrFailedExt`]: method-call form of the batch scan on anything
//!   iterable
//!
//! # Examples
//!
//! ```
//! use batch_rail::{AllOrFailedExt, IntoVerdict};
//!
//! let outcome = ["4", "5"].all_or_failed_with(|raw| raw.parse::<i32>().into_verdict());
//! assert!(outcome.is_success());
//! ```

pub mod into_verdict;
pub mod iter_ext;

pub use into_verdict::IntoVerdict;
pub use iter_ext::AllOrFailedExt;
