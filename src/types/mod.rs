//! Container types produced and consumed by the batch scan.
//!
//! The scan entry points in [`crate::batch`] return either an [`All`]
//! (every element classified successfully) or a [`Failed`] (the exact
//! elements that did not), both read-only once built.
//!
//! # Examples
//!
//! ```
//! use batch_rail::{all_or_failed, Verdict};
//!
//! let outcome = all_or_failed([1, 2, 3], |n| Verdict::pass(n * 10));
//! let all = outcome.into_value().unwrap();
//! assert_eq!(all.as_slice(), [10, 20, 30]);
//! ```
use smallvec::SmallVec;

pub mod all;
pub mod alloc_type;
pub mod cardinality;
pub mod failed;

pub use all::All;
pub use cardinality::Cardinality;
pub use failed::{Failed, FailedItem};

/// SmallVec-backed scratch collection used for accumulating failure records.
///
/// Uses inline storage for up to 2 elements so scans where only a couple of
/// elements fail never touch the heap for the failure side.
pub type FailureVec<T> = SmallVec<[T; 2]>;
