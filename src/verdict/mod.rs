//! Per-element classification verdicts for batch scans.
//!
//! A classifier callback looks at one source element and returns a
//! [`Verdict`]: keep this transformed value, keep it but flag it, or reject
//! it with or without an error. The scan entry points in [`crate::batch`]
//! consume one verdict per element.
//!
//! # Examples
//!
//! ```
//! use batch_rail::Verdict;
//!
//! let v: Verdict<i32, &str> = Verdict::pass(42);
//! assert!(v.is_pass());
//! ```
pub mod core;

pub use self::core::*;
