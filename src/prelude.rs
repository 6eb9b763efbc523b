//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use batch_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Sum types**: [`Outcome`], [`Verdict`]
//! - **Containers**: [`All`], [`Failed`], [`FailedItem`], [`Cardinality`]
//! - **Scan entry points**: [`all_or_failed`], [`all_or_failed_with`],
//!   [`options_all_or_failed`], [`outcomes_all_or_failed`]
//! - **Traits**: [`AllOrFailedExt`], [`IntoVerdict`]
//!
//! # Examples
//!
//! ```
//! use batch_rail::prelude::*;
//!
//! let outcome = vec!["10", "20"].all_or_failed_with(|raw| raw.parse::<u32>().into_verdict());
//! assert_eq!(outcome.into_value().unwrap().as_slice(), [10, 20]);
//! ```

// Scan entry points
pub use crate::batch::{
    all_or_failed, all_or_failed_with, options_all_or_failed, outcomes_all_or_failed,
};

// Core sum types
pub use crate::outcome::Outcome;
pub use crate::verdict::Verdict;

// Containers
pub use crate::types::{All, Cardinality, Failed, FailedItem};

// Traits
pub use crate::traits::{AllOrFailedExt, IntoVerdict};
