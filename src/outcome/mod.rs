//! The success-or-failure value type and its iterator adapters.
//!
//! This module provides [`Outcome`], a `Result`-shaped sum type whose third
//! variant, `Flagged`, represents a success that still carries an error
//! payload. That shape is what the typed-error batch scan returns when every
//! element was accepted but some were worth flagging; see
//! [`crate::batch::all_or_failed_with`].
//!
//! # Examples
//!
//! ```
//! use batch_rail::Outcome;
//!
//! let parsed = Outcome::from_result("42".parse::<i32>());
//! assert_eq!(parsed.into_value(), Some(42));
//! ```
pub mod core;
pub mod iter;

pub use self::core::*;
pub use self::iter::*;
