//! A minimal multi-error accumulator for validation-style workflows.
//!
//! Run every check, record every failure, report them all at once. A
//! populated [`MultiError`] implements [`core::error::Error`], so it can be
//! returned directly wherever an ordinary error value is expected.
//!
//! # Examples
//!
//! ## Basic Accumulation
//!
//! ```
//! use error_ledger::MultiError;
//!
//! let mut me = MultiError::new();
//! me.push("one");
//! me.push("two");
//!
//! assert!(me.has_failures().is_err());
//! assert_eq!(me.to_string(), "one\ntwo");
//! ```
//!
//! ## Validation Functions
//!
//! ```
//! use error_ledger::prelude::*;
//!
//! struct Signup<'a> {
//!     name: &'a str,
//!     age: i32,
//! }
//!
//! fn validate(signup: &Signup) -> MultiResult<()> {
//!     let mut me = MultiError::new();
//!     if signup.name.is_empty() {
//!         fail!(me, "name must not be empty");
//!     }
//!     if signup.age < 0 {
//!         fail!(me, "age {} must not be negative", signup.age);
//!     }
//!     me.into_result()
//! }
//!
//! let bad = Signup { name: "", age: -3 };
//! let err = validate(&bad).unwrap_err();
//! assert_eq!(err.to_string(), "name must not be empty\nage -3 must not be negative");
//! ```
//!
//! ## Folding Ordinary Results
//!
//! ```
//! use error_ledger::convert::collect_failures;
//!
//! let checks: Vec<Result<(), &str>> = vec![Err("too short"), Ok(()), Err("too long")];
//! let me = collect_failures(checks);
//!
//! assert_eq!(me.len(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversion helpers between `Result` and `MultiError`
pub mod convert;
/// Macros for building and populating accumulators
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core accumulator type and storage aliases
pub mod types;

pub use types::{MessageVec, MultiError, MultiResult};
