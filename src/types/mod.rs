//! Core accumulator type and storage aliases.
//!
//! # Examples
//!
//! ```
//! use error_ledger::MultiError;
//!
//! let mut me = MultiError::new();
//! me.push("field `email` is malformed");
//! me.push("field `age` is out of range");
//!
//! println!("{}", me);
//! // Output:
//! // field `email` is malformed
//! // field `age` is out of range
//! ```
use smallvec::SmallVec;

use crate::types::alloc_type::String;

pub mod alloc_type;
pub mod multi_error;

pub use multi_error::*;

/// SmallVec-backed collection used for accumulating failure messages.
///
/// Uses inline storage for up to 2 elements to avoid heap allocations
/// in the common case where a validation pass records only a few failures.
pub type MessageVec = SmallVec<[String; 2]>;

/// Result alias for validation functions that fail with a [`MultiError`].
///
/// # Type Parameters
///
/// * `T` - The success value type
pub type MultiResult<T> = Result<T, MultiError>;
