//! Conversion helpers between `Result` and [`MultiError`].
//!
//! These adapters cover the two directions a validation pass needs: folding
//! a batch of ordinary `Result`s into one accumulator, and pulling plain
//! values back out of an accumulator when interacting with APIs that expect
//! single errors.
//!
//! # Examples
//!
//! ```
//! use error_ledger::convert::collect_failures;
//!
//! let checks: Vec<Result<(), &str>> = vec![Err("too short"), Ok(()), Err("too long")];
//! let me = collect_failures(checks);
//!
//! assert_eq!(me.to_string(), "too short\ntoo long");
//! ```

use crate::types::alloc_type::String;
use crate::types::MultiError;
use core::fmt::Display;

#[cfg(not(feature = "std"))]
use alloc::string::ToString;

/// Folds an iterator of `Result`s into a [`MultiError`].
///
/// Every `Err` is rendered through its `Display` impl and pushed in
/// iteration order; `Ok` values are discarded. An all-`Ok` input yields an
/// empty accumulator.
///
/// # Examples
///
/// ```
/// use error_ledger::convert::collect_failures;
///
/// let results: Vec<Result<i32, &str>> = vec![Ok(1), Err("boom"), Ok(2)];
/// let me = collect_failures(results);
///
/// assert_eq!(me.len(), 1);
/// assert_eq!(me.to_string(), "boom");
/// ```
pub fn collect_failures<I, T, E>(results: I) -> MultiError
where
    I: IntoIterator<Item = Result<T, E>>,
    E: Display,
{
    let mut multi = MultiError::new();
    for result in results {
        if let Err(error) = result {
            multi.push(error.to_string());
        }
    }
    multi
}

/// Consumes the accumulator and returns its earliest message, if any.
///
/// Useful when handing off to an API that can only carry a single error
/// string.
///
/// # Examples
///
/// ```
/// use error_ledger::{convert::first_failure, MultiError};
///
/// let mut me = MultiError::new();
/// me.push("first");
/// me.push("second");
///
/// assert_eq!(first_failure(me), Some("first".to_string()));
/// assert_eq!(first_failure(MultiError::new()), None);
/// ```
#[inline]
pub fn first_failure(multi: MultiError) -> Option<String> {
    multi.into_iter().next()
}

/// Concatenates two accumulators, all of `left`'s messages before `right`'s.
///
/// # Examples
///
/// ```
/// use error_ledger::{convert::combine, multi_error};
///
/// let merged = combine(multi_error!["a"], multi_error!["b", "c"]);
/// assert_eq!(merged.to_string(), "a\nb\nc");
/// ```
#[inline]
pub fn combine(mut left: MultiError, right: MultiError) -> MultiError {
    left.extend(right);
    left
}
