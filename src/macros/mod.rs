//! Ergonomic macros for building and populating a [`MultiError`](crate::MultiError).
//!
//! - [`macro@crate::multi_error`] - Constructs an accumulator from zero or
//!   more message expressions, analogous to `vec!`.
//! - [`macro@crate::fail`] - Formats and pushes a message in one step, the
//!   common move inside a validation pass.
//!
//! # Examples
//!
//! ```
//! use error_ledger::{fail, multi_error};
//!
//! let mut me = multi_error!["missing name"];
//! let port = 70000;
//! fail!(me, "port {} is out of range", port);
//!
//! assert_eq!(me.to_string(), "missing name\nport 70000 is out of range");
//! ```

/// Constructs a [`MultiError`](crate::MultiError) from zero or more message
/// expressions.
///
/// `multi_error![]` is the empty accumulator. Each argument may be anything
/// accepted by [`push`](crate::MultiError::push).
///
/// # Examples
///
/// ```
/// use error_ledger::multi_error;
///
/// let empty = multi_error![];
/// assert!(empty.has_failures().is_ok());
///
/// let me = multi_error!["one", "two"];
/// assert_eq!(me.to_string(), "one\ntwo");
/// ```
#[macro_export]
macro_rules! multi_error {
    () => {
        $crate::MultiError::new()
    };
    ($($message:expr),+ $(,)?) => {{
        let mut multi = $crate::MultiError::new();
        $(multi.push($message);)+
        multi
    }};
}

/// Formats a message and pushes it onto an existing accumulator.
///
/// Accepts a [`MultiError`](crate::MultiError) followed by the same
/// arguments as the standard `format!` macro.
///
/// # Examples
///
/// ```
/// use error_ledger::{fail, MultiError};
///
/// let mut me = MultiError::new();
/// fail!(me, "field `{}` must not be empty", "name");
///
/// assert_eq!(me.to_string(), "field `name` must not be empty");
/// ```
#[macro_export]
macro_rules! fail {
    ($multi:expr, $($arg:tt)*) => {
        $multi.push(format!($($arg)*))
    };
}
