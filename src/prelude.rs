//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use error_ledger::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`multi_error!`], [`fail!`]
//! - **Types**: [`MultiError`], [`MultiResult`]
//!
//! # Examples
//!
//! ```
//! use error_ledger::prelude::*;
//!
//! fn validate_port(port: u32) -> MultiResult<u16> {
//!     let mut me = MultiError::new();
//!     if port > u16::MAX as u32 {
//!         fail!(me, "port {} is out of range", port);
//!     }
//!     me.into_result()?;
//!     Ok(port as u16)
//! }
//!
//! assert!(validate_port(8080).is_ok());
//! assert!(validate_port(70000).is_err());
//! ```

// Macros
pub use crate::{fail, multi_error};

// Core types
pub use crate::types::{MultiError, MultiResult};
