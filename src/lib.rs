//! A success-or-one-of-many-errors container.
//!
//! [`Expected<T, E>`](Expected) holds either a success value of type `T` or
//! exactly one error whose type is listed in the tuple `E`. Error types need no
//! common base: each stays its own statically known type, and the compiler
//! checks every conversion between error lists.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `expected_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Construction and Access
//!
//! ```
//! use expected_rail::Expected;
//!
//! let ok: Expected<i32, (String,)> = Expected::new(42);
//! assert!(ok.has_value());
//! assert_eq!(ok.value(), Ok(&42));
//!
//! let failed: Expected<i32, (String,)> = Expected::fail(String::from("boom"));
//! assert!(!failed.has_value());
//! assert_eq!(failed.error::<String, _>().map(String::as_str), Ok("boom"));
//! assert!(failed.value().is_err());
//! ```
//!
//! ## Widening Conversion
//!
//! ```
//! use expected_rail::Expected;
//!
//! #[derive(Debug, PartialEq)]
//! struct Timeout;
//!
//! let narrow: Expected<(), (Timeout,)> = Expected::fail(Timeout);
//! let wide: Expected<(), (std::fmt::Error, Timeout)> = narrow.widen();
//! assert!(wide.has_error::<Timeout, _>());
//! ```
//!
//! ## Error Remapping
//!
//! ```
//! use expected_rail::{traits::FnMapper, Expected};
//!
//! let failed: Expected<i32, (String,)> = Expected::fail(String::from("boom"));
//! let lengths: Expected<i32, (usize,)> = failed.remap_errors(FnMapper(|e: String| e.len()));
//! assert_eq!(lengths.sole_error(), Ok(&4));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Macros for declaring mappers and error-code conversions
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Error mapping and normalization traits
pub mod traits;
/// Expected, Unexpected and the union machinery behind them
pub mod types;

/// Advanced API level for library authors
pub mod advanced;

pub use traits::*;
pub use types::{
    swap, BadExpectedAccess, BoxedError, ErrorCode, ErrorSet, ErrorVec, Expected, SubsetOf,
    Unexpected, UnexpectedResult, UnionOf,
};

#[doc(hidden)]
pub mod __private {
    pub use crate::types::alloc_type::ToString;
}
