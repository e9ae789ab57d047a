//! Core traits for remapping and normalizing errors.
//!
//! - [`ErrorMapper`]: a function over error types, applied by
//!   [`Expected::remap_errors`](crate::Expected::remap_errors)
//! - [`IntoErrorCode`]: customization point turning an error into an
//!   [`ErrorCode`](crate::ErrorCode)
//!
//! Ready-made mappers: [`Identity`], [`Compose`], [`FnMapper`] and
//! [`ToErrorCode`].
//!
//! # Examples
//!
//! ```
//! use expected_rail::traits::{Compose, FnMapper, Identity};
//! use expected_rail::Expected;
//!
//! let failed: Expected<(), (u32,)> = Expected::fail(20u32);
//!
//! let same: Expected<(), (u32,)> = failed.clone().remap_errors(Identity);
//! assert_eq!(same, failed);
//!
//! let both = Compose::new(FnMapper(|n: u32| n + 1), FnMapper(|n: u32| n * 2));
//! let mapped: Expected<(), (u32,)> = failed.remap_errors(both);
//! assert_eq!(mapped.sole_error(), Ok(&42));
//! ```

pub mod error_mapper;
pub mod into_error_code;

pub use error_mapper::{Compose, ErrorMapper, FnMapper, Identity, ToErrorCode};
pub use into_error_code::IntoErrorCode;
