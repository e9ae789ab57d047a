//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use expected_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`error_mapper!`], [`impl_error_code!`]
//! - **Types**: [`Expected`], [`Unexpected`], [`BadExpectedAccess`], [`ErrorCode`]
//! - **Traits**: [`ErrorMapper`], [`IntoErrorCode`], [`ErrorSet`]
//! - **Mappers**: [`Identity`], [`Compose`], [`FnMapper`], [`ToErrorCode`]
//!
//! # Examples
//!
//! ```
//! use expected_rail::prelude::*;
//!
//! fn parse_port(input: &str) -> Expected<u16, (std::num::ParseIntError,)> {
//!     match input.parse() {
//!         Ok(port) => Expected::new(port),
//!         Err(e) => Expected::fail(e),
//!     }
//! }
//!
//! assert_eq!(parse_port("8080").value(), Ok(&8080));
//!
//! let code = parse_port("http").normalize_errors().into_sole_error().unwrap();
//! assert_eq!(code.category(), "parse");
//! ```

// Macros
pub use crate::{error_mapper, impl_error_code};

// Core types
pub use crate::types::{BadExpectedAccess, ErrorCode, Expected, Unexpected};

// Traits
pub use crate::traits::{ErrorMapper, IntoErrorCode};
pub use crate::types::error_set::ErrorSet;

// Mappers
pub use crate::traits::{Compose, FnMapper, Identity, ToErrorCode};
