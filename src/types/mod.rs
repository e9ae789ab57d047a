//! Container types and the type-level machinery behind them.
//!
//! - [`Expected`]: success value or one error of a listed type
//! - [`Unexpected`]: the error side alone
//! - [`BadExpectedAccess`]: signal returned by checked accessors
//! - [`ErrorCode`]: normalized error representation
//! - [`variant`] and [`error_set`]: the tagged union and the algebra over
//!   error lists
//!
//! # Examples
//!
//! ```
//! use expected_rail::types::{Expected, Unexpected};
//!
//! let err = Unexpected::<(&str,)>::new("disk full");
//! let failed: Expected<u64, (&str, u8)> = Expected::from_unexpected(err);
//!
//! assert_eq!(failed.index(), 1);
//! assert_eq!(failed.into_result().unwrap_err().get::<&str, _>(), Some(&"disk full"));
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod bad_access;
pub mod error_code;
pub mod error_set;
pub mod expected;
pub mod unexpected;
pub mod variant;

pub use bad_access::{BadExpectedAccess, BoxedError};
pub use error_code::ErrorCode;
pub use error_set::{ErrorSet, SubsetOf, UnionOf};
pub use expected::{swap, Expected};
pub use unexpected::Unexpected;

/// SmallVec-backed collection used for per-type diagnostics.
///
/// Uses inline storage for up to 4 elements, enough for most error lists
/// without touching the heap.
pub type ErrorVec<E> = SmallVec<[E; 4]>;

/// Result alias whose error side is an [`Unexpected`] over the list `E`.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The tuple of error types
pub type UnexpectedResult<T, E> = Result<T, Unexpected<E>>;
