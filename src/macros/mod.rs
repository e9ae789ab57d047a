//! Macros that write the per-type trait impls remapping needs.
//!
//! - [`macro@crate::error_mapper`] - Declares a mapper struct and one
//!   [`ErrorMapper`](crate::traits::ErrorMapper) impl per closure-like arm.
//! - [`macro@crate::impl_error_code`] - Implements
//!   [`IntoErrorCode`](crate::traits::IntoErrorCode) for a fieldless error enum.
//!
//! # Examples
//!
//! ```
//! use expected_rail::{error_mapper, impl_error_code, Expected, ErrorCode};
//! use std::fmt;
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! enum DbError {
//!     Locked = 5,
//!     Corrupt = 11,
//! }
//!
//! impl fmt::Display for DbError {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         match self {
//!             DbError::Locked => f.write_str("database is locked"),
//!             DbError::Corrupt => f.write_str("database image is malformed"),
//!         }
//!     }
//! }
//!
//! impl_error_code!(DbError, "db");
//!
//! error_mapper! {
//!     /// Collapses low-level failures into a retry hint.
//!     pub struct Retryable;
//!     |e: DbError| -> bool { e == DbError::Locked }
//!     |_e: ErrorCode| -> bool { false }
//! }
//!
//! let locked: Expected<(), (DbError, ErrorCode)> = Expected::fail(DbError::Locked);
//! let hint: Expected<(), (bool,)> = locked.clone().remap_errors(Retryable);
//! assert_eq!(hint.sole_error(), Ok(&true));
//!
//! let code = locked.normalize_errors().into_sole_error().unwrap();
//! assert_eq!((code.category(), code.value()), ("db", 5));
//! ```

/// Declares a unit struct implementing
/// [`ErrorMapper`](crate::traits::ErrorMapper) once per arm.
///
/// Each arm reads like a typed closure, `|name: Source| -> Target { body }`,
/// and becomes `impl ErrorMapper<Source> for Struct`. The mapper covers
/// exactly the listed source types, so remapping an `Expected` whose list has
/// a type without an arm fails to compile.
///
/// # Syntax
///
/// ```text
/// error_mapper! {
///     $(#[attr])* $vis struct Name;
///     |arg: Source1| -> Target1 { ... }
///     |arg: Source2| -> Target2 { ... }
/// }
/// ```
///
/// # Examples
///
/// ```
/// use expected_rail::{error_mapper, Expected};
///
/// error_mapper! {
///     struct Len;
///     |e: String| -> usize { e.len() }
///     |e: &'static str| -> usize { e.len() }
/// }
///
/// let failed: Expected<i32, (String, &'static str)> = Expected::fail("four");
/// let lengths: Expected<i32, (usize,)> = failed.remap_errors(Len);
/// assert_eq!(lengths.sole_error(), Ok(&4));
/// ```
#[macro_export]
macro_rules! error_mapper {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident;
        $( |$arg:ident : $from:ty| -> $to:ty $body:block )+
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        $vis struct $name;

        $(
            impl $crate::traits::ErrorMapper<$from> for $name {
                type Output = $to;

                #[inline]
                fn map_error(&mut self, $arg: $from) -> $to $body
            }
        )+
    };
}

/// Implements [`IntoErrorCode`](crate::traits::IntoErrorCode) for a fieldless
/// enum.
///
/// The discriminant becomes the code value, the `Display` output becomes the
/// message, and `$category` names the category.
///
/// Discriminants outside the `i32` range saturate to `i32::MIN` or
/// `i32::MAX`. Values of a `#[repr(u64)]` enum above `i64::MAX` wrap to
/// negative first, so they saturate to `i32::MIN`.
///
/// # Arguments
///
/// * `$type` - A fieldless enum implementing `Display`
/// * `$category` - A `&'static str` category name
///
/// # Examples
///
/// ```
/// use expected_rail::{impl_error_code, traits::IntoErrorCode};
/// use std::fmt;
///
/// #[derive(Debug)]
/// enum HttpError {
///     NotFound = 404,
/// }
///
/// impl fmt::Display for HttpError {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str("not found")
///     }
/// }
///
/// impl_error_code!(HttpError, "http");
///
/// let code = HttpError::NotFound.into_error_code();
/// assert_eq!(code.value(), 404);
/// assert_eq!(code.to_string(), "not found (http:404)");
/// ```
#[macro_export]
macro_rules! impl_error_code {
    ($type:ty, $category:expr $(,)?) => {
        impl $crate::traits::IntoErrorCode for $type {
            fn into_error_code(self) -> $crate::ErrorCode {
                let message = $crate::__private::ToString::to_string(&self);
                let value = (self as i64).clamp(i64::from(i32::MIN), i64::from(i32::MAX));
                $crate::ErrorCode::new($category, value as i32, message)
            }
        }
    };
}
