//! Normalized error representation.
//!
//! [`ErrorCode`] is the single concrete type that
//! [`Expected::normalize_errors`](crate::Expected::normalize_errors) collapses
//! a heterogeneous error list into. A code is a `(category, value)` pair plus a
//! human-readable message; two codes are equal when category and value match,
//! regardless of the message text.
use core::fmt::{self, Display};
use core::hash::{Hash, Hasher};

use crate::types::alloc_type::Cow;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Category of codes carrying a raw operating-system error number.
pub const SYSTEM_CATEGORY: &str = "system";
/// Category of `std::io` errors that carry no OS error number.
pub const IO_CATEGORY: &str = "io";
/// Category of parse failures from `core::str::FromStr` implementations.
pub const PARSE_CATEGORY: &str = "parse";
/// Category of UTF-8 decoding failures.
pub const UTF8_CATEGORY: &str = "utf8";
/// Category of formatting failures.
pub const FMT_CATEGORY: &str = "fmt";

/// A normalized, comparable error code.
///
/// # Examples
///
/// ```
/// use expected_rail::ErrorCode;
///
/// let code = ErrorCode::new("http", 404, "not found");
/// assert_eq!(code.category(), "http");
/// assert_eq!(code.value(), 404);
/// assert_eq!(code.to_string(), "not found (http:404)");
///
/// // message text does not take part in equality
/// assert_eq!(code, ErrorCode::new("http", 404, "Not Found"));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct ErrorCode {
    category: Cow<'static, str>,
    value: i32,
    message: Cow<'static, str>,
}

impl ErrorCode {
    /// Creates a code in `category` with the given numeric `value`.
    #[inline]
    pub fn new(
        category: impl Into<Cow<'static, str>>,
        value: i32,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self { category: category.into(), value, message: message.into() }
    }

    /// Creates a code from a raw operating-system error number.
    ///
    /// The message is the platform description of `raw`.
    #[cfg(feature = "std")]
    pub fn os(raw: i32) -> Self {
        use crate::types::alloc_type::ToString;

        let message = std::io::Error::from_raw_os_error(raw).to_string();
        Self::new(SYSTEM_CATEGORY, raw, message)
    }

    /// Returns the category name.
    #[must_use]
    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the numeric value within the category.
    #[must_use]
    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Returns the human-readable description.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if this code carries a raw OS error number.
    #[must_use]
    #[inline]
    pub fn is_os_error(&self) -> bool {
        self.category == SYSTEM_CATEGORY
    }
}

impl PartialEq for ErrorCode {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.category == other.category
    }
}

impl Eq for ErrorCode {}

impl Hash for ErrorCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.category.hash(state);
        self.value.hash(state);
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}:{})", self.message, self.category, self.value)
    }
}

impl core::error::Error for ErrorCode {}

#[cfg(feature = "std")]
impl From<&std::io::Error> for ErrorCode {
    fn from(error: &std::io::Error) -> Self {
        use crate::types::alloc_type::ToString;

        match error.raw_os_error() {
            Some(raw) => Self::new(SYSTEM_CATEGORY, raw, error.to_string()),
            None => Self::new(IO_CATEGORY, io_kind_value(error.kind()), error.to_string()),
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::ErrorKind> for ErrorCode {
    fn from(kind: std::io::ErrorKind) -> Self {
        use crate::types::alloc_type::ToString;

        Self::new(IO_CATEGORY, io_kind_value(kind), kind.to_string())
    }
}

/// Stable numbering of `io::ErrorKind` within [`IO_CATEGORY`].
///
/// Kinds without an assigned number map to `0`.
#[cfg(feature = "std")]
pub fn io_kind_value(kind: std::io::ErrorKind) -> i32 {
    use std::io::ErrorKind;

    match kind {
        ErrorKind::NotFound => 1,
        ErrorKind::PermissionDenied => 2,
        ErrorKind::ConnectionRefused => 3,
        ErrorKind::ConnectionReset => 4,
        ErrorKind::ConnectionAborted => 5,
        ErrorKind::NotConnected => 6,
        ErrorKind::AddrInUse => 7,
        ErrorKind::AddrNotAvailable => 8,
        ErrorKind::BrokenPipe => 9,
        ErrorKind::AlreadyExists => 10,
        ErrorKind::WouldBlock => 11,
        ErrorKind::InvalidInput => 12,
        ErrorKind::InvalidData => 13,
        ErrorKind::TimedOut => 14,
        ErrorKind::WriteZero => 15,
        ErrorKind::Interrupted => 16,
        ErrorKind::Unsupported => 17,
        ErrorKind::UnexpectedEof => 18,
        ErrorKind::OutOfMemory => 19,
        ErrorKind::Other => 20,
        _ => 0,
    }
}
