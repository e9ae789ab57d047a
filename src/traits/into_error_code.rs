use core::convert::Infallible;
use core::num::{IntErrorKind, ParseFloatError, ParseIntError};
use core::str::{ParseBoolError, Utf8Error};

use crate::types::alloc_type::{FromUtf8Error, ToString};
use crate::types::error_code::{ErrorCode, FMT_CATEGORY, PARSE_CATEGORY, UTF8_CATEGORY};

/// Conversion of an error value into the normalized [`ErrorCode`].
///
/// This is the customization point consumed by
/// [`Expected::normalize_errors`](crate::Expected::normalize_errors): every
/// error type in the list must implement it. Fieldless error enums can use
/// [`impl_error_code!`](crate::impl_error_code).
///
/// # Examples
///
/// ```
/// use expected_rail::traits::IntoErrorCode;
/// use expected_rail::ErrorCode;
///
/// struct QuotaExceeded {
///     limit: u32,
/// }
///
/// impl IntoErrorCode for QuotaExceeded {
///     fn into_error_code(self) -> ErrorCode {
///         ErrorCode::new("quota", 1, format!("quota of {} exceeded", self.limit))
///     }
/// }
///
/// let code = QuotaExceeded { limit: 10 }.into_error_code();
/// assert_eq!(code.message(), "quota of 10 exceeded");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be normalized into an `ErrorCode`",
    label = "this type does not implement `IntoErrorCode`",
    note = "implement `IntoErrorCode` manually or use `impl_error_code!({Self}, \"category\")` for fieldless enums"
)]
pub trait IntoErrorCode {
    /// Consumes the error, producing its normalized code.
    fn into_error_code(self) -> ErrorCode;
}

impl IntoErrorCode for ErrorCode {
    #[inline]
    fn into_error_code(self) -> ErrorCode {
        self
    }
}

impl IntoErrorCode for Infallible {
    fn into_error_code(self) -> ErrorCode {
        match self {}
    }
}

impl IntoErrorCode for core::fmt::Error {
    fn into_error_code(self) -> ErrorCode {
        ErrorCode::new(FMT_CATEGORY, 1, "formatter error")
    }
}

impl IntoErrorCode for ParseIntError {
    fn into_error_code(self) -> ErrorCode {
        let value = match self.kind() {
            IntErrorKind::Empty => 1,
            IntErrorKind::InvalidDigit => 2,
            IntErrorKind::PosOverflow => 3,
            IntErrorKind::NegOverflow => 4,
            IntErrorKind::Zero => 5,
            _ => 0,
        };
        ErrorCode::new(PARSE_CATEGORY, value, self.to_string())
    }
}

impl IntoErrorCode for ParseFloatError {
    fn into_error_code(self) -> ErrorCode {
        ErrorCode::new(PARSE_CATEGORY, 6, self.to_string())
    }
}

impl IntoErrorCode for ParseBoolError {
    fn into_error_code(self) -> ErrorCode {
        ErrorCode::new(PARSE_CATEGORY, 7, self.to_string())
    }
}

impl IntoErrorCode for Utf8Error {
    fn into_error_code(self) -> ErrorCode {
        ErrorCode::new(UTF8_CATEGORY, 1, self.to_string())
    }
}

impl IntoErrorCode for FromUtf8Error {
    fn into_error_code(self) -> ErrorCode {
        self.utf8_error().into_error_code()
    }
}

#[cfg(feature = "std")]
impl IntoErrorCode for std::io::Error {
    #[inline]
    fn into_error_code(self) -> ErrorCode {
        ErrorCode::from(&self)
    }
}

#[cfg(feature = "std")]
impl IntoErrorCode for std::io::ErrorKind {
    #[inline]
    fn into_error_code(self) -> ErrorCode {
        ErrorCode::from(self)
    }
}
