use core::any::{type_name, Any};
use core::error::Error;
use core::fmt::{self, Display};

use crate::types::alloc_type::{Arc, Box};
use crate::types::error_code::ErrorCode;

/// Owned error object an access violation can carry as its cause.
pub type BoxedError = Box<dyn Error + Send + Sync>;

/// Access-violation signal returned by the checked accessors of
/// [`Expected`](crate::Expected) and [`Unexpected`](crate::Unexpected).
///
/// It always describes the alternative that was *actually* live when the
/// access failed, so the report names the real cause rather than a generic
/// "no value". When that alternative is already a structured error (an
/// [`ErrorCode`], or with the `std` feature an `io::Error` or
/// `io::ErrorKind`), the code is exposed through [`code`](Self::code) and as
/// the error [`source`](core::error::Error::source).
///
/// When the live alternative is a [`BoxedError`] and the accessor consumed
/// the container (`into_value`, `into_error`, `Unexpected::take`), the boxed
/// error itself moves into the signal: it is returned by
/// [`cause`](Self::cause) and takes precedence as the `source`.
///
/// # Examples
///
/// ```
/// use expected_rail::{Expected, Unexpected};
///
/// let failed: Expected<u32, (String,)> =
///     Expected::from_unexpected(Unexpected::<(String,)>::new(String::from("boom")));
///
/// let signal = failed.value().unwrap_err();
/// assert_eq!(signal.index(), 1);
/// assert!(signal.type_name().ends_with("String"));
/// assert!(signal.code().is_none());
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct BadExpectedAccess {
    index: usize,
    type_name: &'static str,
    code: Option<ErrorCode>,
    cause: Option<Arc<dyn Error + Send + Sync>>,
}

impl BadExpectedAccess {
    /// Signal for an error accessor called while the success value of type
    /// `T` was live.
    pub fn value_present<T: ?Sized>() -> Self {
        Self { index: 0, type_name: type_name::<T>(), code: None, cause: None }.report()
    }

    /// Signal for an accessor that found `error` live at ordinal `index`.
    pub fn from_error<E: 'static>(error: &E, index: usize) -> Self {
        let code = structured_code(error as &dyn Any);
        Self { index, type_name: type_name::<E>(), code, cause: None }.report()
    }

    /// Signal for a consuming accessor that found `error` live at ordinal
    /// `index`. A [`BoxedError`] is kept as the cause.
    pub fn from_owned_error<E: 'static>(error: E, index: usize) -> Self {
        let code = structured_code(&error as &dyn Any);
        let cause = owned_cause(error);
        Self { index, type_name: type_name::<E>(), code, cause }.report()
    }

    /// Ordinal of the alternative that was live; `0` means the success value.
    #[must_use]
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Type name of the alternative that was live.
    #[must_use]
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Structured cause, when the live alternative was error-code-like.
    #[must_use]
    #[inline]
    pub fn code(&self) -> Option<&ErrorCode> {
        self.code.as_ref()
    }

    /// The boxed error that was live, when a consuming accessor moved it here.
    #[must_use]
    #[inline]
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Returns `true` if the success value was live.
    #[must_use]
    #[inline]
    pub fn is_value_present(&self) -> bool {
        self.index == 0
    }

    #[inline]
    fn report(self) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "expected_rail::access",
            index = self.index,
            active = self.type_name,
            code = self.code.as_ref().map(|code| code.value()),
            caused = self.cause.is_some(),
            "bad expected access"
        );
        self
    }
}

fn structured_code(error: &dyn Any) -> Option<ErrorCode> {
    if let Some(code) = error.downcast_ref::<ErrorCode>() {
        return Some(code.clone());
    }
    #[cfg(feature = "std")]
    {
        if let Some(io) = error.downcast_ref::<std::io::Error>() {
            return Some(ErrorCode::from(io));
        }
        if let Some(kind) = error.downcast_ref::<std::io::ErrorKind>() {
            return Some(ErrorCode::from(*kind));
        }
        if let Some(io) = error
            .downcast_ref::<BoxedError>()
            .and_then(|boxed| boxed.downcast_ref::<std::io::Error>())
        {
            return Some(ErrorCode::from(io));
        }
    }
    None
}

fn owned_cause<E: 'static>(error: E) -> Option<Arc<dyn Error + Send + Sync>> {
    let mut slot = Some(error);
    let slot: &mut dyn Any = &mut slot;
    slot.downcast_mut::<Option<BoxedError>>()
        .and_then(Option::take)
        .map(Arc::from)
}

impl PartialEq for BadExpectedAccess {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
            && self.type_name == other.type_name
            && self.code == other.code
            && self.cause.is_some() == other.cause.is_some()
    }
}

impl Eq for BadExpectedAccess {}

impl Display for BadExpectedAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.code, &self.cause) {
            (Some(code), _) => write!(f, "bad expected access: {code}"),
            (None, Some(cause)) => write!(f, "bad expected access: {cause}"),
            (None, None) if self.index == 0 => {
                write!(f, "bad expected access: value of type {} is present", self.type_name)
            }
            (None, None) => write!(
                f,
                "bad expected access: error #{} of type {} is active",
                self.index, self.type_name
            ),
        }
    }
}

impl Error for BadExpectedAccess {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(&**cause),
            None => self.code.as_ref().map(|code| code as &(dyn Error + 'static)),
        }
    }
}
