use crate::traits::into_error_code::IntoErrorCode;
use crate::types::error_code::ErrorCode;

/// A function over error types, used by
/// [`Expected::remap_errors`](crate::Expected::remap_errors).
///
/// Closures in Rust accept exactly one argument type, but an error list names
/// several. A mapper therefore implements this trait once per error type it
/// understands; remapping an `Expected` compiles only when the mapper covers
/// every type in the list. The [`error_mapper!`](crate::error_mapper) macro
/// writes those impls from closure-like arms.
///
/// # Examples
///
/// ```
/// use expected_rail::traits::ErrorMapper;
/// use expected_rail::Expected;
///
/// struct Explain;
///
/// impl ErrorMapper<u16> for Explain {
///     type Output = String;
///     fn map_error(&mut self, status: u16) -> String {
///         format!("status {status}")
///     }
/// }
///
/// impl ErrorMapper<&'static str> for Explain {
///     type Output = String;
///     fn map_error(&mut self, reason: &'static str) -> String {
///         reason.to_owned()
///     }
/// }
///
/// let failed: Expected<(), (u16, &'static str)> = Expected::fail(503u16);
/// let described: Expected<(), (String,)> = failed.remap_errors(Explain);
/// assert_eq!(described.sole_error().unwrap(), "status 503");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not know how to map an error of type `{E}`",
    label = "missing `ErrorMapper<{E}>` implementation",
    note = "a mapper must cover every type in the error list; add an arm to `error_mapper!` or implement `ErrorMapper<{E}>`"
)]
pub trait ErrorMapper<E> {
    /// Type produced for an error of type `E`.
    type Output;

    /// Maps one error value.
    fn map_error(&mut self, error: E) -> Self::Output;
}

impl<E, M> ErrorMapper<E> for &mut M
where
    M: ErrorMapper<E> + ?Sized,
{
    type Output = M::Output;

    #[inline]
    fn map_error(&mut self, error: E) -> M::Output {
        ErrorMapper::<E>::map_error(&mut **self, error)
    }
}

/// Returns every error unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<E> ErrorMapper<E> for Identity {
    type Output = E;

    #[inline]
    fn map_error(&mut self, error: E) -> E {
        error
    }
}

/// Applies `first`, then `then` to its output.
///
/// Remapping with `Compose::new(f, g)` gives the same container as
/// remapping with `f` and then with `g`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Compose<F, G> {
    first: F,
    then: G,
}

impl<F, G> Compose<F, G> {
    /// Chains two mappers.
    #[inline]
    pub fn new(first: F, then: G) -> Self {
        Self { first, then }
    }

    /// Splits the chain back into its parts.
    #[inline]
    pub fn into_parts(self) -> (F, G) {
        (self.first, self.then)
    }
}

impl<E, F, G> ErrorMapper<E> for Compose<F, G>
where
    F: ErrorMapper<E>,
    G: ErrorMapper<F::Output>,
{
    type Output = G::Output;

    #[inline]
    fn map_error(&mut self, error: E) -> G::Output {
        let intermediate = self.first.map_error(error);
        self.then.map_error(intermediate)
    }
}

/// Adapts a single-argument closure into a mapper.
///
/// Useful when every error in the list has the same type, which is always the
/// case for single-error lists.
///
/// # Examples
///
/// ```
/// use expected_rail::traits::FnMapper;
/// use expected_rail::Expected;
///
/// let failed: Expected<i32, (String,)> = Expected::fail(String::from("boom"));
/// let lengths: Expected<i32, (usize,)> = failed.remap_errors(FnMapper(|e: String| e.len()));
/// assert_eq!(lengths.sole_error().copied().unwrap(), 4);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnMapper<F>(pub F);

impl<E, U, F> ErrorMapper<E> for FnMapper<F>
where
    F: FnMut(E) -> U,
{
    type Output = U;

    #[inline]
    fn map_error(&mut self, error: E) -> U {
        (self.0)(error)
    }
}

/// Normalizes every error through [`IntoErrorCode`].
///
/// This is the mapper behind
/// [`Expected::normalize_errors`](crate::Expected::normalize_errors).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToErrorCode;

impl<E: IntoErrorCode> ErrorMapper<E> for ToErrorCode {
    type Output = ErrorCode;

    #[inline]
    fn map_error(&mut self, error: E) -> ErrorCode {
        error.into_error_code()
    }
}
