//! The success-or-one-of-many-errors container.
//!
//! [`Expected<T, E>`] holds either a success value of type `T` or exactly one
//! error whose type is listed in the tuple `E`. Internally it is the union
//! `Alt<T, E::Union>`: ordinal `0` is the success value and ordinal `i` is
//! the `i`-th listed error type.
//!
//! # Examples
//!
//! ```
//! use expected_rail::Expected;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct NotFound(String);
//! #[derive(Debug, Clone, PartialEq)]
//! struct Timeout(u64);
//!
//! fn lookup(key: &str) -> Expected<u32, (NotFound, Timeout)> {
//!     match key {
//!         "answer" => Expected::new(42),
//!         "slow" => Expected::fail(Timeout(30)),
//!         other => Expected::fail(NotFound(other.to_owned())),
//!     }
//! }
//!
//! assert_eq!(lookup("answer").value(), Ok(&42));
//! assert!(lookup("slow").has_error::<Timeout, _>());
//! assert_eq!(lookup("x").error::<NotFound, _>(), Ok(&NotFound("x".into())));
//!
//! // a narrower container widens into a wider one
//! let narrow: Expected<u32, (Timeout,)> = Expected::fail(Timeout(5));
//! let wide: Expected<u32, (NotFound, Timeout)> = narrow.widen();
//! assert_eq!(wide.error::<Timeout, _>(), Ok(&Timeout(5)));
//! ```
use core::fmt::{self, Debug};
use core::hash::{Hash, Hasher};
use core::ops::{Deref, DerefMut};

use crate::traits::error_mapper::ToErrorCode;
use crate::types::bad_access::BadExpectedAccess;
use crate::types::error_code::ErrorCode;
use crate::types::error_set::{Describe, ErrorSet, Remap, SubsetOf, UnionOf};
use crate::types::unexpected::Unexpected;
use crate::types::variant::{Alt, Member, Union};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A success value of type `T`, or one error of a type listed in `E`.
///
/// `E` is a tuple of distinct error types, `()` for a container that can only
/// succeed. Exactly one alternative is live; replacing it (emplace, swap,
/// assignment) is the only transition.
///
/// # Accessors
///
/// | Query | Checked access | Contract access |
/// |-------|----------------|-----------------|
/// | [`has_value`](Self::has_value) | [`value`](Self::value), [`into_value`](Self::into_value) | `*expected` |
/// | [`has_error`](Self::has_error) | [`error`](Self::error), [`into_error`](Self::into_error) | |
/// | [`is_error`](Self::is_error) | [`unexpected`](Self::unexpected), [`into_unexpected`](Self::into_unexpected) | |
///
/// Checked accessors return [`BadExpectedAccess`] naming the alternative that
/// was live. Dereferencing an `Expected` that holds an error panics.
///
/// The checked accessors (`value*`, `into_value`, `error`, `into_error`) need
/// every error type to be `'static`: the signal is built from the live
/// error's `TypeId` and a downcast for its structured cause. With a borrowed
/// error type such as `&'a str`, use [`has_value`](Self::has_value),
/// [`as_result`](Self::as_result) or [`into_result`](Self::into_result)
/// instead.
///
/// # Examples
///
/// ```
/// use expected_rail::Expected;
///
/// let ok: Expected<i32, (String,)> = Expected::new(42);
/// assert!(ok.has_value());
/// assert_eq!(*ok, 42);
///
/// let failed: Expected<i32, (String,)> = Expected::fail(String::from("boom"));
/// assert!(!failed.has_value());
/// assert_eq!(failed.sole_error().map(String::as_str), Ok("boom"));
/// assert!(failed.value().is_err());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        transparent,
        bound(
            serialize = "T: Serialize, <E as ErrorSet>::Union: Serialize",
            deserialize = "T: Deserialize<'de>, <E as ErrorSet>::Union: Deserialize<'de>"
        )
    )
)]
pub struct Expected<T, E: ErrorSet> {
    repr: Alt<T, E::Union>,
}

impl<T, E: ErrorSet> Expected<T, E> {
    /// Creates a container holding the success value.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { repr: Alt::Here(value) }
    }

    /// Creates a container holding `error`, whose type must be listed in `E`.
    ///
    /// # Examples
    ///
    /// ```
    /// use expected_rail::Expected;
    ///
    /// let failed: Expected<(), (u8, char)> = Expected::fail('x');
    /// assert_eq!(failed.index(), 2);
    /// ```
    #[inline]
    pub fn fail<X, I>(error: X) -> Self
    where
        E::Union: Member<X, I>,
    {
        Self { repr: Alt::There(<E::Union as Member<X, I>>::inject(error)) }
    }

    /// Creates a container holding the error carried by `unexpected`.
    ///
    /// The wrapper's error list may be any subset of `E`; the live error is
    /// re-tagged as the same type in `E`. Pass a clone to keep the original.
    ///
    /// # Examples
    ///
    /// ```
    /// use expected_rail::{Expected, Unexpected};
    ///
    /// let err = Unexpected::<(char,)>::new('x');
    /// let failed: Expected<(), (u8, char)> = Expected::from_unexpected(err);
    /// assert_eq!(failed.error::<char, _>(), Ok(&'x'));
    /// ```
    #[inline]
    pub fn from_unexpected<E2, I>(unexpected: Unexpected<E2>) -> Self
    where
        E2: SubsetOf<E, I>,
    {
        Self { repr: Alt::There(<E2 as SubsetOf<E, I>>::embed_union(unexpected.error)) }
    }

    /// Converts a `Result` whose error side is an [`Unexpected`] of a subset
    /// of `E`.
    #[inline]
    pub fn from_result<E2, I>(result: Result<T, Unexpected<E2>>) -> Self
    where
        E2: SubsetOf<E, I>,
    {
        match result {
            Ok(value) => Self::new(value),
            Err(unexpected) => Self::from_unexpected::<E2, I>(unexpected),
        }
    }

    /// Builds a container directly from its union storage.
    #[inline]
    pub fn from_variant(repr: Alt<T, E::Union>) -> Self {
        Self { repr }
    }

    /// Returns the union storage.
    #[must_use]
    #[inline]
    pub fn as_variant(&self) -> &Alt<T, E::Union> {
        &self.repr
    }

    /// Consumes the container, returning its union storage.
    #[must_use]
    #[inline]
    pub fn into_variant(self) -> Alt<T, E::Union> {
        self.repr
    }

    /// Converts into a container whose error list is a superset of `E`.
    ///
    /// The live alternative is unchanged: a success stays a success, and an
    /// error of type `X` stays an error of type `X`. A target list missing any
    /// type of `E` does not compile.
    #[inline]
    pub fn widen<E2, I>(self) -> Expected<T, E2>
    where
        E2: ErrorSet,
        E: SubsetOf<E2, I>,
    {
        match self.repr {
            Alt::Here(value) => Expected::new(value),
            Alt::There(error) => {
                Expected { repr: Alt::There(<E as SubsetOf<E2, I>>::embed_union(error)) }
            }
        }
    }

    /// Borrowing form of [`widen`](Self::widen): clones the live alternative.
    #[inline]
    pub fn widen_cloned<E2, I>(&self) -> Expected<T, E2>
    where
        T: Clone,
        E::Union: Clone,
        E2: ErrorSet,
        E: SubsetOf<E2, I>,
    {
        self.clone().widen::<E2, I>()
    }

    /// Replaces the live alternative with the success value `value`.
    ///
    /// The previous alternative is dropped exactly once.
    #[inline]
    pub fn emplace(&mut self, value: T) {
        self.repr = Alt::Here(value);
    }

    /// Replaces the live alternative with the value produced by `make`.
    ///
    /// `make` runs before anything is dropped; if it panics the container
    /// keeps its previous alternative.
    #[inline]
    pub fn emplace_with<F>(&mut self, make: F)
    where
        F: FnOnce() -> T,
    {
        let value = make();
        self.emplace(value);
    }

    /// Exchanges the contents of two containers.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.repr.swap(&mut other.repr);
    }

    /// Ordinal of the live alternative: `0` for success, `i` for the `i`-th
    /// error type.
    #[must_use]
    #[inline]
    pub fn index(&self) -> usize {
        self.repr.index()
    }

    /// Returns `true` if the success value is live.
    #[must_use]
    #[inline]
    pub fn has_value(&self) -> bool {
        matches!(self.repr, Alt::Here(_))
    }

    /// Returns `true` if any error is live.
    #[must_use]
    #[inline]
    pub fn is_error(&self) -> bool {
        !self.has_value()
    }

    /// Returns `true` if the live alternative is the error type `X`.
    ///
    /// # Examples
    ///
    /// ```
    /// use expected_rail::Expected;
    ///
    /// let failed: Expected<(), (u8, char)> = Expected::fail(7u8);
    /// assert!(failed.has_error::<u8, _>());
    /// assert!(!failed.has_error::<char, _>());
    /// ```
    #[must_use]
    #[inline]
    pub fn has_error<X, I>(&self) -> bool
    where
        E::Union: Member<X, I>,
    {
        match &self.repr {
            Alt::Here(_) => false,
            Alt::There(error) => <E::Union as Member<X, I>>::get(error).is_some(),
        }
    }

    /// Returns the success value.
    ///
    /// # Errors
    ///
    /// Returns [`BadExpectedAccess`] describing the live error. When that
    /// error is error-code-like the signal carries the code.
    #[inline]
    pub fn value(&self) -> Result<&T, BadExpectedAccess>
    where
        E::Union: Describe,
    {
        match &self.repr {
            Alt::Here(value) => Ok(value),
            Alt::There(error) => Err(error.access_violation(1)),
        }
    }

    /// Mutable counterpart of [`value`](Self::value).
    ///
    /// # Errors
    ///
    /// Returns [`BadExpectedAccess`] describing the live error.
    #[inline]
    pub fn value_mut(&mut self) -> Result<&mut T, BadExpectedAccess>
    where
        E::Union: Describe,
    {
        match &mut self.repr {
            Alt::Here(value) => Ok(value),
            Alt::There(error) => Err(error.access_violation(1)),
        }
    }

    /// Consumes the container, returning the success value.
    ///
    /// # Errors
    ///
    /// Returns [`BadExpectedAccess`] describing the live error. A live
    /// `Box<dyn Error + Send + Sync>` is moved into the signal and reported as
    /// its [`source`](core::error::Error::source).
    #[inline]
    pub fn into_value(self) -> Result<T, BadExpectedAccess>
    where
        E::Union: Describe,
    {
        match self.repr {
            Alt::Here(value) => Ok(value),
            Alt::There(error) => Err(error.into_access_violation(1)),
        }
    }

    /// Returns the live error of type `X`.
    ///
    /// # Errors
    ///
    /// Returns [`BadExpectedAccess`] describing whichever alternative is live
    /// instead, the success value included.
    #[inline]
    pub fn error<X, I>(&self) -> Result<&X, BadExpectedAccess>
    where
        E::Union: Member<X, I> + Describe,
    {
        match &self.repr {
            Alt::Here(_) => Err(BadExpectedAccess::value_present::<T>()),
            Alt::There(error) => <E::Union as Member<X, I>>::get(error)
                .ok_or_else(|| error.access_violation(1)),
        }
    }

    /// Consumes the container, returning the live error of type `X`.
    ///
    /// # Errors
    ///
    /// Returns [`BadExpectedAccess`] describing whichever alternative is live
    /// instead; a live boxed error becomes its cause.
    #[inline]
    pub fn into_error<X, I>(self) -> Result<X, BadExpectedAccess>
    where
        E::Union: Member<X, I> + Describe,
    {
        match self.repr {
            Alt::Here(_) => Err(BadExpectedAccess::value_present::<T>()),
            Alt::There(error) => <E::Union as Member<X, I>>::take(error)
                .map_err(|other| other.into_access_violation(1)),
        }
    }

    /// Returns a copy of the error side.
    ///
    /// # Errors
    ///
    /// Returns [`BadExpectedAccess`] if the success value is live.
    #[inline]
    pub fn unexpected(&self) -> Result<Unexpected<E>, BadExpectedAccess>
    where
        E::Union: Clone,
    {
        match &self.repr {
            Alt::Here(_) => Err(BadExpectedAccess::value_present::<T>()),
            Alt::There(error) => Ok(Unexpected::from_union(error.clone())),
        }
    }

    /// Consumes the container, returning the error side.
    ///
    /// # Errors
    ///
    /// Returns [`BadExpectedAccess`] if the success value is live.
    #[inline]
    pub fn into_unexpected(self) -> Result<Unexpected<E>, BadExpectedAccess> {
        match self.repr {
            Alt::Here(_) => Err(BadExpectedAccess::value_present::<T>()),
            Alt::There(error) => Ok(Unexpected::from_union(error)),
        }
    }

    /// Converts into a standard `Result`, e.g. to use `?`.
    ///
    /// # Examples
    ///
    /// ```
    /// use expected_rail::{Expected, Unexpected};
    ///
    /// fn double(input: Expected<i32, (String,)>) -> Result<i32, Unexpected<(String,)>> {
    ///     Ok(input.into_result()? * 2)
    /// }
    ///
    /// assert_eq!(double(Expected::new(21)), Ok(42));
    /// assert!(double(Expected::fail(String::from("nope"))).is_err());
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, Unexpected<E>> {
        match self.repr {
            Alt::Here(value) => Ok(value),
            Alt::There(error) => Err(Unexpected::from_union(error)),
        }
    }

    /// Borrows the success value as a `Result`, the error side as its union.
    #[inline]
    pub fn as_result(&self) -> Result<&T, &E::Union> {
        match &self.repr {
            Alt::Here(value) => Ok(value),
            Alt::There(error) => Err(error),
        }
    }

    /// Maps the success value, leaving any error untouched.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Expected<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self.repr {
            Alt::Here(value) => Expected::new(f(value)),
            Alt::There(error) => Expected { repr: Alt::There(error) },
        }
    }

    /// Maps the live error through `mapper` into a container with error list
    /// `R`.
    ///
    /// A success value is moved across without calling `mapper`. Otherwise the
    /// mapper is called once, on the live error, and its output becomes the
    /// error of the result. Every output type must be listed in `R`; sources
    /// that map to the same type share that single entry of `R`. `R` is
    /// usually inferred from the binding the result is assigned to.
    ///
    /// # Examples
    ///
    /// ```
    /// use expected_rail::{error_mapper, Expected};
    ///
    /// error_mapper! {
    ///     struct Status;
    ///     |_e: std::num::ParseIntError| -> u16 { 400 }
    ///     |_e: std::fmt::Error| -> u16 { 500 }
    /// }
    ///
    /// let parsed: Expected<i32, (std::num::ParseIntError, std::fmt::Error)> =
    ///     Expected::fail("x".parse::<i32>().unwrap_err());
    ///
    /// let status: Expected<i32, (u16,)> = parsed.remap_errors(Status);
    /// assert_eq!(status.sole_error(), Ok(&400));
    /// ```
    pub fn remap_errors<R, M, I>(self, mut mapper: M) -> Expected<T, R>
    where
        R: ErrorSet,
        E::Union: Remap<M, R::Union, I>,
    {
        match self.repr {
            Alt::Here(value) => Expected::new(value),
            Alt::There(error) => {
                let mapped = <E::Union as Remap<M, R::Union, I>>::remap(error, &mut mapper);
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    target: "expected_rail::remap",
                    to = mapped.index() + 1,
                    "remapped error"
                );
                Expected { repr: Alt::There(mapped) }
            }
        }
    }

    /// Collapses every error type into a single [`ErrorCode`].
    ///
    /// Shorthand for [`remap_errors`](Self::remap_errors) with
    /// [`ToErrorCode`]; every listed type must implement
    /// [`IntoErrorCode`](crate::traits::IntoErrorCode).
    ///
    /// # Examples
    ///
    /// ```
    /// use expected_rail::Expected;
    ///
    /// let parsed: Expected<i32, (std::num::ParseIntError, std::str::ParseBoolError)> =
    ///     Expected::fail("yes".parse::<bool>().unwrap_err());
    ///
    /// let code = parsed.normalize_errors().into_sole_error().unwrap();
    /// assert_eq!(code.category(), "parse");
    /// ```
    #[inline]
    pub fn normalize_errors<I>(self) -> Expected<T, (ErrorCode,)>
    where
        E::Union: Remap<ToErrorCode, UnionOf<(ErrorCode,)>, I>,
    {
        self.remap_errors::<(ErrorCode,), ToErrorCode, I>(ToErrorCode)
    }
}

impl<T, A> Expected<T, (A,)> {
    /// Returns `true` if the only listed error type is live.
    #[must_use]
    #[inline]
    pub fn has_sole_error(&self) -> bool {
        self.is_error()
    }

    /// Returns the error of a single-error container.
    ///
    /// # Errors
    ///
    /// Returns [`BadExpectedAccess`] if the success value is live.
    #[inline]
    pub fn sole_error(&self) -> Result<&A, BadExpectedAccess> {
        match &self.repr {
            Alt::Here(_) => Err(BadExpectedAccess::value_present::<T>()),
            Alt::There(Alt::Here(error)) => Ok(error),
            Alt::There(Alt::There(never)) => match *never {},
        }
    }

    /// Consumes a single-error container, returning its error.
    ///
    /// # Errors
    ///
    /// Returns [`BadExpectedAccess`] if the success value is live.
    #[inline]
    pub fn into_sole_error(self) -> Result<A, BadExpectedAccess> {
        match self.repr {
            Alt::Here(_) => Err(BadExpectedAccess::value_present::<T>()),
            Alt::There(Alt::Here(error)) => Ok(error),
            Alt::There(Alt::There(never)) => match never {},
        }
    }
}

impl<T> Expected<T, ()> {
    /// Unwraps a container that cannot hold an error.
    #[inline]
    pub fn into_inner(self) -> T {
        match self.repr {
            Alt::Here(value) => value,
            Alt::There(never) => match never {},
        }
    }
}

/// Exchanges the contents of two containers.
#[inline]
pub fn swap<T, E: ErrorSet>(left: &mut Expected<T, E>, right: &mut Expected<T, E>) {
    left.swap(right);
}

impl<T: Default, E: ErrorSet> Default for Expected<T, E> {
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T, E: ErrorSet> From<T> for Expected<T, E> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T, E: ErrorSet> From<Expected<T, E>> for Result<T, Unexpected<E>> {
    #[inline]
    fn from(expected: Expected<T, E>) -> Self {
        expected.into_result()
    }
}

impl<T, E: ErrorSet> Deref for Expected<T, E> {
    type Target = T;

    /// # Panics
    ///
    /// Panics if an error is live.
    #[inline]
    fn deref(&self) -> &T {
        match &self.repr {
            Alt::Here(value) => value,
            Alt::There(error) => panic!(
                "dereferenced an Expected holding error #{} instead of a value",
                error.index() + 1
            ),
        }
    }
}

impl<T, E: ErrorSet> DerefMut for Expected<T, E> {
    /// # Panics
    ///
    /// Panics if an error is live.
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        match &mut self.repr {
            Alt::Here(value) => value,
            Alt::There(error) => panic!(
                "dereferenced an Expected holding error #{} instead of a value",
                error.index() + 1
            ),
        }
    }
}

impl<T: Clone, E: ErrorSet> Clone for Expected<T, E>
where
    E::Union: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self { repr: self.repr.clone() }
    }
}

impl<T: Copy, E: ErrorSet> Copy for Expected<T, E> where E::Union: Copy {}

impl<T: PartialEq, E: ErrorSet> PartialEq for Expected<T, E>
where
    E::Union: PartialEq,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.repr == other.repr
    }
}

impl<T: Eq, E: ErrorSet> Eq for Expected<T, E> where E::Union: Eq {}

impl<T: Hash, E: ErrorSet> Hash for Expected<T, E>
where
    E::Union: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.repr.hash(state);
    }
}

impl<T: Debug, E: ErrorSet> Debug for Expected<T, E>
where
    E::Union: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Alt::Here(value) => f.debug_tuple("Value").field(value).finish(),
            Alt::There(error) => f.debug_tuple("Error").field(error).finish(),
        }
    }
}
