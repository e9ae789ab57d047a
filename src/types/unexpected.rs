use core::fmt::{self, Debug, Display};
use core::hash::{Hash, Hasher};

use crate::types::bad_access::BadExpectedAccess;
use crate::types::error_set::{Describe, ErrorSet, Remap, SubsetOf};
use crate::types::variant::{Member, Union};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The error side of an [`Expected`](crate::Expected), independent of any
/// success type: exactly one of the error types listed in `E`.
///
/// Ordinals here count from `0` over the error list; inside an `Expected` the
/// same error sits at ordinal `index() + 1`.
///
/// # Examples
///
/// ```
/// use expected_rail::Unexpected;
///
/// let err = Unexpected::<(u16, &str)>::new("timeout");
/// assert_eq!(err.index(), 1);
/// assert!(err.is::<&str, _>());
/// assert_eq!(err.get::<u16, _>(), None);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        transparent,
        bound(
            serialize = "<E as ErrorSet>::Union: Serialize",
            deserialize = "<E as ErrorSet>::Union: Deserialize<'de>"
        )
    )
)]
pub struct Unexpected<E: ErrorSet> {
    pub(crate) error: E::Union,
}

impl<E: ErrorSet> Unexpected<E> {
    /// Wraps a single error value of one of the listed types.
    #[inline]
    pub fn new<X, I>(error: X) -> Self
    where
        E::Union: Member<X, I>,
    {
        Self { error: <E::Union as Member<X, I>>::inject(error) }
    }

    /// Wraps an already-built union.
    #[inline]
    pub fn from_union(error: E::Union) -> Self {
        Self { error }
    }

    /// Returns the underlying union.
    #[must_use]
    #[inline]
    pub fn as_union(&self) -> &E::Union {
        &self.error
    }

    /// Consumes the wrapper, returning the underlying union.
    #[must_use]
    #[inline]
    pub fn into_union(self) -> E::Union {
        self.error
    }

    /// Ordinal of the live error within `E`.
    #[must_use]
    #[inline]
    pub fn index(&self) -> usize {
        self.error.index()
    }

    /// Returns `true` if the live error is of type `X`.
    #[must_use]
    #[inline]
    pub fn is<X, I>(&self) -> bool
    where
        E::Union: Member<X, I>,
    {
        <E::Union as Member<X, I>>::get(&self.error).is_some()
    }

    /// Returns the live error if it is of type `X`.
    #[must_use]
    #[inline]
    pub fn get<X, I>(&self) -> Option<&X>
    where
        E::Union: Member<X, I>,
    {
        <E::Union as Member<X, I>>::get(&self.error)
    }

    /// Moves the live error out if it is of type `X`.
    ///
    /// # Errors
    ///
    /// Returns [`BadExpectedAccess`] describing the live error otherwise,
    /// numbered as it would be inside an `Expected`. A live boxed error
    /// becomes the signal's cause.
    pub fn take<X, I>(self) -> Result<X, BadExpectedAccess>
    where
        E::Union: Member<X, I> + Describe,
    {
        <E::Union as Member<X, I>>::take(self.error)
            .map_err(|other| other.into_access_violation(1))
    }

    /// Type name of the live error.
    #[must_use]
    pub fn type_name(&self) -> &'static str
    where
        E::Union: Describe,
    {
        self.error.active_type_name()
    }

    /// Re-tags the live error under a wider error list.
    #[inline]
    pub fn widen<E2, I>(self) -> Unexpected<E2>
    where
        E2: ErrorSet,
        E: SubsetOf<E2, I>,
    {
        Unexpected { error: <E as SubsetOf<E2, I>>::embed_union(self.error) }
    }

    /// Passes the live error through `mapper`, producing an error of list `R`.
    ///
    /// This is the error-only form of
    /// [`Expected::remap_errors`](crate::Expected::remap_errors).
    pub fn remap<R, M, I>(self, mut mapper: M) -> Unexpected<R>
    where
        R: ErrorSet,
        E::Union: Remap<M, R::Union, I>,
    {
        Unexpected { error: <E::Union as Remap<M, R::Union, I>>::remap(self.error, &mut mapper) }
    }
}

impl<E: ErrorSet> Clone for Unexpected<E>
where
    E::Union: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self { error: self.error.clone() }
    }
}

impl<E: ErrorSet> Copy for Unexpected<E> where E::Union: Copy {}

impl<E: ErrorSet> PartialEq for Unexpected<E>
where
    E::Union: PartialEq,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.error == other.error
    }
}

impl<E: ErrorSet> Eq for Unexpected<E> where E::Union: Eq {}

impl<E: ErrorSet> Hash for Unexpected<E>
where
    E::Union: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.error.hash(state);
    }
}

impl<E: ErrorSet> Debug for Unexpected<E>
where
    E::Union: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Unexpected").field(&self.error).finish()
    }
}

impl<E: ErrorSet> Display for Unexpected<E>
where
    E::Union: Display,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.error, f)
    }
}

impl<E: ErrorSet> core::error::Error for Unexpected<E>
where
    E::Union: core::error::Error,
{
    #[inline]
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        core::error::Error::source(&self.error)
    }
}
