//! Tagged-union storage used by [`Expected`](crate::Expected) and
//! [`Unexpected`](crate::Unexpected).
//!
//! A union over the ordered alternatives `A, B, C` is spelled
//! `Alt<A, Alt<B, Alt<C, Never>>>`. Exactly one alternative is live at a time;
//! its position is reported by [`Union::index`]. Typed access goes through
//! [`Member`], whose second parameter is an index witness ([`Zero`],
//! [`Succ`]) the compiler infers from the requested type, or that the caller
//! names to select an alternative by ordinal.
//!
//! # Examples
//!
//! ```
//! use expected_rail::types::variant::{Alt, Member, Never, Succ, Union, Zero};
//!
//! type Abc = Alt<u8, Alt<&'static str, Alt<char, Never>>>;
//!
//! let mut v = Abc::inject("two");
//! assert_eq!(v.index(), 1);
//! assert_eq!(Member::<&str, _>::get(&v), Some(&"two"));
//! assert_eq!(Member::<u8, _>::get(&v), None);
//!
//! // by ordinal: the witness picks the alternative, the type follows
//! v.emplace::<_, Succ<Succ<Zero>>>('c');
//! assert_eq!(v.index(), 2);
//! assert_eq!(<Abc as Member<char, Succ<Succ<Zero>>>>::ORDINAL, 2);
//! ```
use core::fmt::{self, Display};
use core::marker::PhantomData;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The empty union. It has no values, so code holding a `Never` is unreachable.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Never {}

/// One step of a union: either the head alternative `H` or one of the
/// alternatives of the remaining union `R`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Alt<H, R> {
    Here(H),
    There(R),
}

/// Index witness for the first alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Zero;

/// Index witness for the alternative after `I`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Succ<I>(PhantomData<I>);

/// A closed, ordered set of alternatives of which exactly one is live.
pub trait Union: Sized {
    /// Number of alternatives.
    const LEN: usize;

    /// Ordinal of the live alternative, in `0..LEN`.
    fn index(&self) -> usize;
}

impl Union for Never {
    const LEN: usize = 0;

    #[inline]
    fn index(&self) -> usize {
        match *self {}
    }
}

impl<H, R: Union> Union for Alt<H, R> {
    const LEN: usize = R::LEN + 1;

    #[inline]
    fn index(&self) -> usize {
        match self {
            Alt::Here(_) => 0,
            Alt::There(rest) => rest.index() + 1,
        }
    }
}

/// Typed access to the alternative `X`, located by the index witness `I`.
///
/// Resolution fails to compile when `X` is not an alternative of the union,
/// and is ambiguous (also a compile error) when `X` appears more than once.
pub trait Member<X, I>: Union {
    /// Ordinal of `X` within the union.
    const ORDINAL: usize;

    /// Builds the union with `X` live.
    fn inject(value: X) -> Self;

    /// Returns the payload if `X` is the live alternative.
    fn get(&self) -> Option<&X>;

    /// Mutable counterpart of [`get`](Member::get).
    fn get_mut(&mut self) -> Option<&mut X>;

    /// Moves the payload out, or hands the union back untouched.
    fn take(self) -> Result<X, Self>;
}

impl<H, R: Union> Member<H, Zero> for Alt<H, R> {
    const ORDINAL: usize = 0;

    #[inline]
    fn inject(value: H) -> Self {
        Alt::Here(value)
    }

    #[inline]
    fn get(&self) -> Option<&H> {
        match self {
            Alt::Here(value) => Some(value),
            Alt::There(_) => None,
        }
    }

    #[inline]
    fn get_mut(&mut self) -> Option<&mut H> {
        match self {
            Alt::Here(value) => Some(value),
            Alt::There(_) => None,
        }
    }

    #[inline]
    fn take(self) -> Result<H, Self> {
        match self {
            Alt::Here(value) => Ok(value),
            other => Err(other),
        }
    }
}

impl<H, R, X, I> Member<X, Succ<I>> for Alt<H, R>
where
    R: Member<X, I>,
{
    const ORDINAL: usize = <R as Member<X, I>>::ORDINAL + 1;

    #[inline]
    fn inject(value: X) -> Self {
        Alt::There(<R as Member<X, I>>::inject(value))
    }

    #[inline]
    fn get(&self) -> Option<&X> {
        match self {
            Alt::Here(_) => None,
            Alt::There(rest) => Member::<X, I>::get(rest),
        }
    }

    #[inline]
    fn get_mut(&mut self) -> Option<&mut X> {
        match self {
            Alt::Here(_) => None,
            Alt::There(rest) => Member::<X, I>::get_mut(rest),
        }
    }

    #[inline]
    fn take(self) -> Result<X, Self> {
        match self {
            Alt::Here(head) => Err(Alt::Here(head)),
            Alt::There(rest) => Member::<X, I>::take(rest).map_err(Alt::There),
        }
    }
}

impl<H, R: Union> Alt<H, R> {
    /// Returns `true` if `X` is the live alternative.
    #[must_use]
    #[inline]
    pub fn is<X, I>(&self) -> bool
    where
        Self: Member<X, I>,
    {
        Member::<X, I>::get(self).is_some()
    }

    /// Replaces the live alternative with `value`.
    ///
    /// `value` is fully built before the call, so a panic while producing it
    /// leaves the previous alternative in place. The previous payload is
    /// dropped exactly once.
    #[inline]
    pub fn emplace<X, I>(&mut self, value: X)
    where
        Self: Member<X, I>,
    {
        *self = <Self as Member<X, I>>::inject(value);
    }

    /// Exchanges the contents of two unions, whatever alternatives they hold.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }
}

impl Display for Never {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl<H: Display, R: Display> Display for Alt<H, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alt::Here(value) => Display::fmt(value, f),
            Alt::There(rest) => Display::fmt(rest, f),
        }
    }
}

impl core::error::Error for Never {}

impl<H, R> core::error::Error for Alt<H, R>
where
    H: core::error::Error,
    R: core::error::Error,
{
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Alt::Here(value) => value.source(),
            Alt::There(rest) => rest.source(),
        }
    }
}
