//! Type-level algebra over lists of error types.
//!
//! An error list is written as a tuple, `(NotFound, Timeout, io::Error)`, and
//! [`ErrorSet`] maps it onto its [`Union`] storage. The remaining traits are
//! the set operations the container needs, all resolved by the compiler:
//!
//! - [`Embed`] / [`SubsetOf`]: every alternative of one union is an
//!   alternative of another (containment).
//! - [`Remap`]: every alternative, passed through an [`ErrorMapper`], lands in
//!   a target union. Mapping several sources to the same type lands them in a
//!   single target slot, which is how remapped lists stay free of duplicates.
//! - [`Describe`]: runtime names and `TypeId`s, for diagnostics.
//!
//! # Examples
//!
//! ```
//! use expected_rail::types::error_set::{ErrorSet, SubsetOf};
//!
//! #[derive(Debug)]
//! struct NotFound;
//! #[derive(Debug)]
//! struct Timeout;
//!
//! fn assert_subset<S: SubsetOf<Sup, I>, Sup: ErrorSet, I>() {}
//!
//! assert_subset::<(Timeout,), (NotFound, Timeout), _>();
//! assert_eq!(<(NotFound, Timeout) as ErrorSet>::LEN, 2);
//! assert!(<(NotFound, Timeout)>::is_distinct());
//! ```
use core::any::{type_name, TypeId};

use crate::traits::ErrorMapper;
use crate::types::bad_access::BadExpectedAccess;
use crate::types::variant::{Alt, Member, Never, Union};
use crate::types::ErrorVec;

/// An ordered list of error types, written as a tuple.
///
/// Implemented for `()` and for tuples of up to twelve types. The list must
/// not name the same type twice: members are located by type, and a
/// duplicated type makes every lookup of it ambiguous.
pub trait ErrorSet {
    /// Tagged union holding exactly one of the listed types.
    type Union: Union;

    /// Number of error types in the list.
    const LEN: usize = <Self::Union as Union>::LEN;

    /// Type names of the members, in declaration order.
    #[must_use]
    fn type_names() -> ErrorVec<&'static str>
    where
        Self::Union: Describe,
    {
        let mut types = ErrorVec::new();
        <Self::Union as Describe>::collect_types(&mut types);
        types.into_iter().map(|(_, name)| name).collect()
    }

    /// Returns `true` if no type appears twice in the list.
    #[must_use]
    fn is_distinct() -> bool
    where
        Self::Union: Describe,
    {
        let mut types = ErrorVec::new();
        <Self::Union as Describe>::collect_types(&mut types);
        types
            .iter()
            .enumerate()
            .all(|(i, (id, _))| types[i + 1..].iter().all(|(other, _)| other != id))
    }
}

/// Union storage of the error list `E`.
pub type UnionOf<E> = <E as ErrorSet>::Union;

impl ErrorSet for () {
    type Union = Never;
}

macro_rules! union_of {
    () => { Never };
    ($head:ident $(, $tail:ident)*) => { Alt<$head, union_of!($($tail),*)> };
}

macro_rules! error_set_tuple {
    () => {};
    ($head:ident $(, $tail:ident)*) => {
        impl<$head $(, $tail)*> ErrorSet for ($head, $($tail,)*) {
            type Union = union_of!($head $(, $tail)*);
        }

        error_set_tuple!($($tail),*);
    };
}

error_set_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);

/// Moves a union into a wider union that lists all of its alternatives.
///
/// `Indices` is a cons list of [`Member`] witnesses, one per alternative,
/// inferred by the compiler.
pub trait Embed<Target, Indices> {
    /// Re-tags the live alternative as the same type in `Target`.
    fn embed(self) -> Target;
}

impl<Target> Embed<Target, ()> for Never {
    #[inline]
    fn embed(self) -> Target {
        match self {}
    }
}

impl<H, R, Target, HI, RI> Embed<Target, (HI, RI)> for Alt<H, R>
where
    Target: Member<H, HI>,
    R: Embed<Target, RI>,
{
    #[inline]
    fn embed(self) -> Target {
        match self {
            Alt::Here(value) => <Target as Member<H, HI>>::inject(value),
            Alt::There(rest) => rest.embed(),
        }
    }
}

/// Error-list containment: every type of `Self` is also listed in `Super`.
///
/// Blanket-implemented from [`Embed`]; there is nothing to implement by hand.
pub trait SubsetOf<Super: ErrorSet, Indices>: ErrorSet {
    /// Re-tags a union of `Self` as a union of `Super`.
    fn embed_union(union: Self::Union) -> Super::Union;
}

impl<S, Super, Indices> SubsetOf<Super, Indices> for S
where
    S: ErrorSet,
    Super: ErrorSet,
    S::Union: Embed<Super::Union, Indices>,
{
    #[inline]
    fn embed_union(union: S::Union) -> Super::Union {
        union.embed()
    }
}

/// Sends the live alternative through a mapper into a target union.
///
/// Implemented when the mapper accepts every alternative and each output type
/// is a member of `Target`. A missing mapping or an output outside `Target`
/// is a compile error.
pub trait Remap<M, Target, Indices> {
    /// Calls `mapper` once on the live alternative and injects the result.
    fn remap(self, mapper: &mut M) -> Target;
}

impl<M, Target> Remap<M, Target, ()> for Never {
    #[inline]
    fn remap(self, _: &mut M) -> Target {
        match self {}
    }
}

impl<H, R, M, Target, HI, RI> Remap<M, Target, (HI, RI)> for Alt<H, R>
where
    M: ErrorMapper<H>,
    Target: Member<M::Output, HI>,
    R: Remap<M, Target, RI>,
{
    #[inline]
    fn remap(self, mapper: &mut M) -> Target {
        match self {
            Alt::Here(value) => {
                <Target as Member<M::Output, HI>>::inject(ErrorMapper::<H>::map_error(mapper, value))
            }
            Alt::There(rest) => rest.remap(mapper),
        }
    }
}

/// Runtime view of a union's alternatives.
///
/// Requires `'static` alternatives, since it is built on [`TypeId`] and on
/// downcasting the live payload.
pub trait Describe: Union {
    /// Appends `(TypeId, type name)` for every alternative, in order.
    fn collect_types(out: &mut ErrorVec<(TypeId, &'static str)>);

    /// Type name of the live alternative.
    fn active_type_name(&self) -> &'static str;

    /// Builds the access-violation signal for the live alternative, numbering
    /// ordinals from `first`.
    fn access_violation(&self, first: usize) -> BadExpectedAccess;

    /// Consuming form of [`access_violation`](Describe::access_violation):
    /// a live boxed error moves into the signal as its cause.
    fn into_access_violation(self, first: usize) -> BadExpectedAccess;
}

impl Describe for Never {
    fn collect_types(_: &mut ErrorVec<(TypeId, &'static str)>) {}

    fn active_type_name(&self) -> &'static str {
        match *self {}
    }

    fn access_violation(&self, _: usize) -> BadExpectedAccess {
        match *self {}
    }

    fn into_access_violation(self, _: usize) -> BadExpectedAccess {
        match self {}
    }
}

impl<H: 'static, R: Describe> Describe for Alt<H, R> {
    fn collect_types(out: &mut ErrorVec<(TypeId, &'static str)>) {
        out.push((TypeId::of::<H>(), type_name::<H>()));
        R::collect_types(out);
    }

    fn active_type_name(&self) -> &'static str {
        match self {
            Alt::Here(_) => type_name::<H>(),
            Alt::There(rest) => rest.active_type_name(),
        }
    }

    fn access_violation(&self, first: usize) -> BadExpectedAccess {
        match self {
            Alt::Here(value) => BadExpectedAccess::from_error(value, first),
            Alt::There(rest) => rest.access_violation(first + 1),
        }
    }

    fn into_access_violation(self, first: usize) -> BadExpectedAccess {
        match self {
            Alt::Here(value) => BadExpectedAccess::from_owned_error(value, first),
            Alt::There(rest) => rest.into_access_violation(first + 1),
        }
    }
}
