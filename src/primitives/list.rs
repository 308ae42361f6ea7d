//! Type-level allow-lists.
//!
//! An allow-list is a cons list of principal types:
//!
//! ```text
//! allow_list![A, B, C]  ==>  Cons<A, Cons<B, Cons<C, Nil>>>
//! ```
//!
//! Membership is proven by trait selection over a structural index:
//!
//! ```text
//! Cons<A, ..>: Permits<A, Here>
//! Cons<X, T>:  Permits<A, There<I>>   if T: Permits<A, I>
//! Nil:         (never permits anything)
//! ```
//!
//! The index is inferred at every call site, so callers never name it.
//! A principal listed twice makes the index ambiguous, which is why
//! `allow_list!` rejects duplicates up front.

use core::any::type_name;
use core::fmt;
use core::marker::PhantomData;

use crate::key::Principal;

mod sealed {
    pub trait List {}
    pub trait Member<P: ?Sized, I> {}
}

// =============================================================================
// List cells
// =============================================================================

/// Empty allow-list.
pub struct Nil;

/// Allow-list cell: `H` followed by the rest of the list `T`.
pub struct Cons<H: ?Sized, T>(PhantomData<fn() -> (PhantomData<H>, T)>);

/// Index witness: the principal is the head of the list.
pub struct Here;

/// Index witness: the principal is somewhere in the tail, at `I`.
pub struct There<I>(PhantomData<I>);

// =============================================================================
// AllowList
// =============================================================================

/// A closed set of principals.
///
/// Sealed: only `Nil` and `Cons` cells of principals are allow-lists.
pub trait AllowList: sealed::List {
    /// Number of principals in the list.
    const LEN: usize;

    /// Push the name of every principal, in declaration order.
    fn entries(list: &mut fmt::DebugList<'_, '_>);
}

impl sealed::List for Nil {}

impl AllowList for Nil {
    const LEN: usize = 0;

    #[inline]
    fn entries(_list: &mut fmt::DebugList<'_, '_>) {}
}

impl<H: Principal + ?Sized, T: AllowList> sealed::List for Cons<H, T> {}

impl<H: Principal + ?Sized, T: AllowList> AllowList for Cons<H, T> {
    const LEN: usize = 1 + T::LEN;

    fn entries(list: &mut fmt::DebugList<'_, '_>) {
        list.entry(&format_args!("{}", type_name::<H>()));
        T::entries(list);
    }
}

// =============================================================================
// Permits
// =============================================================================

/// Proof that principal `P` is listed in `Self`.
///
/// Sealed: the only implementations are the two structural rules above,
/// so membership cannot be granted outside the list itself.
#[diagnostic::on_unimplemented(
    message = "`{P}` is not an authorized caller for this passkey",
    label = "allow-list `{Self}` does not name `{P}`",
    note = "add `{P}` to the `allow_list!`/`#[guarded]` list at the operation's definition site"
)]
pub trait Permits<P: ?Sized, I>: sealed::Member<P, I> {}

impl<P: ?Sized, T> sealed::Member<P, Here> for Cons<P, T> {}
impl<P: ?Sized, T> Permits<P, Here> for Cons<P, T> {}

impl<P: ?Sized, H: ?Sized, T, I> sealed::Member<P, There<I>> for Cons<H, T> where T: Permits<P, I> {}
impl<P: ?Sized, H: ?Sized, T, I> Permits<P, There<I>> for Cons<H, T> where T: Permits<P, I> {}
