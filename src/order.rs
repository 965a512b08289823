//! Ordering predicates that decide which element of a [`PriorityQueue`] is
//! polled first.
//!
//! Any closure of the form `Fn(&T, &T) -> bool` is already a predicate. The
//! zero-sized [`MinOrder`] and [`MaxOrder`] delegate to the [`Ord`]
//! implementation of `T`, and are what the queue picks when constructed via
//! [`Default`] or [`FromIterator`].
//!
//! [`PriorityQueue`]: crate::PriorityQueue

use core::{fmt, marker::PhantomData};

/// A strict "ordered before" relation over `T`.
///
/// `less(this, that)` returns `true` when `this` should leave the queue
/// before `that`. The element for which no other element is `less` sits at
/// the head of the queue.
///
/// The relation is expected to be a strict weak ordering: irreflexive,
/// asymmetric and transitive. This is not checked. A predicate that breaks
/// those rules leaves the extraction order unspecified, but never causes
/// memory unsafety.
///
/// # Examples
///
/// ```
/// use prqueue::Less;
///
/// let by_len = |a: &&str, b: &&str| a.len() < b.len();
/// assert!(by_len.less(&"ab", &"abc"));
/// assert!(!by_len.less(&"abc", &"xyz"));
/// ```
pub trait Less<T: ?Sized> {
    /// Returns `true` if `this` is ordered strictly before `that`.
    fn less(&self, this: &T, that: &T) -> bool;
}

impl<T: ?Sized, F> Less<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, this: &T, that: &T) -> bool {
        self(this, that)
    }
}

macro_rules! ord_orders {
    ($($(#[$attrs:meta])* $name:ident => $op:tt),* $(,)?) => {$(
        $(#[$attrs])*
        pub struct $name<T: ?Sized>(PhantomData<fn(&T)>);

        impl<T: ?Sized + Ord> $name<T> {
            /// Creates the order.
            #[must_use]
            pub const fn new() -> Self {
                Self(PhantomData)
            }
        }

        impl<T: ?Sized + Ord> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T: ?Sized + Ord> Clone for $name<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T: ?Sized + Ord> Copy for $name<T> {}

        impl<T: ?Sized + Ord> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($name))
            }
        }

        impl<T: ?Sized + Ord> Less<T> for $name<T> {
            #[inline]
            fn less(&self, this: &T, that: &T) -> bool {
                this $op that
            }
        }
    )*};
}

ord_orders! {
    /// A zero-sized order that polls the smallest element first, according
    /// to the [`Ord`] implementation of `T`.
    MinOrder => <,

    /// A zero-sized order that polls the greatest element first, according
    /// to the [`Ord`] implementation of `T`.
    MaxOrder => >,
}
