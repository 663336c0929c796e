//! Three-way comparison used by the search tree.

use core::cmp::Ordering;

/// A total order over `T`.
///
/// Implemented by [`Natural`] for `T: Ord` and by every
/// `Fn(&T, &T) -> Ordering` closure, so a tree can be ordered by a key
/// projection or in reverse without wrapping the element type.
///
/// # Example
///
/// ```
/// use core::cmp::Ordering;
/// use dstruct_collections::{Compare, Natural};
///
/// assert_eq!(Natural.compare(&1, &2), Ordering::Less);
///
/// let reverse = |a: &i32, b: &i32| b.cmp(a);
/// assert_eq!(reverse.compare(&1, &2), Ordering::Greater);
/// ```
pub trait Compare<T: ?Sized> {
    /// Compares `a` against `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Orders by the element type's [`Ord`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
