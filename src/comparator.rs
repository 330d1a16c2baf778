//! Key ordering for zip trees.
//!
//! A tree is ordered by a single "less-than" predicate. Every other relation the tree needs is
//! derived from it here, so callers never hand-write a `>=` that disagrees with their `<`.

/// A strict weak ordering over `T`, described by one `less` predicate.
///
/// Only [`less`](Comparator::less) must be provided. The remaining relations are derived from it
/// and should not be overridden with anything inconsistent; the tree's invariants rely on all of
/// them agreeing.
///
/// Any `Fn(&T, &T) -> bool` closure is a comparator:
///
/// ```
/// use zipzip_tree::Comparator;
///
/// let by_len = |a: &&str, b: &&str| a.len() < b.len();
/// assert!(by_len.less(&"ab", &"abc"));
/// assert!(by_len.equal(&"ab", &"xy"));
/// assert!(by_len.greater_or_equal(&"abc", &"xy"));
/// ```
pub trait Comparator<T: ?Sized> {
    /// Returns `true` if `a` is ordered before `b`.
    fn less(&self, a: &T, b: &T) -> bool;

    /// `a > b`, i.e. `b < a`.
    #[inline]
    fn greater(&self, a: &T, b: &T) -> bool {
        self.less(b, a)
    }

    /// `a <= b`, i.e. `!(b < a)`.
    #[inline]
    fn less_or_equal(&self, a: &T, b: &T) -> bool {
        !self.less(b, a)
    }

    /// `a >= b`, i.e. `!(a < b)`.
    #[inline]
    fn greater_or_equal(&self, a: &T, b: &T) -> bool {
        !self.less(a, b)
    }

    /// Neither is ordered before the other.
    #[inline]
    fn equal(&self, a: &T, b: &T) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Orders keys by their [`Ord`] implementation.
///
/// ```
/// use zipzip_tree::{Comparator, Natural};
///
/// assert!(Natural.less(&1, &2));
/// assert!(!Natural.less(&2, &2));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Natural;

impl<T: ?Sized + Ord> Comparator<T> for Natural {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}
