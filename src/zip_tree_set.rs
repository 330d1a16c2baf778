use alloc::string::String;
use core::fmt::{self, Write};
use core::iter::FusedIterator;

use rand::RngCore;
use rand::rngs::SmallRng;

use crate::ZipTreeMap;
use crate::comparator::{Comparator, Natural};
use crate::zip_tree_map::Keys;

mod capacity;
mod cursor;
mod order_statistic;

pub use cursor::{Cursor, CursorMut};

/// An ordered set based on a zip-zip tree.
///
/// A set is a [`ZipTreeMap`] with `()` values; see its documentation for how keys are ordered
/// and stored.
///
/// # Examples
///
/// ```
/// use zipzip_tree::{Natural, ZipTreeSet};
///
/// let mut books = ZipTreeSet::new(Natural);
///
/// // Add some books.
/// books.insert("A Dance With Dragons");
/// books.insert("To Kill a Mockingbird");
/// books.insert("The Odyssey");
/// books.insert("The Great Gatsby");
///
/// // Check for a specific one.
/// if !books.contains(&"The Winds of Winter") {
///     println!("We have {} books, but The Winds of Winter ain't one.",
///              books.len());
/// }
///
/// // Remove a book.
/// books.delete(&"The Odyssey");
///
/// // Iterate over everything.
/// for book in &books {
///     println!("{book}");
/// }
/// ```
///
/// Sorted positions are available in both directions:
///
/// ```
/// use zipzip_tree::{Natural, ZipTreeSet};
///
/// let mut set = ZipTreeSet::new(Natural);
/// for key in [5, 1, 9, 3] {
///     set.insert(key);
/// }
/// assert_eq!(set.at_index(0).key(), Some(&1));
/// assert_eq!(set.at_index(3).key(), Some(&9));
/// assert_eq!(set.index_of(&5), Some(2));
/// ```
#[derive(Clone)]
pub struct ZipTreeSet<K, C = Natural, R = SmallRng> {
    map: ZipTreeMap<K, (), C, R>,
}

/// An iterator over the items of a `ZipTreeSet`, in order.
///
/// This `struct` is created by the [`iter`] method on [`ZipTreeSet`].
/// See its documentation for more.
///
/// [`iter`]: ZipTreeSet::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K> {
    iter: Keys<'a, K, ()>,
}

#[cfg(feature = "std")]
impl<K, C> ZipTreeSet<K, C, SmallRng> {
    /// Makes a new, empty `ZipTreeSet` ordered by `less`, with a rank source seeded by the OS.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeSet};
    ///
    /// let mut set: ZipTreeSet<i32> = ZipTreeSet::new(Natural);
    /// ```
    #[must_use]
    pub fn new(less: C) -> Self {
        ZipTreeSet {
            map: ZipTreeMap::new(less),
        }
    }
}

impl<K, C, R> ZipTreeSet<K, C, R> {
    /// Makes a new, empty `ZipTreeSet` ordered by `less` that draws ranks from `rng`.
    #[must_use]
    pub const fn with_rng(less: C, rng: R) -> Self {
        ZipTreeSet {
            map: ZipTreeMap::with_rng(less, rng),
        }
    }

    /// Clears the set, removing all elements.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeSet};
    ///
    /// let mut v = ZipTreeSet::new(Natural);
    /// assert_eq!(v.len(), 0);
    /// v.insert(1);
    /// assert_eq!(v.len(), 1);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the element count recorded at the root of the tree. Always equals
    /// [`len`](Self::len).
    #[must_use]
    pub fn count(&self) -> usize {
        self.map.count()
    }

    /// Returns a cursor at the smallest element, or an empty cursor if the set is empty.
    pub fn minimum(&self) -> Cursor<'_, K> {
        Cursor::new(self.map.minimum())
    }

    /// Returns a cursor at the largest element, or an empty cursor if the set is empty.
    pub fn maximum(&self) -> Cursor<'_, K> {
        Cursor::new(self.map.maximum())
    }

    pub fn cursor_front(&self) -> Cursor<'_, K> {
        self.minimum()
    }

    pub fn cursor_back(&self) -> Cursor<'_, K> {
        self.maximum()
    }

    /// Returns a mutable cursor at the smallest element.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeSet};
    ///
    /// let mut set = ZipTreeSet::new(Natural);
    /// for key in [6, 4, 3, 1] {
    ///     set.insert(key);
    /// }
    /// assert!(set.minimum_mut().remove_current());
    /// assert!(set.maximum_mut().remove_current());
    /// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [3, 4]);
    /// ```
    pub fn minimum_mut(&mut self) -> CursorMut<'_, K, C, R> {
        CursorMut::new(self.map.minimum_mut())
    }

    /// Returns a mutable cursor at the largest element.
    pub fn maximum_mut(&mut self) -> CursorMut<'_, K, C, R> {
        CursorMut::new(self.map.maximum_mut())
    }

    /// Returns a reference to the first element in the set, if any.
    #[must_use]
    pub fn first(&self) -> Option<&K> {
        self.minimum().key()
    }

    /// Returns a reference to the last element in the set, if any.
    #[must_use]
    pub fn last(&self) -> Option<&K> {
        self.maximum().key()
    }

    /// Removes the first element from the set and returns it, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeSet};
    ///
    /// let mut set = ZipTreeSet::new(Natural);
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.pop_first(), Some(1));
    /// assert_eq!(set.pop_first(), Some(2));
    /// assert_eq!(set.pop_first(), None);
    /// ```
    pub fn pop_first(&mut self) -> Option<K> {
        self.map.pop_first().map(|(key, ())| key)
    }

    /// Removes the last element from the set and returns it, if any.
    pub fn pop_last(&mut self) -> Option<K> {
        self.map.pop_last().map(|(key, ())| key)
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::ZipTreeSet;
    ///
    /// let mut set: ZipTreeSet<i32> = [1, 2, 3, 4, 5, 6].into_iter().collect();
    /// set.retain(|&k| k % 2 == 0);
    /// assert!(set.iter().eq([2, 4, 6].iter()));
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K) -> bool,
    {
        self.map.retain(|key, _| f(key));
    }

    /// Gets an iterator that visits the elements in the `ZipTreeSet` in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::ZipTreeSet;
    ///
    /// let set: ZipTreeSet<usize> = [3, 1, 2].into_iter().collect();
    /// let mut set_iter = set.iter();
    /// assert_eq!(set_iter.next(), Some(&1));
    /// assert_eq!(set_iter.next(), Some(&2));
    /// assert_eq!(set_iter.next(), Some(&3));
    /// assert_eq!(set_iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        Iter { iter: self.map.keys() }
    }
}

impl<K: fmt::Debug, C, R> ZipTreeSet<K, C, R> {
    /// Renders the tree in pre-order, one node per line, for diagnostics.
    ///
    /// Lines carry the same fields as [`ZipTreeMap::tree_dump`] without the value.
    #[must_use]
    pub fn tree_dump(&self) -> String {
        let mut out = String::new();
        // Writing into a `String` cannot fail.
        let _ = self.map.raw.write_tree(&mut out, |out, key, _| write!(out, "Key: {key:?}"));
        out
    }

    /// Renders one line per element in ascending order, for diagnostics.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeSet};
    ///
    /// let mut set = ZipTreeSet::new(Natural);
    /// for key in [3, 1, 2] {
    ///     set.insert(key);
    /// }
    /// let dump = set.in_order_dump();
    /// let keys: Vec<&str> = dump.lines().map(|line| line.split(',').next().unwrap()).collect();
    /// assert_eq!(keys, ["Key: 1", "Key: 2", "Key: 3"]);
    /// ```
    #[must_use]
    pub fn in_order_dump(&self) -> String {
        let mut out = String::new();
        let _ = self.map.raw.write_in_order(&mut out, |out, key, _| write!(out, "Key: {key:?}"));
        out
    }
}

impl<K, C: Comparator<K>, R> ZipTreeSet<K, C, R> {
    /// Returns `true` if the set contains an element equal to `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Returns a reference to the stored element equal to `key`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::ZipTreeSet;
    ///
    /// let set: ZipTreeSet<_> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(set.get(&2), Some(&2));
    /// assert_eq!(set.get(&4), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&K> {
        self.map.get_key_value(key).map(|(key, _)| key)
    }

    /// Returns a cursor at `key`, or an empty cursor if it is absent.
    pub fn find(&self, key: &K) -> Cursor<'_, K> {
        Cursor::new(self.map.find(key))
    }

    /// Returns a mutable cursor at `key`, or an empty cursor if it is absent.
    pub fn find_mut(&mut self, key: &K) -> CursorMut<'_, K, C, R> {
        CursorMut::new(self.map.find_mut(key))
    }

    /// Returns a cursor at the largest element not greater than `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeSet};
    ///
    /// let mut set = ZipTreeSet::new(Natural);
    /// assert!(set.floor(&3).is_empty());
    /// set.insert(1);
    /// set.insert(4);
    /// assert_eq!(set.floor(&3).key(), Some(&1));
    /// ```
    pub fn floor(&self, key: &K) -> Cursor<'_, K> {
        Cursor::new(self.map.floor(key))
    }

    /// Returns a cursor at the smallest element not less than `key`.
    pub fn ceiling(&self, key: &K) -> Cursor<'_, K> {
        Cursor::new(self.map.ceiling(key))
    }

    /// Returns a cursor at the first element not ordered before `key`.
    pub fn lower_bound(&self, key: &K) -> Cursor<'_, K> {
        Cursor::new(self.map.lower_bound(key))
    }

    /// Returns a cursor at the first element ordered after `key`.
    pub fn upper_bound(&self, key: &K) -> Cursor<'_, K> {
        Cursor::new(self.map.upper_bound(key))
    }

    /// Removes `key` from the set. Returns whether it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeSet};
    ///
    /// let mut set = ZipTreeSet::new(Natural);
    /// set.insert(2);
    /// assert!(set.delete(&2));
    /// assert!(!set.delete(&2));
    /// ```
    pub fn delete(&mut self, key: &K) -> bool {
        self.map.delete(key)
    }

    /// Removes and returns the stored element equal to `key`, if any.
    pub fn take(&mut self, key: &K) -> Option<K> {
        self.map.remove_entry(key).map(|(key, ())| key)
    }
}

impl<K, C: Comparator<K>, R: RngCore> ZipTreeSet<K, C, R> {
    /// Adds `key` to the set.
    ///
    /// Returns whether it was newly inserted. Inserting a key that is already present changes
    /// nothing: the stored element is kept and the tree is untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeSet};
    ///
    /// let mut set = ZipTreeSet::new(Natural);
    ///
    /// assert!(set.insert(2));
    /// assert!(!set.insert(2));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool {
        self.map.put(key, ())
    }
}

impl<K: PartialEq, C, R> PartialEq for ZipTreeSet<K, C, R> {
    fn eq(&self, other: &Self) -> bool {
        self.map.eq(&other.map)
    }
}

impl<K: Eq, C, R> Eq for ZipTreeSet<K, C, R> {}

impl<K: fmt::Debug, C, R> fmt::Debug for ZipTreeSet<K, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(feature = "std")]
impl<K> Default for ZipTreeSet<K, Natural, SmallRng> {
    /// Creates an empty `ZipTreeSet` ordered by [`Ord`].
    fn default() -> Self {
        Self::new(Natural)
    }
}

#[cfg(feature = "std")]
impl<K: Ord> FromIterator<K> for ZipTreeSet<K, Natural, SmallRng> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = ZipTreeSet::new(Natural);
        set.extend(iter);
        set
    }
}

#[cfg(feature = "std")]
impl<K: Ord, const N: usize> From<[K; N]> for ZipTreeSet<K, Natural, SmallRng> {
    /// Converts a `[K; N]` into a `ZipTreeSet<K>`.
    ///
    /// ```
    /// use zipzip_tree::ZipTreeSet;
    ///
    /// let set1 = ZipTreeSet::from([1, 2, 3, 4]);
    /// let set2: ZipTreeSet<_> = [1, 2, 3, 4].into();
    /// assert_eq!(set1, set2);
    /// ```
    fn from(arr: [K; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<K, C: Comparator<K>, R: RngCore> Extend<K> for ZipTreeSet<K, C, R> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K: 'a + Copy, C: Comparator<K>, R: RngCore> Extend<&'a K> for ZipTreeSet<K, C, R> {
    fn extend<I: IntoIterator<Item = &'a K>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<'a, K, C, R> IntoIterator for &'a ZipTreeSet<K, C, R> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    fn last(mut self) -> Option<&'a K> {
        self.next_back()
    }
}

impl<'a, K> DoubleEndedIterator for Iter<'a, K> {
    fn next_back(&mut self) -> Option<&'a K> {
        self.iter.next_back()
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<K> FusedIterator for Iter<'_, K> {}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Iter { iter: self.iter.clone() }
    }
}

impl<K: fmt::Debug> fmt::Debug for Iter<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.iter.clone()).finish()
    }
}
