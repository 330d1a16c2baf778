use alloc::string::String;
use core::fmt::{self, Write};
use core::iter::FusedIterator;
use core::ops::Index;

use rand::RngCore;
use rand::rngs::SmallRng;

use crate::comparator::{Comparator, Natural};
use crate::raw::{Arena, Handle, RawZipTree};

mod capacity;
mod cursor;
mod order_statistic;

pub use cursor::{Cursor, CursorMut};

/// An ordered map based on a zip-zip tree.
///
/// Keys are ordered by the comparator `C`, a single "less-than" predicate (see [`Comparator`]).
/// Each inserted key gets a random rank drawn from `R`; the tree is kept heap-ordered on those
/// ranks, which gives expected O(log n) height without rotations. Subtree sizes are maintained
/// throughout, so [`at_index`](ZipTreeMap::at_index) and [`index_of`](ZipTreeMap::index_of) are
/// expected O(log n) as well.
///
/// Entries are stored in a contiguous arena. Removing an entry moves the last arena slot into
/// the freed one; values move with their keys, so they never drift apart.
///
/// It is a logic error for a key to be modified in such a way that its ordering relative to any
/// other key, as determined by the comparator, changes while it is in the map. The behavior
/// resulting from such a logic error is not specified, but will be encapsulated to the
/// `ZipTreeMap` that observed the logic error and not result in undefined behavior.
///
/// Every key needs a value: unlike [`ZipTreeSet`](crate::ZipTreeSet), a map has no value-less
/// insert.
///
/// ```compile_fail
/// use zipzip_tree::{Natural, ZipTreeMap};
///
/// let mut map: ZipTreeMap<i32, &str> = ZipTreeMap::new(Natural);
/// map.insert(1);
/// ```
///
/// # Examples
///
/// ```
/// use zipzip_tree::{Natural, ZipTreeMap};
///
/// let mut movie_reviews = ZipTreeMap::new(Natural);
///
/// // review some movies.
/// movie_reviews.put("Office Space", "Deals with real issues in the workplace.");
/// movie_reviews.put("Pulp Fiction", "Masterpiece.");
/// movie_reviews.put("The Godfather", "Very enjoyable.");
/// movie_reviews.put("The Blues Brothers", "Eye lyked it a lot.");
///
/// // check for a specific one.
/// if !movie_reviews.contains_key(&"Les Misérables") {
///     println!("We've got {} reviews, but Les Misérables ain't one.",
///              movie_reviews.len());
/// }
///
/// // oops, this review has a lot of spelling mistakes, let's delete it.
/// assert!(movie_reviews.delete(&"The Blues Brothers"));
///
/// // look up the values associated with some keys.
/// for movie in ["Up!", "Office Space"] {
///     match movie_reviews.get(&movie) {
///        Some(review) => println!("{movie}: {review}"),
///        None => println!("{movie} is unreviewed.")
///     }
/// }
///
/// // iterate over everything, in key order.
/// for (movie, review) in &movie_reviews {
///     println!("{movie}: \"{review}\"");
/// }
/// ```
///
/// A closure works as the ordering:
///
/// ```
/// use zipzip_tree::ZipTreeMap;
///
/// let mut by_len = ZipTreeMap::new(|a: &&str, b: &&str| a.len() < b.len());
/// by_len.put("three", 3);
/// by_len.put("one", 1);
/// // "two" has the same length as "one", so it replaces its value.
/// assert!(!by_len.put("two", 2));
/// assert_eq!(by_len.values().copied().collect::<Vec<_>>(), [2, 3]);
/// ```
#[derive(Clone)]
pub struct ZipTreeMap<K, V, C = Natural, R = SmallRng> {
    pub(crate) raw: RawZipTree<K, V, C, R>,
}

/// An iterator over the entries of a `ZipTreeMap`, in key order.
///
/// This `struct` is created by the [`iter`] method on [`ZipTreeMap`]. See its
/// documentation for more.
///
/// # Examples
///
/// ```
/// use zipzip_tree::ZipTreeMap;
///
/// let map: ZipTreeMap<_, _> = [(1, "a"), (2, "b"), (3, "c")].into_iter().collect();
/// let mut iter = map.iter();
/// assert_eq!(iter.next(), Some((&1, &"a")));
/// assert_eq!(iter.next_back(), Some((&3, &"c")));
/// assert_eq!(iter.next(), Some((&2, &"b")));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: ZipTreeMap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    arena: &'a Arena<K, V>,
    front: Option<Handle>,
    back: Option<Handle>,
    remaining: usize,
}

/// An iterator over the keys of a `ZipTreeMap`.
///
/// This `struct` is created by the [`keys`] method on [`ZipTreeMap`]. See its
/// documentation for more.
///
/// [`keys`]: ZipTreeMap::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An iterator over the values of a `ZipTreeMap`, in key order.
///
/// This `struct` is created by the [`values`] method on [`ZipTreeMap`]. See its
/// documentation for more.
///
/// [`values`]: ZipTreeMap::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

#[cfg(feature = "std")]
impl<K, V, C> ZipTreeMap<K, V, C, SmallRng> {
    /// Makes a new, empty `ZipTreeMap` ordered by `less`, with a rank source seeded by the OS.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeMap};
    ///
    /// let mut map = ZipTreeMap::new(Natural);
    ///
    /// // entries can now be inserted into the empty map
    /// map.put(1, "a");
    /// ```
    #[must_use]
    pub fn new(less: C) -> Self {
        use rand::SeedableRng;

        Self::with_rng(less, SmallRng::from_os_rng())
    }
}

impl<K, V, C, R> ZipTreeMap<K, V, C, R> {
    /// Makes a new, empty `ZipTreeMap` ordered by `less` that draws ranks from `rng`.
    ///
    /// The same seed and the same sequence of operations always produce the same tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::SmallRng;
    /// use zipzip_tree::{Natural, ZipTreeMap};
    ///
    /// let mut a = ZipTreeMap::with_rng(Natural, SmallRng::seed_from_u64(7));
    /// let mut b = ZipTreeMap::with_rng(Natural, SmallRng::seed_from_u64(7));
    /// for key in [5, 1, 9, 3] {
    ///     a.put(key, ());
    ///     b.put(key, ());
    /// }
    /// assert_eq!(a.tree_dump(), b.tree_dump());
    /// ```
    #[must_use]
    pub const fn with_rng(less: C, rng: R) -> Self {
        ZipTreeMap {
            raw: RawZipTree::new(less, rng),
        }
    }

    /// Clears the map, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeMap};
    ///
    /// let mut a = ZipTreeMap::new(Natural);
    /// a.put(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeMap};
    ///
    /// let mut a = ZipTreeMap::new(Natural);
    /// assert_eq!(a.len(), 0);
    /// a.put(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the element count recorded at the root of the tree.
    ///
    /// This is maintained independently of [`len`](Self::len) and always equals it.
    #[must_use]
    pub fn count(&self) -> usize {
        self.raw.count()
    }

    /// Returns a cursor at the smallest key, or an empty cursor if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeMap};
    ///
    /// let mut map = ZipTreeMap::new(Natural);
    /// assert!(map.minimum().is_empty());
    /// map.put(2, "b");
    /// map.put(1, "a");
    /// assert_eq!(map.minimum().key_value(), Some((&1, &"a")));
    /// ```
    pub fn minimum(&self) -> Cursor<'_, K, V> {
        Cursor::new(self.raw.arena(), self.raw.minimum())
    }

    /// Returns a cursor at the largest key, or an empty cursor if the map is empty.
    pub fn maximum(&self) -> Cursor<'_, K, V> {
        Cursor::new(self.raw.arena(), self.raw.maximum())
    }

    /// Returns a cursor at the first entry, for stepping forward with
    /// [`move_next`](Cursor::move_next).
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeMap};
    ///
    /// let mut map = ZipTreeMap::new(Natural);
    /// for key in [6, 4, 3, 1] {
    ///     map.put(key, ());
    /// }
    ///
    /// let mut keys = Vec::new();
    /// let mut cursor = map.cursor_front();
    /// while let Some(key) = cursor.key() {
    ///     keys.push(*key);
    ///     cursor.move_next();
    /// }
    /// assert_eq!(keys, [1, 3, 4, 6]);
    /// ```
    pub fn cursor_front(&self) -> Cursor<'_, K, V> {
        self.minimum()
    }

    /// Returns a cursor at the last entry, for stepping backward with
    /// [`move_prev`](Cursor::move_prev).
    pub fn cursor_back(&self) -> Cursor<'_, K, V> {
        self.maximum()
    }

    /// Returns a mutable cursor at the smallest key.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeMap};
    ///
    /// let mut map = ZipTreeMap::new(Natural);
    /// for key in [6, 4, 3, 1] {
    ///     map.put(key, ());
    /// }
    /// assert!(map.minimum_mut().remove_current());
    /// assert!(map.maximum_mut().remove_current());
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [3, 4]);
    /// ```
    pub fn minimum_mut(&mut self) -> CursorMut<'_, K, V, C, R> {
        let current = self.raw.minimum();
        CursorMut::new(&mut self.raw, current)
    }

    /// Returns a mutable cursor at the largest key.
    pub fn maximum_mut(&mut self) -> CursorMut<'_, K, V, C, R> {
        let current = self.raw.maximum();
        CursorMut::new(&mut self.raw, current)
    }

    /// Returns the first entry in the map, the one with the smallest key.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeMap};
    ///
    /// let mut map = ZipTreeMap::new(Natural);
    /// assert_eq!(map.first_key_value(), None);
    /// map.put(1, "b");
    /// map.put(2, "a");
    /// assert_eq!(map.first_key_value(), Some((&1, &"b")));
    /// ```
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.minimum().key_value()
    }

    /// Returns the last entry in the map, the one with the largest key.
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.maximum().key_value()
    }

    /// Removes and returns the first entry in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeMap};
    ///
    /// let mut map = ZipTreeMap::new(Natural);
    /// map.put(1, "a");
    /// map.put(2, "b");
    /// while let Some((key, _)) = map.pop_first() {
    ///     assert!(map.iter().all(|(k, _)| *k > key));
    /// }
    /// assert!(map.is_empty());
    /// ```
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        self.minimum_mut().remove_current_entry()
    }

    /// Removes and returns the last entry in the map.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        self.maximum_mut().remove_current_entry()
    }

    /// Retains only the entries specified by the predicate, visiting them in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeMap};
    ///
    /// let mut map: ZipTreeMap<i32, i32> = (0..8).map(|x| (x, x * 10)).collect();
    /// // Keep only the elements with even-numbered keys.
    /// map.retain(|&k, _| k % 2 == 0);
    /// assert!(map.iter().eq([(&0, &0), (&2, &20), (&4, &40), (&6, &60)]));
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let mut cursor = self.minimum_mut();
        while let Some((key, value)) = cursor.key_value_mut() {
            if f(key, value) {
                cursor.move_next();
            } else {
                cursor.remove_current();
            }
        }
    }

    /// Gets an iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeMap};
    ///
    /// let mut map = ZipTreeMap::new(Natural);
    /// map.put(3, "c");
    /// map.put(2, "b");
    /// map.put(1, "a");
    ///
    /// for (key, value) in map.iter() {
    ///     println!("{key}: {value}");
    /// }
    ///
    /// let (first_key, first_value) = map.iter().next().unwrap();
    /// assert_eq!((*first_key, *first_value), (1, "a"));
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            arena: self.raw.arena(),
            front: self.raw.minimum(),
            back: self.raw.maximum(),
            remaining: self.raw.len(),
        }
    }

    /// Gets an iterator over the keys of the map, in sorted order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the map, in order by key.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C, R> ZipTreeMap<K, V, C, R> {
    /// Renders the tree in pre-order, one node per line, for diagnostics.
    ///
    /// Each line shows the slot index, key, value, rank components, subtree count and parent
    /// slot, under branch connectors. The exact format is not stable.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeMap};
    ///
    /// let mut map = ZipTreeMap::new(Natural);
    /// map.put(1, 'a');
    /// let dump = map.tree_dump();
    /// assert!(dump.starts_with("└── Idx: 0, Key: 1, Value: 'a', Rank: ("));
    /// assert!(dump.ends_with("), Count: 1, Parent: none\n"));
    /// ```
    #[must_use]
    pub fn tree_dump(&self) -> String {
        let mut out = String::new();
        // Writing into a `String` cannot fail.
        let _ = self.raw.write_tree(&mut out, |out, key, value| write!(out, "Key: {key:?}, Value: {value:?}"));
        out
    }

    /// Renders one line per entry in ascending key order, for diagnostics.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeMap};
    ///
    /// let mut map = ZipTreeMap::new(Natural);
    /// map.put(2, "b");
    /// map.put(1, "a");
    /// let dump = map.in_order_dump();
    /// let mut lines = dump.lines();
    /// assert!(lines.next().unwrap().starts_with("Key: 1, Value: \"a\", Rank: "));
    /// assert!(lines.next().unwrap().starts_with("Key: 2, Value: \"b\", Rank: "));
    /// assert_eq!(lines.next(), None);
    /// ```
    #[must_use]
    pub fn in_order_dump(&self) -> String {
        let mut out = String::new();
        let _ = self.raw.write_in_order(&mut out, |out, key, value| write!(out, "Key: {key:?}, Value: {value:?}"));
        out
    }
}

impl<K, V, C: Comparator<K>, R> ZipTreeMap<K, V, C, R> {
    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeMap};
    ///
    /// let mut map = ZipTreeMap::new(Natural);
    /// map.put(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        self.raw.find(key).map(|handle| self.raw.arena().value(handle))
    }

    /// Returns the stored key and its value for `key`.
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        let arena = self.raw.arena();
        self.raw.find(key).map(|handle| (arena.key(handle), arena.value(handle)))
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeMap};
    ///
    /// let mut map = ZipTreeMap::new(Natural);
    /// map.put(1, "a");
    /// if let Some(x) = map.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map[&1], "b");
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let handle = self.raw.find(key)?;
        Some(self.raw.value_mut(handle))
    }

    /// Returns `true` if the map contains a value for the specified key.
    pub fn contains_key(&self, key: &K) -> bool {
        self.raw.find(key).is_some()
    }

    /// Returns a cursor at `key`, or an empty cursor if it is absent.
    pub fn find(&self, key: &K) -> Cursor<'_, K, V> {
        Cursor::new(self.raw.arena(), self.raw.find(key))
    }

    /// Returns a mutable cursor at `key`, or an empty cursor if it is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeMap};
    ///
    /// let mut map = ZipTreeMap::new(Natural);
    /// map.put(1, 10);
    /// map.put(2, 20);
    ///
    /// let mut cursor = map.find_mut(&1);
    /// *cursor.value_mut().unwrap() += 1;
    /// cursor.move_next();
    /// assert_eq!(cursor.remove_current_entry(), Some((2, 20)));
    ///
    /// assert_eq!(map.iter().collect::<Vec<_>>(), [(&1, &11)]);
    /// ```
    pub fn find_mut(&mut self, key: &K) -> CursorMut<'_, K, V, C, R> {
        let current = self.raw.find(key);
        CursorMut::new(&mut self.raw, current)
    }

    /// Returns a cursor at the largest key not greater than `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeMap};
    ///
    /// let mut map = ZipTreeMap::new(Natural);
    /// for key in [1, 3, 4, 6] {
    ///     map.put(key, ());
    /// }
    /// assert_eq!(map.floor(&7).key(), Some(&6));
    /// assert_eq!(map.floor(&2).key(), Some(&1));
    /// assert!(map.floor(&0).is_empty());
    /// ```
    pub fn floor(&self, key: &K) -> Cursor<'_, K, V> {
        Cursor::new(self.raw.arena(), self.raw.floor(key))
    }

    /// Returns a cursor at the smallest key not less than `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeMap};
    ///
    /// let mut map = ZipTreeMap::new(Natural);
    /// for key in [1, 3, 4, 6] {
    ///     map.put(key, ());
    /// }
    /// assert_eq!(map.ceiling(&0).key(), Some(&1));
    /// assert_eq!(map.ceiling(&5).key(), Some(&6));
    /// assert!(map.ceiling(&7).is_empty());
    /// ```
    pub fn ceiling(&self, key: &K) -> Cursor<'_, K, V> {
        Cursor::new(self.raw.arena(), self.raw.ceiling(key))
    }

    /// Returns a cursor at the first key not ordered before `key`.
    ///
    /// Identical to [`ceiling`](Self::ceiling).
    pub fn lower_bound(&self, key: &K) -> Cursor<'_, K, V> {
        Cursor::new(self.raw.arena(), self.raw.lower_bound(key))
    }

    /// Returns a cursor at the first key ordered after `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeMap};
    ///
    /// let mut map = ZipTreeMap::new(Natural);
    /// for key in [1, 3, 4, 6] {
    ///     map.put(key, ());
    /// }
    /// assert_eq!(map.upper_bound(&3).key(), Some(&4));
    /// assert_eq!(map.upper_bound(&0).key(), Some(&1));
    /// assert!(map.upper_bound(&6).is_empty());
    /// ```
    pub fn upper_bound(&self, key: &K) -> Cursor<'_, K, V> {
        Cursor::new(self.raw.arena(), self.raw.upper_bound(key))
    }

    /// Removes a key from the map. Returns `true` if the key was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeMap};
    ///
    /// let mut map = ZipTreeMap::new(Natural);
    /// map.put(1, "a");
    /// assert!(map.delete(&1));
    /// assert!(!map.delete(&1));
    /// ```
    pub fn delete(&mut self, key: &K) -> bool {
        self.raw.remove(key).is_some()
    }

    /// Removes a key from the map, returning its value if it was present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.raw.remove(key).map(|(_, value)| value)
    }

    /// Removes a key from the map, returning the stored key and value if it was present.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        self.raw.remove(key)
    }
}

impl<K, V, C: Comparator<K>, R: RngCore> ZipTreeMap<K, V, C, R> {
    /// Associates `value` with `key`.
    ///
    /// Returns `true` if a new entry was created. If the key was already present its value is
    /// overwritten in place, the tree is left untouched, and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeMap};
    ///
    /// let mut map = ZipTreeMap::new(Natural);
    /// assert!(map.put(37, "a"));
    /// assert!(!map.is_empty());
    ///
    /// assert!(!map.put(37, "b"));
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map[&37], "b");
    /// ```
    pub fn put(&mut self, key: K, value: V) -> bool {
        self.raw.insert(key, value).is_none()
    }
}

impl<K: PartialEq, V: PartialEq, C, R> PartialEq for ZipTreeMap<K, V, C, R> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C, R> Eq for ZipTreeMap<K, V, C, R> {}

impl<K: fmt::Debug, V: fmt::Debug, C, R> fmt::Debug for ZipTreeMap<K, V, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(feature = "std")]
impl<K, V> Default for ZipTreeMap<K, V, Natural, SmallRng> {
    /// Creates an empty `ZipTreeMap` ordered by [`Ord`].
    fn default() -> Self {
        Self::new(Natural)
    }
}

#[cfg(feature = "std")]
impl<K: Ord, V> FromIterator<(K, V)> for ZipTreeMap<K, V, Natural, SmallRng> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = ZipTreeMap::new(Natural);
        map.extend(iter);
        map
    }
}

#[cfg(feature = "std")]
impl<K: Ord, V, const N: usize> From<[(K, V); N]> for ZipTreeMap<K, V, Natural, SmallRng> {
    /// Converts a `[(K, V); N]` into a `ZipTreeMap<K, V>`.
    ///
    /// If any entries in the array have equal keys, all but the last entry are discarded.
    ///
    /// ```
    /// use zipzip_tree::ZipTreeMap;
    ///
    /// let map1 = ZipTreeMap::from([(1, 2), (3, 4)]);
    /// let map2: ZipTreeMap<_, _> = [(1, 2), (3, 4)].into();
    /// assert_eq!(map1, map2);
    /// ```
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<K, V, C: Comparator<K>, R: RngCore> Extend<(K, V)> for ZipTreeMap<K, V, C, R> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K, V, C: Comparator<K>, R> Index<&K> for ZipTreeMap<K, V, C, R> {
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the `ZipTreeMap`.
    fn index(&self, key: &K) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<'a, K, V, C, R> IntoIterator for &'a ZipTreeMap<K, V, C, R> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.front?;
        self.remaining -= 1;
        self.front = self.arena.next(handle);
        Some((self.arena.key(handle), self.arena.value(handle)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn last(mut self) -> Option<(&'a K, &'a V)> {
        self.next_back()
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.back?;
        self.remaining -= 1;
        self.back = self.arena.prev(handle);
        Some((self.arena.key(handle), self.arena.value(handle)))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn last(mut self) -> Option<&'a K> {
        self.next_back()
    }
}

impl<'a, K, V> DoubleEndedIterator for Keys<'a, K, V> {
    fn next_back(&mut self) -> Option<&'a K> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V> fmt::Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn last(mut self) -> Option<&'a V> {
        self.next_back()
    }
}

impl<'a, K, V> DoubleEndedIterator for Values<'a, K, V> {
    fn next_back(&mut self) -> Option<&'a V> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V: fmt::Debug> fmt::Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use rand::SeedableRng;

    fn seeded<K, V>() -> ZipTreeMap<K, V, Natural, SmallRng> {
        ZipTreeMap::with_rng(Natural, SmallRng::seed_from_u64(0x5eed))
    }

    #[test]
    fn values_follow_keys_through_compaction() {
        let mut map = seeded();
        for key in 0..200u32 {
            map.put(key, key * 3);
        }
        for key in (0..200u32).step_by(3) {
            assert_eq!(map.remove(&key), Some(key * 3));
            map.raw.validate_invariants();
        }
        for (key, value) in &map {
            assert_eq!(*value, key * 3);
        }
        assert_eq!(map.len(), map.count());
    }

    #[test]
    fn iter_meets_in_the_middle() {
        let mut map = seeded();
        for key in 0..5 {
            map.put(key, ());
        }
        let mut iter = map.iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next().map(|(k, _)| *k), Some(0));
        assert_eq!(iter.next_back().map(|(k, _)| *k), Some(4));
        let rest: Vec<i32> = iter.map(|(k, _)| *k).collect();
        assert_eq!(rest, [1, 2, 3]);
    }

    #[test]
    fn debug_lists_entries_in_order() {
        let mut map = seeded();
        map.put(2, 'b');
        map.put(1, 'a');
        assert_eq!(alloc::format!("{map:?}"), "{1: 'a', 2: 'b'}");
    }
}
