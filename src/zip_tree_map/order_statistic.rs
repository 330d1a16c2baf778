use core::ops::{Index, IndexMut};

use super::{Cursor, CursorMut, ZipTreeMap};
use crate::Position;
use crate::comparator::Comparator;

impl<K, V, C, R> ZipTreeMap<K, V, C, R> {
    /// Returns a cursor at zero-based position `index` in sorted order, or an empty cursor if
    /// `index` is out of bounds.
    ///
    /// # Complexity
    ///
    /// Expected O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeMap};
    ///
    /// let mut map = ZipTreeMap::new(Natural);
    /// for key in [5, 1, 9, 3] {
    ///     map.put(key, key * 10);
    /// }
    ///
    /// assert_eq!(map.at_index(0).key(), Some(&1));
    /// assert_eq!(map.at_index(2).key_value(), Some((&5, &50)));
    /// assert!(map.at_index(4).is_empty());
    /// ```
    pub fn at_index(&self, index: usize) -> Cursor<'_, K, V> {
        Cursor::new(self.raw.arena(), self.raw.at_index(index))
    }

    /// Returns a mutable cursor at zero-based position `index` in sorted order.
    pub fn at_index_mut(&mut self, index: usize) -> CursorMut<'_, K, V, C, R> {
        let current = self.raw.at_index(index);
        CursorMut::new(&mut self.raw, current)
    }

    /// Returns the entry at zero-based position `index` in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeMap};
    ///
    /// let mut map = ZipTreeMap::new(Natural);
    /// map.put("a", 10);
    /// map.put("c", 30);
    /// map.put("b", 20);
    ///
    /// assert_eq!(map.get_by_index(1), Some((&"b", &20)));
    /// assert!(map.get_by_index(3).is_none());
    /// ```
    #[must_use]
    pub fn get_by_index(&self, index: usize) -> Option<(&K, &V)> {
        self.at_index(index).key_value()
    }

    /// Returns the key and a mutable reference to the value at position `index`.
    ///
    /// The key is shared; changing it could break the ordering.
    pub fn get_by_index_mut(&mut self, index: usize) -> Option<(&K, &mut V)> {
        let handle = self.raw.at_index(index)?;
        let (key, value) = self.raw.entry_mut(handle);
        Some((key, value))
    }
}

impl<K, V, C: Comparator<K>, R> ZipTreeMap<K, V, C, R> {
    /// Returns the zero-based position of `key` in sorted order, or `None` if it is absent.
    ///
    /// # Complexity
    ///
    /// Expected O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeMap};
    ///
    /// let mut map = ZipTreeMap::new(Natural);
    /// for key in [5, 1, 9, 3] {
    ///     map.put(key, ());
    /// }
    ///
    /// assert_eq!(map.index_of(&9), Some(3));
    /// assert_eq!(map.index_of(&4), None);
    /// ```
    #[must_use]
    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.raw.index_of(key)
    }
}

/// Indexes into the map by sorted position.
///
/// # Panics
///
/// Panics if the position is out of bounds.
///
/// # Examples
///
/// ```
/// use zipzip_tree::{Natural, Position, ZipTreeMap};
///
/// let mut map = ZipTreeMap::new(Natural);
/// map.put("a", 1);
/// map.put("b", 2);
///
/// assert_eq!(map[Position(1)], 2);
/// ```
impl<K, V, C, R> Index<Position> for ZipTreeMap<K, V, C, R> {
    type Output = V;

    fn index(&self, position: Position) -> &V {
        match self.get_by_index(position.0) {
            Some((_, value)) => value,
            None => panic!("`ZipTreeMap::index()` - position {} out of bounds (len {})", position.0, self.len()),
        }
    }
}

/// Mutably indexes into the map by sorted position.
///
/// # Panics
///
/// Panics if the position is out of bounds.
impl<K, V, C, R> IndexMut<Position> for ZipTreeMap<K, V, C, R> {
    fn index_mut(&mut self, position: Position) -> &mut V {
        let len = self.len();
        match self.get_by_index_mut(position.0) {
            Some((_, value)) => value,
            None => panic!("`ZipTreeMap::index_mut()` - position {} out of bounds (len {len})", position.0),
        }
    }
}
