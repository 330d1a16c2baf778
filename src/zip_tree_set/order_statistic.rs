use core::ops::Index;

use super::{Cursor, CursorMut, ZipTreeSet};
use crate::Position;
use crate::comparator::Comparator;

impl<K, C, R> ZipTreeSet<K, C, R> {
    /// Returns a cursor at zero-based position `index` in sorted order, or an empty cursor if
    /// `index` is out of bounds.
    ///
    /// # Complexity
    ///
    /// Expected O(log n)
    pub fn at_index(&self, index: usize) -> Cursor<'_, K> {
        Cursor::new(self.map.at_index(index))
    }

    /// Returns a mutable cursor at zero-based position `index` in sorted order.
    pub fn at_index_mut(&mut self, index: usize) -> CursorMut<'_, K, C, R> {
        CursorMut::new(self.map.at_index_mut(index))
    }

    /// Returns the element at zero-based position `index` in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeSet};
    ///
    /// let mut set = ZipTreeSet::new(Natural);
    /// set.insert(10);
    /// set.insert(30);
    /// set.insert(20);
    ///
    /// assert_eq!(set.get_by_index(1), Some(&20));
    /// assert_eq!(set.get_by_index(3), None);
    /// ```
    #[must_use]
    pub fn get_by_index(&self, index: usize) -> Option<&K> {
        self.at_index(index).key()
    }
}

impl<K, C: Comparator<K>, R> ZipTreeSet<K, C, R> {
    /// Returns the zero-based position of `key` in sorted order, or `None` if it is absent.
    ///
    /// # Complexity
    ///
    /// Expected O(log n)
    #[must_use]
    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.map.index_of(key)
    }
}

/// Indexes into the set by sorted position.
///
/// # Panics
///
/// Panics if the position is out of bounds.
///
/// # Examples
///
/// ```
/// use zipzip_tree::{Position, ZipTreeSet};
///
/// let set = ZipTreeSet::from(["a", "b", "c"]);
/// assert_eq!(set[Position(2)], "c");
/// ```
impl<K, C, R> Index<Position> for ZipTreeSet<K, C, R> {
    type Output = K;

    fn index(&self, position: Position) -> &K {
        match self.get_by_index(position.0) {
            Some(key) => key,
            None => panic!("`ZipTreeSet::index()` - position {} out of bounds (len {})", position.0, self.len()),
        }
    }
}
