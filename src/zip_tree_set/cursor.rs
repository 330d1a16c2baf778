use core::fmt;

use crate::zip_tree_map;

/// A read-only position in a [`ZipTreeSet`](super::ZipTreeSet).
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
///
/// let mut cursor = set.ceiling(&2);
/// assert_eq!(cursor.key(), Some(&3));
/// cursor.move_prev();
/// assert_eq!(cursor.key(), Some(&1));
/// cursor.move_prev();
/// assert!(cursor.is_empty());
/// ```
pub struct Cursor<'a, K> {
    inner: zip_tree_map::Cursor<'a, K, ()>,
}

impl<'a, K> Cursor<'a, K> {
    pub(crate) const fn new(inner: zip_tree_map::Cursor<'a, K, ()>) -> Self {
        Cursor { inner }
    }

    /// Returns `true` if the cursor is not at an element.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the element at the cursor.
    #[must_use]
    pub fn key(&self) -> Option<&'a K> {
        self.inner.key()
    }

    /// Returns the zero-based sorted position of the element at the cursor.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.inner.index()
    }

    /// Returns a cursor at the tree parent of this element. Only useful for diagnostics.
    #[must_use]
    pub fn parent(&self) -> Cursor<'a, K> {
        Cursor::new(self.inner.parent())
    }

    pub fn move_next(&mut self) {
        self.inner.move_next();
    }

    pub fn move_prev(&mut self) {
        self.inner.move_prev();
    }
}

impl<K> Clone for Cursor<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Cursor<'_, K> {}

impl<K: fmt::Debug> fmt::Debug for Cursor<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.key()).finish()
    }
}

/// A position in a [`ZipTreeSet`](super::ZipTreeSet) that can remove elements.
///
/// Removing through the cursor moves it to the following element.
pub struct CursorMut<'a, K, C, R> {
    inner: zip_tree_map::CursorMut<'a, K, (), C, R>,
}

impl<'a, K, C, R> CursorMut<'a, K, C, R> {
    pub(crate) const fn new(inner: zip_tree_map::CursorMut<'a, K, (), C, R>) -> Self {
        CursorMut { inner }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[must_use]
    pub fn key(&self) -> Option<&K> {
        self.inner.key()
    }

    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.inner.index()
    }

    /// Returns a read-only cursor at the same position, borrowing from this one.
    #[must_use]
    pub fn as_cursor(&self) -> Cursor<'_, K> {
        Cursor::new(self.inner.as_cursor())
    }

    pub fn move_next(&mut self) {
        self.inner.move_next();
    }

    pub fn move_prev(&mut self) {
        self.inner.move_prev();
    }

    /// Removes the element at the cursor and moves to the next one.
    ///
    /// Returns `false`, changing nothing, if the cursor is empty.
    pub fn remove_current(&mut self) -> bool {
        self.inner.remove_current()
    }

    /// Removes the element at the cursor, returns it, and moves to the next one.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeSet};
    ///
    /// let mut set = ZipTreeSet::new(Natural);
    /// for key in [1, 3, 4, 6] {
    ///     set.insert(key);
    /// }
    ///
    /// let mut cursor = set.find_mut(&3);
    /// assert_eq!(cursor.take_current(), Some(3));
    /// assert_eq!(cursor.key(), Some(&4));
    /// ```
    pub fn take_current(&mut self) -> Option<K> {
        self.inner.remove_current_entry().map(|(key, ())| key)
    }
}

impl<K: fmt::Debug, C, R> fmt::Debug for CursorMut<'_, K, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut").field(&self.key()).finish()
    }
}
