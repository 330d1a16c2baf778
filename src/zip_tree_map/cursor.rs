use core::fmt;

use crate::raw::{Arena, Handle, RawZipTree};

/// A read-only position in a [`ZipTreeMap`](super::ZipTreeMap).
///
/// A cursor is either at an entry or empty. Lookups that find nothing, and steps past either
/// end, leave it empty. It borrows the map, so the map cannot change while the cursor lives.
///
/// # Examples
///
/// ```
/// use zipzip_tree::{Natural, ZipTreeMap};
///
/// let mut map = ZipTreeMap::new(Natural);
/// for key in [6, 4, 3, 1] {
///     map.put(key, key * 10);
/// }
///
/// let mut cursor = map.cursor_back();
/// let mut values = Vec::new();
/// while let Some(value) = cursor.value() {
///     values.push(*value);
///     cursor.move_prev();
/// }
/// assert_eq!(values, [60, 40, 30, 10]);
/// ```
pub struct Cursor<'a, K, V> {
    arena: &'a Arena<K, V>,
    current: Option<Handle>,
}

impl<'a, K, V> Cursor<'a, K, V> {
    pub(crate) const fn new(arena: &'a Arena<K, V>, current: Option<Handle>) -> Self {
        Cursor { arena, current }
    }

    /// Returns `true` if the cursor is not at an entry.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    /// Returns the key at the cursor.
    #[must_use]
    pub fn key(&self) -> Option<&'a K> {
        self.current.map(|handle| self.arena.key(handle))
    }

    /// Returns the value at the cursor.
    #[must_use]
    pub fn value(&self) -> Option<&'a V> {
        self.current.map(|handle| self.arena.value(handle))
    }

    #[must_use]
    pub fn key_value(&self) -> Option<(&'a K, &'a V)> {
        self.current.map(|handle| (self.arena.key(handle), self.arena.value(handle)))
    }

    /// Returns the zero-based sorted position of the entry at the cursor.
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
    /// assert_eq!(map.find(&5).index(), Some(2));
    /// assert_eq!(map.find(&4).index(), None);
    /// ```
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.current.map(|handle| self.arena.position(handle))
    }

    /// Returns a cursor at the tree parent of this entry.
    ///
    /// The parent depends on the random ranks drawn so far, so this is only useful for
    /// diagnostics. The root's parent is an empty cursor.
    #[must_use]
    pub fn parent(&self) -> Cursor<'a, K, V> {
        Cursor::new(self.arena, self.current.and_then(|handle| self.arena.node(handle).parent()))
    }

    /// Moves to the next entry in key order. Does nothing on an empty cursor.
    pub fn move_next(&mut self) {
        self.current = self.current.and_then(|handle| self.arena.next(handle));
    }

    /// Moves to the previous entry in key order. Does nothing on an empty cursor.
    pub fn move_prev(&mut self) {
        self.current = self.current.and_then(|handle| self.arena.prev(handle));
    }
}

impl<K, V> Clone for Cursor<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Cursor<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Cursor<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.key_value()).finish()
    }
}

/// A position in a [`ZipTreeMap`](super::ZipTreeMap) that can change values and remove entries.
///
/// Removing through the cursor moves it to the following entry. It holds the map mutably, so
/// no other cursor can observe the slots it moves.
///
/// # Examples
///
/// ```
/// use zipzip_tree::{Natural, ZipTreeMap};
///
/// let mut map = ZipTreeMap::new(Natural);
/// for key in 0..10 {
///     map.put(key, key);
/// }
///
/// // Drop every odd key in one pass.
/// let mut cursor = map.minimum_mut();
/// while let Some(key) = cursor.key() {
///     if key % 2 == 1 {
///         cursor.remove_current();
///     } else {
///         cursor.move_next();
///     }
/// }
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [0, 2, 4, 6, 8]);
/// ```
pub struct CursorMut<'a, K, V, C, R> {
    tree: &'a mut RawZipTree<K, V, C, R>,
    current: Option<Handle>,
}

impl<'a, K, V, C, R> CursorMut<'a, K, V, C, R> {
    pub(crate) const fn new(tree: &'a mut RawZipTree<K, V, C, R>, current: Option<Handle>) -> Self {
        CursorMut { tree, current }
    }

    /// Returns `true` if the cursor is not at an entry.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    #[must_use]
    pub fn key(&self) -> Option<&K> {
        self.current.map(|handle| self.tree.arena().key(handle))
    }

    #[must_use]
    pub fn value(&self) -> Option<&V> {
        self.current.map(|handle| self.tree.arena().value(handle))
    }

    /// Returns the value at the cursor for modification. The key stays shared.
    pub fn value_mut(&mut self) -> Option<&mut V> {
        let handle = self.current?;
        Some(self.tree.value_mut(handle))
    }

    pub fn key_value_mut(&mut self) -> Option<(&K, &mut V)> {
        let handle = self.current?;
        Some(self.tree.entry_mut(handle))
    }

    /// Returns the zero-based sorted position of the entry at the cursor.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.as_cursor().index()
    }

    /// Returns a read-only cursor at the same position, borrowing from this one.
    #[must_use]
    pub fn as_cursor(&self) -> Cursor<'_, K, V> {
        Cursor::new(self.tree.arena(), self.current)
    }

    pub fn move_next(&mut self) {
        self.current = self.current.and_then(|handle| self.tree.arena().next(handle));
    }

    pub fn move_prev(&mut self) {
        self.current = self.current.and_then(|handle| self.tree.arena().prev(handle));
    }

    /// Removes the entry at the cursor and moves to the next one.
    ///
    /// Returns `false`, changing nothing, if the cursor is empty.
    pub fn remove_current(&mut self) -> bool {
        self.remove_current_entry().is_some()
    }

    /// Removes the entry at the cursor, returns it, and moves to the next one.
    pub fn remove_current_entry(&mut self) -> Option<(K, V)> {
        let handle = self.current?;
        let last = Handle::from_index(self.tree.len() - 1);
        let mut next = self.tree.arena().next(handle);
        let entry = self.tree.remove_at(handle);
        // The last slot was moved into the removed one.
        if next == Some(last) {
            next = Some(handle);
        }
        self.current = next;
        Some(entry)
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C, R> fmt::Debug for CursorMut<'_, K, V, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut").field(&self.as_cursor().key_value()).finish()
    }
}
