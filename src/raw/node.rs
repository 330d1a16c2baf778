use super::handle::Handle;
use super::rank::Rank;
use super::size::Size;

/// A zip tree node: a key, its links, its heap rank and the size of its subtree.
///
/// The value paired with the key lives in the arena's parallel value array, at the same slot.
#[derive(Clone, Debug)]
pub(crate) struct Node<K> {
    key: K,
    left: Option<Handle>,
    right: Option<Handle>,
    parent: Option<Handle>,
    rank: Rank,
    // 1 + count(left) + count(right).
    count: Size,
}

impl<K> Node<K> {
    /// Creates a detached leaf.
    pub(crate) const fn new(key: K, rank: Rank) -> Self {
        Self {
            key,
            left: None,
            right: None,
            parent: None,
            rank,
            count: Size::ONE,
        }
    }

    #[inline]
    pub(crate) const fn key(&self) -> &K {
        &self.key
    }

    pub(crate) fn into_key(self) -> K {
        self.key
    }

    #[inline]
    pub(crate) const fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) const fn right(&self) -> Option<Handle> {
        self.right
    }

    #[inline]
    pub(crate) const fn parent(&self) -> Option<Handle> {
        self.parent
    }

    #[inline]
    pub(crate) const fn rank(&self) -> Rank {
        self.rank
    }

    #[inline]
    pub(crate) const fn count(&self) -> Size {
        self.count
    }

    #[inline]
    pub(crate) fn set_left(&mut self, left: Option<Handle>) {
        self.left = left;
    }

    #[inline]
    pub(crate) fn set_right(&mut self, right: Option<Handle>) {
        self.right = right;
    }

    #[inline]
    pub(crate) fn set_parent(&mut self, parent: Option<Handle>) {
        self.parent = parent;
    }

    #[inline]
    pub(crate) fn set_count(&mut self, count: Size) {
        self.count = count;
    }

    /// Rewrites whichever child link points at `from` to point at `to`.
    pub(crate) fn replace_child(&mut self, from: Handle, to: Option<Handle>) {
        if self.left == Some(from) {
            self.left = to;
        } else {
            debug_assert_eq!(self.right, Some(from), "`Node::replace_child()` - `from` is not a child!");
            self.right = to;
        }
    }
}
