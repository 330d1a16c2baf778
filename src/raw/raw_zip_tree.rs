use rand::RngCore;

use super::arena::Arena;
use super::handle::Handle;
use super::node::Node;
use super::rank::Rank;
use super::size::Size;
use crate::comparator::Comparator;

/// The zip-zip tree backing `ZipTreeMap` and `ZipTreeSet`.
///
/// Nodes live in a dense [`Arena`] addressed by [`Handle`]. Each node carries a random [`Rank`]
/// and the tree is a max-heap on ranks: a node's rank is at least its children's, and between
/// equal ranks the smaller key sits higher. Subtree counts are kept exact for order-statistic
/// queries.
#[derive(Clone)]
pub(crate) struct RawZipTree<K, V, C, R> {
    /// Nodes and their values, gap-free.
    arena: Arena<K, V>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
    /// Key ordering.
    cmp: C,
    /// Source of insertion ranks.
    rng: R,
}

impl<K, V, C, R> RawZipTree<K, V, C, R> {
    /// Creates a new, empty tree.
    pub(crate) const fn new(cmp: C, rng: R) -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            cmp,
            rng,
        }
    }

    /// Creates a new, empty tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(cmp: C, rng: R, capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            root: None,
            cmp,
            rng,
        }
    }

    /// Returns the number of nodes, which is also the arena length.
    pub(crate) const fn len(&self) -> usize {
        self.arena.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns the root's subtree count. Always equal to [`len`](Self::len).
    pub(crate) fn count(&self) -> usize {
        self.root.map_or(0, |root| self.arena.node(root).count().to_usize())
    }

    pub(crate) fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.arena.reserve(additional);
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.arena.shrink_to_fit();
    }

    pub(crate) fn clear(&mut self) {
        tracing::debug!(len = self.arena.len(), "zip tree cleared");
        self.arena.clear();
        self.root = None;
    }

    pub(crate) const fn root(&self) -> Option<Handle> {
        self.root
    }

    pub(crate) const fn arena(&self) -> &Arena<K, V> {
        &self.arena
    }

    pub(crate) fn value_mut(&mut self, handle: Handle) -> &mut V {
        self.arena.value_mut(handle)
    }

    pub(crate) fn entry_mut(&mut self, handle: Handle) -> (&K, &mut V) {
        self.arena.entry_mut(handle)
    }

    /// Returns the smallest node, if any.
    pub(crate) fn minimum(&self) -> Option<Handle> {
        self.root.map(|root| self.arena.leftmost(root))
    }

    /// Returns the largest node, if any.
    pub(crate) fn maximum(&self) -> Option<Handle> {
        self.root.map(|root| self.arena.rightmost(root))
    }

    /// Returns the node at zero-based sorted position `index`.
    pub(crate) fn at_index(&self, mut index: usize) -> Option<Handle> {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.arena.node(handle);
            let left_count = self.subtree_count(node.left());
            if index < left_count {
                current = node.left();
            } else if index == left_count {
                return Some(handle);
            } else {
                index -= left_count + 1;
                current = node.right();
            }
        }
        None
    }

    #[inline]
    fn subtree_count(&self, handle: Option<Handle>) -> usize {
        handle.map_or(0, |h| self.arena.node(h).count().to_usize())
    }

    /// Recomputes counts from `from` up through its ancestors, stopping before `limit`.
    fn fix_counts(&mut self, from: Option<Handle>, limit: Option<Handle>) {
        let mut current = from;
        while let Some(handle) = current {
            if current == limit {
                break;
            }
            let node = self.arena.node(handle);
            let count = Size::ONE + self.size_of(node.left()) + self.size_of(node.right());
            let node = self.arena.node_mut(handle);
            node.set_count(count);
            current = node.parent();
        }
    }

    #[inline]
    fn size_of(&self, handle: Option<Handle>) -> Size {
        handle.map_or(Size::ZERO, |h| self.arena.node(h).count())
    }

    #[inline]
    fn rank(&self, handle: Handle) -> Rank {
        self.arena.node(handle).rank()
    }

    #[inline]
    fn set_parent(&mut self, handle: Option<Handle>, parent: Option<Handle>) {
        if let Some(handle) = handle {
            self.arena.node_mut(handle).set_parent(parent);
        }
    }

    /// Detaches `victim` from the tree, zipping its two subtrees into its place.
    ///
    /// The victim keeps its slot; [`remove_at`](Self::remove_at) compacts it away afterwards.
    fn unlink(&mut self, victim: Handle) {
        let node = self.arena.node(victim);
        let parent = node.parent();
        let mut left = node.left();
        let mut right = node.right();

        // The higher-ranked child takes the victim's place; ties go left.
        let replacement = match (left, right) {
            (None, only) | (only, None) => only,
            (Some(l), Some(r)) => Some(if self.rank(l) >= self.rank(r) { l } else { r }),
        };
        match parent {
            None => self.root = replacement,
            Some(p) => self.arena.node_mut(p).replace_child(victim, replacement),
        }
        self.set_parent(replacement, parent);

        let mut splice = parent;
        while let (Some(l), Some(r)) = (left, right) {
            if self.rank(l) >= self.rank(r) {
                // Walk down the left side's right spine past everything outranking `r`.
                let r_rank = self.rank(r);
                let mut tail = l;
                let mut current = self.arena.node(l).right();
                while let Some(c) = current {
                    if self.rank(c) < r_rank {
                        break;
                    }
                    tail = c;
                    current = self.arena.node(c).right();
                }
                self.arena.node_mut(tail).set_right(Some(r));
                self.arena.node_mut(r).set_parent(Some(tail));
                left = current;
                splice = Some(tail);
            } else {
                // Walk down the right side's left spine past everything strictly outranking `l`.
                let l_rank = self.rank(l);
                let mut tail = r;
                let mut current = self.arena.node(r).left();
                while let Some(c) = current {
                    if l_rank >= self.rank(c) {
                        break;
                    }
                    tail = c;
                    current = self.arena.node(c).left();
                }
                self.arena.node_mut(tail).set_left(Some(l));
                self.arena.node_mut(l).set_parent(Some(tail));
                right = current;
                splice = Some(tail);
            }
        }

        self.fix_counts(splice, None);
    }

    /// Removes the node at `handle` and returns its key and value.
    ///
    /// The arena's last slot is moved into `handle`, so any other handle equal to the old last
    /// slot is stale afterwards.
    pub(crate) fn remove_at(&mut self, handle: Handle) -> (K, V) {
        self.unlink(handle);
        let (node, value, moved) = self.arena.swap_remove(handle);
        if let Some(from) = moved {
            self.relink(from, handle);
        }
        tracing::trace!(
            slot = handle.to_index(),
            moved_from = moved.map(Handle::to_index),
            len = self.arena.len(),
            "zip tree remove"
        );
        debug_assert_eq!(self.count(), self.len(), "`RawZipTree::remove_at()` - count drifted from len");
        (node.into_key(), value)
    }

    /// Points every link that referred to slot `from` at slot `to`, where the node now lives.
    fn relink(&mut self, from: Handle, to: Handle) {
        let node = self.arena.node(to);
        let (left, right, parent) = (node.left(), node.right(), node.parent());
        self.set_parent(left, Some(to));
        self.set_parent(right, Some(to));
        match parent {
            Some(p) => self.arena.node_mut(p).replace_child(from, Some(to)),
            None => {
                debug_assert_eq!(self.root, Some(from));
                self.root = Some(to);
            }
        }
    }
}

impl<K, V, C, R> RawZipTree<K, V, C, R>
where
    C: Comparator<K>,
{
    #[inline]
    fn less(&self, a: Handle, b: Handle) -> bool {
        self.cmp.less(self.arena.key(a), self.arena.key(b))
    }

    /// Returns the node holding `key`, if any.
    pub(crate) fn find(&self, key: &K) -> Option<Handle> {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.arena.node(handle);
            if self.cmp.less(key, node.key()) {
                current = node.left();
            } else if self.cmp.less(node.key(), key) {
                current = node.right();
            } else {
                return Some(handle);
            }
        }
        None
    }

    /// Returns the zero-based sorted position of `key`, if present.
    pub(crate) fn index_of(&self, key: &K) -> Option<usize> {
        let mut current = self.root;
        let mut index = 0;
        while let Some(handle) = current {
            let node = self.arena.node(handle);
            if self.cmp.less(key, node.key()) {
                current = node.left();
            } else {
                index += self.subtree_count(node.left());
                if self.cmp.less(node.key(), key) {
                    index += 1;
                    current = node.right();
                } else {
                    return Some(index);
                }
            }
        }
        None
    }

    /// Largest node not greater than `key`.
    pub(crate) fn floor(&self, key: &K) -> Option<Handle> {
        let mut best = None;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.arena.node(handle);
            if self.cmp.less(key, node.key()) {
                current = node.left();
            } else {
                best = Some(handle);
                current = node.right();
            }
        }
        best
    }

    /// Smallest node not less than `key`.
    pub(crate) fn ceiling(&self, key: &K) -> Option<Handle> {
        let mut best = None;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.arena.node(handle);
            if self.cmp.greater(key, node.key()) {
                current = node.right();
            } else {
                best = Some(handle);
                current = node.left();
            }
        }
        best
    }

    /// First node not ordered before `key`; the same node as [`ceiling`](Self::ceiling).
    pub(crate) fn lower_bound(&self, key: &K) -> Option<Handle> {
        self.ceiling(key)
    }

    /// First node ordered after `key`.
    pub(crate) fn upper_bound(&self, key: &K) -> Option<Handle> {
        let mut best = None;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.arena.node(handle);
            if self.cmp.greater_or_equal(key, node.key()) {
                current = node.right();
            } else {
                best = Some(handle);
                current = node.left();
            }
        }
        best
    }

    /// Removes the node holding `key`, if any.
    pub(crate) fn remove(&mut self, key: &K) -> Option<(K, V)> {
        let handle = self.find(key)?;
        Some(self.remove_at(handle))
    }
}

impl<K, V, C, R> RawZipTree<K, V, C, R>
where
    C: Comparator<K>,
    R: RngCore,
{
    /// Inserts `key` with `value`, or overwrites the value if `key` is present.
    ///
    /// Returns the old value on overwrite; the tree's shape is untouched in that case.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(handle) = self.find(&key) {
            return Some(core::mem::replace(self.arena.value_mut(handle), value));
        }
        self.insert_new(key, value);
        None
    }

    /// Links a node for a key known to be absent and returns its handle.
    fn insert_new(&mut self, key: K, value: V) -> Handle {
        let rank = Rank::draw(&mut self.rng, self.arena.len());
        let new = self.arena.push(Node::new(key, rank), value);

        // Descend past every node that outranks the new one. Between equal ranks the smaller
        // key stays above.
        let mut prev = None;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.arena.node(handle);
            let outranks = node.rank() > rank || (node.rank() == rank && self.less(handle, new));
            if !outranks {
                break;
            }
            prev = Some(handle);
            current = if self.less(new, handle) { node.left() } else { node.right() };
        }

        match prev {
            None => self.root = Some(new),
            Some(p) => {
                if self.less(new, p) {
                    self.arena.node_mut(p).set_left(Some(new));
                } else {
                    self.arena.node_mut(p).set_right(Some(new));
                }
                self.arena.node_mut(new).set_parent(Some(p));
            }
        }

        if let Some(displaced) = current {
            if self.less(new, displaced) {
                self.arena.node_mut(new).set_right(Some(displaced));
            } else {
                self.arena.node_mut(new).set_left(Some(displaced));
            }
            self.arena.node_mut(displaced).set_parent(Some(new));
            self.unzip(new, displaced);
        }
        self.fix_counts(Some(new), None);

        tracing::trace!(
            slot = new.to_index(),
            primary = rank.primary(),
            tie_break = rank.tie_break(),
            len = self.arena.len(),
            "zip tree insert"
        );
        debug_assert_eq!(self.count(), self.len(), "`RawZipTree::insert_new()` - count drifted from len");
        new
    }

    /// Splits the subtree hanging under `new` into the nodes less than and greater than its key.
    ///
    /// Runs of same-side nodes stay linked to each other; each run is hung from the tail of the
    /// previous run on its side (or from `new` itself for the first run on each side).
    fn unzip(&mut self, new: Handle, start: Handle) {
        let mut prev = new;
        let mut current = Some(start);
        while let Some(head) = current {
            let fix = prev;
            if self.less(head, new) {
                // Left-side run: follow right links while still less than the new key.
                while let Some(c) = current {
                    if self.less(new, c) {
                        break;
                    }
                    prev = c;
                    current = self.arena.node(c).right();
                }
            } else {
                // Right-side run: follow left links while still greater than the new key.
                while let Some(c) = current {
                    if self.less(c, new) {
                        break;
                    }
                    prev = c;
                    current = self.arena.node(c).left();
                }
            }

            let hang_left = self.less(new, fix) || (fix == new && self.less(new, prev));
            if hang_left {
                self.arena.node_mut(fix).set_left(current);
            } else {
                self.arena.node_mut(fix).set_right(current);
            }
            self.set_parent(current, Some(fix));
            self.fix_counts(Some(fix), Some(new));
        }
    }
}
