use alloc::vec::Vec;

use super::handle::Handle;
use super::node::Node;

/// Dense slot storage for nodes and the values paired with them.
///
/// `values[i]` always belongs to `nodes[i]`. Both grow at the end and shrink by moving the last
/// slot into the freed one, so there are never holes. Keeping both arrays behind one
/// `swap_remove` is what keeps them aligned.
#[derive(Clone)]
pub(crate) struct Arena<K, V> {
    nodes: Vec<Node<K>>,
    values: Vec<V>,
}

impl<K, V> Arena<K, V> {
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            values: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity().min(self.values.capacity())
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
        self.values.reserve(additional);
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.nodes.shrink_to_fit();
        self.values.shrink_to_fit();
    }

    pub(crate) const fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Appends a node and its value at the end of the arena.
    pub(crate) fn push(&mut self, node: Node<K>, value: V) -> Handle {
        assert!(
            self.nodes.len() <= Handle::MAX,
            "`Arena::push()` - arena is at maximum capacity ({})",
            Handle::MAX + 1
        );
        self.nodes.push(node);
        self.values.push(value);
        Handle::from_index(self.nodes.len() - 1)
    }

    /// Removes the slot at `handle` by moving the last slot into it.
    ///
    /// Returns the removed node and value, and the old handle of the node that now lives at
    /// `handle` (`None` if `handle` was the last slot). Links pointing at the moved node are
    /// left for the caller to repair.
    pub(crate) fn swap_remove(&mut self, handle: Handle) -> (Node<K>, V, Option<Handle>) {
        let index = handle.to_index();
        let last = self.nodes.len() - 1;
        let node = self.nodes.swap_remove(index);
        let value = self.values.swap_remove(index);
        let moved = (index != last).then(|| Handle::from_index(last));
        (node, value, moved)
    }

    #[inline]
    pub(crate) fn node(&self, handle: Handle) -> &Node<K> {
        &self.nodes[handle.to_index()]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, handle: Handle) -> &mut Node<K> {
        &mut self.nodes[handle.to_index()]
    }

    #[inline]
    pub(crate) fn key(&self, handle: Handle) -> &K {
        self.nodes[handle.to_index()].key()
    }

    #[inline]
    pub(crate) fn value(&self, handle: Handle) -> &V {
        &self.values[handle.to_index()]
    }

    #[inline]
    pub(crate) fn value_mut(&mut self, handle: Handle) -> &mut V {
        &mut self.values[handle.to_index()]
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.values.clear();
    }

    /// Borrows a key and its value together, the value mutably.
    pub(crate) fn entry_mut(&mut self, handle: Handle) -> (&K, &mut V) {
        let index = handle.to_index();
        (self.nodes[index].key(), &mut self.values[index])
    }

    pub(crate) fn leftmost(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.node(handle).left() {
            handle = left;
        }
        handle
    }

    pub(crate) fn rightmost(&self, mut handle: Handle) -> Handle {
        while let Some(right) = self.node(handle).right() {
            handle = right;
        }
        handle
    }

    /// In-order successor: the leftmost node of the right subtree, or else the first ancestor
    /// reached from its left side.
    pub(crate) fn next(&self, handle: Handle) -> Option<Handle> {
        if let Some(right) = self.node(handle).right() {
            return Some(self.leftmost(right));
        }
        let mut child = handle;
        let mut parent = self.node(handle).parent();
        while let Some(p) = parent {
            if self.node(p).right() != Some(child) {
                break;
            }
            child = p;
            parent = self.node(p).parent();
        }
        parent
    }

    /// In-order predecessor; the mirror of [`next`](Self::next).
    pub(crate) fn prev(&self, handle: Handle) -> Option<Handle> {
        if let Some(left) = self.node(handle).left() {
            return Some(self.rightmost(left));
        }
        let mut child = handle;
        let mut parent = self.node(handle).parent();
        while let Some(p) = parent {
            if self.node(p).left() != Some(child) {
                break;
            }
            child = p;
            parent = self.node(p).parent();
        }
        parent
    }

    /// Zero-based sorted position of `handle`, found by climbing to the root and counting
    /// everything passed on the left.
    pub(crate) fn position(&self, handle: Handle) -> usize {
        let count = |h: Option<Handle>| h.map_or(0, |h| self.node(h).count().to_usize());
        let mut position = count(self.node(handle).left());
        let mut child = handle;
        let mut parent = self.node(handle).parent();
        while let Some(p) = parent {
            let node = self.node(p);
            if node.right() == Some(child) {
                position += count(node.left()) + 1;
            }
            child = p;
            parent = node.parent();
        }
        position
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::raw::rank::Rank;
    use proptest::prelude::*;

    fn leaf(key: u32) -> Node<u32> {
        Node::new(key, Rank::from_parts(0, 0))
    }

    #[test]
    fn arena_capacity() {
        let arena: Arena<u32, u32> = Arena::with_capacity(10);
        assert!(arena.capacity() >= 10);
    }

    #[test]
    fn swap_remove_reports_moved_slot() {
        let mut arena = Arena::new();
        let a = arena.push(leaf(1), 'a');
        let b = arena.push(leaf(2), 'b');
        let c = arena.push(leaf(3), 'c');

        let (node, value, moved) = arena.swap_remove(a);
        assert_eq!((*node.key(), value, moved), (1, 'a', Some(c)));
        assert_eq!((*arena.key(a), *arena.value(a)), (3, 'c'));

        let (node, value, moved) = arena.swap_remove(b);
        assert_eq!((*node.key(), value, moved), (2, 'b', None));
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn walks_follow_links() {
        // 2 is the root, 1 its left child, 3 its right child.
        let mut arena = Arena::new();
        let two = arena.push(leaf(2), ());
        let one = arena.push(leaf(1), ());
        let three = arena.push(leaf(3), ());
        arena.node_mut(two).set_left(Some(one));
        arena.node_mut(two).set_right(Some(three));
        arena.node_mut(one).set_parent(Some(two));
        arena.node_mut(three).set_parent(Some(two));

        assert_eq!(arena.leftmost(two), one);
        assert_eq!(arena.rightmost(two), three);
        assert_eq!(arena.next(one), Some(two));
        assert_eq!(arena.next(two), Some(three));
        assert_eq!(arena.next(three), None);
        assert_eq!(arena.prev(three), Some(two));
        assert_eq!(arena.prev(two), Some(one));
        assert_eq!(arena.prev(one), None);

        assert_eq!(arena.position(one), 0);
        assert_eq!(arena.position(two), 1);
        assert_eq!(arena.position(three), 2);
    }

    proptest! {
        #[test]
        fn arena_behaves_like_vec(operations in prop::collection::vec(strategy(), 0..256)) {
            let mut model: Vec<(u32, u32)> = Vec::new();
            let mut arena: Arena<u32, u32> = Arena::new();

            for operation in operations {
                match operation {
                    Operation::Push(key, value) => {
                        let handle = arena.push(leaf(key), value);
                        model.push((key, value));
                        prop_assert_eq!(handle.to_index(), model.len() - 1);
                    }
                    Operation::SetValue(which, value) => {
                        if model.is_empty() {
                            continue;
                        }

                        let index = which % model.len();
                        *arena.value_mut(Handle::from_index(index)) = value;
                        model[index].1 = value;
                    }
                    Operation::SwapRemove(which) => {
                        if model.is_empty() {
                            continue;
                        }

                        let index = which % model.len();
                        let (node, value, moved) = arena.swap_remove(Handle::from_index(index));
                        let expected = model.swap_remove(index);
                        prop_assert_eq!((*node.key(), value), expected);
                        prop_assert_eq!(moved.is_some(), index != model.len());
                    }
                    Operation::Clear => {
                        arena.clear();
                        model.clear();
                    }
                }

                prop_assert_eq!(arena.len(), model.len());
                prop_assert_eq!(arena.is_empty(), model.is_empty());

                for (index, &(key, value)) in model.iter().enumerate() {
                    let handle = Handle::from_index(index);
                    prop_assert_eq!(*arena.key(handle), key);
                    prop_assert_eq!(*arena.value(handle), value);
                }
            }
        }
    }

    #[derive(Clone, Debug)]
    enum Operation {
        Push(u32, u32),
        SetValue(usize, u32),
        SwapRemove(usize),
        Clear,
    }

    fn strategy() -> impl Strategy<Value = Operation> {
        prop_oneof![
            20 => (any::<u32>(), any::<u32>()).prop_map(|(key, value)| Operation::Push(key, value)),
            5 => (any::<usize>(), any::<u32>()).prop_map(|(which, value)| Operation::SetValue(which, value)),
            10 => any::<usize>().prop_map(Operation::SwapRemove),
            1 => Just(Operation::Clear),
        ]
    }
}
