use alloc::string::String;
use core::fmt::{self, Write};

use smallvec::SmallVec;

use super::handle::Handle;
use super::node::Node;
use super::raw_zip_tree::RawZipTree;

/// A pending line of the pre-order dump.
struct Pending {
    handle: Handle,
    /// Length of the shared prefix buffer this line is drawn under.
    depth: usize,
    /// Drawn with `├──` (a left child whose sibling follows) rather than `└──`.
    open: bool,
}

fn write_fields<W: Write, K>(out: &mut W, node: &Node<K>) -> fmt::Result {
    let rank = node.rank();
    write!(out, ", Rank: ({}, {}), Count: {}", rank.primary(), rank.tie_break(), node.count().to_usize())
}

impl<K, V, C, R> RawZipTree<K, V, C, R> {
    /// Writes the tree in pre-order, one node per line, with branch connectors.
    ///
    /// `entry` renders the key (and value, for maps) of each line.
    pub(crate) fn write_tree<W, F>(&self, out: &mut W, mut entry: F) -> fmt::Result
    where
        W: Write,
        F: FnMut(&mut W, &K, &V) -> fmt::Result,
    {
        let arena = self.arena();
        let mut prefix = String::new();
        let mut stack: SmallVec<[Pending; 32]> = SmallVec::new();
        if let Some(root) = self.root() {
            stack.push(Pending {
                handle: root,
                depth: 0,
                open: false,
            });
        }

        while let Some(Pending { handle, depth, open }) = stack.pop() {
            prefix.truncate(depth);
            let node = arena.node(handle);

            out.write_str(&prefix)?;
            out.write_str(if open { "├── " } else { "└── " })?;
            write!(out, "Idx: {}, ", handle.to_index())?;
            entry(out, node.key(), arena.value(handle))?;
            write_fields(out, node)?;
            match node.parent() {
                Some(parent) => writeln!(out, ", Parent: {}", parent.to_index())?,
                None => writeln!(out, ", Parent: none")?,
            }

            prefix.push_str(if open { "│   " } else { "    " });
            let depth = prefix.len();
            let both = node.left().is_some() && node.right().is_some();
            // Right is pushed first so the left subtree is written first.
            if let Some(right) = node.right() {
                stack.push(Pending {
                    handle: right,
                    depth,
                    open: false,
                });
            }
            if let Some(left) = node.left() {
                stack.push(Pending {
                    handle: left,
                    depth,
                    open: both,
                });
            }
        }
        Ok(())
    }

    /// Writes one line per node in ascending key order.
    pub(crate) fn write_in_order<W, F>(&self, out: &mut W, mut entry: F) -> fmt::Result
    where
        W: Write,
        F: FnMut(&mut W, &K, &V) -> fmt::Result,
    {
        let arena = self.arena();
        let mut current = self.minimum();
        while let Some(handle) = current {
            let node = arena.node(handle);
            entry(out, node.key(), arena.value(handle))?;
            write_fields(out, node)?;
            out.write_char('\n')?;
            current = arena.next(handle);
        }
        Ok(())
    }
}
