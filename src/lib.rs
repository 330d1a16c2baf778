//! Zip-Zip Tree ordered collections for Rust.
//!
//! This crate provides [`ZipTreeMap`] and [`ZipTreeSet`], ordered collections built on a
//! randomized, heap-ordered binary search tree (a zip tree, in its zip-zip variant with a
//! two-part rank). Besides lookups, bounds and double-ended iteration they answer
//! order-statistic queries in expected O(log n):
//!
//! - [`at_index`](ZipTreeMap::at_index) - The entry at a given sorted position
//! - [`index_of`](ZipTreeMap::index_of) - The sorted position of a key
//! - Indexing by [`Position`] - e.g., `map[Position(0)]` for the first value
//!
//! # Example
//!
//! ```
//! use zipzip_tree::{Natural, Position, ZipTreeMap};
//!
//! let mut scores = ZipTreeMap::new(Natural);
//! scores.put("Alice", 100);
//! scores.put("Bob", 85);
//! scores.put("Carol", 92);
//!
//! assert_eq!(scores.get(&"Bob"), Some(&85));
//! assert_eq!(scores.len(), 3);
//!
//! // The median (position 1 = second key in sorted order).
//! assert_eq!(scores.at_index(1).key(), Some(&"Bob"));
//!
//! assert_eq!(scores.index_of(&"Carol"), Some(2));
//! assert_eq!(scores[Position(0)], 100);
//! ```
//!
//! # Ordering and randomness
//!
//! Keys are ordered by a single "less-than" predicate, a [`Comparator`]. Any
//! `Fn(&K, &K) -> bool` closure works, and [`Natural`] uses [`Ord`]. Node ranks are drawn from a
//! random source owned by the collection; pass a seeded one with `with_rng` for reproducible
//! shapes.
//!
//! # Implementation
//!
//! Nodes live in one contiguous arena and refer to each other by 32-bit slot index. Deleting a
//! node moves the arena's last node into the freed slot, so the arena never has holes; a map
//! keeps its values in a parallel array that moves in the same step. Every node tracks the size
//! of its subtree, which is what makes the order-statistic queries logarithmic.
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`; the default `std` feature adds OS-seeded
//!   constructors.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod order_statistic;
mod raw;

pub mod comparator;
pub mod zip_tree_map;
pub mod zip_tree_set;

pub use comparator::{Comparator, Natural};
pub use order_statistic::Position;
pub use zip_tree_map::ZipTreeMap;
pub use zip_tree_set::ZipTreeSet;
