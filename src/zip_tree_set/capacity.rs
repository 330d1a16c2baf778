#[cfg(feature = "std")]
use rand::rngs::SmallRng;

use super::ZipTreeSet;
use crate::ZipTreeMap;

#[cfg(feature = "std")]
impl<K, C> ZipTreeSet<K, C, SmallRng> {
    /// Creates an empty set ordered by `less`, with room for at least `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeSet};
    ///
    /// let set: ZipTreeSet<i32> = ZipTreeSet::with_capacity(Natural, 32);
    /// assert!(set.capacity() >= 32);
    /// ```
    #[must_use]
    pub fn with_capacity(less: C, capacity: usize) -> Self {
        ZipTreeSet {
            map: ZipTreeMap::with_capacity(less, capacity),
        }
    }
}

impl<K, C, R> ZipTreeSet<K, C, R> {
    /// Creates an empty set ordered by `less` that draws ranks from `rng`, with room for at
    /// least `capacity` elements.
    #[must_use]
    pub fn with_capacity_and_rng(less: C, rng: R, capacity: usize) -> Self {
        ZipTreeSet {
            map: ZipTreeMap::with_capacity_and_rng(less, rng, capacity),
        }
    }

    /// Returns the number of elements the set can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }

    /// Reserves room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.map.reserve(additional);
    }

    pub fn shrink_to_fit(&mut self) {
        self.map.shrink_to_fit();
    }
}
