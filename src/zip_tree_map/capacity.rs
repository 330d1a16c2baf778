#[cfg(feature = "std")]
use rand::rngs::SmallRng;

use super::ZipTreeMap;
use crate::raw::RawZipTree;

#[cfg(feature = "std")]
impl<K, V, C> ZipTreeMap<K, V, C, SmallRng> {
    /// Creates an empty map ordered by `less`, with room for at least `capacity` entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeMap};
    ///
    /// let map: ZipTreeMap<i32, i32> = ZipTreeMap::with_capacity(Natural, 32);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(less: C, capacity: usize) -> Self {
        use rand::SeedableRng;

        Self::with_capacity_and_rng(less, SmallRng::from_os_rng(), capacity)
    }
}

impl<K, V, C, R> ZipTreeMap<K, V, C, R> {
    /// Creates an empty map ordered by `less` that draws ranks from `rng`, with room for at
    /// least `capacity` entries.
    #[must_use]
    pub fn with_capacity_and_rng(less: C, rng: R, capacity: usize) -> Self {
        ZipTreeMap {
            raw: RawZipTree::with_capacity(less, rng, capacity),
        }
    }

    /// Returns the number of entries the map can hold without reallocating.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Reserves room for at least `additional` more entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use zipzip_tree::{Natural, ZipTreeMap};
    ///
    /// let mut map = ZipTreeMap::new(Natural);
    /// map.put(1, "a");
    /// map.reserve(10);
    /// assert!(map.capacity() >= 11);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        self.raw.reserve(additional);
    }

    /// Shrinks the backing storage as close to [`len`](Self::len) as the allocator allows.
    pub fn shrink_to_fit(&mut self) {
        self.raw.shrink_to_fit();
    }
}
