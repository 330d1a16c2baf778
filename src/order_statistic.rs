/// A zero-based position in the sorted order of a map or set.
///
/// # Examples
///
/// ```
/// use zipzip_tree::{Natural, Position, ZipTreeMap};
///
/// let mut map = ZipTreeMap::new(Natural);
/// map.put("a", 10);
/// map.put("b", 20);
///
/// assert_eq!(map[Position(0)], 10);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Position(pub usize);
