use core::num::NonZero;

#[cfg(test)]
pub(super) type RawHandle = u16;
#[cfg(not(test))]
pub(super) type RawHandle = u32;

/// Index of a slot in the arena.
///
/// The all-ones index is reserved as "none". The index is stored complemented, so that
/// reserved value lands on zero and `Option<Handle>::None` takes its place.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<RawHandle>);

impl Handle {
    /// The reserved all-ones index. No node ever lives in this slot.
    const NONE_INDEX: RawHandle = RawHandle::MAX;

    /// Largest usable slot index.
    pub(crate) const MAX: usize = (Self::NONE_INDEX - 1) as usize;

    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "`Handle::from_index()` - `index` > `Handle::MAX`!");
        #[allow(clippy::cast_possible_truncation)]
        match NonZero::new(!(index as RawHandle)) {
            Some(raw) => Self(raw),
            None => unreachable!(),
        }
    }

    #[inline]
    pub(crate) const fn to_index(self) -> usize {
        (!self.0.get()) as usize
    }
}
