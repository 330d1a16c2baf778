use core::ops::Add;

#[cfg(test)]
use super::handle::Handle;
use super::handle::RawHandle;

/// Number of nodes in a subtree.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[repr(transparent)]
pub(crate) struct Size(RawHandle);

impl Size {
    /// Every slot a handle can address, counted once.
    #[cfg(test)]
    pub(crate) const MAX: usize = Handle::MAX + 1;
    pub(crate) const ZERO: Self = Self(0);
    pub(crate) const ONE: Self = Self(1);

    #[cfg(test)]
    pub(crate) const fn from_usize(size: usize) -> Self {
        assert!(size <= Self::MAX, "`Size::from_usize()` - `size` > `Size::MAX`!");
        #[allow(clippy::cast_possible_truncation)]
        Self(size as RawHandle)
    }

    #[inline]
    pub(crate) const fn to_usize(self) -> usize {
        self.0 as usize
    }
}

impl Add for Size {
    type Output = Size;

    #[inline]
    fn add(self, rhs: Size) -> Size {
        Size(self.0 + rhs.0)
    }
}
