use rand::{Rng, RngCore};

/// Heap priority of a zip-zip tree node.
///
/// Packs a geometric primary rank above a uniform tie-break: `(primary << 16) | (1 + tie)`.
/// Comparing packed values compares primaries first and tie-breaks second. The stored tie-break
/// is offset by one so an unset tie-break (zero) never equals a drawn one.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub(crate) struct Rank(u32);

impl Rank {
    const TIE_BITS: u32 = 16;
    const TIE_MASK: u32 = (1 << Self::TIE_BITS) - 1;
    /// A primary rank needing more coin flips than this is clamped.
    pub(crate) const MAX_PRIMARY: u32 = u32::MAX >> Self::TIE_BITS;

    #[inline]
    pub(crate) const fn from_parts(primary: u32, tie_break: u32) -> Self {
        assert!(primary <= Self::MAX_PRIMARY, "`Rank::from_parts()` - `primary` > `Rank::MAX_PRIMARY`!");
        assert!(tie_break < Self::TIE_MASK, "`Rank::from_parts()` - `tie_break` out of range!");
        Self((primary << Self::TIE_BITS) | (tie_break + 1))
    }

    /// Draws the rank of a node inserted into a tree that currently holds `len` nodes.
    ///
    /// The primary rank counts fair coin flips before the first tails. The tie-break is uniform
    /// in `[0, floor(log2(len + 1))^3)`, which is empty (so zero) for the first node.
    pub(crate) fn draw<R: RngCore>(rng: &mut R, len: usize) -> Self {
        let primary = geometric(rng).min(Self::MAX_PRIMARY);
        let bound = tie_break_bound(len);
        let tie_break = if bound == 0 { 0 } else { rng.random_range(0..bound) };
        Self::from_parts(primary, tie_break)
    }

    #[inline]
    pub(crate) const fn primary(self) -> u32 {
        self.0 >> Self::TIE_BITS
    }

    /// The stored tie-break, including its `+1` offset.
    #[inline]
    pub(crate) const fn tie_break(self) -> u32 {
        self.0 & Self::TIE_MASK
    }
}

/// Number of heads before the first tails, reading each random bit as one flip.
fn geometric<R: RngCore>(rng: &mut R) -> u32 {
    let mut heads = 0u32;
    loop {
        let run = rng.next_u64().trailing_ones();
        heads = heads.saturating_add(run);
        if run < u64::BITS {
            return heads;
        }
    }
}

fn tie_break_bound(len: usize) -> u32 {
    if len == 0 {
        return 0;
    }
    let log = (len as u64 + 1).ilog2();
    log * log * log
}
