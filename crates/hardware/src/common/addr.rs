//! Address field decomposition.
//!
//! A byte address splits into three fields for the L1/L2 index space:
//! the byte offset within the 4-byte block, the set index, and the tag.
//! The fully-associative victim buffer has no index bits; its tag is the
//! whole block address, equivalently the L1 tag with the L1 index folded
//! into the low bits. Decomposition is total and deterministic: the same
//! address always splits identically for a given geometry.

use super::constants::{BLOCK_BYTES, INDEX_BITS, L1_SETS, OFFSET_BITS};

/// Address fields for the shared L1/L2 geometry (16 sets of 4-byte blocks).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddrFields {
    /// Byte offset within the block.
    pub offset: usize,
    /// Set index, shared by L1 and L2.
    pub index: usize,
    /// Upper address bits identifying the block within its set.
    pub tag: usize,
}

impl AddrFields {
    /// Splits a byte address into `(offset, index, tag)`.
    #[inline]
    pub fn decompose(addr: usize) -> Self {
        Self {
            offset: addr % BLOCK_BYTES,
            index: (addr / BLOCK_BYTES) % L1_SETS,
            tag: addr >> (OFFSET_BITS + INDEX_BITS),
        }
    }

    /// Returns the block-aligned base address of the frame containing `addr`.
    #[inline]
    pub fn block_base(addr: usize) -> usize {
        addr & !(BLOCK_BYTES - 1)
    }
}

/// Returns the victim buffer's tag for `addr`: the block address itself,
/// since the fully-associative level has no index bits.
#[inline]
pub fn block_tag(addr: usize) -> usize {
    addr >> OFFSET_BITS
}

/// Folds an L1 `(tag, index)` pair into a victim-buffer tag.
///
/// Blocks evicted from L1 keep their identity in the wider tag by carrying
/// the index in the low bits.
#[inline]
pub fn fold_tag(tag: usize, index: usize) -> usize {
    (tag << INDEX_BITS) | index
}

/// Strips the folded index bits from a victim-buffer tag, recovering the
/// narrower index-qualified tag used by L2.
#[inline]
pub fn unfold_tag(folded: usize) -> usize {
    folded >> INDEX_BITS
}

// L1 and L2 share the index space, so the fold/unfold pair must round-trip
// for any in-range index.
const _: () = assert!(L1_SETS == 1 << INDEX_BITS);
