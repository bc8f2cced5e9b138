//! Direct-mapped first-level store.
//!
//! One block per set, so replacement is forced by the mapping and no
//! recency state exists. A fill unconditionally overwrites the slot and
//! hands the previous occupant back to the caller, which decides whether
//! to cascade it into the victim buffer.

use super::block::CacheBlock;
use crate::common::constants::L1_SETS;

/// The direct-mapped L1 array.
#[derive(Debug)]
pub struct FirstLevel {
    slots: [CacheBlock; L1_SETS],
}

impl FirstLevel {
    /// Creates an empty L1.
    pub fn new() -> Self {
        Self {
            slots: [CacheBlock::default(); L1_SETS],
        }
    }

    /// Returns the block at `index` if it is valid and its tag matches.
    #[inline]
    pub fn lookup(&self, index: usize, tag: usize) -> Option<&CacheBlock> {
        let slot = &self.slots[index];
        (slot.valid && slot.tag == tag).then_some(slot)
    }

    /// Overwrites the slot at `index` with `block`, returning the previous
    /// occupant, valid or not, so the caller can cascade an eviction.
    #[inline]
    pub fn fill(&mut self, index: usize, block: CacheBlock) -> CacheBlock {
        std::mem::replace(&mut self.slots[index], block)
    }

    /// Writes one byte into the block at `index` if it matches `tag`.
    ///
    /// Returns whether the store hit. No recency bookkeeping: the single
    /// slot per set makes it meaningless.
    pub fn store_byte(&mut self, index: usize, tag: usize, offset: usize, value: u8) -> bool {
        let slot = &mut self.slots[index];
        if slot.valid && slot.tag == tag {
            slot.data.set_byte(offset, value);
            true
        } else {
            false
        }
    }
}

impl Default for FirstLevel {
    fn default() -> Self {
        Self::new()
    }
}
