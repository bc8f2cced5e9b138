//! Fully-associative victim buffer.
//!
//! Four slots holding blocks recently evicted from L1, cutting the cost of
//! conflict misses in the direct-mapped level. With a single set there are
//! no index bits; a block's identity is its whole block address, kept as the
//! L1 tag with the L1 index folded into the low bits.

use tracing::trace;

use super::block::CacheBlock;
use super::lru;
use crate::common::addr;
use crate::common::constants::VICTIM_WAYS;

/// The victim buffer.
#[derive(Debug)]
pub struct VictimBuffer {
    slots: [CacheBlock; VICTIM_WAYS],
}

impl VictimBuffer {
    /// Creates an empty victim buffer.
    pub fn new() -> Self {
        Self {
            slots: [CacheBlock::default(); VICTIM_WAYS],
        }
    }

    /// Scans all slots for a valid block with the given folded tag.
    pub fn lookup(&self, folded_tag: usize) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| s.valid && s.tag == folded_tag)
    }

    /// Removes the block at `slot` for promotion into L1, returning a copy.
    ///
    /// The slot is invalidated and its rank cleared; the surviving slots
    /// keep their ranks (no compaction).
    pub fn take(&mut self, slot: usize) -> CacheBlock {
        let block = self.slots[slot];
        self.slots[slot].valid = false;
        self.slots[slot].recency = 0;
        block
    }

    /// Accepts a block evicted from L1.
    ///
    /// The incoming tag is widened by folding in the L1 index, then the
    /// block is installed per the counter-LRU insertion rule. Returns the
    /// displaced occupant, if any, which the caller must cascade into L2.
    pub fn insert(&mut self, mut evicted: CacheBlock) -> Option<CacheBlock> {
        evicted.tag = addr::fold_tag(evicted.tag, evicted.index);
        trace!(
            tag = evicted.tag,
            index = evicted.index,
            "victim buffer accepting L1 evictee"
        );
        lru::insert(&mut self.slots, evicted)
    }

    /// Accepts an L1 evictee while the block at `hit` is leaving for L1.
    ///
    /// The hit slot stays valid during victim selection, so a full buffer
    /// displaces its least recent block into the chain instead of reusing
    /// the freed slot. Returns the displaced block for the L2 cascade.
    /// When the selection falls on the hit slot itself the newcomer takes
    /// it over and nothing cascades: the displaced copy is the one the
    /// caller just promoted. Otherwise the hit slot is invalidated after
    /// the insert.
    pub fn swap(&mut self, hit: usize, mut evicted: CacheBlock) -> Option<CacheBlock> {
        evicted.tag = addr::fold_tag(evicted.tag, evicted.index);
        trace!(
            tag = evicted.tag,
            index = evicted.index,
            "victim buffer accepting L1 evictee during promotion"
        );
        let reused = lru::victim_slot(&self.slots) == hit;
        let displaced = lru::insert(&mut self.slots, evicted);
        if reused {
            return None;
        }
        self.slots[hit].valid = false;
        self.slots[hit].recency = 0;
        displaced
    }

    /// Writes one byte into a matching block and re-ranks it most recent.
    ///
    /// Returns whether the store hit.
    pub fn store_byte(&mut self, folded_tag: usize, offset: usize, value: u8) -> bool {
        match self.lookup(folded_tag) {
            Some(slot) => {
                self.slots[slot].data.set_byte(offset, value);
                lru::touch(&mut self.slots, slot);
                true
            }
            None => false,
        }
    }

    /// Borrows the block at `slot` without touching recency state.
    pub fn peek(&self, slot: usize) -> &CacheBlock {
        &self.slots[slot]
    }

    /// Number of valid blocks currently held.
    pub fn occupancy(&self) -> usize {
        self.slots.iter().filter(|s| s.valid).count()
    }
}

impl Default for VictimBuffer {
    fn default() -> Self {
        Self::new()
    }
}
