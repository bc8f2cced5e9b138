//! Set-associative second-level store.
//!
//! Sixteen independent sets of eight ways, sharing the L1 index space, each
//! set running the same counter-LRU scheme as the victim buffer. Eviction
//! out of L2 is terminal: under write-through the backing memory already
//! holds the authoritative copy, so a displaced block is discarded.

use super::block::CacheBlock;
use super::lru;
use crate::common::addr;
use crate::common::constants::{L2_SETS, L2_WAYS};

/// The set-associative L2 array.
#[derive(Debug)]
pub struct SecondLevel {
    sets: [[CacheBlock; L2_WAYS]; L2_SETS],
}

impl SecondLevel {
    /// Creates an empty L2.
    pub fn new() -> Self {
        Self {
            sets: [[CacheBlock::default(); L2_WAYS]; L2_SETS],
        }
    }

    /// Scans the set at `index` for a valid block with a matching tag,
    /// returning its way.
    pub fn lookup(&self, index: usize, tag: usize) -> Option<usize> {
        self.sets[index]
            .iter()
            .position(|s| s.valid && s.tag == tag)
    }

    /// Removes the block at `(index, way)` for promotion into L1,
    /// returning a copy.
    pub fn take(&mut self, index: usize, way: usize) -> CacheBlock {
        let block = self.sets[index][way];
        self.sets[index][way].valid = false;
        block
    }

    /// Accepts a block displaced from the victim buffer.
    ///
    /// The block's set is the L1/L2 index it has carried since its original
    /// fill; the stored tag is re-derived by stripping the victim buffer's
    /// folded index bits. Aging is confined to the target set. Returns the
    /// displaced occupant, which the caller discards.
    pub fn insert(&mut self, mut block: CacheBlock) -> Option<CacheBlock> {
        block.tag = addr::unfold_tag(block.tag);
        lru::insert(&mut self.sets[block.index], block)
    }

    /// Accepts a victim-buffer displacement while the block at
    /// `(hit_index, hit_way)` is leaving for L1.
    ///
    /// The hit way stays valid during victim selection, so a full set
    /// displaces its least recent way instead of reusing the freed one.
    /// When the incoming block targets the hit way itself the newcomer
    /// takes it over and nothing is displaced: the displaced copy is the
    /// one the caller just promoted. Otherwise the hit way is invalidated
    /// after the insert. Returns the displaced block, which the caller
    /// discards.
    pub fn swap(
        &mut self,
        hit_index: usize,
        hit_way: usize,
        mut block: CacheBlock,
    ) -> Option<CacheBlock> {
        block.tag = addr::unfold_tag(block.tag);
        let set = block.index;
        let reused = set == hit_index && lru::victim_slot(&self.sets[set]) == hit_way;
        let displaced = lru::insert(&mut self.sets[set], block);
        if reused {
            return None;
        }
        self.sets[hit_index][hit_way].valid = false;
        displaced
    }

    /// Writes one byte into a matching block and re-ranks it most recent
    /// within its set.
    ///
    /// Returns whether the store hit.
    pub fn store_byte(&mut self, index: usize, tag: usize, offset: usize, value: u8) -> bool {
        match self.lookup(index, tag) {
            Some(way) => {
                self.sets[index][way].data.set_byte(offset, value);
                lru::touch(&mut self.sets[index], way);
                true
            }
            None => false,
        }
    }

    /// Borrows the block at `(index, way)` without touching recency state.
    pub fn peek(&self, index: usize, way: usize) -> &CacheBlock {
        &self.sets[index][way]
    }

    /// Number of valid blocks currently held by the set at `index`.
    pub fn occupancy(&self, index: usize) -> usize {
        self.sets[index].iter().filter(|s| s.valid).count()
    }
}

impl Default for SecondLevel {
    fn default() -> Self {
        Self::new()
    }
}
