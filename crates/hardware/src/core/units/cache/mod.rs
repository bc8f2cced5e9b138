//! Three-level cache hierarchy controller.
//!
//! This module implements the cooperating storage levels and the protocol
//! between them:
//! 1. **L1:** direct-mapped, 16 single-block sets.
//! 2. **Victim buffer:** 4 fully-associative slots fed by L1 evictions.
//! 3. **L2:** 16 sets × 8 ways, terminal level before memory.
//!
//! A load searches L1 → victim → L2 → memory; any hit below L1 promotes the
//! block into L1 and removes it from its source level, so a block address is
//! valid in at most one level at any instant. The hit entry keeps its slot
//! until the cascade has chosen where the displaced L1 occupant lands, so a
//! full level displaces its least recent block rather than reusing the
//! freed slot. Every valid block displaced
//! from L1 cascades down the chain L1 → victim → L2 within the same call;
//! a block displaced out of L2 is discarded, since write-through keeps the
//! backing memory authoritative. Stores are write-through, no-write-allocate
//! and leave the load statistics untouched.

/// Cache block definition.
pub mod block;
/// Direct-mapped first level.
pub mod l1;
/// Set-associative second level.
pub mod l2;
/// Counter-based LRU aging shared by the victim buffer and L2.
pub mod lru;
/// Fully-associative victim buffer.
pub mod victim;

use tracing::trace;

use self::block::CacheBlock;
use self::l1::FirstLevel;
use self::l2::SecondLevel;
use self::victim::VictimBuffer;
use crate::common::addr::{self, AddrFields};
use crate::common::constants::BLOCK_BYTES;
use crate::common::{BlockData, MemoryError};
use crate::stats::SimStats;

/// The storage levels of the hierarchy, for probing where a block lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// Direct-mapped first level.
    L1,
    /// Fully-associative victim buffer.
    Victim,
    /// Set-associative second level.
    L2,
}

/// The hierarchy controller.
///
/// Owns the three storage levels and the per-level statistics. The backing
/// memory stays caller-owned for the controller's entire lifetime; it is
/// borrowed per access and never retained.
#[derive(Debug, Default)]
pub struct CacheHierarchy {
    /// Direct-mapped first level.
    pub l1: FirstLevel,
    /// Fully-associative victim buffer.
    pub victim: VictimBuffer,
    /// Set-associative second level.
    pub l2: SecondLevel,
    /// Per-level hit/miss tallies for the replayed loads.
    pub stats: SimStats,
}

impl CacheHierarchy {
    /// Creates an empty hierarchy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatches one trace record against the hierarchy.
    ///
    /// Either or both of `load` and `store` may be set; the store takes
    /// effect after the load within the same call. Fills and evictions
    /// cascade synchronously before this returns.
    ///
    /// # Errors
    ///
    /// [`MemoryError::OutOfRange`] if the block frame containing `addr`
    /// does not fit in `memory`; no state changes in that case.
    pub fn access(
        &mut self,
        load: bool,
        store: bool,
        data: u32,
        addr: usize,
        memory: &mut [u32],
    ) -> Result<(), MemoryError> {
        if AddrFields::block_base(addr) + BLOCK_BYTES > memory.len() {
            return Err(MemoryError::OutOfRange {
                addr,
                words: memory.len(),
            });
        }

        if load {
            self.load_word(addr, memory);
        }
        if store {
            self.store_word(data, addr, memory);
        }
        Ok(())
    }

    /// The load path: search L1 → victim → L2 → memory, promote on any hit
    /// below L1, and tally one hit-or-miss per level attempted.
    fn load_word(&mut self, addr: usize, memory: &[u32]) {
        let fields = AddrFields::decompose(addr);

        let l1_hit = self.l1.lookup(fields.index, fields.tag).is_some();
        let mut victim_hit = false;
        let mut l2_hit = false;

        if !l1_hit {
            if let Some(slot) = self.victim.lookup(addr::block_tag(addr)) {
                let mut promoted = *self.victim.peek(slot);
                promoted.tag = fields.tag;
                trace!(addr, "victim buffer hit; promoting into L1");
                let previous = self.l1.fill(fields.index, promoted);
                // The hit slot stays valid through the cascade so a full
                // buffer displaces its least recent block, not the freed
                // slot.
                if previous.valid {
                    if let Some(displaced) = self.victim.swap(slot, previous) {
                        self.spill_to_l2(displaced);
                    }
                } else {
                    let _ = self.victim.take(slot);
                }
                victim_hit = true;
            } else if let Some(way) = self.l2.lookup(fields.index, fields.tag) {
                let promoted = *self.l2.peek(fields.index, way);
                trace!(addr, way, "L2 hit; promoting into L1");
                let previous = self.l1.fill(fields.index, promoted);
                // Same ordering: the hit way stays valid until the cascade
                // has chosen its slots.
                let mut cascade_reached_l2 = false;
                if previous.valid {
                    if let Some(displaced) = self.victim.insert(previous) {
                        cascade_reached_l2 = true;
                        if let Some(dropped) = self.l2.swap(fields.index, way, displaced) {
                            trace!(
                                tag = dropped.tag,
                                index = dropped.index,
                                "L2 eviction is terminal; block discarded"
                            );
                        }
                    }
                }
                if !cascade_reached_l2 {
                    let _ = self.l2.take(fields.index, way);
                }
                l2_hit = true;
            } else {
                let base = AddrFields::block_base(addr);
                let block = CacheBlock {
                    tag: fields.tag,
                    index: fields.index,
                    recency: 0,
                    data: BlockData::from_frame(&memory[base..base + BLOCK_BYTES]),
                    valid: true,
                };
                trace!(addr, "full miss; filling L1 from memory");
                self.promote(fields.index, block);
            }
        }

        // A level is attempted only when every prior level missed.
        self.stats.l1_hits += u64::from(l1_hit);
        self.stats.l1_misses += u64::from(!l1_hit);
        self.stats.victim_hits += u64::from(victim_hit);
        self.stats.victim_misses += u64::from(!l1_hit && !victim_hit);
        self.stats.l2_hits += u64::from(l2_hit);
        self.stats.l2_misses += u64::from(!l1_hit && !victim_hit && !l2_hit);
    }

    /// The store path: write-through, no-write-allocate.
    ///
    /// The first level that holds the block takes the byte and a recency
    /// touch; memory takes the full word unconditionally; a miss across all
    /// three levels fills nothing.
    fn store_word(&mut self, data: u32, addr: usize, memory: &mut [u32]) {
        let fields = AddrFields::decompose(addr);
        let value = (data & 0xFF) as u8;

        let hit = self
            .l1
            .store_byte(fields.index, fields.tag, fields.offset, value)
            || self
                .victim
                .store_byte(addr::block_tag(addr), fields.offset, value)
            || self
                .l2
                .store_byte(fields.index, fields.tag, fields.offset, value);
        if !hit {
            trace!(addr, "store missed all levels; writing through only");
        }

        memory[addr] = data;
    }

    /// Installs `block` in its L1 slot, cascading any valid previous
    /// occupant down the chain.
    fn promote(&mut self, index: usize, block: CacheBlock) {
        let previous = self.l1.fill(index, block);
        if previous.valid {
            self.cascade(previous);
        }
    }

    /// The eviction chain: L1 evictee → victim buffer; the buffer's
    /// displaced block → L2; an L2 evictee is dropped.
    fn cascade(&mut self, evicted: CacheBlock) {
        if let Some(displaced) = self.victim.insert(evicted) {
            self.spill_to_l2(displaced);
        }
    }

    /// The terminal leg of the chain: a victim-buffer displacement goes
    /// into L2 and an L2 evictee is dropped.
    fn spill_to_l2(&mut self, displaced: CacheBlock) {
        if let Some(dropped) = self.l2.insert(displaced) {
            trace!(
                tag = dropped.tag,
                index = dropped.index,
                "L2 eviction is terminal; block discarded"
            );
        }
    }

    /// Reports which level, if any, currently holds the block containing
    /// `addr`. Side-effect free.
    pub fn probe(&self, addr: usize) -> Option<Level> {
        let fields = AddrFields::decompose(addr);
        if self.l1.lookup(fields.index, fields.tag).is_some() {
            Some(Level::L1)
        } else if self.victim.lookup(addr::block_tag(addr)).is_some() {
            Some(Level::Victim)
        } else if self.l2.lookup(fields.index, fields.tag).is_some() {
            Some(Level::L2)
        } else {
            None
        }
    }

    /// Reads the cached payload word for `addr`, wherever it lives.
    /// Side-effect free; `None` on a full miss.
    pub fn peek_word(&self, addr: usize) -> Option<u32> {
        let fields = AddrFields::decompose(addr);
        if let Some(block) = self.l1.lookup(fields.index, fields.tag) {
            return Some(block.data.word());
        }
        if let Some(slot) = self.victim.lookup(addr::block_tag(addr)) {
            return Some(self.victim.peek(slot).data.word());
        }
        self.l2
            .lookup(fields.index, fields.tag)
            .map(|way| self.l2.peek(fields.index, way).data.word())
    }

    /// Number of valid blocks in the victim buffer.
    pub fn victim_occupancy(&self) -> usize {
        self.victim.occupancy()
    }

    /// Number of valid blocks in the L2 set at `index`.
    pub fn l2_occupancy(&self, index: usize) -> usize {
        self.l2.occupancy(index)
    }
}
