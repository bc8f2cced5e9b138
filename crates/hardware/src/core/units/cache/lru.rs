//! Counter-based LRU replacement.
//!
//! The victim buffer and each L2 set share one recency scheme, parameterized
//! by the slot count `N` (the slice length). Every valid block carries an
//! integer rank; rank 0 is the most eligible for replacement.
//!
//! Two distinct aging rules apply:
//! - **Insertion** ranks the newcomer at `N` and then ages every valid slot,
//!   the newcomer included, so it settles at `N - 1`. A slot aged at rank 0
//!   is invalidated: eviction by aging.
//! - **Touch** of a block at prior rank `p` ranks it at `N` and ages only
//!   slots whose rank was at least `p`; less-recent slots keep their rank
//!   and their relative order.
//!
//! This approximates true LRU with a bounded counter instead of an ordered
//! list; ties break in favor of the first slot found by the linear scan.

use super::block::CacheBlock;

/// Ages every valid slot whose rank is at least `floor` by one, invalidating
/// slots aged at rank 0.
fn age(slots: &mut [CacheBlock], floor: usize) {
    for slot in slots.iter_mut().filter(|s| s.valid) {
        if slot.recency < floor {
            continue;
        }
        if slot.recency == 0 {
            slot.valid = false;
        } else {
            slot.recency -= 1;
        }
    }
}

/// Selects the slot a fresh insertion replaces: the first invalid slot, else
/// the valid slot with the lowest rank (first found on ties).
pub fn victim_slot(slots: &[CacheBlock]) -> usize {
    if let Some(empty) = slots.iter().position(|s| !s.valid) {
        return empty;
    }
    let mut min = 0;
    for (i, slot) in slots.iter().enumerate().skip(1) {
        if slot.recency < slots[min].recency {
            min = i;
        }
    }
    min
}

/// Installs `block` in the slot chosen by [`victim_slot`], ranks it most
/// recent, and runs the insertion aging pass.
///
/// Returns the displaced occupant if the chosen slot held a valid block.
/// Blocks invalidated by the aging pass itself are simply dropped; the
/// caller only cascades the directly displaced one.
pub fn insert(slots: &mut [CacheBlock], mut block: CacheBlock) -> Option<CacheBlock> {
    let slot = victim_slot(slots);
    let displaced = slots[slot].valid.then(|| slots[slot]);

    block.valid = true;
    block.recency = slots.len();
    slots[slot] = block;
    age(slots, 0);

    displaced
}

/// Re-ranks the block at `slot` as most recent, aging only the slots that
/// were at least as recent as it was.
pub fn touch(slots: &mut [CacheBlock], slot: usize) {
    let prior = slots[slot].recency;
    slots[slot].recency = slots.len();
    age(slots, prior);
}
