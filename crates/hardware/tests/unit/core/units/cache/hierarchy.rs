//! Hierarchy Controller Tests.
//!
//! End-to-end behavior of the three-level controller: the L1 → victim → L2
//! → memory load path, promotions, the eviction chain, the write-through
//! store path, and the statistics tallies.
//!
//! Address arithmetic used throughout: addresses stepping by 64 share L1/L2
//! set 0 with distinct tags (4-byte blocks × 16 sets).

use cachesim_core::core::units::cache::Level;
use pretty_assertions::assert_eq;

use crate::common::harness::{self, load, store, CONFLICT_STRIDE};

// ══════════════════════════════════════════════════════════
// 1. Cold start and repeated loads
// ══════════════════════════════════════════════════════════

/// First-ever load misses every level and fills L1 from memory.
#[test]
fn cold_load_misses_all_levels() {
    let sim = harness::replay("1,0,0,0\n");
    let stats = &sim.cache.stats;

    assert_eq!(stats.l1_misses, 1);
    assert_eq!(stats.victim_misses, 1);
    assert_eq!(stats.l2_misses, 1);
    assert_eq!(stats.l1_hits + stats.victim_hits + stats.l2_hits, 0);
    assert_eq!(stats.l1_miss_rate(), 1.0);
    assert_eq!(sim.cache.probe(0), Some(Level::L1));
}

/// Reloading immediately hits L1; the miss rate halves.
#[test]
fn repeated_load_hits_l1() {
    let sim = harness::replay("1,0,0,0\n1,0,0,0\n");
    let stats = &sim.cache.stats;

    assert_eq!(stats.l1_hits, 1);
    assert_eq!(stats.l1_misses, 1);
    assert_eq!(stats.l1_miss_rate(), 0.5);
    // The hit never reached the lower levels.
    assert_eq!(stats.victim_hits + stats.victim_misses, 1);
    assert_eq!(stats.l2_hits + stats.l2_misses, 1);
}

/// A repeated load hits if and only if nothing evicted the block in
/// between.
#[test]
fn intervening_conflict_breaks_the_hit() {
    let mut sim = harness::sim();
    let conflict = CONFLICT_STRIDE;

    sim.step(&load(0)).unwrap();
    sim.step(&load(conflict)).unwrap(); // same set, displaces block 0 from L1
    sim.step(&load(0)).unwrap();

    let stats = &sim.cache.stats;
    assert_eq!(stats.l1_hits, 0, "block 0 left L1 before the reload");
    assert_eq!(stats.victim_hits, 1, "but the victim buffer caught it");
}

// ══════════════════════════════════════════════════════════
// 2. Promotions and the eviction chain
// ══════════════════════════════════════════════════════════

/// A victim hit promotes the block back into L1 and removes it from the
/// buffer; the displaced L1 occupant drops into the buffer in its place.
#[test]
fn victim_hit_swaps_blocks_with_l1() {
    let mut sim = harness::sim();
    let conflict = CONFLICT_STRIDE;

    sim.step(&load(0)).unwrap();
    sim.step(&load(conflict)).unwrap();
    sim.step(&load(0)).unwrap(); // victim hit, promote

    assert_eq!(sim.cache.probe(0), Some(Level::L1));
    assert_eq!(sim.cache.probe(conflict), Some(Level::Victim));
}

/// A victim hit in a full buffer keeps the hit slot valid while the
/// displaced L1 occupant is inserted, so the buffer's least recent block
/// is pushed into L2 rather than the freed slot being reused.
#[test]
fn victim_hit_with_full_buffer_displaces_lru_into_l2() {
    let mut sim = harness::sim();

    // Five conflicting blocks: L1 holds block 4, the buffer holds blocks
    // 0..=3 at ranks 0..=3.
    for i in 0..5 {
        sim.step(&load(i * CONFLICT_STRIDE)).unwrap();
    }
    assert_eq!(sim.cache.victim_occupancy(), 4);

    // Hit block 3 (rank 3, not the LRU min). The incoming block 4 must
    // displace block 0, the least recent, into L2.
    sim.step(&load(3 * CONFLICT_STRIDE)).unwrap();

    assert_eq!(sim.cache.probe(3 * CONFLICT_STRIDE), Some(Level::L1));
    assert_eq!(sim.cache.probe(0), Some(Level::L2), "rank-0 block cascaded, not lost");
    assert_eq!(sim.cache.l2_occupancy(0), 1);
    assert_eq!(sim.cache.victim_occupancy(), 3);

    // And the cascaded block is retrievable as an L2 hit.
    sim.step(&load(0)).unwrap();
    assert_eq!(sim.cache.stats.l2_hits, 1);
}

/// When the hit entry is itself the buffer's LRU min, the incoming L1
/// evictee takes over its slot; the promoted copy is not re-inserted
/// anywhere below.
#[test]
fn victim_hit_at_lru_min_hands_its_slot_to_the_evictee() {
    let mut sim = harness::sim();

    for i in 0..5 {
        sim.step(&load(i * CONFLICT_STRIDE)).unwrap();
    }

    // Block 0 sits at rank 0, the LRU min. Hitting it promotes it to L1
    // and block 4 lands in its slot; nothing reaches L2.
    sim.step(&load(0)).unwrap();

    assert_eq!(sim.cache.probe(0), Some(Level::L1));
    assert_eq!(sim.cache.probe(4 * CONFLICT_STRIDE), Some(Level::Victim));
    assert_eq!(sim.cache.victim_occupancy(), 4);
    assert_eq!(sim.cache.l2_occupancy(0), 0);
}

/// Blocks pushed beyond the victim buffer's four slots land in L2 and are
/// retrievable as L2 hits, with their payload preserved through the chain.
#[test]
fn cascade_reaches_l2_beyond_victim_capacity() {
    let mut sim = harness::sim();

    // Seed block 0's frame so the payload is distinguishable.
    sim.step(&store(0, 0x12)).unwrap();
    sim.step(&store(1, 0x34)).unwrap();

    // Ten conflicting loads: block 0 is evicted from L1, ages through the
    // victim buffer, and is displaced onward into L2.
    for i in 0..10 {
        sim.step(&load(i * CONFLICT_STRIDE)).unwrap();
    }
    assert_eq!(sim.cache.probe(0), Some(Level::L2));
    assert_eq!(sim.cache.peek_word(0), Some(0x3412), "payload survived the chain");

    let l2_hits_before = sim.cache.stats.l2_hits;
    let l2_blocks_before = sim.cache.l2_occupancy(0);
    sim.step(&load(0)).unwrap();
    assert_eq!(sim.cache.stats.l2_hits, l2_hits_before + 1);
    assert_eq!(sim.cache.probe(0), Some(Level::L1), "L2 hit promoted the block");
    assert_eq!(sim.cache.peek_word(0), Some(0x3412));

    // The promotion freed one way and the cascade refilled it: the evicted
    // L1 block entered the buffer and the buffer's LRU block dropped into
    // the set the hit vacated.
    assert_eq!(sim.cache.l2_occupancy(0), l2_blocks_before);
    assert_eq!(sim.cache.victim_occupancy(), 4);
}

/// Eviction out of L2 is terminal: with enough conflicting blocks in
/// flight, the oldest ones disappear from the hierarchy entirely.
#[test]
fn l2_eviction_is_terminal() {
    let mut sim = harness::sim();

    // Sixteen conflicting blocks exceed L1 (1) + victim (4) + one L2 set
    // (8); the three oldest are discarded.
    for i in 0..16 {
        sim.step(&load(i * CONFLICT_STRIDE)).unwrap();
    }
    for gone in 0..3 {
        assert_eq!(sim.cache.probe(gone * CONFLICT_STRIDE), None);
    }
    for held in 3..16 {
        assert!(sim.cache.probe(held * CONFLICT_STRIDE).is_some());
    }
}

// ══════════════════════════════════════════════════════════
// 3. Single-owner invariant (directed)
// ══════════════════════════════════════════════════════════

/// At every step of a conflict-heavy sequence, each block address is valid
/// in at most one level.
#[test]
fn block_lives_in_at_most_one_level() {
    let mut sim = harness::sim();
    let addrs: Vec<usize> = (0..12).map(|i| i * CONFLICT_STRIDE).collect();

    for round in 0..3 {
        for &addr in &addrs {
            sim.step(&load(addr)).unwrap();
            for &a in &addrs {
                let fields = cachesim_core::common::addr::AddrFields::decompose(a);
                let holders = usize::from(sim.cache.l1.lookup(fields.index, fields.tag).is_some())
                    + usize::from(sim
                        .cache
                        .victim
                        .lookup(cachesim_core::common::addr::block_tag(a))
                        .is_some())
                    + usize::from(sim.cache.l2.lookup(fields.index, fields.tag).is_some());
                assert!(holders <= 1, "round {round}, after load {addr}: {a} in {holders} levels");
            }
        }
    }
}

// ══════════════════════════════════════════════════════════
// 4. Store path
// ══════════════════════════════════════════════════════════

/// Stores write through to memory whether they hit or miss, and a miss
/// allocates nothing.
#[test]
fn store_writes_through_without_allocating() {
    let mut sim = harness::sim();

    sim.step(&store(100, 0xDEAD_BEEF)).unwrap();
    assert_eq!(sim.memory[100], 0xDEAD_BEEF);
    assert_eq!(sim.cache.probe(100), None, "no-write-allocate");

    // Now a hit: load first, then store.
    sim.step(&load(100)).unwrap();
    sim.step(&store(100, 0x42)).unwrap();
    assert_eq!(sim.memory[100], 0x42);
    assert_eq!(sim.cache.probe(100), Some(Level::L1));
}

/// A store hit updates the cached byte at the block offset.
#[test]
fn store_hit_updates_cached_byte() {
    let mut sim = harness::sim();

    sim.step(&load(0)).unwrap(); // frame of zeros into L1
    sim.step(&store(2, 0xAB)).unwrap(); // offset 2 within the same block

    assert_eq!(sim.memory[2], 0xAB);
    assert_eq!(sim.cache.peek_word(0), Some(0x00AB_0000));
}

/// Stores never move the load statistics.
#[test]
fn stores_do_not_touch_stats() {
    let sim = harness::replay("0,1,0,1\n0,1,64,2\n0,1,128,3\n");
    let stats = &sim.cache.stats;

    assert_eq!(stats.l1_hits + stats.l1_misses, 0);
    assert_eq!(stats.victim_hits + stats.victim_misses, 0);
    assert_eq!(stats.l2_hits + stats.l2_misses, 0);
    assert_eq!(stats.l1_miss_rate(), 0.0);
}

/// A combined load+store record loads first, then stores into the freshly
/// filled block, so the store always hits.
#[test]
fn combined_load_store_hits_its_own_fill() {
    let sim = harness::replay("1,1,8,171\n");

    assert_eq!(sim.cache.stats.l1_misses, 1);
    assert_eq!(sim.memory[8], 171);
    assert_eq!(sim.cache.probe(8), Some(Level::L1));
    assert_eq!(sim.cache.peek_word(8), Some(0x0000_00AB));
}

// ══════════════════════════════════════════════════════════
// 5. Capacity and bounds
// ══════════════════════════════════════════════════════════

/// The victim buffer never exceeds four valid blocks; an L2 set never
/// exceeds eight.
#[test]
fn capacities_are_respected() {
    let mut sim = harness::sim();
    for i in 0..32 {
        sim.step(&load(i * CONFLICT_STRIDE)).unwrap();
        assert!(sim.cache.victim_occupancy() <= 4);
        assert!(sim.cache.l2_occupancy(0) <= 8);
    }
}

/// Addresses whose block frame falls outside the backing memory are a
/// defined failure and change nothing.
#[test]
fn out_of_range_access_is_rejected() {
    let mut sim = harness::sim();

    assert!(sim.step(&load(4096)).is_err());
    assert!(sim.step(&store(10_000, 1)).is_err());
    assert_eq!(sim.cache.stats.l1_misses, 0, "rejected access left no trace");

    // The last in-range word is fine.
    assert!(sim.step(&load(4095)).is_ok());
}
