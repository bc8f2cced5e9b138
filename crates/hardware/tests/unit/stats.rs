//! Statistics Tests.

use cachesim_core::config::TimingConfig;
use cachesim_core::stats::SimStats;
use pretty_assertions::assert_eq;

fn stats(tallies: [u64; 6]) -> SimStats {
    let [l1_hits, l1_misses, victim_hits, victim_misses, l2_hits, l2_misses] = tallies;
    SimStats {
        l1_hits,
        l1_misses,
        victim_hits,
        victim_misses,
        l2_hits,
        l2_misses,
    }
}

// ══════════════════════════════════════════════════════════
// 1. Miss rates
// ══════════════════════════════════════════════════════════

/// A level that recorded nothing reports 0.0, not NaN.
#[test]
fn empty_levels_report_zero() {
    let empty = SimStats::default();
    assert_eq!(empty.l1_miss_rate(), 0.0);
    assert_eq!(empty.victim_miss_rate(), 0.0);
    assert_eq!(empty.l2_miss_rate(), 0.0);
}

#[test]
fn rates_are_misses_over_attempts() {
    let s = stats([3, 1, 0, 1, 1, 0]);
    assert_eq!(s.l1_miss_rate(), 0.25);
    assert_eq!(s.victim_miss_rate(), 1.0);
    assert_eq!(s.l2_miss_rate(), 0.0);
}

// ══════════════════════════════════════════════════════════
// 2. Average access time
// ══════════════════════════════════════════════════════════

/// Only L1 hits: no penalty term survives, so the AAT is the L1 hit time.
#[test]
fn aat_with_only_l1_hits_is_the_hit_time() {
    let s = stats([10, 0, 0, 0, 0, 0]);
    assert_eq!(s.aat(&TimingConfig::default()), 1.0);
}

/// Every level missing stacks the full penalty chain:
/// 1 + (1 + (8 + 100) * 1) * 1 = 110 with the default timing.
#[test]
fn aat_with_all_misses_stacks_every_penalty() {
    let s = stats([0, 5, 0, 5, 0, 5]);
    assert_eq!(s.aat(&TimingConfig::default()), 110.0);
}

/// Each miss rate scales the entire penalty of the levels below it, hand
/// computed for a mixed tally.
#[test]
fn aat_nests_the_penalties() {
    // l1 = 4/8, vic = 2/4, l2 = 1/2.
    let s = stats([4, 4, 2, 2, 1, 1]);
    let expected = 1.0 + (1.0 + (8.0 + 100.0 * 0.5) * 0.5) * 0.5;
    assert_eq!(s.aat(&TimingConfig::default()), expected);
}

#[test]
fn aat_follows_custom_timing() {
    let timing = TimingConfig {
        l1_hit: 2.0,
        victim_hit: 3.0,
        l2_hit: 10.0,
        memory_penalty: 50.0,
    };
    let s = stats([0, 1, 0, 1, 0, 1]);
    assert_eq!(s.aat(&timing), 2.0 + 3.0 + 10.0 + 50.0);
}
