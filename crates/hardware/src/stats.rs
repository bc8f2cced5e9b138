//! Per-level statistics collection and reporting.
//!
//! This module tallies the replayed loads for the hierarchy. It provides:
//! 1. **Counters:** Hit/miss counts per level; a level is counted only when
//!    every prior level missed, and stores are not counted at all.
//! 2. **Miss rates:** `misses / (misses + hits)` per level, `0.0` for a
//!    level that recorded nothing.
//! 3. **AAT:** The nested-penalty average access time estimate.

use serde::Serialize;

use crate::config::TimingConfig;

/// Hit/miss tallies for the three levels.
///
/// Fields are public and incremented inline by the hierarchy controller.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct SimStats {
    /// L1 load hits.
    pub l1_hits: u64,
    /// L1 load misses.
    pub l1_misses: u64,
    /// Victim buffer load hits.
    pub victim_hits: u64,
    /// Victim buffer load misses (counted only when L1 also missed).
    pub victim_misses: u64,
    /// L2 load hits.
    pub l2_hits: u64,
    /// L2 load misses (counted only when L1 and the victim buffer missed).
    pub l2_misses: u64,
}

/// Guarded ratio: zero when nothing was recorded at the level.
fn rate(misses: u64, hits: u64) -> f64 {
    if misses == 0 && hits == 0 {
        return 0.0;
    }
    misses as f64 / (misses + hits) as f64
}

impl SimStats {
    /// L1 miss rate over the replayed loads, in `[0.0, 1.0]`.
    pub fn l1_miss_rate(&self) -> f64 {
        rate(self.l1_misses, self.l1_hits)
    }

    /// Victim buffer miss rate over the loads that reached it.
    pub fn victim_miss_rate(&self) -> f64 {
        rate(self.victim_misses, self.victim_hits)
    }

    /// L2 miss rate over the loads that reached it.
    pub fn l2_miss_rate(&self) -> f64 {
        rate(self.l2_misses, self.l2_hits)
    }

    /// Average access time estimate.
    ///
    /// `HT_L1 + (HT_VIC + (HT_L2 + MP * l2) * vic) * l1`: each level's miss
    /// rate scales the whole penalty of the levels below it.
    pub fn aat(&self, timing: &TimingConfig) -> f64 {
        timing.l1_hit
            + (timing.victim_hit
                + (timing.l2_hit + timing.memory_penalty * self.l2_miss_rate())
                    * self.victim_miss_rate())
                * self.l1_miss_rate()
    }

    /// Prints the statistics table to stdout.
    pub fn print(&self, timing: &TimingConfig) {
        println!("\n==========================================================");
        println!("CACHE HIERARCHY SIMULATION STATISTICS");
        println!("==========================================================");
        println!("l1.hits                  {}", self.l1_hits);
        println!("l1.misses                {}", self.l1_misses);
        println!("l1.miss_rate             {:.4}", self.l1_miss_rate());
        println!("victim.hits              {}", self.victim_hits);
        println!("victim.misses            {}", self.victim_misses);
        println!("victim.miss_rate         {:.4}", self.victim_miss_rate());
        println!("l2.hits                  {}", self.l2_hits);
        println!("l2.misses                {}", self.l2_misses);
        println!("l2.miss_rate             {:.4}", self.l2_miss_rate());
        println!("----------------------------------------------------------");
        println!("aat                      {:.4} cycles", self.aat(timing));
    }
}
