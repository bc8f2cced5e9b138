//! Configuration system for the cache simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! simulation run. It provides:
//! 1. **Defaults:** The modeled machine's constants (memory size, per-level
//!    access times, memory penalty).
//! 2. **Structures:** Hierarchical config for memory and timing.
//!
//! Hierarchy geometry (set counts, associativity, victim capacity, block
//! size) is fixed at build time in [`crate::common::constants`] and is
//! deliberately absent here. Configuration is supplied via JSON or
//! `Config::default()`.

use serde::Deserialize;

/// Default configuration constants for the simulator.
mod defaults {
    /// Backing memory size in words (one word per byte address).
    pub const MEM_WORDS: usize = 4096;

    /// L1 hit time in cycles.
    pub const HT_L1: f64 = 1.0;

    /// Victim buffer hit time in cycles.
    pub const HT_VIC: f64 = 1.0;

    /// L2 hit time in cycles.
    pub const HT_L2: f64 = 8.0;

    /// Main memory penalty in cycles.
    pub const MEM_PENALTY: f64 = 100.0;
}

/// Root configuration for a simulation run.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Backing memory configuration.
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Per-level timing constants for the AAT estimate.
    #[serde(default)]
    pub timing: TimingConfig,
}

/// Backing memory configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Number of words in the backing memory array.
    #[serde(default = "MemoryConfig::default_words")]
    pub words: usize,
}

impl MemoryConfig {
    /// Returns the default backing memory size in words.
    fn default_words() -> usize {
        defaults::MEM_WORDS
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            words: defaults::MEM_WORDS,
        }
    }
}

/// Per-level access times and the memory penalty, in cycles.
///
/// These feed the average access time estimate; they do not influence
/// hit/miss behavior.
#[derive(Debug, Clone, Deserialize)]
pub struct TimingConfig {
    /// L1 hit time.
    #[serde(default = "TimingConfig::default_l1_hit")]
    pub l1_hit: f64,

    /// Victim buffer hit time.
    #[serde(default = "TimingConfig::default_victim_hit")]
    pub victim_hit: f64,

    /// L2 hit time.
    #[serde(default = "TimingConfig::default_l2_hit")]
    pub l2_hit: f64,

    /// Main memory penalty.
    #[serde(default = "TimingConfig::default_memory_penalty")]
    pub memory_penalty: f64,
}

impl TimingConfig {
    /// Returns the default L1 hit time.
    fn default_l1_hit() -> f64 {
        defaults::HT_L1
    }

    /// Returns the default victim buffer hit time.
    fn default_victim_hit() -> f64 {
        defaults::HT_VIC
    }

    /// Returns the default L2 hit time.
    fn default_l2_hit() -> f64 {
        defaults::HT_L2
    }

    /// Returns the default main memory penalty.
    fn default_memory_penalty() -> f64 {
        defaults::MEM_PENALTY
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            l1_hit: defaults::HT_L1,
            victim_hit: defaults::HT_VIC,
            l2_hit: defaults::HT_L2,
            memory_penalty: defaults::MEM_PENALTY,
        }
    }
}
