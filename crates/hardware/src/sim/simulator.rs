//! Replay driver: owns the hierarchy and the backing memory side-by-side.
//!
//! The backing memory is a flat word array (one word per byte address,
//! matching the trace format's address space); the hierarchy borrows it per
//! access and never owns it.

use serde::Serialize;

use crate::config::{Config, TimingConfig};
use crate::core::units::cache::CacheHierarchy;
use crate::common::MemoryError;
use crate::sim::trace::TraceRecord;

/// Miss rates and the AAT estimate for one replayed trace.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Report {
    /// L1 miss rate.
    pub l1_miss_rate: f64,
    /// Victim buffer miss rate.
    pub victim_miss_rate: f64,
    /// L2 miss rate.
    pub l2_miss_rate: f64,
    /// Average access time estimate in cycles.
    pub aat: f64,
}

/// Top-level simulator: hierarchy controller + backing memory.
#[derive(Debug)]
pub struct Simulator {
    /// The cache hierarchy under test.
    pub cache: CacheHierarchy,
    /// The flat backing memory, zero-initialized.
    pub memory: Vec<u32>,
    timing: TimingConfig,
}

impl Simulator {
    /// Creates a simulator with an empty hierarchy and zeroed memory.
    pub fn new(config: &Config) -> Self {
        Self {
            cache: CacheHierarchy::new(),
            memory: vec![0; config.memory.words],
            timing: config.timing.clone(),
        }
    }

    /// Replays one trace record.
    ///
    /// # Errors
    ///
    /// [`MemoryError::OutOfRange`] for an address whose block frame falls
    /// outside the backing memory.
    pub fn step(&mut self, record: &TraceRecord) -> Result<(), MemoryError> {
        self.cache.access(
            record.load,
            record.store,
            record.data,
            record.addr,
            &mut self.memory,
        )
    }

    /// Replays a whole trace in order and returns the report.
    ///
    /// # Errors
    ///
    /// The first [`MemoryError`] encountered; records before it have
    /// already taken effect.
    pub fn run(&mut self, trace: &[TraceRecord]) -> Result<Report, MemoryError> {
        for record in trace {
            self.step(record)?;
        }
        Ok(self.report())
    }

    /// Builds the report from the current statistics.
    pub fn report(&self) -> Report {
        let stats = &self.cache.stats;
        Report {
            l1_miss_rate: stats.l1_miss_rate(),
            victim_miss_rate: stats.victim_miss_rate(),
            l2_miss_rate: stats.l2_miss_rate(),
            aat: stats.aat(&self.timing),
        }
    }

    /// The timing constants this simulator reports with.
    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }
}
