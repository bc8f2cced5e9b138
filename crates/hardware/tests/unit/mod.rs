//! # Unit Tests
//!
//! Fine-grained tests for the individual components of the simulator.




/// Tests for trace parsing and the replay driver.
pub mod sim;

/// Tests for the statistics counters, miss rates, and the AAT estimate.
pub mod stats;
