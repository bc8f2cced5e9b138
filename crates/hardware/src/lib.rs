//! Multi-level cache hierarchy simulator library.
//!
//! This crate implements a functional model of a three-level data cache
//! hierarchy replayed against a load/store trace:
//! 1. **Hierarchy:** Direct-mapped L1, fully-associative victim buffer, and
//!    8-way set-associative L2 with cross-level eviction chaining.
//! 2. **Replacement:** Counter-based LRU aging shared by the victim buffer
//!    and L2, with aging-driven eviction at rank zero.
//! 3. **Statistics:** Per-level hit/miss counters, miss rates, and the
//!    nested-penalty average access time (AAT) estimate.
//! 4. **Simulation:** Trace parsing, replay driver, and configuration.
//!
//! The model is strictly single-threaded and synchronous: every access
//! completes its full lookup/fill/eviction cascade before returning.

/// Common types and constants (address fields, block payload, errors).
pub mod common;
/// Simulator configuration (defaults, memory size, timing constants).
pub mod config;
/// Cache hierarchy core (stores, replacement, controller).
pub mod core;
/// Trace parsing and replay driver.
pub mod sim;
/// Per-level statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// The hierarchy controller; dispatches loads and stores across L1, the
/// victim buffer, L2, and the backing memory.
pub use crate::core::units::cache::CacheHierarchy;
/// Trace replay driver; owns the hierarchy and the backing memory.
pub use crate::sim::simulator::Simulator;
