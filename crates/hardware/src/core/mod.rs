//! Cache hierarchy core.
//!
//! Contains the storage units of the modeled memory system. The hierarchy
//! controller in [`units::cache`] is the façade the replay driver talks to.

/// Hardware units (the cache hierarchy).
pub mod units;
