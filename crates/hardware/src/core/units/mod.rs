//! Storage units of the modeled memory system.

/// The three-level cache hierarchy and its controller.
pub mod cache;
