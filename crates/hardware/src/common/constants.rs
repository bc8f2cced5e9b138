//! Fixed hierarchy geometry.
//!
//! The hierarchy models a fixed, small machine: geometry is decided at build
//! time and is not configurable (only the backing memory size and the timing
//! constants live in [`crate::config`]).

/// Number of sets in the direct-mapped L1 (one way per set).
pub const L1_SETS: usize = 16;

/// Number of sets in the set-associative L2.
pub const L2_SETS: usize = 16;

/// Associativity of the L2.
pub const L2_WAYS: usize = 8;

/// Capacity of the fully-associative victim buffer.
pub const VICTIM_WAYS: usize = 4;

/// Block size in bytes.
pub const BLOCK_BYTES: usize = 4;

/// Address bits consumed by the byte offset within a block.
pub const OFFSET_BITS: usize = 2;

/// Address bits consumed by the L1/L2 set index.
pub const INDEX_BITS: usize = 4;
