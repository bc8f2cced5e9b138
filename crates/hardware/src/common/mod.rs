//! Common utilities and types used throughout the cache simulator.
//!
//! This module provides the building blocks shared across all components:
//! 1. **Address Fields:** Decomposition of byte addresses into offset, set
//!    index, and tag for each level's geometry.
//! 2. **Constants:** The fixed hierarchy geometry (sets, ways, block size).
//! 3. **Block Payload:** The 4-byte block data buffer with byte and word
//!    accessors.
//! 4. **Error Handling:** The out-of-range access error type.

/// Address field decomposition and tag folding.
pub mod addr;

/// Fixed hierarchy geometry constants.
pub mod constants;

/// Block payload buffer.
pub mod data;

/// Error types.
pub mod error;

pub use addr::AddrFields;
pub use data::BlockData;
pub use error::MemoryError;
