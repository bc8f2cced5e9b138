//! Error types for the hierarchy controller.
//!
//! A cache miss is not an error; it is a first-class outcome recorded in
//! the statistics. The only failure the controller reports is an access
//! whose block frame falls outside the caller-owned backing memory.

use thiserror::Error;

/// Errors raised by [`crate::CacheHierarchy::access`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MemoryError {
    /// The block frame containing `addr` does not fit in the backing memory.
    #[error("address {addr:#x} is outside the {words}-word backing memory")]
    OutOfRange {
        /// The offending byte address.
        addr: usize,
        /// Size of the backing memory in words.
        words: usize,
    },
}
