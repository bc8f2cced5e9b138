//! Cache block definition.

use crate::common::BlockData;

/// The unit of storage at every level of the hierarchy.
///
/// A block is meaningful only while `valid` is set; all lookups ignore
/// invalid blocks regardless of their other fields. `index` records the
/// L1/L2 set the block belongs to and travels with the block through the
/// eviction chain so L2 can place it without re-decoding an address.
#[derive(Clone, Copy, Debug, Default)]
pub struct CacheBlock {
    /// Tag in the owning level's width. L1 and L2 store index-qualified
    /// tags; the victim buffer stores the folded block-address tag.
    pub tag: usize,
    /// The L1/L2 set index of the block's home address.
    pub index: usize,
    /// Recency rank for the counter-LRU scheme; unused in L1.
    pub recency: usize,
    /// The 4-byte payload.
    pub data: BlockData,
    /// Whether the block holds live data.
    pub valid: bool,
}
