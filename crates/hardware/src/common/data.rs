//! Block payload buffer.
//!
//! Each cached block carries a 4-byte payload that is addressed both as a
//! whole word and as individual bytes (stores write a single byte at the
//! block offset). The buffer is an explicit byte array with word accessors
//! rather than a union or any type punning.

use super::constants::BLOCK_BYTES;

/// The 4-byte payload of a cache block.
///
/// Word accessors use little-endian byte order, matching the simulated
/// machine. The backing memory holds one word per address; a block frame is
/// assembled from the low byte of each of its four words.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BlockData([u8; BLOCK_BYTES]);

impl BlockData {
    /// Builds a payload from the four memory words of a block frame,
    /// taking the low byte of each.
    #[inline]
    pub fn from_frame(words: &[u32]) -> Self {
        let mut bytes = [0u8; BLOCK_BYTES];
        for (byte, word) in bytes.iter_mut().zip(words) {
            *byte = (*word & 0xFF) as u8;
        }
        Self(bytes)
    }

    /// Reads the byte at `offset`.
    #[inline]
    pub fn byte(&self, offset: usize) -> u8 {
        self.0[offset]
    }

    /// Writes `value` at `offset`.
    #[inline]
    pub fn set_byte(&mut self, offset: usize, value: u8) {
        self.0[offset] = value;
    }

    /// Reads the payload as a word.
    #[inline]
    pub fn word(&self) -> u32 {
        u32::from_le_bytes(self.0)
    }

    /// Overwrites the payload with a word.
    #[inline]
    pub fn set_word(&mut self, value: u32) {
        self.0 = value.to_le_bytes();
    }
}
