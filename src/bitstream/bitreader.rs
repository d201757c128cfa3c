//! BitReader: reads the packed payload of a hufzip file one bit at a time.
//!
//! Bits are read most significant first. The reader stops at the valid-bit count, so the zero padding
//! in the last byte is never seen by the decoder.
//!

const BIT_MASK: u8 = 0x80;

/// Reads bits from a byte slice, up to a fixed number of valid bits.
#[derive(Debug)]
pub struct BitReader<'a> {
    data: &'a [u8],
    /// Number of bits that may be read in total.
    limit: u64,
    /// Bits read so far.
    position: u64,
}

impl<'a> BitReader<'a> {
    /// Creates a reader over `data` that yields at most `limit` bits. The limit is clamped to the
    /// bits actually present.
    pub fn new(data: &'a [u8], limit: u64) -> Self {
        Self {
            data,
            limit: limit.min(data.len() as u64 * 8),
            position: 0,
        }
    }

    /// Return bit as Option<usize> (1 or 0), or None once the valid bits are used up.
    pub fn bit(&mut self) -> Option<usize> {
        if self.position >= self.limit {
            return None;
        }
        let cursor = (self.position / 8) as usize;
        let bit_index = (self.position % 8) as u32;
        let bit = (self.data[cursor] & (BIT_MASK >> bit_index)) >> (7 - bit_index);
        self.position += 1;
        Some(bit as usize)
    }

    /// Bits consumed so far.
    pub fn position(&self) -> u64 {
        self.position
    }
}
