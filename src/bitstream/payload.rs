//! The compressed payload file.
//!
//! Layout:
//! - offset 0, 8 bytes: number of valid bits, unsigned little-endian
//! - offset 8..: the packed bits, most significant bit first, `ceil(valid_bits / 8)` bytes, zero padded
//!

use std::io::Write;

use crate::error::{HuffError, Result};

/// Size of the valid-bit count header.
pub const HEADER_LEN: usize = 8;

/// Packed Huffman bits and the count of bits that carry data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedPayload {
    valid_bits: u64,
    data: Vec<u8>,
}

impl CompressedPayload {
    /// Wrap packed bytes. Fails if `data` holds fewer than `valid_bits` bits.
    pub fn new(valid_bits: u64, data: Vec<u8>) -> Result<Self> {
        let available = data.len() as u64 * 8;
        if valid_bits > available {
            return Err(HuffError::InvalidBitCount {
                declared: valid_bits,
                available,
            });
        }
        Ok(Self { valid_bits, data })
    }

    pub fn valid_bits(&self) -> u64 {
        self.valid_bits
    }

    /// The packed bytes, header excluded.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Zero bits added to complete the last byte.
    pub fn padding_bits(&self) -> u8 {
        ((8 - self.valid_bits % 8) % 8) as u8
    }

    /// Size of the serialized payload in bytes.
    pub fn len(&self) -> usize {
        HEADER_LEN + self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valid_bits == 0
    }

    /// Serialize header and data.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len());
        out.extend_from_slice(&self.valid_bits.to_le_bytes());
        out.extend_from_slice(&self.data);
        out
    }

    /// Write the serialized payload to any writer.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.valid_bits.to_le_bytes())?;
        writer.write_all(&self.data)?;
        Ok(())
    }

    /// Parse a serialized payload. Bytes past the last valid bit are kept but never decoded.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(HuffError::TruncatedHeader { found: bytes.len() });
        }
        let (header, data) = bytes.split_at(HEADER_LEN);
        let mut count = [0_u8; HEADER_LEN];
        count.copy_from_slice(header);
        Self::new(u64::from_le_bytes(count), data.to_vec())
    }
}

#[cfg(test)]
mod test {
    use super::CompressedPayload;
    use crate::error::HuffError;

    #[test]
    fn to_bytes_test() {
        let payload = CompressedPayload::new(3, vec![0b0110_0000]).unwrap();
        assert_eq!(payload.to_bytes(), vec![3, 0, 0, 0, 0, 0, 0, 0, 0b0110_0000]);
        assert_eq!(payload.padding_bits(), 5);
        assert_eq!(payload.len(), 9);

        let mut written = Vec::new();
        payload.write_to(&mut written).unwrap();
        assert_eq!(written, payload.to_bytes());
    }

    #[test]
    fn from_bytes_test() {
        let bytes = [12, 0, 0, 0, 0, 0, 0, 0, 0xab, 0xc0];
        let payload = CompressedPayload::from_bytes(&bytes).unwrap();
        assert_eq!(payload.valid_bits(), 12);
        assert_eq!(payload.data(), &[0xab, 0xc0]);
    }

    #[test]
    fn header_is_little_endian() {
        let mut bytes = vec![0x08, 0x01, 0, 0, 0, 0, 0, 0];
        bytes.extend(std::iter::repeat(0).take(33));
        let payload = CompressedPayload::from_bytes(&bytes).unwrap();
        assert_eq!(payload.valid_bits(), 264);
    }

    #[test]
    fn truncated_header() {
        match CompressedPayload::from_bytes(&[1, 0, 0]) {
            Err(HuffError::TruncatedHeader { found }) => assert_eq!(found, 3),
            other => panic!("expected TruncatedHeader, got {:?}", other),
        }
    }

    #[test]
    fn bit_count_past_data() {
        // Declares 17 bits but carries only 2 bytes.
        let bytes = [17, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff];
        match CompressedPayload::from_bytes(&bytes) {
            Err(HuffError::InvalidBitCount {
                declared,
                available,
            }) => {
                assert_eq!(declared, 17);
                assert_eq!(available, 16);
            }
            other => panic!("expected InvalidBitCount, got {:?}", other),
        }
    }

    #[test]
    fn padding_on_boundary() {
        let payload = CompressedPayload::new(16, vec![0, 0]).unwrap();
        assert_eq!(payload.padding_bits(), 0);
    }
}
