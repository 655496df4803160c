//! Bitstream packing and unpacking.
//!
//! Bits fill each byte most-significant-bit-first; a partial final byte
//! is zero-padded on its low-order bits. The meaningful-bit count is
//! tracked exactly so padding is never mistaken for code bits.

use crate::error::HuffError;

/// Accumulates single bits into MSB-first packed bytes.
#[derive(Debug, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    bit_len: u64,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, bit: bool) {
        let byte_index = (self.bit_len / 8) as usize;
        let bit_offset = (self.bit_len % 8) as u8;
        if byte_index == self.bytes.len() {
            self.bytes.push(0);
        }
        if bit {
            self.bytes[byte_index] |= 1 << (7 - bit_offset);
        }
        self.bit_len += 1;
    }

    pub fn extend(&mut self, bits: &[bool]) {
        for &bit in bits {
            self.push(bit);
        }
    }

    /// Count of meaningful bits written so far.
    pub fn bit_len(&self) -> u64 {
        self.bit_len
    }

    /// Finish packing: the packed bytes plus the exact number of
    /// meaningful (non-padding) bits. Padding bits are already zero.
    pub fn finish(self) -> (Vec<u8>, u64) {
        (self.bytes, self.bit_len)
    }
}

/// Expand packed bytes into a bit sequence truncated to `total_bits`,
/// discarding trailing padding. Fails if the bytes hold fewer than
/// `total_bits` bits.
pub fn unpack(bytes: &[u8], total_bits: u64) -> Result<Vec<bool>, HuffError> {
    if total_bits > bytes.len() as u64 * 8 {
        return Err(HuffError::TruncatedContainer {
            context: "body holds fewer bits than the recorded bit count",
        });
    }
    let mut bits = Vec::with_capacity(total_bits as usize);
    for i in 0..total_bits {
        let byte = bytes[(i / 8) as usize];
        let offset = (i % 8) as u8;
        bits.push((byte >> (7 - offset)) & 1 == 1);
    }
    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msb_first_fill() {
        let mut w = BitWriter::new();
        // 1010_1 -> 0b1010_1000 with 3 padding bits
        w.extend(&[true, false, true, false, true]);
        let (bytes, bits) = w.finish();
        assert_eq!(bytes, vec![0b1010_1000]);
        assert_eq!(bits, 5);
    }

    #[test]
    fn test_exact_byte_boundary() {
        let mut w = BitWriter::new();
        w.extend(&[true; 8]);
        let (bytes, bits) = w.finish();
        assert_eq!(bytes, vec![0xFF]);
        assert_eq!(bits, 8);
    }

    #[test]
    fn test_empty_writer() {
        let (bytes, bits) = BitWriter::new().finish();
        assert!(bytes.is_empty());
        assert_eq!(bits, 0);
    }

    #[test]
    fn test_pack_unpack_roundtrip() {
        let pattern: Vec<bool> = (0..37).map(|i| i % 3 == 0).collect();
        let mut w = BitWriter::new();
        w.extend(&pattern);
        let (bytes, bits) = w.finish();
        assert_eq!(bytes.len(), 5); // ceil(37 / 8)
        assert_eq!(unpack(&bytes, bits).unwrap(), pattern);
    }

    #[test]
    fn test_unpack_discards_padding() {
        let bits = unpack(&[0b1100_0000], 2).unwrap();
        assert_eq!(bits, vec![true, true]);
    }

    #[test]
    fn test_unpack_short_supply_fails() {
        let err = unpack(&[0xFF], 9).unwrap_err();
        assert!(matches!(err, HuffError::TruncatedContainer { .. }));
    }
}
