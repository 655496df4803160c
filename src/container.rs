//! The container wire format: code-table header plus bit-packed body.
//!
//! Layout, with every multi-byte integer little-endian on every platform:
//!
//! ```text
//! u16  symbol_count          0..=256 (u16 so a full 256-value alphabet
//!                            is representable; 0 marks an empty input)
//! repeated symbol_count times:
//!     u8    symbol value
//!     u8    code bit-length  (>= 1)
//!     bytes code bits        ceil(len/8) bytes, MSB-first, zero-padded
//! u32  total_bits            meaningful bits in the body
//! bytes packed body          ceil(total_bits/8) bytes, MSB-first,
//!                            zero-padded tail
//! ```

use std::collections::HashMap;

use tracing::debug;

use crate::bitio::{self, BitWriter};
use crate::error::HuffError;
use crate::tree::CodeTable;

/// Serialize the code table and the encoded input into a container.
///
/// The table must cover every byte value occurring in `input` (it is
/// derived from the same input in the compress pipeline). All output is
/// produced in one forward pass; the body is packed into its own buffer
/// first so the bit count is known before the header is emitted.
pub fn write(table: &CodeTable, input: &[u8]) -> Result<Vec<u8>, HuffError> {
    let mut body = BitWriter::new();
    for &b in input {
        if let Some(code) = table.get(b) {
            body.extend(code);
        }
    }
    let (body_bytes, total_bits) = body.finish();
    if total_bits > u32::MAX as u64 {
        return Err(HuffError::BodyOverflow { bits: total_bits });
    }

    let mut out = Vec::with_capacity(2 + table.len() * 3 + 4 + body_bytes.len());
    out.extend_from_slice(&(table.len() as u16).to_le_bytes());
    for (byte, code) in table.iter() {
        out.push(byte);
        out.push(code.len() as u8);
        let mut packed = BitWriter::new();
        packed.extend(code);
        let (code_bytes, _) = packed.finish();
        out.extend_from_slice(&code_bytes);
    }
    out.extend_from_slice(&(total_bits as u32).to_le_bytes());
    out.extend_from_slice(&body_bytes);

    debug!(
        symbols = table.len(),
        total_bits,
        container_bytes = out.len(),
        "container framed"
    );
    Ok(out)
}

/// Parse a container and recover the original bytes.
///
/// Fails with a distinct error on a truncated header or body, a
/// zero-length or duplicate code in the header, or residual bits at the
/// end of the stream that match no code.
pub fn read(container: &[u8]) -> Result<Vec<u8>, HuffError> {
    let mut pos = 0usize;

    if container.len() < 2 {
        return Err(HuffError::TruncatedContainer {
            context: "missing symbol count",
        });
    }
    let symbol_count = u16::from_le_bytes([container[0], container[1]]) as usize;
    pos += 2;

    let mut decode_map: HashMap<Vec<bool>, u8> = HashMap::with_capacity(symbol_count);
    for _ in 0..symbol_count {
        if pos + 2 > container.len() {
            return Err(HuffError::TruncatedContainer {
                context: "symbol entry cut short",
            });
        }
        let symbol = container[pos];
        let code_len = container[pos + 1] as usize;
        pos += 2;

        if code_len == 0 {
            return Err(HuffError::ZeroLengthCode { symbol });
        }
        let code_bytes = (code_len + 7) / 8;
        if pos + code_bytes > container.len() {
            return Err(HuffError::TruncatedContainer {
                context: "code bits cut short",
            });
        }
        let code = bitio::unpack(&container[pos..pos + code_bytes], code_len as u64)?;
        pos += code_bytes;

        if decode_map.insert(code, symbol).is_some() {
            return Err(HuffError::DuplicateCode { symbol });
        }
    }

    if pos + 4 > container.len() {
        return Err(HuffError::TruncatedContainer {
            context: "missing total bit count",
        });
    }
    let total_bits = u32::from_le_bytes([
        container[pos],
        container[pos + 1],
        container[pos + 2],
        container[pos + 3],
    ]) as u64;
    pos += 4;

    let bits = bitio::unpack(&container[pos..], total_bits)?;

    // greedy prefix match over the truncated bit sequence
    let mut output = Vec::with_capacity(total_bits as usize / 2);
    let mut candidate: Vec<bool> = Vec::new();
    for bit in bits {
        candidate.push(bit);
        if let Some(&symbol) = decode_map.get(&candidate) {
            output.push(symbol);
            candidate.clear();
        }
    }
    if !candidate.is_empty() {
        return Err(HuffError::ResidualBits {
            bits: candidate.len(),
        });
    }

    debug!(symbols = symbol_count, total_bits, output_bytes = output.len(), "container decoded");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::FrequencyTable;
    use crate::tree::Node;

    fn table_for(data: &[u8]) -> CodeTable {
        let freq = FrequencyTable::count(data);
        let root = Node::build(&freq).expect("non-empty input");
        CodeTable::from_tree(&root)
    }

    #[test]
    fn test_roundtrip() {
        let data = b"hello world hello world hello";
        let container = write(&table_for(data), data).unwrap();
        assert_eq!(read(&container).unwrap(), data);
    }

    #[test]
    fn test_empty_table_empty_input() {
        let container = write(&CodeTable::empty(), b"").unwrap();
        // u16 symbol count + u32 total bits, nothing else
        assert_eq!(container, vec![0, 0, 0, 0, 0, 0]);
        assert_eq!(read(&container).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_single_symbol_framing() {
        let data = [0x41u8; 10];
        let container = write(&table_for(&data), &data).unwrap();
        // header: count=1, symbol 0x41, len 1, one code byte (bit "0")
        assert_eq!(&container[..5], &[1, 0, 0x41, 1, 0x00]);
        // total_bits = 10, body = 2 bytes of zero bits
        assert_eq!(&container[5..9], &10u32.to_le_bytes());
        assert_eq!(&container[9..], &[0x00, 0x00]);
        assert_eq!(read(&container).unwrap(), data);
    }

    #[test]
    fn test_truncated_symbol_count() {
        let err = read(&[0x01]).unwrap_err();
        assert!(matches!(err, HuffError::TruncatedContainer { .. }));
    }

    #[test]
    fn test_truncated_header_entry() {
        // claims one symbol but the entry is missing
        let err = read(&[1, 0]).unwrap_err();
        assert!(matches!(err, HuffError::TruncatedContainer { .. }));
    }

    #[test]
    fn test_zero_length_code_rejected() {
        let container = [1u8, 0, 0x61, 0, 0, 0, 0, 0];
        let err = read(&container).unwrap_err();
        assert!(matches!(err, HuffError::ZeroLengthCode { symbol: 0x61 }));
    }

    #[test]
    fn test_duplicate_code_rejected() {
        // two symbols both claiming the 1-bit code "0"
        let container = [2u8, 0, 0x61, 1, 0x00, 0x62, 1, 0x00, 0, 0, 0, 0];
        let err = read(&container).unwrap_err();
        assert!(matches!(err, HuffError::DuplicateCode { symbol: 0x62 }));
    }

    #[test]
    fn test_truncated_body_detected() {
        let data = b"abracadabra abracadabra";
        let mut container = write(&table_for(data), data).unwrap();
        container.pop();
        let err = read(&container).unwrap_err();
        assert!(matches!(err, HuffError::TruncatedContainer { .. }));
    }

    #[test]
    fn test_residual_bits_detected() {
        // one symbol with the 2-bit code "00", but the body ends after
        // a single bit
        let container = [1u8, 0, 0x61, 2, 0x00, 1, 0, 0, 0, 0x00];
        let err = read(&container).unwrap_err();
        assert!(matches!(err, HuffError::ResidualBits { bits: 1 }));
    }

    #[test]
    fn test_trailing_garbage_tolerated() {
        // surplus bytes past ceil(total_bits/8) are truncated away
        let data = b"tolerant reader";
        let table = table_for(data);
        let mut container = write(&table, data).unwrap();
        container.push(0xFF);
        assert_eq!(read(&container).unwrap(), data);
    }
}
