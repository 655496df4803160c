//! huffpack: byte-oriented Huffman compression with a self-describing
//! container format.
//!
//! Compression is a static two-pass pipeline: count per-byte frequencies,
//! build the optimal prefix-free code over the observed alphabet, then
//! frame the code table and the bit-packed body into one container.
//! Decompression parses the table back out of the container and replays
//! the bitstream to recover the exact original bytes.
//!
//! The core is single-threaded, stateless across invocations, and never
//! writes to a console stream; callers get byte counts and stats back in
//! [`CompressedOutput`].

pub mod bitio;
pub mod config;
pub mod container;
pub mod error;
pub mod freq;
pub mod tree;

use tracing::debug;

use crate::config::CodecConfig;
use crate::error::HuffError;
use crate::freq::FrequencyTable;
use crate::tree::{CodeTable, Node};

/// A compressed container plus the accounting the caller needs for
/// reporting; the core itself prints nothing.
#[derive(Debug, Clone)]
pub struct CompressedOutput {
    /// The complete container (header + body).
    pub data: Vec<u8>,
    pub original_size: usize,
    pub compressed_size: usize,
    /// Compressed over original size; 1.0 for empty input.
    pub ratio: f64,
    /// Distinct byte values in the input.
    pub symbol_count: usize,
    /// Meaningful bits in the packed body.
    pub total_bits: u32,
    /// Shannon entropy of the input in bits per byte.
    pub entropy_bits: f64,
}

/// The codec facade. Holds configuration; each call is independent.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Compress `data` into a container.
    ///
    /// Empty input is valid and produces the empty container
    /// (symbol count 0, zero body bits); it is not an error.
    pub fn compress(&self, data: &[u8]) -> Result<CompressedOutput, HuffError> {
        if data.len() > self.config.max_input_size {
            return Err(HuffError::InputTooLarge {
                size: data.len(),
                limit: self.config.max_input_size,
            });
        }

        let freq = FrequencyTable::count(data);
        debug!(distinct = freq.distinct(), bytes = data.len(), "frequency scan complete");

        let table = match Node::build(&freq) {
            Some(root) => CodeTable::from_tree(&root),
            None => CodeTable::empty(),
        };

        let container = container::write(&table, data)?;

        let total_bits: u64 = freq
            .iter()
            .map(|(b, count)| {
                count * table.get(b).map(|code| code.len() as u64).unwrap_or(0)
            })
            .sum();
        let ratio = if data.is_empty() {
            1.0
        } else {
            container.len() as f64 / data.len() as f64
        };

        Ok(CompressedOutput {
            original_size: data.len(),
            compressed_size: container.len(),
            ratio,
            symbol_count: table.len(),
            total_bits: total_bits as u32,
            entropy_bits: freq.entropy_bits(),
            data: container,
        })
    }

    /// Decompress a container back into the original bytes. Fails with
    /// a distinct [`HuffError`] variant on any malformed container; no
    /// partial output is returned on failure.
    pub fn decompress(&self, container: &[u8]) -> Result<Vec<u8>, HuffError> {
        container::read(container)
    }
}

/// Compress with the default configuration.
pub fn compress(data: &[u8]) -> Result<CompressedOutput, HuffError> {
    Codec::default().compress(data)
}

/// Decompress with the default configuration.
pub fn decompress(container: &[u8]) -> Result<Vec<u8>, HuffError> {
    Codec::default().decompress(container)
}
