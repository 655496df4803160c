//! Error types for huffpack

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuffError {
    #[error("input too large: {size} bytes exceeds configured limit of {limit}")]
    InputTooLarge { size: usize, limit: usize },

    #[error("encoded body of {bits} bits overflows the 32-bit length field")]
    BodyOverflow { bits: u64 },

    #[error("truncated container: {context}")]
    TruncatedContainer { context: &'static str },

    #[error("zero-length code for symbol {symbol:#04x}")]
    ZeroLengthCode { symbol: u8 },

    #[error("duplicate code in header for symbol {symbol:#04x}")]
    DuplicateCode { symbol: u8 },

    #[error("{bits} residual bits at end of stream match no code")]
    ResidualBits { bits: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
