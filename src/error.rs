//! Error type shared by every stage of hufzip.
//!
//! Each failure aborts the current compress or decompress call as a whole. There is no partial output.

use thiserror::Error;

/// Everything that can go wrong while compressing or decompressing.
#[derive(Debug, Error)]
pub enum HuffError {
    /// Compression was asked to work on zero bytes.
    #[error("no data to compress (empty input)")]
    EmptyInput,

    /// A codes file line is not a `(symbol, bitstring)` pair.
    #[error("malformed codes file at line {line}: {reason}")]
    MalformedCodesFile { line: usize, reason: String },

    /// Two codes share a path, or one code is a prefix of another.
    #[error("conflicting code table: code {code:?} for symbol {symbol} collides with another code")]
    ConflictingCodeTable { symbol: u8, code: String },

    /// Fewer than the 8 header bytes were available.
    #[error("truncated header: need 8 bytes, found {found}")]
    TruncatedHeader { found: usize },

    /// The header declares more valid bits than the payload carries.
    #[error("invalid bit count: header declares {declared} bits, payload holds {available}")]
    InvalidBitCount { declared: u64, available: u64 },

    /// The payload walked off the decode tree, or stopped in the middle of a code.
    #[error("corrupt traversal at bit {position}: {reason}")]
    CorruptTraversal { position: u64, reason: &'static str },

    /// An input byte has no code. The code table was not built from this input.
    #[error("no code for symbol {symbol} at byte offset {offset}")]
    MissingCodeForSymbol { symbol: u8, offset: usize },

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, HuffError>;
