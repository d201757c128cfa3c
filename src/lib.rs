//! Huffman coding file compressor.
//!
//! Provides lossless compression and decompression of single files with a static Huffman code built
//! from the byte frequencies of the whole input.
//!
//! Compression produces two artifacts: a binary payload holding the packed bits, and a text codes file
//! mapping each byte value to its code. Both are needed to decompress.
//!
//! Basic usage to compress a file is as follows:
//!
//! `$> hufzip notes.txt`
//!
//! This creates notes.txt.huf and notes.txt.codes. `$> hufzip -d notes.txt.huf` restores notes.txt.
//!
//! The codec can also be used directly on in-memory buffers:
//!
//! ```
//! let (payload, codes) = hufzip::compress(b"abracadabra").unwrap();
//! assert_eq!(hufzip::decompress(&payload, &codes).unwrap(), b"abracadabra");
//! ```
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use bitstream::payload::CompressedPayload;
pub use compression::codec::{compress, decompress, decompress_artifacts, encode};
pub use error::{HuffError, Result};
pub use huffman_coding::codes::{Code, CodeTable};
pub use huffman_coding::huffman::{HuffmanTree, Node};
pub use tools::freq_count::FrequencyTable;
