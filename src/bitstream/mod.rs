//! The bitstream module forms the I/O subsystem for hufzip.
//!
//! A compressed file is really two artifacts: the packed payload (an 8 byte valid-bit count followed by the
//! Huffman bits, most significant bit first) and a small text file listing the code for every symbol.
//! BitPacker and BitReader move bits in and out of byte buffers, `payload` frames the packed bits and
//! `codes_file` reads and writes the text table.
//!
pub mod bitpacker;
pub mod bitreader;
pub mod codes_file;
pub mod payload;
